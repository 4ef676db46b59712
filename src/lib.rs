//! Universal Unit Converter (UUC) Library
//!
//! Core functionality for converting values between measurement units.

pub mod build_info;
pub mod convert;
pub mod mcp;
pub mod models;
pub mod tools;
