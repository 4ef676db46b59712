//! UUC Tools module
//!
//! MCP tool implementations for the Universal Unit Converter.

pub mod status;
pub mod units;
