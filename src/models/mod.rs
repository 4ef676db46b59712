//! Data models
//!
//! Rust types for measurement categories, units, and conversion calls.

mod category;
mod conversion;
mod unit;

pub use category::Category;
pub use conversion::{ConversionRequest, ConversionResult};
pub(crate) use conversion::resolve_unit;
pub use unit::Unit;
