//! Conversion module
//!
//! The unit catalog and the pure conversion arithmetic.

pub mod converter;
pub mod error;
pub mod units;

pub use converter::{convert, convert_request, parse_value};
pub use error::{ConvertError, ConvertResult};
pub use units::units_for;
