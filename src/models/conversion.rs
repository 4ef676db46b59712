//! Conversion request/result models
//!
//! One request and one result per conversion call; neither is mutated or
//! retained after the call.

use serde::{Deserialize, Serialize};

use crate::convert::{parse_value, ConvertError, ConvertResult};
use crate::models::{Category, Unit};

/// A single conversion call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub category: Category,
    pub from: Unit,
    pub to: Unit,
    pub value: f64,
}

impl ConversionRequest {
    pub fn new(category: Category, from: Unit, to: Unit, value: f64) -> Self {
        Self {
            category,
            from,
            to,
            value,
        }
    }

    /// Build a request from raw text, as received from a UI layer
    ///
    /// Unknown category names, units outside the category, and non-numeric
    /// value text are all rejected here rather than defaulting to zero.
    pub fn parse(category: &str, from: &str, to: &str, value: &str) -> ConvertResult<Self> {
        let category = Category::from_str(category).ok_or_else(|| ConvertError::InvalidCategory {
            name: category.trim().to_string(),
        })?;
        let from = resolve_unit(category, from)?;
        let to = resolve_unit(category, to)?;
        let value = parse_value(value)?;
        Ok(Self::new(category, from, to, value))
    }
}

/// Result of a conversion call
#[derive(Debug, Clone, Serialize)]
pub struct ConversionResult {
    pub value: f64,
    /// Value rendered with two decimal places, for display layers
    pub formatted_value: String,
    pub from: &'static str,
    pub to: &'static str,
    pub category: &'static str,
}

impl ConversionResult {
    pub fn new(request: &ConversionRequest, value: f64) -> Self {
        Self {
            value,
            formatted_value: format!("{:.2}", value),
            from: request.from.symbol(),
            to: request.to.symbol(),
            category: request.category.as_str(),
        }
    }
}

/// Parse a unit string and check it belongs to the requested category
pub(crate) fn resolve_unit(category: Category, s: &str) -> ConvertResult<Unit> {
    let unit = Unit::from_str(s).ok_or_else(|| ConvertError::InvalidUnit {
        unit: s.trim().to_string(),
        category: category.as_str().to_string(),
    })?;
    if unit.category() != category {
        return Err(ConvertError::InvalidUnit {
            unit: unit.as_str().to_string(),
            category: category.as_str().to_string(),
        });
    }
    Ok(unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_request() {
        let request = ConversionRequest::parse("temperature", "°C", "°F", "100").unwrap();
        assert_eq!(request.category, Category::Temperature);
        assert_eq!(request.from, Unit::Celsius);
        assert_eq!(request.to, Unit::Fahrenheit);
        assert_eq!(request.value, 100.0);
    }

    #[test]
    fn test_parse_rejects_unknown_category() {
        let err = ConversionRequest::parse("pressure", "°C", "°F", "1").unwrap_err();
        assert!(matches!(err, ConvertError::InvalidCategory { .. }));
    }

    #[test]
    fn test_parse_rejects_unit_from_other_category() {
        let err = ConversionRequest::parse("temperature", "km", "°F", "1").unwrap_err();
        assert!(matches!(err, ConvertError::InvalidUnit { .. }));
    }

    #[test]
    fn test_parse_rejects_non_numeric_value() {
        let err = ConversionRequest::parse("length", "m", "km", "abc").unwrap_err();
        assert!(matches!(err, ConvertError::InvalidValue { .. }));

        let err = ConversionRequest::parse("length", "m", "km", "").unwrap_err();
        assert!(matches!(err, ConvertError::InvalidValue { .. }));
    }

    #[test]
    fn test_result_formats_two_decimals() {
        let request = ConversionRequest::new(Category::Length, Unit::Kilometers, Unit::Meters, 1.0);
        let result = ConversionResult::new(&request, 1000.0);
        assert_eq!(result.formatted_value, "1000.00");
        assert_eq!(result.from, "km");
        assert_eq!(result.to, "m");
    }
}
