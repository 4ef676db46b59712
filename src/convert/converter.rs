//! Conversion arithmetic
//!
//! Pure functions: every call converts the value from the source unit to the
//! category's base unit, then from the base unit to the destination. Units
//! that do not belong to the requested category are rejected with
//! `InvalidUnit` instead of silently producing zero.

use crate::convert::error::{ConvertError, ConvertResult};
use crate::convert::units::{
    FAHRENHEIT_OFFSET, KELVIN_OFFSET, LITERS_PER_CUP, LITERS_PER_GALLON, LITERS_PER_PINT,
    METERS_PER_FOOT, METERS_PER_KILOMETER, METERS_PER_MILE, METERS_PER_YARD, ML_PER_LITER,
    SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use crate::models::{Category, ConversionRequest, ConversionResult, Unit};

/// Convert a value from a unit to its category's base unit
fn to_base(unit: Unit, value: f64) -> f64 {
    match unit {
        // Temperature (base: Celsius)
        Unit::Celsius => value,
        Unit::Fahrenheit => (value - FAHRENHEIT_OFFSET) * 5.0 / 9.0,
        Unit::Kelvin => value - KELVIN_OFFSET,
        // Length (base: meters)
        Unit::Meters => value,
        Unit::Kilometers => value * METERS_PER_KILOMETER,
        Unit::Feet => value * METERS_PER_FOOT,
        Unit::Yards => value * METERS_PER_YARD,
        Unit::Miles => value * METERS_PER_MILE,
        // Time (base: seconds)
        Unit::Seconds => value,
        Unit::Minutes => value * SECONDS_PER_MINUTE,
        Unit::Hours => value * SECONDS_PER_HOUR,
        Unit::Days => value * SECONDS_PER_DAY,
        // Volume (base: liters)
        Unit::Milliliters => value / ML_PER_LITER,
        Unit::Liters => value,
        Unit::Cups => value * LITERS_PER_CUP,
        Unit::Pints => value * LITERS_PER_PINT,
        Unit::Gallons => value * LITERS_PER_GALLON,
    }
}

/// Convert a value from a category's base unit to a unit
fn from_base(unit: Unit, value: f64) -> f64 {
    match unit {
        // Temperature (base: Celsius)
        Unit::Celsius => value,
        Unit::Fahrenheit => value * 9.0 / 5.0 + FAHRENHEIT_OFFSET,
        Unit::Kelvin => value + KELVIN_OFFSET,
        // Length (base: meters)
        Unit::Meters => value,
        Unit::Kilometers => value / METERS_PER_KILOMETER,
        Unit::Feet => value / METERS_PER_FOOT,
        Unit::Yards => value / METERS_PER_YARD,
        Unit::Miles => value / METERS_PER_MILE,
        // Time (base: seconds)
        Unit::Seconds => value,
        Unit::Minutes => value / SECONDS_PER_MINUTE,
        Unit::Hours => value / SECONDS_PER_HOUR,
        Unit::Days => value / SECONDS_PER_DAY,
        // Volume (base: liters)
        Unit::Milliliters => value * ML_PER_LITER,
        Unit::Liters => value,
        Unit::Cups => value / LITERS_PER_CUP,
        Unit::Pints => value / LITERS_PER_PINT,
        Unit::Gallons => value / LITERS_PER_GALLON,
    }
}

/// Convert `value` from `from` to `to` within `category`
///
/// Both units must belong to `category`; the value must be finite.
pub fn convert(category: Category, from: Unit, to: Unit, value: f64) -> ConvertResult<f64> {
    if from.category() != category {
        return Err(ConvertError::InvalidUnit {
            unit: from.as_str().to_string(),
            category: category.as_str().to_string(),
        });
    }
    if to.category() != category {
        return Err(ConvertError::InvalidUnit {
            unit: to.as_str().to_string(),
            category: category.as_str().to_string(),
        });
    }
    if !value.is_finite() {
        return Err(ConvertError::InvalidValue {
            input: value.to_string(),
        });
    }

    Ok(from_base(to, to_base(from, value)))
}

/// Convert a request into a result with display formatting
pub fn convert_request(request: &ConversionRequest) -> ConvertResult<ConversionResult> {
    let value = convert(request.category, request.from, request.to, request.value)?;
    tracing::debug!(
        "Converted {} {} -> {} {}",
        request.value,
        request.from.symbol(),
        value,
        request.to.symbol()
    );
    Ok(ConversionResult::new(request, value))
}

/// Parse a numeric value from UI text
pub fn parse_value(s: &str) -> ConvertResult<f64> {
    let invalid = || ConvertError::InvalidValue {
        input: s.to_string(),
    };
    let value: f64 = s.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::units::units_for;

    /// Relative tolerance for round trips through inexact factors
    const REL_TOLERANCE: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        let scale = expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= REL_TOLERANCE * scale,
            "expected {} within tolerance, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_temperature_fixed_points() {
        let c_to_f = |v| convert(Category::Temperature, Unit::Celsius, Unit::Fahrenheit, v);
        assert_eq!(c_to_f(0.0).unwrap(), 32.0);
        assert_eq!(c_to_f(100.0).unwrap(), 212.0);
        assert_eq!(
            convert(Category::Temperature, Unit::Celsius, Unit::Kelvin, 0.0).unwrap(),
            273.15
        );
        assert_close(
            convert(Category::Temperature, Unit::Fahrenheit, Unit::Celsius, 32.0).unwrap(),
            0.0,
        );
        assert_close(
            convert(Category::Temperature, Unit::Kelvin, Unit::Fahrenheit, 273.15).unwrap(),
            32.0,
        );
    }

    #[test]
    fn test_length_fixed_points() {
        assert_eq!(
            convert(Category::Length, Unit::Kilometers, Unit::Meters, 1.0).unwrap(),
            1000.0
        );
        assert_eq!(
            convert(Category::Length, Unit::Feet, Unit::Meters, 1.0).unwrap(),
            0.3048
        );
        assert_eq!(
            convert(Category::Length, Unit::Miles, Unit::Meters, 1.0).unwrap(),
            1609.344
        );
        assert_close(
            convert(Category::Length, Unit::Miles, Unit::Feet, 1.0).unwrap(),
            5280.0,
        );
    }

    #[test]
    fn test_time_fixed_points() {
        assert_eq!(
            convert(Category::Time, Unit::Hours, Unit::Seconds, 1.0).unwrap(),
            3600.0
        );
        assert_eq!(
            convert(Category::Time, Unit::Days, Unit::Hours, 1.0).unwrap(),
            24.0
        );
        assert_eq!(
            convert(Category::Time, Unit::Minutes, Unit::Seconds, 90.0).unwrap(),
            5400.0
        );
    }

    #[test]
    fn test_volume_fixed_points() {
        assert_close(
            convert(Category::Volume, Unit::Gallons, Unit::Liters, 1.0).unwrap(),
            3.78541,
        );
        assert_eq!(
            convert(Category::Volume, Unit::Liters, Unit::Milliliters, 1.0).unwrap(),
            1000.0
        );
        assert_close(
            convert(Category::Volume, Unit::Pints, Unit::Cups, 1.0).unwrap(),
            2.0,
        );
    }

    #[test]
    fn test_identity_is_exact_for_base_units() {
        for category in Category::all() {
            let base = category.base_unit();
            for value in [-40.0, 0.0, 0.1, 3.78541, 1e6] {
                assert_eq!(convert(*category, base, base, value).unwrap(), value);
            }
        }
    }

    #[test]
    fn test_identity_holds_for_every_unit() {
        for category in Category::all() {
            for unit in units_for(*category) {
                for value in [-3.5, 0.0, 1.0, 42.0, 1234.567] {
                    assert_close(convert(*category, *unit, *unit, value).unwrap(), value);
                }
            }
        }
    }

    #[test]
    fn test_round_trip_all_pairs() {
        for category in Category::all() {
            for a in units_for(*category) {
                for b in units_for(*category) {
                    for value in [-10.0, 0.0, 0.5, 37.0, 9999.25] {
                        let there = convert(*category, *a, *b, value).unwrap();
                        let back = convert(*category, *b, *a, there).unwrap();
                        assert_close(back, value);
                    }
                }
            }
        }
    }

    #[test]
    fn test_unit_outside_category_is_rejected() {
        let err = convert(Category::Temperature, Unit::Meters, Unit::Celsius, 1.0).unwrap_err();
        assert_eq!(
            err,
            ConvertError::InvalidUnit {
                unit: "meters".to_string(),
                category: "temperature".to_string(),
            }
        );

        let err = convert(Category::Length, Unit::Meters, Unit::Seconds, 1.0).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidUnit { .. }));
    }

    #[test]
    fn test_non_finite_value_is_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = convert(Category::Length, Unit::Meters, Unit::Feet, bad).unwrap_err();
            assert!(matches!(err, ConvertError::InvalidValue { .. }));
        }
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("3.5").unwrap(), 3.5);
        assert_eq!(parse_value(" -273.15 ").unwrap(), -273.15);
        assert!(matches!(
            parse_value("").unwrap_err(),
            ConvertError::InvalidValue { .. }
        ));
        assert!(matches!(
            parse_value("12,5").unwrap_err(),
            ConvertError::InvalidValue { .. }
        ));
        assert!(matches!(
            parse_value("inf").unwrap_err(),
            ConvertError::InvalidValue { .. }
        ));
    }

    #[test]
    fn test_convert_request_produces_formatted_result() {
        let request = ConversionRequest::new(
            Category::Temperature,
            Unit::Celsius,
            Unit::Fahrenheit,
            100.0,
        );
        let result = convert_request(&request).unwrap();
        assert_eq!(result.value, 212.0);
        assert_eq!(result.formatted_value, "212.00");
        assert_eq!(result.from, "°C");
        assert_eq!(result.to, "°F");
        assert_eq!(result.category, "temperature");
    }
}
