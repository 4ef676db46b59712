//! Unit catalog and conversion constants
//!
//! Each category pivots through a base unit (Celsius, meters, seconds,
//! liters); the constants here are the factors to that base.

use crate::models::{Category, Unit};

// ============================================================================
// Length Conversion Constants (to meters)
// ============================================================================

/// Meters per kilometer
pub const METERS_PER_KILOMETER: f64 = 1000.0;
/// Meters per foot
pub const METERS_PER_FOOT: f64 = 0.3048;
/// Meters per yard
pub const METERS_PER_YARD: f64 = 0.9144;
/// Meters per mile
pub const METERS_PER_MILE: f64 = 1609.344;

// ============================================================================
// Time Conversion Constants (to seconds)
// ============================================================================

/// Seconds per minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;
/// Seconds per hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;
/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86400.0;

// ============================================================================
// Volume Conversion Constants (to liters)
// ============================================================================

/// Milliliters per liter
pub const ML_PER_LITER: f64 = 1000.0;
/// Liters per cup (US)
pub const LITERS_PER_CUP: f64 = 0.236588;
/// Liters per pint (US)
pub const LITERS_PER_PINT: f64 = 0.473176;
/// Liters per gallon (US)
pub const LITERS_PER_GALLON: f64 = 3.78541;

// ============================================================================
// Temperature Conversion Constants
// ============================================================================

/// Kelvin value of 0 °C
pub const KELVIN_OFFSET: f64 = 273.15;
/// Fahrenheit value of 0 °C
pub const FAHRENHEIT_OFFSET: f64 = 32.0;

// ============================================================================
// Unit Catalog
// ============================================================================

/// Temperature units in display order
pub const TEMPERATURE_UNITS: &[Unit] = &[Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin];

/// Length units in display order
pub const LENGTH_UNITS: &[Unit] = &[
    Unit::Meters,
    Unit::Kilometers,
    Unit::Feet,
    Unit::Yards,
    Unit::Miles,
];

/// Time units in display order
pub const TIME_UNITS: &[Unit] = &[Unit::Seconds, Unit::Minutes, Unit::Hours, Unit::Days];

/// Volume units in display order
pub const VOLUME_UNITS: &[Unit] = &[
    Unit::Milliliters,
    Unit::Liters,
    Unit::Cups,
    Unit::Pints,
    Unit::Gallons,
];

/// Get the units of a category, in fixed display order
pub fn units_for(category: Category) -> &'static [Unit] {
    match category {
        Category::Temperature => TEMPERATURE_UNITS,
        Category::Length => LENGTH_UNITS,
        Category::Time => TIME_UNITS,
        Category::Volume => VOLUME_UNITS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_for_order_is_stable() {
        assert_eq!(
            units_for(Category::Temperature),
            &[Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin]
        );
        assert_eq!(
            units_for(Category::Volume),
            &[
                Unit::Milliliters,
                Unit::Liters,
                Unit::Cups,
                Unit::Pints,
                Unit::Gallons
            ]
        );
    }

    #[test]
    fn test_catalog_units_belong_to_their_category() {
        for category in Category::all() {
            for unit in units_for(*category) {
                assert_eq!(unit.category(), *category);
            }
        }
    }

    #[test]
    fn test_catalog_contains_every_category_base_unit() {
        for category in Category::all() {
            assert!(units_for(*category).contains(&category.base_unit()));
        }
    }

    #[test]
    fn test_catalog_covers_all_seventeen_units() {
        let total: usize = Category::all().iter().map(|c| units_for(*c).len()).sum();
        assert_eq!(total, 17);
    }
}
