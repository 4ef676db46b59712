//! Unit model
//!
//! Every supported unit across all categories. Each unit belongs to exactly
//! one category and carries a display symbol.

use serde::{Deserialize, Serialize};

use crate::models::Category;

/// Measurement unit enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    // Temperature
    Celsius,
    Fahrenheit,
    Kelvin,
    // Length
    Meters,
    Kilometers,
    Feet,
    Yards,
    Miles,
    // Time
    Seconds,
    Minutes,
    Hours,
    Days,
    // Volume
    Milliliters,
    Liters,
    Cups,
    Pints,
    Gallons,
}

impl Unit {
    /// The category this unit belongs to
    pub fn category(&self) -> Category {
        match self {
            Unit::Celsius | Unit::Fahrenheit | Unit::Kelvin => Category::Temperature,
            Unit::Meters | Unit::Kilometers | Unit::Feet | Unit::Yards | Unit::Miles => {
                Category::Length
            }
            Unit::Seconds | Unit::Minutes | Unit::Hours | Unit::Days => Category::Time,
            Unit::Milliliters | Unit::Liters | Unit::Cups | Unit::Pints | Unit::Gallons => {
                Category::Volume
            }
        }
    }

    /// Display symbol (what a UI shows next to the value)
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
            Unit::Kelvin => "K",
            Unit::Meters => "m",
            Unit::Kilometers => "km",
            Unit::Feet => "ft",
            Unit::Yards => "yd",
            Unit::Miles => "mi",
            Unit::Seconds => "s",
            Unit::Minutes => "min",
            Unit::Hours => "h",
            Unit::Days => "d",
            Unit::Milliliters => "mL",
            Unit::Liters => "L",
            Unit::Cups => "cup",
            Unit::Pints => "pt",
            Unit::Gallons => "gal",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Celsius => "celsius",
            Unit::Fahrenheit => "fahrenheit",
            Unit::Kelvin => "kelvin",
            Unit::Meters => "meters",
            Unit::Kilometers => "kilometers",
            Unit::Feet => "feet",
            Unit::Yards => "yards",
            Unit::Miles => "miles",
            Unit::Seconds => "seconds",
            Unit::Minutes => "minutes",
            Unit::Hours => "hours",
            Unit::Days => "days",
            Unit::Milliliters => "milliliters",
            Unit::Liters => "liters",
            Unit::Cups => "cups",
            Unit::Pints => "pints",
            Unit::Gallons => "gallons",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Unit::Celsius => "Celsius",
            Unit::Fahrenheit => "Fahrenheit",
            Unit::Kelvin => "Kelvin",
            Unit::Meters => "Meters",
            Unit::Kilometers => "Kilometers",
            Unit::Feet => "Feet",
            Unit::Yards => "Yards",
            Unit::Miles => "Miles",
            Unit::Seconds => "Seconds",
            Unit::Minutes => "Minutes",
            Unit::Hours => "Hours",
            Unit::Days => "Days",
            Unit::Milliliters => "Milliliters",
            Unit::Liters => "Liters",
            Unit::Cups => "Cups",
            Unit::Pints => "Pints",
            Unit::Gallons => "Gallons",
        }
    }

    /// Parse a unit from its symbol, canonical name, or common aliases
    ///
    /// Symbols are matched case-sensitively ("mL", "K") since some differ only
    /// by case; everything else is matched lowercased.
    pub fn from_str(s: &str) -> Option<Self> {
        let trimmed = s.trim();

        // Exact symbol match first
        match trimmed {
            "°C" => return Some(Unit::Celsius),
            "°F" => return Some(Unit::Fahrenheit),
            "K" => return Some(Unit::Kelvin),
            "mL" => return Some(Unit::Milliliters),
            "L" => return Some(Unit::Liters),
            _ => {}
        }

        match trimmed.to_lowercase().as_str() {
            "celsius" | "c" => Some(Unit::Celsius),
            "fahrenheit" | "f" => Some(Unit::Fahrenheit),
            "kelvin" => Some(Unit::Kelvin),
            "meters" | "meter" | "metre" | "metres" | "m" => Some(Unit::Meters),
            "kilometers" | "kilometer" | "kilometre" | "kilometres" | "km" => {
                Some(Unit::Kilometers)
            }
            "feet" | "foot" | "ft" => Some(Unit::Feet),
            "yards" | "yard" | "yd" => Some(Unit::Yards),
            "miles" | "mile" | "mi" => Some(Unit::Miles),
            "seconds" | "second" | "sec" | "s" => Some(Unit::Seconds),
            "minutes" | "minute" | "min" => Some(Unit::Minutes),
            "hours" | "hour" | "hr" | "h" => Some(Unit::Hours),
            "days" | "day" | "d" => Some(Unit::Days),
            "milliliters" | "milliliter" | "millilitre" | "millilitres" | "ml" => {
                Some(Unit::Milliliters)
            }
            "liters" | "liter" | "litre" | "litres" | "l" => Some(Unit::Liters),
            "cups" | "cup" => Some(Unit::Cups),
            "pints" | "pint" | "pt" => Some(Unit::Pints),
            "gallons" | "gallon" | "gal" => Some(Unit::Gallons),
            _ => None,
        }
    }
}
