//! Measurement category model
//!
//! The closed set of measurement domains supported by the converter.

use serde::{Deserialize, Serialize};

use crate::models::Unit;

/// Measurement category enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Temperature,
    Length,
    Time,
    Volume,
}

impl Category {
    /// All categories in display order
    pub fn all() -> &'static [Category] {
        &[
            Category::Temperature,
            Category::Length,
            Category::Time,
            Category::Volume,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Temperature => "temperature",
            Category::Length => "length",
            Category::Time => "time",
            Category::Volume => "volume",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "temperature" | "temp" => Some(Category::Temperature),
            "length" | "distance" => Some(Category::Length),
            "time" | "duration" => Some(Category::Time),
            "volume" | "capacity" => Some(Category::Volume),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Temperature => "Temperature",
            Category::Length => "Length",
            Category::Time => "Time",
            Category::Volume => "Volume",
        }
    }

    /// The canonical unit this category pivots through during conversion
    pub fn base_unit(&self) -> Unit {
        match self {
            Category::Temperature => Unit::Celsius,
            Category::Length => Unit::Meters,
            Category::Time => Unit::Seconds,
            Category::Volume => Unit::Liters,
        }
    }
}
