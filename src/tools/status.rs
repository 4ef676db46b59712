//! UUC Status Tool
//!
//! Provides runtime status information about the UUC service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::convert::units_for;
use crate::models::Category;

/// Conversion instructions for AI assistants
pub const CONVERSION_INSTRUCTIONS: &str = r#"
# UUC Conversion Instructions

This guide explains how to convert values using the Universal Unit Converter (UUC) tools.

## Overview

Every conversion names a category, a source unit, a destination unit, and a numeric value. Both units must belong to the category; mixing categories (e.g. kilometers to hours) is rejected.

## Supported Categories and Units

| Category | Units (display order) | Base unit |
|----------|-----------------------|-----------|
| temperature | °C, °F, K | °C |
| length | m, km, ft, yd, mi | m |
| time | s, min, h, d | s |
| volume | mL, L, cup, pt, gal | L |

Cup, pint, and gallon are US measures.

## Workflow

1. Call `list_categories` if unsure which categories exist.
2. Call `list_units` with the category to see its units in display order.
3. Call `convert` with category, from, to, and value.

Unit parameters accept the symbol ("°C", "km"), the full name ("celsius", "kilometers"), or common aliases ("c", "metre", "hr"). Category parameters accept "temperature"/"temp", "length"/"distance", "time"/"duration", "volume".

## Errors

- Unknown category name: the call is rejected; nothing is converted.
- Unit not in the requested category: the call is rejected. The service never silently returns 0.
- Non-numeric or non-finite value: the call is rejected.

## Result

The `convert` response carries both the raw `value` and a `formatted_value` rounded to two decimal places for display. Use `value` for any further arithmetic.
"#;

/// Status response for the uuc_status tool
#[derive(Debug, Serialize)]
pub struct UucStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Catalog information
    pub categories: usize,
    pub units: usize,

    /// Usage information
    pub conversions_served: u64,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    conversions_served: u64,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            conversions_served: 0,
        }
    }

    /// Record one served conversion
    pub fn record_conversion(&mut self) {
        self.conversions_served += 1;
    }

    /// Get the current status
    pub fn get_status(&self) -> UucStatus {
        let build_info = BuildInfo::current();

        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        let units: usize = Category::all().iter().map(|c| units_for(*c).len()).sum();

        UucStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            categories: Category::all().len(),
            units,
            conversions_served: self.conversions_served,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_catalog_size() {
        let tracker = StatusTracker::new();
        let status = tracker.get_status();
        assert_eq!(status.categories, 4);
        assert_eq!(status.units, 17);
        assert_eq!(status.conversions_served, 0);
    }

    #[test]
    fn test_record_conversion_increments() {
        let mut tracker = StatusTracker::new();
        tracker.record_conversion();
        tracker.record_conversion();
        assert_eq!(tracker.get_status().conversions_served, 2);
    }
}
