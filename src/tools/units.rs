//! Unit Catalog and Conversion MCP Tools
//!
//! Tools for listing categories/units and converting values. This is the
//! string boundary: raw category and unit names from callers are resolved
//! here and bad input comes back as a `ConvertError`.

use serde::Serialize;

use crate::convert::{self, units_for, ConvertError, ConvertResult};
use crate::models::{resolve_unit, Category, ConversionRequest, Unit};

/// One category for listing
#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    pub name: &'static str,
    pub display_name: &'static str,
    pub base_unit: &'static str,
    pub unit_count: usize,
}

/// Response for list_categories
#[derive(Debug, Serialize)]
pub struct ListCategoriesResponse {
    pub categories: Vec<CategoryInfo>,
    pub total: usize,
}

/// One unit for listing
#[derive(Debug, Serialize)]
pub struct UnitInfo {
    pub name: &'static str,
    pub symbol: &'static str,
    pub display_name: &'static str,
}

/// Response for list_units
#[derive(Debug, Serialize)]
pub struct ListUnitsResponse {
    pub category: &'static str,
    pub units: Vec<UnitInfo>,
    pub total: usize,
}

/// Response for convert
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub category: &'static str,
    pub from: &'static str,
    pub to: &'static str,
    pub input: f64,
    pub value: f64,
    /// Value rendered with two decimal places, for display layers
    pub formatted_value: String,
}

fn unit_info(unit: Unit) -> UnitInfo {
    UnitInfo {
        name: unit.as_str(),
        symbol: unit.symbol(),
        display_name: unit.display_name(),
    }
}

/// List all supported categories in display order
pub fn list_categories() -> ListCategoriesResponse {
    let categories: Vec<CategoryInfo> = Category::all()
        .iter()
        .map(|c| CategoryInfo {
            name: c.as_str(),
            display_name: c.display_name(),
            base_unit: c.base_unit().symbol(),
            unit_count: units_for(*c).len(),
        })
        .collect();
    let total = categories.len();
    ListCategoriesResponse { categories, total }
}

/// List the units of a category in display order
pub fn list_units(category: &str) -> ConvertResult<ListUnitsResponse> {
    let category = Category::from_str(category).ok_or_else(|| ConvertError::InvalidCategory {
        name: category.trim().to_string(),
    })?;
    let units: Vec<UnitInfo> = units_for(category).iter().map(|u| unit_info(*u)).collect();
    let total = units.len();
    Ok(ListUnitsResponse {
        category: category.as_str(),
        units,
        total,
    })
}

/// Convert a value between two units of the same category
pub fn convert_value(
    category: &str,
    from: &str,
    to: &str,
    value: f64,
) -> ConvertResult<ConvertResponse> {
    let category = Category::from_str(category).ok_or_else(|| ConvertError::InvalidCategory {
        name: category.trim().to_string(),
    })?;
    let from = resolve_unit(category, from)?;
    let to = resolve_unit(category, to)?;
    let request = ConversionRequest::new(category, from, to, value);
    let result = convert::convert_request(&request)?;
    Ok(ConvertResponse {
        category: result.category,
        from: result.from,
        to: result.to,
        input: request.value,
        value: result.value,
        formatted_value: result.formatted_value,
    })
}
