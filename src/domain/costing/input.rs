// src/domain/costing/input.rs
//
// Parse-with-default boundary between raw UI input and the typed engine.
//
// The presentation layer hands over numeric fields as strings. They are
// parsed here, once, with the defaulting rules the engine assumes; nothing
// stringly-typed gets past this module.

/// Parse a raw amount (price, usage quantity, fixed cost, sale price).
/// Unparsable, non-finite or negative input defaults to 0.
pub fn parse_amount(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}

/// Parse a package quantity. Unparsable or non-positive input defaults to
/// 1 so a package can never be empty (the engine still guards the
/// division on top of this).
pub fn parse_package_quantity(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => 1.0,
    }
}
