// src/domain/unit.rs
//
// Measurement units and unit families.
//
// Cost math only ever crosses units inside one family, via the family's
// base unit (g, ml, u). Family classification is total over the enum.

use serde::{Deserialize, Serialize};

/// A purchase or usage unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    G,
    Kg,
    Ml,
    L,
    U,
}

/// The family a unit belongs to. Conversion is only valid within a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitFamily {
    Mass,
    Volume,
    Count,
}

impl Unit {
    /// Classify this unit into its family.
    pub fn family(self) -> UnitFamily {
        match self {
            Unit::G | Unit::Kg => UnitFamily::Mass,
            Unit::Ml | Unit::L => UnitFamily::Volume,
            Unit::U => UnitFamily::Count,
        }
    }

    /// Conversion factor to the family base unit (g, ml or u).
    pub fn base_factor(self) -> f64 {
        match self {
            Unit::G | Unit::Ml | Unit::U => 1.0,
            Unit::Kg | Unit::L => 1000.0,
        }
    }

    /// The base unit of this unit's family.
    pub fn base_unit(self) -> Unit {
        match self.family() {
            UnitFamily::Mass => Unit::G,
            UnitFamily::Volume => Unit::Ml,
            UnitFamily::Count => Unit::U,
        }
    }

    /// The usage unit the calculator pre-selects when an ingredient
    /// purchased in this unit is added to a recipe (kg -> g, l -> ml,
    /// everything else stays as-is).
    pub fn suggested_usage_unit(self) -> Unit {
        match self {
            Unit::Kg => Unit::G,
            Unit::L => Unit::Ml,
            other => other,
        }
    }

    /// Parse a unit string coming from the presentation layer.
    ///
    /// Unrecognized strings fall back to `u` (count). This matches the
    /// behavior the app has always had; see DESIGN.md for the open
    /// question on rejecting them instead.
    pub fn parse(raw: &str) -> Unit {
        match raw.trim().to_ascii_lowercase().as_str() {
            "g" | "gr" => Unit::G,
            "kg" => Unit::Kg,
            "ml" => Unit::Ml,
            "l" => Unit::L,
            _ => Unit::U,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Unit::G => "g",
            Unit::Kg => "kg",
            Unit::Ml => "ml",
            Unit::L => "l",
            Unit::U => "u",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::fmt::Display for UnitFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitFamily::Mass => write!(f, "mass"),
            UnitFamily::Volume => write!(f, "volume"),
            UnitFamily::Count => write!(f, "count"),
        }
    }
}
