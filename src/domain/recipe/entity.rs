use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::costing::{Margin, RecipeCost};
use crate::domain::unit::Unit;

/// One ingredient usage entry within a recipe.
///
/// `ingredient_id` is a reference into the inventory, not a copy: the line
/// stays valid (and costs zero) if the ingredient is later deleted. Nothing
/// forces `usage_unit` into the same family as the ingredient's purchase
/// unit at entry time; the engine detects the mismatch instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeLine {
    /// Unique within its recipe
    pub id: Uuid,

    /// Referenced inventory ingredient, or unset while the user is editing
    pub ingredient_id: Option<Uuid>,

    /// Amount consumed by the recipe, in `usage_unit`
    pub usage_quantity: f64,

    /// Unit the usage is measured in
    pub usage_unit: Unit,
}

impl RecipeLine {
    /// Create a line referencing an inventory ingredient
    pub fn new(ingredient_id: Uuid, usage_quantity: f64, usage_unit: Unit) -> Self {
        Self {
            id: Uuid::new_v4(),
            ingredient_id: Some(ingredient_id),
            usage_quantity,
            usage_unit,
        }
    }

    /// Create an empty line (no ingredient selected yet)
    pub fn empty() -> Self {
        Self {
            id: Uuid::new_v4(),
            ingredient_id: None,
            usage_quantity: 0.0,
            usage_unit: Unit::G,
        }
    }
}

/// Per-recipe fixed costs, independent of the ingredient list.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FixedCosts {
    pub packaging: f64,
    pub cutlery: f64,
    pub extras: f64,
}

impl FixedCosts {
    pub fn new(packaging: f64, cutlery: f64, extras: f64) -> Self {
        Self {
            packaging,
            cutlery,
            extras,
        }
    }

    pub fn total(&self) -> f64 {
        self.packaging + self.cutlery + self.extras
    }
}

/// A persisted recipe snapshot: the frozen line list and fixed costs, plus
/// cached derived fields (`total_cost`, `margin`, `margin_percent`).
///
/// The derived fields are a cache over the inventory. They are refreshed
/// eagerly on every inventory edit/delete, never left stale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedRecipe {
    /// Internal immutable identifier
    pub id: Uuid,

    /// Recipe name
    pub name: String,

    /// Ordered ingredient usage lines, frozen at save time
    pub lines: Vec<RecipeLine>,

    /// Fixed costs, frozen at save time
    pub fixed_costs: FixedCosts,

    /// Sale price entered by the user
    pub sale_price: f64,

    /// Cached: ingredients + fixed costs at the last recalculation
    pub total_cost: f64,

    /// Cached: sale_price - total_cost
    pub margin: f64,

    /// Cached: margin over sale price, one decimal
    pub margin_percent: f64,

    /// Save timestamp (recipes list newest-first)
    pub saved_at: DateTime<Utc>,
}

impl SavedRecipe {
    /// Create a new SavedRecipe with derived fields still zeroed.
    /// Callers run the costing engine and apply the result before persisting.
    pub fn new(name: String, lines: Vec<RecipeLine>, fixed_costs: FixedCosts, sale_price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            lines,
            fixed_costs,
            sale_price,
            total_cost: 0.0,
            margin: 0.0,
            margin_percent: 0.0,
            saved_at: Utc::now(),
        }
    }

    /// Overwrite the cached derived fields with a fresh engine result.
    /// All other fields stay untouched.
    pub fn apply_costing(&mut self, cost: &RecipeCost, margin: &Margin) {
        self.total_cost = cost.total_cost;
        self.margin = margin.margin;
        self.margin_percent = margin.margin_percent;
    }
}

impl std::fmt::Display for SavedRecipe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
