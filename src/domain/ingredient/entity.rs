use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::unit::Unit;

/// A purchasable ingredient as it enters the inventory: the price paid for
/// one package and how much that package contains.
///
/// This is the root entity the costing engine reads from. Recipes reference
/// ingredients by id only; deleting an ingredient orphans those references
/// rather than cascading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    /// Internal immutable identifier
    pub id: Uuid,

    /// Display name ("Harina 0000", "Tomate", "Caja Pizza")
    pub name: String,

    /// Cost paid for the purchased package
    pub purchase_price: f64,

    /// Amount contained in the purchased package, in `purchase_unit`
    pub purchase_quantity: f64,

    /// Unit the package is measured in
    pub purchase_unit: Unit,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Ingredient {
    /// Create a new Ingredient entity
    pub fn new(name: String, purchase_price: f64, purchase_quantity: f64, purchase_unit: Unit) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            purchase_price,
            purchase_quantity,
            purchase_unit,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the purchase record in place (same id).
    /// Preserves the creation timestamp and refreshes the modification one.
    pub fn update(
        &mut self,
        name: Option<String>,
        purchase_price: Option<f64>,
        purchase_quantity: Option<f64>,
        purchase_unit: Option<Unit>,
    ) {
        if let Some(n) = name {
            self.name = n;
        }
        if let Some(p) = purchase_price {
            self.purchase_price = p;
        }
        if let Some(q) = purchase_quantity {
            self.purchase_quantity = q;
        }
        if let Some(u) = purchase_unit {
            self.purchase_unit = u;
        }
        self.updated_at = Utc::now();
    }

    /// Price per base unit of the purchase family (per gram, per ml, per
    /// piece). Guarded: a non-positive package quantity yields 0.
    pub fn cost_per_base_unit(&self) -> f64 {
        let denominator = self.purchase_quantity * self.purchase_unit.base_factor();
        if denominator <= 0.0 {
            return 0.0;
        }
        self.purchase_price / denominator
    }

    /// The usage unit the calculator pre-selects for this ingredient.
    pub fn suggested_usage_unit(&self) -> Unit {
        self.purchase_unit.suggested_usage_unit()
    }
}

impl std::fmt::Display for Ingredient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} x {} {})",
            self.name, self.purchase_price, self.purchase_quantity, self.purchase_unit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_per_base_unit() {
        let flour = Ingredient::new("Harina".to_string(), 1500.0, 1.0, Unit::Kg);
        assert_eq!(flour.cost_per_base_unit(), 1.5); // per gram
    }

    #[test]
    fn test_cost_per_base_unit_guards_zero_quantity() {
        let mut broken = Ingredient::new("Vacio".to_string(), 100.0, 1.0, Unit::Kg);
        broken.purchase_quantity = 0.0;
        assert_eq!(broken.cost_per_base_unit(), 0.0);
    }

    #[test]
    fn test_update_preserves_id_and_created_at() {
        let mut item = Ingredient::new("Tomate".to_string(), 800.0, 1.0, Unit::Kg);
        let id = item.id;
        let created = item.created_at;
        item.update(None, Some(950.0), None, None);
        assert_eq!(item.id, id);
        assert_eq!(item.created_at, created);
        assert_eq!(item.purchase_price, 950.0);
    }
}
