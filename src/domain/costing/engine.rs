// src/domain/costing/engine.rs
//
// The unit-normalized costing engine.
//
// Pure value objects and functions over an inventory snapshot. The engine
// never fails: broken references and unit-family mismatches are soft
// states reported alongside a zero amount, and every division is guarded.
//
// CRITICAL INVARIANTS:
// - No I/O, no side effects
// - Deterministic: same inputs, same output
// - Never panics, never returns an error

use serde::{Deserialize, Serialize};

use crate::domain::ingredient::Ingredient;
use crate::domain::recipe::{FixedCosts, RecipeLine, SavedRecipe};

/// Why a line costed the way it did.
///
/// Everything except `Costed` is a soft state: the presentation layer can
/// flag it, but the numeric contribution is defined as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCostStatus {
    /// Cost computed from the referenced ingredient
    Costed,

    /// The line has no ingredient selected
    NoIngredientSelected,

    /// The referenced ingredient is gone from the inventory
    IngredientMissing,

    /// Purchase and usage units belong to different families
    UnitMismatch,
}

/// The cost contribution of a single recipe line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LineCost {
    pub amount: f64,
    pub status: LineCostStatus,
}

impl LineCost {
    fn zero(status: LineCostStatus) -> Self {
        Self {
            amount: 0.0,
            status,
        }
    }
}

/// Aggregate cost of a recipe: the per-line breakdown, the ingredient sum,
/// and the total including fixed costs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeCost {
    pub line_costs: Vec<LineCost>,
    pub ingredients_cost: f64,
    pub total_cost: f64,
}

/// Margin over a sale price. `margin` may be negative (unprofitable
/// recipe); `margin_percent` is 0 whenever the sale price is not positive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Margin {
    pub margin: f64,
    pub margin_percent: f64,
}

/// Round to one decimal place, half-up.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Cost contributed by one recipe line against an inventory snapshot.
///
/// unit_price = purchase_price / (purchase_quantity * base_factor(purchase_unit))
/// line_cost  = unit_price * (usage_quantity * base_factor(usage_unit))
pub fn compute_line_cost(line: &RecipeLine, inventory: &[Ingredient]) -> LineCost {
    let ingredient_id = match line.ingredient_id {
        Some(id) => id,
        None => return LineCost::zero(LineCostStatus::NoIngredientSelected),
    };

    let ingredient = match inventory.iter().find(|i| i.id == ingredient_id) {
        Some(i) => i,
        // Orphaned reference (ingredient deleted): not an error
        None => return LineCost::zero(LineCostStatus::IngredientMissing),
    };

    if ingredient.purchase_unit.family() != line.usage_unit.family() {
        return LineCost::zero(LineCostStatus::UnitMismatch);
    }

    let package_base = ingredient.purchase_quantity * ingredient.purchase_unit.base_factor();
    // Guard, not exception: a zero package quantity costs zero
    if package_base <= 0.0 {
        return LineCost {
            amount: 0.0,
            status: LineCostStatus::Costed,
        };
    }

    let unit_price = ingredient.purchase_price / package_base;
    let usage_base = line.usage_quantity * line.usage_unit.base_factor();

    LineCost {
        amount: unit_price * usage_base,
        status: LineCostStatus::Costed,
    }
}

/// Aggregate cost over the stored line order (summation is commutative;
/// the stable order just keeps results reproducible).
pub fn compute_recipe_cost(
    lines: &[RecipeLine],
    inventory: &[Ingredient],
    fixed_costs: &FixedCosts,
) -> RecipeCost {
    let line_costs: Vec<LineCost> = lines
        .iter()
        .map(|line| compute_line_cost(line, inventory))
        .collect();

    let ingredients_cost: f64 = line_costs.iter().map(|lc| lc.amount).sum();

    RecipeCost {
        total_cost: ingredients_cost + fixed_costs.total(),
        ingredients_cost,
        line_costs,
    }
}

/// Margin and margin percent for a total cost and sale price.
pub fn compute_margin(total_cost: f64, sale_price: f64) -> Margin {
    let margin = sale_price - total_cost;
    let margin_percent = if sale_price > 0.0 {
        round1(margin / sale_price * 100.0)
    } else {
        0.0
    };

    Margin {
        margin,
        margin_percent,
    }
}

/// Re-derive a saved recipe's cached cost fields against a current
/// inventory snapshot. Lines, fixed costs, sale price, name, id and
/// timestamp all stay unchanged. Idempotent for a fixed inventory.
pub fn recalculate_saved_recipe(recipe: &SavedRecipe, inventory: &[Ingredient]) -> SavedRecipe {
    let cost = compute_recipe_cost(&recipe.lines, inventory, &recipe.fixed_costs);
    let margin = compute_margin(cost.total_cost, recipe.sale_price);

    let mut refreshed = recipe.clone();
    refreshed.apply_costing(&cost, &margin);
    refreshed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::unit::Unit;
    use uuid::Uuid;

    fn ingredient(name: &str, price: f64, quantity: f64, unit: Unit) -> Ingredient {
        Ingredient::new(name.to_string(), price, quantity, unit)
    }

    #[test]
    fn test_line_cost_kg_purchase_g_usage() {
        // 100 per kg, using 500 g -> 50
        let flour = ingredient("Harina", 100.0, 1.0, Unit::Kg);
        let line = RecipeLine::new(flour.id, 500.0, Unit::G);

        let cost = compute_line_cost(&line, &[flour]);
        assert_eq!(cost.status, LineCostStatus::Costed);
        assert!((cost.amount - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_line_cost_zero_for_unset_reference() {
        let line = RecipeLine::empty();
        let cost = compute_line_cost(&line, &[]);
        assert_eq!(cost.amount, 0.0);
        assert_eq!(cost.status, LineCostStatus::NoIngredientSelected);
    }

    #[test]
    fn test_line_cost_zero_for_orphaned_reference() {
        let line = RecipeLine::new(Uuid::new_v4(), 500.0, Unit::G);
        let cost = compute_line_cost(&line, &[ingredient("Tomate", 800.0, 1.0, Unit::Kg)]);
        assert_eq!(cost.amount, 0.0);
        assert_eq!(cost.status, LineCostStatus::IngredientMissing);
    }

    #[test]
    fn test_line_cost_zero_for_family_mismatch() {
        // purchased in kg, used in ml
        let oil = ingredient("Aceite", 1200.0, 1.0, Unit::Kg);
        let line = RecipeLine::new(oil.id, 100.0, Unit::Ml);

        let cost = compute_line_cost(&line, &[oil]);
        assert_eq!(cost.amount, 0.0);
        assert_eq!(cost.status, LineCostStatus::UnitMismatch);
    }

    #[test]
    fn test_line_cost_guards_zero_package_quantity() {
        let mut broken = ingredient("Vacio", 100.0, 1.0, Unit::Kg);
        broken.purchase_quantity = 0.0;
        let line = RecipeLine::new(broken.id, 500.0, Unit::G);

        let cost = compute_line_cost(&line, &[broken]);
        assert_eq!(cost.amount, 0.0);
        assert_eq!(cost.status, LineCostStatus::Costed);
    }

    #[test]
    fn test_recipe_cost_sums_lines_and_fixed_costs() {
        let flour = ingredient("Harina", 100.0, 1.0, Unit::Kg);
        let milk = ingredient("Leche", 50.0, 1.0, Unit::L);
        let lines = vec![
            RecipeLine::new(flour.id, 500.0, Unit::G), // 50
            RecipeLine::new(milk.id, 200.0, Unit::Ml), // 10
            RecipeLine::empty(),                       // 0
        ];
        let fixed = FixedCosts::new(5.0, 2.0, 3.0);

        let cost = compute_recipe_cost(&lines, &[flour, milk], &fixed);
        assert!((cost.ingredients_cost - 60.0).abs() < 1e-9);
        assert!((cost.total_cost - 70.0).abs() < 1e-9);
        assert_eq!(cost.line_costs.len(), 3);
    }

    #[test]
    fn test_recipe_cost_is_order_independent() {
        let flour = ingredient("Harina", 100.0, 1.0, Unit::Kg);
        let milk = ingredient("Leche", 50.0, 1.0, Unit::L);
        let a = RecipeLine::new(flour.id, 500.0, Unit::G);
        let b = RecipeLine::new(milk.id, 200.0, Unit::Ml);
        let inventory = [flour, milk];

        let forward = compute_recipe_cost(
            &[a.clone(), b.clone()],
            &inventory,
            &FixedCosts::default(),
        );
        let backward = compute_recipe_cost(&[b, a], &inventory, &FixedCosts::default());
        assert!((forward.total_cost - backward.total_cost).abs() < 1e-9);
    }

    #[test]
    fn test_margin_basic() {
        let m = compute_margin(80.0, 100.0);
        assert!((m.margin - 20.0).abs() < 1e-9);
        assert_eq!(m.margin_percent, 20.0);
    }

    #[test]
    fn test_margin_zero_sale_price() {
        let m = compute_margin(80.0, 0.0);
        assert!((m.margin - -80.0).abs() < 1e-9);
        assert_eq!(m.margin_percent, 0.0);
    }

    #[test]
    fn test_margin_percent_rounds_half_up_to_one_decimal() {
        // margin 33.333...%
        let m = compute_margin(200.0, 300.0);
        assert_eq!(m.margin_percent, 33.3);

        // 1.25 / 10 -> 12.5%, exact at one decimal
        let m = compute_margin(8.75, 10.0);
        assert_eq!(m.margin_percent, 12.5);
    }

    #[test]
    fn test_negative_margin_is_a_valid_state() {
        let m = compute_margin(120.0, 100.0);
        assert!((m.margin - -20.0).abs() < 1e-9);
        assert_eq!(m.margin_percent, -20.0);
    }

    #[test]
    fn test_recalculate_refreshes_only_derived_fields() {
        let flour = ingredient("Harina", 100.0, 1.0, Unit::Kg);
        let mut recipe = SavedRecipe::new(
            "Pan".to_string(),
            vec![RecipeLine::new(flour.id, 500.0, Unit::G)],
            FixedCosts::default(),
            100.0,
        );
        recipe.total_cost = 999.0; // stale cache

        let refreshed = recalculate_saved_recipe(&recipe, &[flour]);
        assert!((refreshed.total_cost - 50.0).abs() < 1e-9);
        assert!((refreshed.margin - 50.0).abs() < 1e-9);
        assert_eq!(refreshed.margin_percent, 50.0);
        assert_eq!(refreshed.id, recipe.id);
        assert_eq!(refreshed.name, recipe.name);
        assert_eq!(refreshed.saved_at, recipe.saved_at);
        assert_eq!(refreshed.lines.len(), recipe.lines.len());
    }

    #[test]
    fn test_recalculate_is_idempotent() {
        let flour = ingredient("Harina", 100.0, 1.0, Unit::Kg);
        let inventory = [flour.clone()];
        let recipe = SavedRecipe::new(
            "Pan".to_string(),
            vec![RecipeLine::new(flour.id, 500.0, Unit::G)],
            FixedCosts::new(1.0, 2.0, 3.0),
            100.0,
        );

        let once = recalculate_saved_recipe(&recipe, &inventory);
        let twice = recalculate_saved_recipe(&once, &inventory);
        assert_eq!(once.total_cost.to_bits(), twice.total_cost.to_bits());
        assert_eq!(once.margin.to_bits(), twice.margin.to_bits());
        assert_eq!(once.margin_percent.to_bits(), twice.margin_percent.to_bits());
    }

    #[test]
    fn test_recalculate_after_delete_subtracts_orphaned_contribution() {
        let flour = ingredient("Harina", 100.0, 1.0, Unit::Kg);
        let milk = ingredient("Leche", 50.0, 1.0, Unit::L);
        let recipe = SavedRecipe::new(
            "Pan".to_string(),
            vec![
                RecipeLine::new(flour.id, 500.0, Unit::G), // 50
                RecipeLine::new(milk.id, 200.0, Unit::Ml), // 10
            ],
            FixedCosts::default(),
            100.0,
        );

        let full = recalculate_saved_recipe(&recipe, &[flour.clone(), milk]);
        let after_delete = recalculate_saved_recipe(&recipe, &[flour]);
        assert!((full.total_cost - 60.0).abs() < 1e-9);
        assert!((after_delete.total_cost - (full.total_cost - 10.0)).abs() < 1e-9);
    }
}
