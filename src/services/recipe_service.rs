// src/services/recipe_service.rs
//
// Recipe orchestration: live cost previews for the calculator form and
// the save/list/delete lifecycle of recipe snapshots.

use crate::domain::costing::{
    compute_margin, compute_recipe_cost, parse_amount, LineCost,
};
use crate::domain::recipe::{validate_recipe, FixedCosts, RecipeLine, SavedRecipe};
use crate::domain::unit::Unit;
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, RecipeDeleted, RecipeSaved};
use crate::repositories::{IngredientRepository, RecipeRepository};
use std::sync::Arc;
use uuid::Uuid;

/// One calculator row as the UI holds it: an optional ingredient
/// selection and a raw quantity string.
#[derive(Debug, Clone)]
pub struct RecipeLineInput {
    pub ingredient_id: Option<Uuid>,
    pub quantity: String,
    pub unit: Unit,
}

/// The calculator form: lines, fixed costs and sale price, all numeric
/// fields still raw.
#[derive(Debug, Clone)]
pub struct RecipeFormInput {
    pub lines: Vec<RecipeLineInput>,
    pub packaging: String,
    pub cutlery: String,
    pub extras: String,
    pub sale_price: String,
}

#[derive(Debug, Clone)]
pub struct SaveRecipeRequest {
    pub name: String,
    pub form: RecipeFormInput,
}

/// Everything the result panel renders, with per-line soft states so the
/// UI can flag unit mismatches and orphaned references.
#[derive(Debug, Clone)]
pub struct RecipeSummary {
    pub line_costs: Vec<LineCost>,
    pub ingredients_cost: f64,
    pub total_cost: f64,
    pub margin: f64,
    pub margin_percent: f64,
}

pub struct RecipeService {
    recipe_repo: Arc<dyn RecipeRepository>,
    ingredient_repo: Arc<dyn IngredientRepository>,
    event_bus: Arc<EventBus>,
}

impl RecipeService {
    pub fn new(
        recipe_repo: Arc<dyn RecipeRepository>,
        ingredient_repo: Arc<dyn IngredientRepository>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            recipe_repo,
            ingredient_repo,
            event_bus,
        }
    }

    /// Cost the current form against the live inventory without
    /// persisting anything.
    pub fn cost_preview(&self, form: &RecipeFormInput) -> AppResult<RecipeSummary> {
        let inventory = self.ingredient_repo.list_all()?;
        let (lines, fixed_costs, sale_price) = parse_form(form);

        let cost = compute_recipe_cost(&lines, &inventory, &fixed_costs);
        let margin = compute_margin(cost.total_cost, sale_price);

        Ok(RecipeSummary {
            line_costs: cost.line_costs,
            ingredients_cost: cost.ingredients_cost,
            total_cost: cost.total_cost,
            margin: margin.margin,
            margin_percent: margin.margin_percent,
        })
    }

    /// Freeze the form into a SavedRecipe with its derived cost fields
    /// computed and cached.
    pub fn save_recipe(&self, request: SaveRecipeRequest) -> AppResult<Uuid> {
        let (lines, fixed_costs, sale_price) = parse_form(&request.form);

        let mut recipe = SavedRecipe::new(request.name, lines, fixed_costs, sale_price);
        validate_recipe(&recipe).map_err(AppError::Domain)?;

        let inventory = self.ingredient_repo.list_all()?;
        let cost = compute_recipe_cost(&recipe.lines, &inventory, &recipe.fixed_costs);
        let margin = compute_margin(cost.total_cost, recipe.sale_price);
        recipe.apply_costing(&cost, &margin);

        self.recipe_repo.save(&recipe)?;

        self.event_bus.emit(RecipeSaved::new(
            recipe.id,
            recipe.name.clone(),
            recipe.total_cost,
        ));

        Ok(recipe.id)
    }

    pub fn get_recipe(&self, recipe_id: Uuid) -> AppResult<Option<SavedRecipe>> {
        self.recipe_repo.get_by_id(recipe_id)
    }

    /// Saved recipes, newest-first
    pub fn list_recipes(&self) -> AppResult<Vec<SavedRecipe>> {
        self.recipe_repo.list_all()
    }

    pub fn delete_recipe(&self, recipe_id: Uuid) -> AppResult<()> {
        self.recipe_repo
            .get_by_id(recipe_id)?
            .ok_or(AppError::NotFound)?;

        self.recipe_repo.delete(recipe_id)?;
        self.event_bus.emit(RecipeDeleted::new(recipe_id));
        Ok(())
    }

    /// Usage unit to pre-select when the given ingredient is added to a
    /// line (kg -> g, l -> ml, otherwise the purchase unit itself).
    pub fn suggest_usage_unit(&self, ingredient_id: Uuid) -> AppResult<Unit> {
        let ingredient = self
            .ingredient_repo
            .get_by_id(ingredient_id)?
            .ok_or(AppError::NotFound)?;
        Ok(ingredient.suggested_usage_unit())
    }
}

/// Parse the raw form into engine inputs. Quantities and costs default to
/// 0 when unparsable; nothing here can fail.
fn parse_form(form: &RecipeFormInput) -> (Vec<RecipeLine>, FixedCosts, f64) {
    let lines: Vec<RecipeLine> = form
        .lines
        .iter()
        .map(|input| RecipeLine {
            id: Uuid::new_v4(),
            ingredient_id: input.ingredient_id,
            usage_quantity: parse_amount(&input.quantity),
            usage_unit: input.unit,
        })
        .collect();

    let fixed_costs = FixedCosts::new(
        parse_amount(&form.packaging),
        parse_amount(&form.cutlery),
        parse_amount(&form.extras),
    );

    (lines, fixed_costs, parse_amount(&form.sale_price))
}
