// src/services/inventory_service.rs
//
// Inventory orchestration.
//
// Owns every ingredient mutation and the cache-invalidation policy that
// comes with it: saved recipes cache their derived cost fields, so every
// edit or delete here re-derives all of them before control returns to
// the caller. Create is exempt (a brand new id cannot be referenced yet).

use crate::domain::costing::{parse_amount, parse_package_quantity, recalculate_saved_recipe};
use crate::domain::ingredient::{validate_ingredient, Ingredient};
use crate::domain::unit::Unit;
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, IngredientAdded, IngredientRemoved, IngredientUpdated, RecipesRecalculated};
use crate::repositories::{IngredientRepository, RecipeRepository};
use std::sync::Arc;
use uuid::Uuid;

/// Raw form input for a new ingredient. Numeric fields arrive as the
/// strings the user typed; they are parsed here with defaulting, never
/// inside the engine.
#[derive(Debug, Clone)]
pub struct CreateIngredientRequest {
    pub name: String,
    pub price: String,
    pub quantity: String,
    pub unit: Unit,
}

#[derive(Debug, Clone)]
pub struct UpdateIngredientRequest {
    pub ingredient_id: Uuid,
    pub name: Option<String>,
    pub price: Option<String>,
    pub quantity: Option<String>,
    pub unit: Option<Unit>,
}

pub struct InventoryService {
    ingredient_repo: Arc<dyn IngredientRepository>,
    recipe_repo: Arc<dyn RecipeRepository>,
    event_bus: Arc<EventBus>,
}

impl InventoryService {
    pub fn new(
        ingredient_repo: Arc<dyn IngredientRepository>,
        recipe_repo: Arc<dyn RecipeRepository>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            ingredient_repo,
            recipe_repo,
            event_bus,
        }
    }

    pub fn create_ingredient(&self, request: CreateIngredientRequest) -> AppResult<Uuid> {
        let ingredient = Ingredient::new(
            request.name,
            parse_amount(&request.price),
            parse_package_quantity(&request.quantity),
            request.unit,
        );

        validate_ingredient(&ingredient).map_err(AppError::Domain)?;
        self.ingredient_repo.save(&ingredient)?;

        self.event_bus
            .emit(IngredientAdded::new(ingredient.id, ingredient.name.clone()));

        Ok(ingredient.id)
    }

    /// Edit a purchase record in place (same id), then re-derive every
    /// saved recipe before returning.
    pub fn update_ingredient(&self, request: UpdateIngredientRequest) -> AppResult<()> {
        let mut ingredient = self
            .ingredient_repo
            .get_by_id(request.ingredient_id)?
            .ok_or(AppError::NotFound)?;

        ingredient.update(
            request.name,
            request.price.as_deref().map(parse_amount),
            request.quantity.as_deref().map(parse_package_quantity),
            request.unit,
        );

        validate_ingredient(&ingredient).map_err(AppError::Domain)?;
        self.ingredient_repo.save(&ingredient)?;

        let recalculated = self.recalculate_saved_recipes()?;

        self.event_bus.emit(IngredientUpdated::new(ingredient.id));
        self.event_bus.emit(RecipesRecalculated::new(recalculated));
        Ok(())
    }

    /// Delete an ingredient. References from saved recipes are left in
    /// place and degrade to zero-cost contributions; the cascade below
    /// makes that visible in their cached totals immediately.
    pub fn delete_ingredient(&self, ingredient_id: Uuid) -> AppResult<()> {
        self.ingredient_repo
            .get_by_id(ingredient_id)?
            .ok_or(AppError::NotFound)?;

        self.ingredient_repo.delete(ingredient_id)?;

        let recalculated = self.recalculate_saved_recipes()?;

        self.event_bus.emit(IngredientRemoved::new(ingredient_id));
        self.event_bus.emit(RecipesRecalculated::new(recalculated));
        Ok(())
    }

    pub fn get_ingredient(&self, ingredient_id: Uuid) -> AppResult<Option<Ingredient>> {
        self.ingredient_repo.get_by_id(ingredient_id)
    }

    pub fn list_ingredients(&self) -> AppResult<Vec<Ingredient>> {
        self.ingredient_repo.list_all()
    }

    /// Re-derive the cached cost fields of every saved recipe against the
    /// current inventory snapshot. Returns the number of recipes touched.
    ///
    /// Runs to completion inside the mutation that triggered it: the
    /// single-threaded caller never observes a recipe derived from a
    /// partially-applied inventory change.
    pub fn recalculate_saved_recipes(&self) -> AppResult<usize> {
        let inventory = self.ingredient_repo.list_all()?;
        let recipes = self.recipe_repo.list_all()?;
        let count = recipes.len();

        for recipe in &recipes {
            let refreshed = recalculate_saved_recipe(recipe, &inventory);
            self.recipe_repo.save(&refreshed)?;
        }

        log::info!("Recalculated {} saved recipes", count);
        Ok(count)
    }
}
