// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO event emission
// - NO cross-repository calls
// - Explicit SQL only

pub mod ingredient_repository;
pub mod recipe_repository;

pub use ingredient_repository::{IngredientRepository, SqliteIngredientRepository};
pub use recipe_repository::{RecipeRepository, SqliteRecipeRepository};

#[cfg(test)]
pub use ingredient_repository::MockIngredientRepository;
#[cfg(test)]
pub use recipe_repository::MockRecipeRepository;
