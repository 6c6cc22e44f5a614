// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod inventory_service;
pub mod recipe_service;

#[cfg(test)]
mod recipe_service_tests;

// Re-export all services and their types
pub use inventory_service::{
    CreateIngredientRequest,
    InventoryService,
    UpdateIngredientRequest,
};

pub use recipe_service::{
    RecipeFormInput,
    RecipeLineInput,
    RecipeService,
    RecipeSummary,
    SaveRecipeRequest,
};
