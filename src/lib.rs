// src/lib.rs
// CostoExacto - Local-first recipe cost calculator core
//
// Architecture:
// - Domain-centric: All business logic lives in domains
// - The costing engine is pure: it never fails, bad input degrades to 0
// - Event-driven: Services notify the presentation layer through events
// - Explicit: Inventory mutations run the recalculation cascade inline
// - Local-first: User controls all data (SQLite, no server)

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_ingredient,
    validate_recipe,
    // Costing engine
    compute_line_cost,
    compute_margin,
    compute_recipe_cost,
    parse_amount,
    parse_package_quantity,
    recalculate_saved_recipe,
    FixedCosts,
    // Inventory
    Ingredient,
    LineCost,
    LineCostStatus,
    Margin,
    // Recipes
    RecipeCost,
    RecipeLine,
    SavedRecipe,
    // Unit system
    Unit,
    UnitFamily,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus,
    DomainEvent,
    EventBus,
    EventLogEntry,
    IngredientAdded,
    IngredientRemoved,
    IngredientUpdated,
    RecipeDeleted,
    RecipeSaved,
    RecipesRecalculated,
};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, create_connection_pool_at, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    IngredientRepository,
    RecipeRepository,
    SqliteIngredientRepository,
    SqliteRecipeRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    // Inventory Service
    CreateIngredientRequest,
    InventoryService,
    UpdateIngredientRequest,

    // Recipe Service
    RecipeFormInput,
    RecipeLineInput,
    RecipeService,
    RecipeSummary,
    SaveRecipeRequest,
};
