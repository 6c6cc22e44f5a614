// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod costing;
pub mod ingredient;
pub mod recipe;
pub mod unit;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Unit System
pub use unit::{Unit, UnitFamily};

// Ingredient Domain (the inventory)
pub use ingredient::{validate_ingredient, Ingredient};

// Recipe Domain
pub use recipe::{validate_recipe, FixedCosts, RecipeLine, SavedRecipe};

// Costing Engine (pure, derived data)
pub use costing::{
    compute_line_cost, compute_margin, compute_recipe_cost, parse_amount, parse_package_quantity,
    recalculate_saved_recipe, LineCost, LineCostStatus, Margin, RecipeCost,
};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Entity not found: {0}")]
    NotFound(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
