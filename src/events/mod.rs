// src/events/mod.rs
//
// Event system
//
// Services emit domain events; the presentation layer subscribes to them
// (toasts, list refreshes). Emission is synchronous and in-process.

pub mod bus;
pub mod types;

pub use bus::{EventBus, EventLogEntry};
pub use types::{
    DomainEvent, IngredientAdded, IngredientRemoved, IngredientUpdated, RecipeDeleted,
    RecipeSaved, RecipesRecalculated,
};

use std::sync::Arc;

/// Create a shared event bus
pub fn create_event_bus() -> Arc<EventBus> {
    Arc::new(EventBus::new())
}
