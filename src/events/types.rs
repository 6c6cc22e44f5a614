// events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// INVENTORY EVENTS
// ============================================================================

/// Emitted when a new ingredient enters the inventory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub ingredient_id: Uuid,
    pub name: String,
}

impl IngredientAdded {
    pub fn new(ingredient_id: Uuid, name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            ingredient_id,
            name,
        }
    }
}

impl DomainEvent for IngredientAdded {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "IngredientAdded" }
}

/// Emitted when an ingredient's purchase record is edited in place
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub ingredient_id: Uuid,
}

impl IngredientUpdated {
    pub fn new(ingredient_id: Uuid) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            ingredient_id,
        }
    }
}

impl DomainEvent for IngredientUpdated {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "IngredientUpdated" }
}

/// Emitted when an ingredient is removed from the inventory.
/// Saved recipes referencing it keep their lines; the reference is orphaned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientRemoved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub ingredient_id: Uuid,
}

impl IngredientRemoved {
    pub fn new(ingredient_id: Uuid) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            ingredient_id,
        }
    }
}

impl DomainEvent for IngredientRemoved {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "IngredientRemoved" }
}

// ============================================================================
// RECIPE EVENTS
// ============================================================================

/// Emitted when a recipe snapshot is saved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeSaved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub recipe_id: Uuid,
    pub name: String,
    pub total_cost: f64,
}

impl RecipeSaved {
    pub fn new(recipe_id: Uuid, name: String, total_cost: f64) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            recipe_id,
            name,
            total_cost,
        }
    }
}

impl DomainEvent for RecipeSaved {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "RecipeSaved" }
}

/// Emitted when a saved recipe is deleted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub recipe_id: Uuid,
}

impl RecipeDeleted {
    pub fn new(recipe_id: Uuid) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            recipe_id,
        }
    }
}

impl DomainEvent for RecipeDeleted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "RecipeDeleted" }
}

/// Emitted after an inventory mutation has re-derived the cached cost
/// fields of every saved recipe. The UI re-renders its list on this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipesRecalculated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub recipes_recalculated: usize,
}

impl RecipesRecalculated {
    pub fn new(recipes_recalculated: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            recipes_recalculated,
        }
    }
}

impl DomainEvent for RecipesRecalculated {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "RecipesRecalculated" }
}
