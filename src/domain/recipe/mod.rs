pub mod entity;
pub mod invariants;

pub use entity::{FixedCosts, RecipeLine, SavedRecipe};
pub use invariants::validate_recipe;
