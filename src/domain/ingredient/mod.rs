pub mod entity;
pub mod invariants;

pub use entity::Ingredient;
pub use invariants::validate_ingredient;
