pub mod engine;
pub mod input;

pub use engine::{
    compute_line_cost, compute_margin, compute_recipe_cost, recalculate_saved_recipe, LineCost,
    LineCostStatus, Margin, RecipeCost,
};
pub use input::{parse_amount, parse_package_quantity};
