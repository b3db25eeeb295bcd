pub mod catalog;
pub mod ffi;
pub mod generator;
pub mod recipe;
pub mod scale;

pub use catalog::{Protein, SpiceLevel};
pub use generator::{generate, generate_recipe, GenerateOptions};
pub use recipe::{Recipe, RecipeError};
pub use scale::scale_quantity;

uniffi::setup_scaffolding!();
