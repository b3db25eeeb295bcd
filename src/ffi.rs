//! UniFFI bindings for cross-platform support (iOS, Android).
//!
//! This module provides FFI-safe types and functions for use with UniFFI.
//! Recipes cross the boundary as plain records; rendering happens on the
//! Rust side so every platform prints identical text.

use crate::catalog::{Protein, SpiceLevel};
use crate::generator::generate_recipe as generate_internal;
use crate::recipe::{Recipe, RecipeError};

/// FFI-safe error type that wraps all possible errors.
#[derive(Debug, uniffi::Error, thiserror::Error)]
pub enum KatsuCurryError {
    #[error("{message}")]
    InvalidArgument {
        field: String,
        value: String,
        accepted: Vec<String>,
        message: String,
    },
}

impl From<RecipeError> for KatsuCurryError {
    fn from(e: RecipeError) -> Self {
        let message = e.to_string();
        match e {
            RecipeError::InvalidArgument {
                field,
                value,
                accepted,
                ..
            } => KatsuCurryError::InvalidArgument {
                field: field.to_string(),
                value,
                accepted,
                message,
            },
        }
    }
}

/// FFI-safe representation of a generated recipe.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiRecipe {
    pub title: String,
    pub servings: u32,
    /// Ingredient lines in shopping order
    pub ingredients: Vec<String>,
    /// Method steps in cooking order
    pub steps: Vec<String>,
}

impl From<&Recipe> for FfiRecipe {
    fn from(r: &Recipe) -> Self {
        FfiRecipe {
            title: r.title().to_string(),
            servings: r.servings(),
            ingredients: r.ingredients().to_vec(),
            steps: r.steps().to_vec(),
        }
    }
}

impl From<FfiRecipe> for Recipe {
    fn from(r: FfiRecipe) -> Self {
        Recipe::new(r.title, r.servings, r.ingredients, r.steps)
    }
}

// ============================================================================
// Exported FFI Functions
// ============================================================================

/// Generates a katsu-curry recipe.
///
/// # Arguments
/// * `protein` - One of `chicken`, `pork`, `tofu`, `shrimp`
/// * `servings` - Number of servings, at least 1
/// * `spice_level` - One of `mild`, `medium`, `hot`
/// * `seed` - Optional seed making the garnish selection reproducible
///
/// # Returns
/// The recipe, or an error naming the first invalid argument.
#[uniffi::export]
pub fn generate_recipe(
    protein: String,
    servings: i64,
    spice_level: String,
    seed: Option<u64>,
) -> Result<FfiRecipe, KatsuCurryError> {
    let recipe = generate_internal(&protein, servings, &spice_level, seed)?;
    Ok(FfiRecipe::from(&recipe))
}

/// Renders a recipe as formatted text.
#[uniffi::export]
pub fn render_recipe(recipe: FfiRecipe) -> String {
    Recipe::from(recipe).to_string()
}

/// Returns the accepted protein keys.
#[uniffi::export]
pub fn protein_choices() -> Vec<String> {
    Protein::NAMES.iter().map(|s| s.to_string()).collect()
}

/// Returns the accepted spice level keys, mildest first.
#[uniffi::export]
pub fn spice_choices() -> Vec<String> {
    SpiceLevel::NAMES.iter().map(|s| s.to_string()).collect()
}

/// Returns the library version.
#[uniffi::export]
pub fn library_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
