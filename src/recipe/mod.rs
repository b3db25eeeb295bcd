use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecipeError {
    #[error("Invalid {field} '{value}': {reason}")]
    InvalidArgument {
        /// Name of the rejected input
        field: &'static str,
        /// The rejected value as the caller supplied it
        value: String,
        /// Accepted values, empty for numeric inputs
        accepted: Vec<String>,
        reason: String,
    },
}

impl RecipeError {
    /// A value outside a closed set of choices.
    pub(crate) fn unsupported(field: &'static str, value: &str, accepted: &[&str]) -> Self {
        RecipeError::InvalidArgument {
            field,
            value: value.to_string(),
            accepted: accepted.iter().map(|s| s.to_string()).collect(),
            reason: format!("choose from {}", accepted.join(", ")),
        }
    }

    /// A numeric value outside its allowed range.
    pub(crate) fn out_of_range(field: &'static str, value: impl fmt::Display, reason: &str) -> Self {
        RecipeError::InvalidArgument {
            field,
            value: value.to_string(),
            accepted: Vec::new(),
            reason: reason.to_string(),
        }
    }
}

/// A fully generated katsu-curry recipe.
///
/// Fields are fixed at generation time; the value only exposes read-only
/// accessors and a text rendering through [`fmt::Display`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    title: String,
    servings: u32,
    ingredients: Vec<String>,
    steps: Vec<String>,
}

impl Recipe {
    pub(crate) fn new(
        title: String,
        servings: u32,
        ingredients: Vec<String>,
        steps: Vec<String>,
    ) -> Self {
        Recipe {
            title,
            servings,
            ingredients,
            steps,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn servings(&self) -> u32 {
        self.servings
    }

    /// Ingredient lines in shopping order, garnishes last
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// Method steps in cooking order
    pub fn steps(&self) -> &[String] {
        &self.steps
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = vec![
            self.title.clone(),
            underline(&self.title, '='),
            String::new(),
            format!("Servings: {}", self.servings),
            String::new(),
            "Ingredients".to_string(),
            underline("Ingredients", '-'),
        ];
        lines.extend(self.ingredients.iter().map(|i| format!("• {}", i)));
        lines.push(String::new());
        lines.push("Method".to_string());
        lines.push(underline("Method", '-'));
        lines.extend(
            self.steps
                .iter()
                .enumerate()
                .map(|(idx, step)| format!("{}. {}", idx + 1, step)),
        );

        f.write_str(lines.join("\n").trim())
    }
}

fn underline(text: &str, marker: char) -> String {
    std::iter::repeat(marker).take(text.chars().count()).collect()
}
