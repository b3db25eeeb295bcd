use crate::catalog::{Protein, SpiceLevel};
use crate::recipe::{Recipe, RecipeError};
use serde::{Deserialize, Serialize};

/// Inputs for one recipe generation.
///
/// Missing fields deserialize to the defaults: chicken, 2 servings,
/// medium spice and no seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    pub protein: Protein,
    pub servings: u32,
    pub spice_level: SpiceLevel,
    /// Fixes the garnish selection when set
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            protein: Protein::default(),
            servings: 2,
            spice_level: SpiceLevel::default(),
            seed: None,
        }
    }
}

impl GenerateOptions {
    pub fn with_protein(mut self, protein: Protein) -> Self {
        self.protein = protein;
        self
    }

    pub fn with_servings(mut self, servings: u32) -> Self {
        self.servings = servings;
        self
    }

    pub fn with_spice_level(mut self, spice_level: SpiceLevel) -> Self {
        self.spice_level = spice_level;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generate a recipe from these options.
    pub fn generate(&self) -> Result<Recipe, RecipeError> {
        super::generate(self.protein, self.servings, self.spice_level, self.seed)
    }
}

/// Base quantities for a single serving.
pub(super) struct PerServing {
    pub protein_g: f64,
    pub breading_flour_tbsp: f64,
    pub egg: f64,
    pub panko_g: f64,
    pub frying_oil_ml: f64,
    pub onion_g: f64,
    pub carrot_g: f64,
    pub garlic_clove: f64,
    pub ginger_g: f64,
    pub curry_powder_tsp: f64,
    pub sauce_flour_tbsp: f64,
    pub honey_tsp: f64,
    pub soy_sauce_tsp: f64,
    pub stock_ml: f64,
    pub rice_g: f64,
}

impl PerServing {
    /// The quantity table with curry powder adjusted for `spice_level`.
    pub fn for_spice(spice_level: SpiceLevel) -> Self {
        PerServing {
            protein_g: 150.0,
            breading_flour_tbsp: 1.0,
            egg: 1.0,
            panko_g: 50.0,
            frying_oil_ml: 30.0,
            onion_g: 75.0,
            carrot_g: 60.0,
            garlic_clove: 0.5,
            ginger_g: 5.0,
            // 1 tsp at medium heat
            curry_powder_tsp: spice_level.multiplier(),
            sauce_flour_tbsp: 1.0,
            honey_tsp: 1.0,
            soy_sauce_tsp: 1.0,
            stock_ml: 150.0,
            rice_g: 75.0,
        }
    }
}
