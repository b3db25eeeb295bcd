//! Recipe generation.
//!
//! [`generate`] validates its inputs, scales the per-serving quantity table,
//! picks optional garnishes with a call-local PRNG, and assembles a
//! [`Recipe`]. Nothing here performs I/O.

use crate::catalog::{Protein, SpiceLevel};
use crate::recipe::{Recipe, RecipeError};
use crate::scale::scale_quantity;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

mod model;

pub use model::GenerateOptions;
use model::PerServing;

const BASE_GARNISHES: [&str; 3] = ["shredded cabbage", "sliced radish", "pickled ginger"];
const CUCUMBER: &str = "thin-sliced cucumber";
const EDAMAME: &str = "steamed edamame";

/// Generate a recipe from already-typed inputs.
///
/// With `seed` set, the optional garnishes are fully reproducible; without
/// it the generator is seeded from system entropy.
///
/// # Errors
///
/// Returns [`RecipeError::InvalidArgument`] when `servings` is zero.
///
/// # Examples
///
/// ```
/// use katsu_curry::{generate, Protein, SpiceLevel};
///
/// let recipe = generate(Protein::Pork, 4, SpiceLevel::Hot, Some(7))?;
/// assert_eq!(recipe.title(), "Pork Katsu Curry (hot)");
/// assert!(recipe.ingredients()[0].starts_with("600 g"));
/// # Ok::<(), katsu_curry::RecipeError>(())
/// ```
pub fn generate(
    protein: Protein,
    servings: u32,
    spice_level: SpiceLevel,
    seed: Option<u64>,
) -> Result<Recipe, RecipeError> {
    if servings < 1 {
        return Err(invalid_servings(servings));
    }

    let mut rng = garnish_rng(seed);
    let per = PerServing::for_spice(spice_level);
    let garnishes = choose_garnishes(&mut rng);

    let q = |base: f64, unit: &str| scale_quantity(base, servings, unit);
    let mut ingredients = vec![
        format!("{} {}", q(per.protein_g, "g"), protein.description()),
        format!("{} plain flour (for breading)", q(per.breading_flour_tbsp, "Tbsp")),
        format!("{}, beaten (for breading)", q(per.egg, "egg")),
        format!("{} panko breadcrumbs", q(per.panko_g, "g")),
        format!("{} neutral frying oil", q(per.frying_oil_ml, "ml")),
        format!("{} onion, finely diced", q(per.onion_g, "g")),
        format!("{} carrot, diced", q(per.carrot_g, "g")),
        format!("{} garlic, minced", q(per.garlic_clove, "clove")),
        format!("{} fresh ginger, minced", q(per.ginger_g, "g")),
        format!("{} Japanese curry powder", q(per.curry_powder_tsp, "tsp")),
        format!("{} plain flour (to thicken sauce)", q(per.sauce_flour_tbsp, "Tbsp")),
        format!("{} honey", q(per.honey_tsp, "tsp")),
        format!("{} soy sauce", q(per.soy_sauce_tsp, "tsp")),
        format!("{} chicken or vegetable stock", q(per.stock_ml, "ml")),
        format!("{} short-grain Japanese rice, cooked", q(per.rice_g, "g")),
    ];
    ingredients.extend(garnishes.into_iter().map(String::from));

    let title = format!("{} Katsu Curry ({})", protein.display_name(), spice_level);

    Ok(Recipe::new(title, servings, ingredients, method(protein)))
}

/// Generate a recipe from untyped inputs, as a CLI or foreign caller
/// would supply them.
///
/// Inputs are checked in order (protein, servings, spice level) and the
/// first violation is returned.
///
/// # Errors
///
/// Returns [`RecipeError::InvalidArgument`] for an unknown protein, a
/// serving count below one, or an unknown spice level.
pub fn generate_recipe(
    protein: &str,
    servings: i64,
    spice_level: &str,
    seed: Option<u64>,
) -> Result<Recipe, RecipeError> {
    let protein: Protein = protein.parse()?;
    let servings = u32::try_from(servings)
        .ok()
        .filter(|s| *s >= 1)
        .ok_or_else(|| invalid_servings(servings))?;
    let spice_level: SpiceLevel = spice_level.parse()?;

    generate(protein, servings, spice_level, seed)
}

fn invalid_servings(servings: impl std::fmt::Display) -> RecipeError {
    RecipeError::out_of_range(
        "servings",
        servings,
        &format!("must be between 1 and {}", u32::MAX),
    )
}

fn garnish_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Base garnishes plus up to two optional ones.
///
/// Both draws always happen, in this order, so a seed maps to the same
/// garnishes regardless of what the first draw decided.
fn choose_garnishes<R: Rng>(rng: &mut R) -> Vec<&'static str> {
    let mut garnishes = BASE_GARNISHES.to_vec();
    let add_cucumber = rng.gen::<f64>() < 0.5;
    let add_edamame = rng.gen::<f64>() < 0.5;
    if add_cucumber {
        garnishes.push(CUCUMBER);
    }
    if add_edamame {
        garnishes.push(EDAMAME);
    }
    garnishes
}

fn method(protein: Protein) -> Vec<String> {
    vec![
        "Prepare rice according to package instructions so it is ready when the curry is done."
            .to_string(),
        format!(
            "Season the {} with salt and pepper. Dredge in flour, dip in beaten egg, then coat with panko.",
            protein.description()
        ),
        "Heat oil in a skillet to 170 °C (340 °F). Fry cutlets until golden and cooked through (about 3-4 min per side). Rest on a rack."
            .to_string(),
        "Sauce: In a saucepan sauté onion, carrot, garlic and ginger until softened.".to_string(),
        "Add curry powder; cook 30 s. Sprinkle flour, stir 1 min.".to_string(),
        "Whisk in stock gradually until smooth. Add honey and soy. Simmer 10 min until thick. Blend if you prefer a smoother sauce."
            .to_string(),
        "Slice katsu cutlets. Plate rice, ladle curry sauce, place sliced katsu on top.".to_string(),
        "Garnish with shredded cabbage or other chosen veggies. Serve immediately.".to_string(),
    ]
}
