// src/bin/katsu_curry.rs

use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::Parser;
use katsu_curry::{generate_recipe, Protein, SpiceLevel};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "katsu-curry")]
#[command(version, about = "Generate a katsu-curry recipe", long_about = None)]
struct Cli {
    /// Protein to bread and fry
    #[arg(long, default_value = "chicken", value_parser = PossibleValuesParser::new(Protein::NAMES))]
    protein: String,

    /// Number of servings
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    servings: i64,

    /// Heat of the curry sauce
    #[arg(long, default_value = "medium", value_parser = PossibleValuesParser::new(SpiceLevel::NAMES))]
    spice: String,

    /// Random seed for reproducible garnish selection
    #[arg(long)]
    seed: Option<u64>,

    /// Print the recipe as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries the recipe
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    debug!(
        protein = %cli.protein,
        servings = cli.servings,
        spice = %cli.spice,
        seed = ?cli.seed,
        "Generating recipe"
    );

    let recipe = generate_recipe(&cli.protein, cli.servings, &cli.spice, cli.seed)?;
    info!(
        title = recipe.title(),
        ingredients = recipe.ingredients().len(),
        "Generated recipe"
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&recipe)?);
    } else {
        println!("{}", recipe);
    }

    Ok(())
}
