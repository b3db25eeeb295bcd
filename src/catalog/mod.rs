//! Fixed catalogs of proteins and spice levels.
//!
//! Both catalogs are closed enumerations backed by constant lookup tables.
//! Parsing from a string is the only way untrusted input enters them, and it
//! fails with [`RecipeError::InvalidArgument`] listing the accepted keys.

use crate::recipe::RecipeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The protein that gets breaded and fried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protein {
    #[default]
    Chicken,
    Pork,
    Tofu,
    Shrimp,
}

impl Protein {
    /// Every protein, in catalog order.
    pub const ALL: [Protein; 4] = [
        Protein::Chicken,
        Protein::Pork,
        Protein::Tofu,
        Protein::Shrimp,
    ];

    /// Catalog keys, in catalog order.
    pub const NAMES: [&'static str; 4] = ["chicken", "pork", "tofu", "shrimp"];

    /// Returns the catalog key (`"chicken"`, `"pork"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Protein::Chicken => "chicken",
            Protein::Pork => "pork",
            Protein::Tofu => "tofu",
            Protein::Shrimp => "shrimp",
        }
    }

    /// Returns the phrase used in the ingredient list and method.
    pub fn description(self) -> &'static str {
        match self {
            Protein::Chicken => "skinless chicken breast",
            Protein::Pork => "pork loin cutlet",
            Protein::Tofu => "extra-firm tofu",
            Protein::Shrimp => "jumbo shrimp (peeled, deveined)",
        }
    }

    /// Returns the key with its first letter upper-cased, as used in titles.
    pub fn display_name(self) -> String {
        capitalize(self.name())
    }
}

impl fmt::Display for Protein {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Protein {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Protein::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| RecipeError::unsupported("protein", s, &Protein::NAMES))
    }
}

/// How hot the curry sauce is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpiceLevel {
    Mild,
    #[default]
    Medium,
    Hot,
}

impl SpiceLevel {
    /// Every spice level, from mildest to hottest.
    pub const ALL: [SpiceLevel; 3] = [SpiceLevel::Mild, SpiceLevel::Medium, SpiceLevel::Hot];

    /// Catalog keys, from mildest to hottest.
    pub const NAMES: [&'static str; 3] = ["mild", "medium", "hot"];

    /// Returns the catalog key (`"mild"`, `"medium"` or `"hot"`).
    pub fn name(self) -> &'static str {
        match self {
            SpiceLevel::Mild => "mild",
            SpiceLevel::Medium => "medium",
            SpiceLevel::Hot => "hot",
        }
    }

    /// Multiplier applied to the per-serving curry powder.
    pub fn multiplier(self) -> f64 {
        match self {
            SpiceLevel::Mild => 0.6,
            SpiceLevel::Medium => 1.0,
            SpiceLevel::Hot => 1.4,
        }
    }
}

impl fmt::Display for SpiceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpiceLevel {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpiceLevel::ALL
            .into_iter()
            .find(|level| level.name() == s)
            .ok_or_else(|| RecipeError::unsupported("spice_level", s, &SpiceLevel::NAMES))
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protein_round_trips_through_name() {
        for protein in Protein::ALL {
            assert_eq!(protein.name().parse::<Protein>().unwrap(), protein);
        }
    }

    #[test]
    fn test_protein_names_match_all() {
        let names: Vec<&str> = Protein::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(names, Protein::NAMES);
    }

    #[test]
    fn test_unknown_protein_lists_choices() {
        let err = "beef".parse::<Protein>().unwrap_err();
        let RecipeError::InvalidArgument {
            field,
            value,
            accepted,
            ..
        } = &err;
        assert_eq!(*field, "protein");
        assert_eq!(value, "beef");
        assert_eq!(accepted, &["chicken", "pork", "tofu", "shrimp"]);
        assert!(err.to_string().contains("chicken, pork, tofu, shrimp"));
    }

    #[test]
    fn test_protein_parsing_is_case_sensitive() {
        assert!("Chicken".parse::<Protein>().is_err());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Protein::Chicken.display_name(), "Chicken");
        assert_eq!(Protein::Shrimp.display_name(), "Shrimp");
    }

    #[test]
    fn test_spice_multipliers() {
        assert_eq!(SpiceLevel::Mild.multiplier(), 0.6);
        assert_eq!(SpiceLevel::Medium.multiplier(), 1.0);
        assert_eq!(SpiceLevel::Hot.multiplier(), 1.4);
    }

    #[test]
    fn test_unknown_spice_level() {
        let err = "nuclear".parse::<SpiceLevel>().unwrap_err();
        assert!(err.to_string().contains("spice_level"));
        assert!(err.to_string().contains("mild, medium, hot"));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Protein::default(), Protein::Chicken);
        assert_eq!(SpiceLevel::default(), SpiceLevel::Medium);
    }

    #[test]
    fn test_serde_uses_catalog_keys() {
        assert_eq!(serde_json::to_string(&Protein::Tofu).unwrap(), "\"tofu\"");
        let level: SpiceLevel = serde_json::from_str("\"hot\"").unwrap();
        assert_eq!(level, SpiceLevel::Hot);
    }
}
