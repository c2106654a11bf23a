//! Tunables for entity extraction.

use serde::{Deserialize, Serialize};

/// Ingredients that are always eligible for matching, whether or not the
/// recipe lists them.
pub const STAPLES: &[&str] = &["water", "salt", "pepper", "oil", "butter"];

/// Minimum partial-ratio score (0–100) for an ingredient to count as
/// mentioned.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 70.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    pub fuzzy_threshold: f64,
    pub staples: Vec<String>,
    /// Additional cooking verbs on top of the built-in lexicon.
    pub cooking_verbs: Vec<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        ExtractorConfig {
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            staples: STAPLES.iter().map(|s| s.to_string()).collect(),
            cooking_verbs: Vec::new(),
        }
    }
}
