//! Error types for recipe loading.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecipeError {
    /// The recipe document was not valid JSON or did not match the expected
    /// shape
    #[error("Malformed recipe JSON: {0}")]
    Json(#[from] serde_json::Error),
}
