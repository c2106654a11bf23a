use thiserror::Error;

/// Errors raised while loading lookup tables
#[derive(Debug, Error)]
pub enum LookupError {
    /// The culinary dictionary was not a JSON object of strings
    #[error("Malformed culinary dictionary: {0}")]
    Dictionary(#[from] serde_json::Error),
}
