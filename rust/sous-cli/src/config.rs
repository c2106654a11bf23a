//! Settings file shared by both subcommands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sous_session::SessionConfig;
use sous_steps::ExtractorConfig;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SousConfig {
    pub extractor: ExtractorConfig,
    pub session: SessionConfig,
}

impl SousConfig {
    /// Read settings from `path`, or use the defaults when there is none.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(SousConfig::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("Malformed config {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: SousConfig =
            serde_json::from_str(r#"{"extractor": {"fuzzy_threshold": 85}, "session": {"prompt": "> "}}"#)
                .unwrap();
        assert_eq!(config.extractor.fuzzy_threshold, 85.0);
        assert_eq!(config.extractor.staples, ExtractorConfig::default().staples);
        assert_eq!(config.session.prompt, "> ");
        assert_eq!(config.session.farewell, SessionConfig::default().farewell);
    }

    #[test]
    fn no_path_means_defaults() {
        assert_eq!(SousConfig::load(None).unwrap(), SousConfig::default());
    }
}
