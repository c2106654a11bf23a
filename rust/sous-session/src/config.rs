//! Session settings.

use serde::{Deserialize, Serialize};

use crate::search::SearchLink;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Linked when a term or technique has no definition.
    pub video_search: SearchLink,
    /// Linked for unknown substitutes and unrecognized questions.
    pub web_search: SearchLink,
    /// Printed before each query is read.
    pub prompt: String,
    pub greeting: String,
    pub farewell: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            video_search: SearchLink::youtube(),
            web_search: SearchLink::google(),
            prompt: "q -- ".into(),
            greeting: "Now, we will begin navigating the recipe! Type 'exit' to quit at any \
                       point.\nWhenever you're ready, ask 'What is the first step?' to begin."
                .into(),
            farewell: "Goodbye! Happy cooking!".into(),
        }
    }
}
