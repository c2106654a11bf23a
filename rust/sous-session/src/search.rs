//! Fallback search links for questions the tables cannot answer.

use serde::{Deserialize, Serialize};
use url::Url;

/// A search endpoint and the query parameter it reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLink {
    pub base: Url,
    pub param: String,
}

impl SearchLink {
    pub fn new(base: Url, param: impl Into<String>) -> Self {
        SearchLink {
            base,
            param: param.into(),
        }
    }

    /// Video search, used for "what is" and "how do I" questions.
    pub fn youtube() -> Self {
        Self::new(
            Url::parse("https://www.youtube.com/results").expect("valid video search url"),
            "search_query",
        )
    }

    /// Web search, used for everything else.
    pub fn google() -> Self {
        Self::new(
            Url::parse("https://www.google.com/search").expect("valid web search url"),
            "q",
        )
    }

    /// The search URL for `query`, form-encoded.
    pub fn link(&self, query: &str) -> String {
        let mut url = self.base.clone();
        url.query_pairs_mut().append_pair(&self.param, query.trim());
        url.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn encodes_query() {
        assert_eq!(
            SearchLink::youtube().link("how to fold egg whites"),
            "https://www.youtube.com/results?search_query=how+to+fold+egg+whites"
        );
        assert_eq!(
            SearchLink::google().link(" butter & oil? "),
            "https://www.google.com/search?q=butter+%26+oil%3F"
        );
    }
}
