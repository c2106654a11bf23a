//! Read-only reference tables consulted while answering questions.
//!
//! All three tables are keyed by lowercase name and are loaded once, before a
//! session starts. The two text formats are line oriented; a line without a
//! separator is skipped and the rest of the table still loads.

use indexmap::IndexMap;
use tracing::debug;

use crate::error::LookupError;

/// Culinary term → definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CulinaryDictionary(IndexMap<String, String>);

impl CulinaryDictionary {
    /// Parse a JSON object of `term: definition` pairs.
    pub fn from_json(json: &str) -> Result<Self, LookupError> {
        let raw: IndexMap<String, String> = serde_json::from_str(json)?;
        Ok(raw.into_iter().collect())
    }

    pub fn insert(&mut self, term: impl AsRef<str>, definition: impl Into<String>) {
        self.0
            .insert(term.as_ref().trim().to_lowercase(), definition.into());
    }

    pub fn get(&self, term: &str) -> Option<&str> {
        self.0.get(term).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for CulinaryDictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dictionary = CulinaryDictionary::default();
        for (term, definition) in iter {
            dictionary.insert(term, definition);
        }
        dictionary
    }
}

/// Tool name → description, from `name : description` lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolGlossary(IndexMap<String, String>);

impl ToolGlossary {
    pub fn parse(text: &str) -> Self {
        let mut glossary = ToolGlossary::default();
        for (number, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match line.split_once(':') {
                Some((name, description)) if !name.trim().is_empty() => {
                    glossary.insert(name, description.trim());
                }
                _ => debug!(line = number + 1, "skipping malformed tool glossary line"),
            }
        }
        glossary
    }

    pub fn insert(&mut self, name: impl AsRef<str>, description: impl Into<String>) {
        self.0
            .insert(name.as_ref().trim().to_lowercase(), description.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Every tool name, in file order. Used as the extractor's tool
    /// vocabulary.
    pub fn names(&self) -> Vec<String> {
        self.0.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Ingredient → ordered substitutes, from `name: sub1, sub2` lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionTable(IndexMap<String, Vec<String>>);

impl SubstitutionTable {
    pub fn parse(text: &str) -> Self {
        let mut table = SubstitutionTable::default();
        for (number, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match line.split_once(':') {
                Some((name, substitutes)) if !name.trim().is_empty() => {
                    let substitutes = substitutes
                        .split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect();
                    table.insert(name, substitutes);
                }
                _ => debug!(line = number + 1, "skipping malformed substitution line"),
            }
        }
        table
    }

    pub fn insert(&mut self, ingredient: impl AsRef<str>, substitutes: Vec<String>) {
        self.0
            .insert(ingredient.as_ref().trim().to_lowercase(), substitutes);
    }

    pub fn get(&self, ingredient: &str) -> Option<&[String]> {
        self.0.get(ingredient).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The three tables a session answers from.
#[derive(Debug, Clone, Default)]
pub struct LookupTables {
    pub dictionary: CulinaryDictionary,
    pub tools: ToolGlossary,
    pub substitutions: SubstitutionTable,
}

impl LookupTables {
    pub fn new(
        dictionary: CulinaryDictionary,
        tools: ToolGlossary,
        substitutions: SubstitutionTable,
    ) -> Self {
        LookupTables {
            dictionary,
            tools,
            substitutions,
        }
    }

    /// Dictionary definition first, then tool description.
    pub fn define(&self, term: &str) -> Option<Definition<'_>> {
        if let Some(definition) = self.dictionary.get(term) {
            Some(Definition::Term(definition))
        } else {
            self.tools.get(term).map(Definition::Tool)
        }
    }
}

/// Where a definition came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Definition<'a> {
    Term(&'a str),
    Tool(&'a str),
}
