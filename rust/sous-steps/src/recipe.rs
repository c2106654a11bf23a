//! Raw recipe input and its flattening into sentence units.

use std::fmt;

use serde::{Deserialize, Serialize};
use sous_nlp::split_sentences;

use crate::error::RecipeError;
use crate::model::IngredientMention;

/// A recipe as produced by the page scraper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub prep_time: Option<String>,
    #[serde(default)]
    pub cook_time: Option<String>,
    #[serde(default)]
    pub additional_time: Option<String>,
    #[serde(default)]
    pub total_time: Option<String>,
    #[serde(default, rename = "yield")]
    pub servings: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<IngredientMention>,
    #[serde(default)]
    pub steps: Vec<RecipeStep>,
}

/// A numbered instruction paragraph from the source page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeStep {
    pub step_number: u32,
    pub text: String,
    #[serde(default)]
    pub substeps: Vec<Substep>,
}

/// One sentence of an instruction paragraph, numbered "N.M".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substep {
    pub sub_number: String,
    pub text: String,
}

/// The assembler's unit of input: one sentence in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceUnit {
    pub step_number: u32,
    pub substep_number: String,
    pub text: String,
}

impl SentenceUnit {
    pub fn new(step_number: u32, substep_number: impl Into<String>, text: impl Into<String>) -> Self {
        SentenceUnit {
            step_number,
            substep_number: substep_number.into(),
            text: text.into(),
        }
    }
}

impl Recipe {
    pub fn from_json(json: &str) -> Result<Self, RecipeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Flatten the steps into sentence units.
    ///
    /// Substeps are used as given. A step without substeps is split into
    /// sentences, numbered `N.1`, `N.2`, ... in order.
    pub fn sentence_units(&self) -> Vec<SentenceUnit> {
        let mut units = Vec::new();
        for step in &self.steps {
            if step.substeps.is_empty() {
                for (i, sentence) in split_sentences(&step.text).into_iter().enumerate() {
                    units.push(SentenceUnit::new(
                        step.step_number,
                        format!("{}.{}", step.step_number, i + 1),
                        sentence,
                    ));
                }
            } else {
                units.extend(step.substeps.iter().map(|sub| {
                    SentenceUnit::new(step.step_number, sub.sub_number.clone(), sub.text.clone())
                }));
            }
        }
        units
    }
}

/// The recipe overview shown before an interactive session.
impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unknown = "unknown";
        writeln!(f, "Recipe Details:")?;
        writeln!(f, "Title: {}", self.title.as_deref().unwrap_or(unknown))?;
        writeln!(f, "Prep time: {}", self.prep_time.as_deref().unwrap_or(unknown))?;
        writeln!(f, "Cook time: {}", self.cook_time.as_deref().unwrap_or(unknown))?;
        writeln!(
            f,
            "Additional time: {}",
            self.additional_time.as_deref().unwrap_or(unknown)
        )?;
        writeln!(f, "Total time: {}", self.total_time.as_deref().unwrap_or(unknown))?;
        match &self.servings {
            Some(servings) => writeln!(f, "Yield: {servings} servings")?,
            None => writeln!(f, "Yield: {unknown}")?,
        }

        writeln!(f)?;
        writeln!(f, "Ingredients:")?;
        for ingredient in &self.ingredients {
            writeln!(f, "- {ingredient}")?;
        }

        writeln!(f)?;
        write!(f, "Steps:")?;
        for step in &self.steps {
            write!(f, "\nStep {}: {}", step.step_number, step.text)?;
        }
        Ok(())
    }
}
