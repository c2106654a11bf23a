//! # sous-steps: recipe step annotation
//!
//! Turns the free-form instructions of a scraped [`Recipe`] into an ordered
//! list of annotated [`Step`] records.
//!
//! ```text
//! Recipe → sentence units → Classifier ─┬─ actionable → Extractor → Step
//!                                        └─ aside      → notes of last Step
//! ```
//!
//! - [`extract`] finds ingredients, tools, cooking verbs, durations and
//!   temperatures in a single sentence.
//! - [`classify`] tells instructions apart from warnings and tips.
//! - [`assemble`] runs both over a recipe in one forward pass, renumbering
//!   steps and carrying heat/time context forward.

pub mod assemble;
pub mod classify;
pub mod config;
pub mod error;
pub mod extract;
pub mod model;
pub mod recipe;

pub use assemble::Assembler;
pub use classify::{Classifier, Verdict};
pub use config::ExtractorConfig;
pub use error::RecipeError;
pub use extract::{Extraction, Extractor, IngredientMatch, Vocabulary, normalize_ingredient};
pub use model::{Action, IngredientMention, Step, TemperatureSpec, TimeSpec};
pub use recipe::{Recipe, RecipeStep, SentenceUnit, Substep};
