//! # sous-nlp: language primitives for recipe text
//!
//! The small, swappable building blocks the annotation pipeline leans on
//! instead of a full NLP stack:
//!
//! - **Tokens**: whitespace tokenization with punctuation trimming, plus a
//!   sentence splitter for instruction paragraphs.
//! - **Lemmas**: a [`Lemmatizer`] trait with a suffix-stripping default that
//!   only needs to be right about verbs.
//! - **Verbs**: the cooking-verb and instruction-verb [`Lexicon`].
//! - **Scores**: a [`Similarity`] trait with a partial-ratio default used for
//!   fuzzy ingredient detection.
//!
//! ```text
//! sentence → tokenize → lemmatize → Lexicon::classify
//!          ↘ Similarity::similarity(ingredient, sentence)
//! ```

pub mod lemma;
pub mod score;
pub mod token;
pub mod verb;

pub use lemma::{Lemmatizer, RuleLemmatizer};
pub use score::{PartialRatio, Score, Similarity};
pub use token::{Token, TokenKind, split_sentences, tokenize};
pub use verb::{COOKING_VERBS, Lexicon, VerbClass};
