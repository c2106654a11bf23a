//! # sous-session: interactive recipe walkthrough
//!
//! A [`Session`] holds a recipe's annotated steps behind a [`StepNavigator`]
//! cursor and answers free-text questions about them:
//!
//! ```text
//! query → vague reference? → temperature? → substitution? → navigation?
//!       → informational? → web search fallback
//! ```
//!
//! The route order is fixed; see [`router`]. Definitions, tool descriptions
//! and substitutes come from read-only [`LookupTables`].

pub mod config;
pub mod error;
pub mod lookup;
pub mod navigator;
pub mod resolver;
pub mod router;
pub mod search;
pub mod session;
pub mod substitute;

pub use config::SessionConfig;
pub use error::LookupError;
pub use lookup::{CulinaryDictionary, Definition, LookupTables, SubstitutionTable, ToolGlossary};
pub use navigator::{Move, Outcome, StepNavigator};
pub use resolver::Resolution;
pub use router::{REWRITTEN_ROUTES, ROUTES, Route};
pub use search::SearchLink;
pub use session::Session;
