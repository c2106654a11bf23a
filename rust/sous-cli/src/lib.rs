//! # sous
//!
//! Command-line front end: `sous annotate` turns a scraped recipe into
//! annotated steps, `sous chat` walks through one interactively.
//!
//! ```bash
//! sous annotate recipe.json --tools tools.txt
//! sous chat recipe.json -t tools.txt -d dictionary.json -s substitutions.txt
//! ```

pub mod cli;
pub mod commands;
pub mod config;
