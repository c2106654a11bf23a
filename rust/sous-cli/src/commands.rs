//! The two subcommands.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use sous_session::{CulinaryDictionary, LookupTables, Session, SubstitutionTable, ToolGlossary};
use sous_steps::{Assembler, Recipe, Step};
use tracing::info;

use crate::cli::{AnnotateArgs, ChatArgs, Command};
use crate::config::SousConfig;

pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Annotate(args) => annotate(args),
        Command::Chat(args) => chat(args),
    }
}

fn read(path: &Path, what: &str) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {what} {}", path.display()))
}

fn load_recipe(path: &Path) -> Result<Recipe> {
    let recipe = Recipe::from_json(&read(path, "recipe")?)
        .with_context(|| format!("Could not load recipe {}", path.display()))?;
    info!(title = recipe.title.as_deref().unwrap_or("untitled"), "loaded recipe");
    Ok(recipe)
}

fn annotate_recipe(recipe: &Recipe, tools: &ToolGlossary, config: &SousConfig) -> Vec<Step> {
    Assembler::for_recipe(recipe, tools.names(), &config.extractor).annotate(recipe)
}

fn annotate(args: AnnotateArgs) -> Result<()> {
    let config = SousConfig::load(args.config.as_deref())?;
    let recipe = load_recipe(&args.recipe)?;
    let tools = match &args.tools {
        Some(path) => ToolGlossary::parse(&read(path, "tool glossary")?),
        None => ToolGlossary::default(),
    };

    let steps = annotate_recipe(&recipe, &tools, &config);
    let json = serde_json::to_string_pretty(&steps).context("Failed to serialize steps")?;

    match &args.output {
        Some(path) => fs::write(path, json + "\n")
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}

fn chat(args: ChatArgs) -> Result<()> {
    let config = SousConfig::load(args.config.as_deref())?;
    let recipe = load_recipe(&args.recipe)?;

    let dictionary = CulinaryDictionary::from_json(&read(&args.dictionary, "dictionary")?)
        .with_context(|| format!("Could not load dictionary {}", args.dictionary.display()))?;
    let tools = ToolGlossary::parse(&read(&args.tools, "tool glossary")?);
    let substitutions = SubstitutionTable::parse(&read(&args.substitutions, "substitution table")?);
    let tables = LookupTables::new(dictionary, tools, substitutions);

    let steps = annotate_recipe(&recipe, &tables.tools, &config);

    let stdout = io::stdout();
    let mut output = stdout.lock();
    if !args.no_overview {
        writeln!(output, "{recipe}\n")?;
    }

    let mut session = Session::new(steps, &tables, config.session);
    session
        .run(io::stdin().lock(), output)
        .context("Session I/O failed")
}
