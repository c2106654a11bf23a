use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "sous")]
#[command(bin_name = "sous")]
#[command(about = "Annotate recipes and cook through them step by step", long_about = None)]
pub struct SousCli {
    /// Log more (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the annotated steps of a recipe as JSON
    Annotate(AnnotateArgs),
    /// Walk through a recipe interactively
    Chat(ChatArgs),
}

#[derive(Debug, Args)]
pub struct AnnotateArgs {
    /// Scraped recipe JSON
    pub recipe: PathBuf,

    /// Tool glossary (`name : description` lines)
    #[arg(short, long)]
    pub tools: Option<PathBuf>,

    /// Write JSON here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ChatArgs {
    /// Scraped recipe JSON
    pub recipe: PathBuf,

    /// Tool glossary (`name : description` lines)
    #[arg(short, long)]
    pub tools: PathBuf,

    /// Culinary dictionary JSON
    #[arg(short, long)]
    pub dictionary: PathBuf,

    /// Substitution table (`name: sub1, sub2` lines)
    #[arg(short, long)]
    pub substitutions: PathBuf,

    /// JSON settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip the recipe overview
    #[arg(long)]
    pub no_overview: bool,
}
