use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{EvaluateArgs, RunArgs, ShowArgs};

/// Command-line front end for the Checkwise checklist wizard
///
/// Checkwise walks a technician through an equipment installation checklist:
/// an equipment form, one question per checklist item and a final review.
/// Checklists are JSON documents, given either as a file path or as the name
/// of a template in the templates directory.
#[derive(Parser)]
#[command(version, about, name = "cw")]
pub struct Args {
    /// Directory holding checklist templates. Defaults to
    /// $XDG_DATA_HOME/checkwise/checklists
    #[arg(long, global = true)]
    pub templates_dir: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Checkwise CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Run a checklist interactively, reading commands from stdin
    #[command(alias = "r")]
    Run(RunArgs),
    /// Evaluate a single voltage reading against a range
    #[command(alias = "e")]
    Evaluate(EvaluateArgs),
    /// Show the items of a checklist
    #[command(alias = "s")]
    Show(ShowArgs),
    /// List the available checklist templates
    #[command(alias = "t")]
    Templates,
    /// Print the JSON schema of checklist input files
    Schema,
}
