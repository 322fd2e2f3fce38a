//! Command handlers and clap argument wrappers
//!
//! Argument structs carry the clap derives and convert into core parameter
//! types, so the core crate stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Wizard Engine
//! ```

use std::{fs, path::PathBuf};

use anyhow::{bail, Context, Result};
use checkwise_core::{
    evaluate_reading, load_checklist_file, run_session, ChecklistInput, EvaluateReading, Items,
    SessionOutcome, TemplateCache, Templates, WizardBuilder,
};
use clap::Args;
use log::info;
use tokio::sync::mpsc;

use crate::{
    renderer::TerminalRenderer,
    session::{spawn_stdin_reader, TerminalNotifier},
};

/// Capacity of the channel between the stdin reader and the runner.
const ACTION_BUFFER: usize = 32;

/// Run a checklist
///
/// Commands are read line by line from stdin. The finished checklist is
/// written as JSON to the output file, or to stdout. Without an output file
/// screens and notices go to stderr, so stdout carries only the JSON.
#[derive(Args)]
pub struct RunArgs {
    /// Path to a checklist JSON file, or the name of a template
    pub checklist: String,
    /// Serial of the equipment used, when the checklist carries none
    #[arg(long)]
    pub serial: Option<String>,
    /// Calibration due date of the equipment used, when the checklist
    /// carries none
    #[arg(long)]
    pub calibration_date: Option<String>,
    /// Initial remark for the checklist as a whole
    #[arg(long)]
    pub remark: Option<String>,
    /// Write the finished checklist to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Evaluate a reading
///
/// The range is inclusive at both ends.
#[derive(Args)]
pub struct EvaluateArgs {
    /// Measured value
    #[arg(allow_hyphen_values = true)]
    pub reading: String,
    /// Lower bound of the acceptable range
    #[arg(long, allow_hyphen_values = true)]
    pub start: String,
    /// Upper bound of the acceptable range
    #[arg(long, allow_hyphen_values = true)]
    pub end: String,
}

impl From<EvaluateArgs> for EvaluateReading {
    fn from(val: EvaluateArgs) -> Self {
        EvaluateReading {
            reading: val.reading,
            start: val.start,
            end: val.end,
        }
    }
}

/// Show a checklist
#[derive(Args)]
pub struct ShowArgs {
    /// Path to a checklist JSON file, or the name of a template
    pub checklist: String,
}

pub struct Cli {
    cache: TemplateCache,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(cache: TemplateCache, renderer: TerminalRenderer) -> Self {
        Self { cache, renderer }
    }

    /// Run a checklist session against stdin.
    pub async fn run(&mut self, args: RunArgs) -> Result<()> {
        let input = self.load_input(&args.checklist)?;
        let session = WizardBuilder::from_input(input)
            .with_equipment_used(args.serial)
            .with_calibration_date(args.calibration_date)
            .with_global_remark(args.remark)
            .build()
            .context("Failed to start checklist session")?;

        let screens = match args.output {
            Some(_) => self.renderer.clone(),
            None => self.renderer.on_stderr(),
        };

        let (tx, rx) = mpsc::channel(ACTION_BUFFER);
        spawn_stdin_reader(tx, screens.clone());

        let mut notifier = TerminalNotifier::new(&screens);
        let outcome = tokio::select! {
            outcome = run_session(session, rx, &mut notifier) => {
                outcome.context("Checklist session failed")?
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, cancelling checklist");
                SessionOutcome::Cancelled
            }
        };

        match outcome {
            SessionOutcome::Finished(finished) => {
                let json = serde_json::to_string_pretty(&finished)
                    .context("Failed to serialize finished checklist")?;
                match args.output {
                    Some(path) => {
                        fs::write(&path, json).with_context(|| {
                            format!("Failed to write checklist to {}", path.display())
                        })?;
                        info!("Finished checklist written to {}", path.display());
                        self.renderer
                            .render(&format!("Checklist saved to {}\n", path.display()))?;
                    }
                    None => println!("{json}"),
                }
            }
            SessionOutcome::Cancelled => {
                screens.render("Checklist cancelled.\n")?;
            }
        }
        Ok(())
    }

    /// Evaluate a standalone reading.
    pub fn evaluate(&self, args: EvaluateArgs) -> Result<()> {
        let evaluation = evaluate_reading(&args.into()).context("Failed to evaluate reading")?;
        self.renderer.render(&format!(
            "# {}\n\n{}\n",
            evaluation.verdict.with_icon(),
            evaluation.remark
        ))
    }

    /// Render the items of a checklist.
    pub fn show(&mut self, args: ShowArgs) -> Result<()> {
        let input = self.load_input(&args.checklist)?;
        self.renderer.render(&Items(input.items).to_string())
    }

    /// List the templates in the templates directory.
    pub fn list_templates(&self) -> Result<()> {
        let names = self.cache.list().context("Failed to list templates")?;
        self.renderer.render(&Templates(names).to_string())
    }

    /// Print the JSON schema of checklist input files.
    pub fn schema(&self) -> Result<()> {
        let schema = schemars::schema_for!(ChecklistInput);
        let json = serde_json::to_string_pretty(&schema).context("Failed to serialize schema")?;
        println!("{json}");
        Ok(())
    }

    /// Load a checklist from a file path, falling back to a template name.
    fn load_input(&mut self, checklist: &str) -> Result<ChecklistInput> {
        let path = PathBuf::from(checklist);
        if path.is_file() {
            return load_checklist_file(&path)
                .with_context(|| format!("Failed to load checklist from {}", path.display()));
        }
        if checklist.ends_with(".json") {
            bail!("Checklist file {} not found", path.display());
        }

        self.cache
            .load(checklist)
            .cloned()
            .with_context(|| format!("Failed to load checklist template '{checklist}'"))
    }
}
