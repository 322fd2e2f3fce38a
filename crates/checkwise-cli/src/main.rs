//! Checkwise CLI Application
//!
//! Command-line front end for the Checkwise checklist wizard.

mod args;
mod cli;
mod renderer;
mod session;

use anyhow::{Context, Result};
use args::{Args, Commands};
use checkwise_core::TemplateCacheBuilder;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        templates_dir,
        no_color,
        command,
    } = Args::parse();

    let cache = TemplateCacheBuilder::new()
        .with_root(templates_dir)
        .build()
        .context("Failed to initialize template directory")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Checkwise started");

    let mut cli = Cli::new(cache, renderer);
    match command {
        Some(Run(args)) => cli.run(args).await,
        Some(Evaluate(args)) => cli.evaluate(args),
        Some(Show(args)) => cli.show(args),
        Some(Schema) => cli.schema(),
        Some(Templates) | None => cli.list_templates(),
    }
}
