//! Interactive console over a [`FigureStore`].
//!
//! One operation per menu round: add a figure, print the total area, print the total
//! perimeter, or exit. Input errors are reported and the menu comes back; only a broken
//! console ends the process with a failure.
//!
//! stdout carries the dialogue, logs go to stderr.

use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use figures_store::FigureStore;
use std::io;

mod console;
mod error;

pub use console::{
    parse_figure_kind, parse_property, Console, Operation, FIGURE_TYPE_PROMPT, MENU,
    PROPERTY_PROMPT,
};
pub use error::{CommandError, Result as CommandResult};

#[derive(Parser)]
#[command(name = "figures")]
#[command(about = "Collect circles and squares, report their total area and perimeter", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long)]
    quiet: bool,
}

pub fn main_entry() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let mut store = FigureStore::new();
    log::info!("figure console started");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = Console::new(&mut store, stdin.lock(), stdout.lock()).run();

    match outcome {
        Err(CommandError::Io(err)) if err.kind() == io::ErrorKind::BrokenPipe => {
            log::debug!("stdout closed: {err}");
        }
        other => other.context("figure console failed")?,
    }

    log::info!("figure console finished with {} figure(s)", store.len());
    Ok(())
}
