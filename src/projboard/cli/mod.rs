//! # CLI Layer
//!
//! One client of the projboard library: an interactive session that reads one
//! command per line from stdin and draws the board to stdout.
//!
//! This layer is the only place that:
//! - Touches stdin, stdout and stderr
//! - Parses arguments (the process flags, and each session line)
//! - Installs the tracing subscriber
//! - Chooses colors and formats output
//!
//! ## Structure
//!
//! - `setup`: clap definitions for the process flags and the session commands
//! - `session`: the command loop over a mounted [`projboard::app::Board`]
//! - `render`: layout, plus stencil rendering of the board, lists and messages
//! - `styles` / `templates`: the palette and the template sources

mod render;
mod session;
mod setup;
mod styles;
mod templates;

use clap::Parser;
use projboard::app::Board;
use projboard::config::BoardConfig;
use projboard::error::Result;
use session::Session;
use setup::Cli;
use std::io::{self, IsTerminal};
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => BoardConfig::load(path)?,
        None => BoardConfig::default(),
    };
    let use_color = !cli.no_color && stencil::stdout_supports_color();
    debug!(config = ?cli.config, use_color, "starting session");

    let board = Board::mount(config)?;
    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    let mut session = Session::new(board, io::stdout().lock(), use_color).with_prompt(prompt);
    session.run(stdin.lock())
}

/// Logs go to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .try_init();
}
