//! Console tic-tac-toe against the exhaustive search engine.

use anyhow::Result;
use clap::Parser;
use gridtoe_console::{Cli, GameSession, View};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    info!("Starting gridtoe console session");
    let view = Rc::new(RefCell::new(View::stdio()));
    GameSession::from_prompts(view, cli.hotseat)?.run()
}

/// Logs go to stderr so they never interleave with the rendered board.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .init();
}
