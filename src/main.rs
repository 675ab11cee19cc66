//! Tetris Stack console runner (default binary).
//!
//! Reads one menu code per line from stdin and prints the queue and hold stack after every
//! turn. Diagnostics go to stderr via `env_logger` (`RUST_LOG=debug` to see transitions).

use std::io;

use anyhow::Result;
use clap::Parser;

use tetris_stack::cli::Cli;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Cli::parse().into_config();
    let stdin = io::stdin();
    let stdout = io::stdout();
    tetris_stack::run(&config, stdin.lock(), stdout.lock())?;
    Ok(())
}
