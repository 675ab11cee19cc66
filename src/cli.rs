//! Command-line flags.

use std::io::IsTerminal;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use crate::app::AppConfig;
use crate::types::Level;

#[derive(Debug, Parser)]
#[command(
    name = "tetris-stack",
    version,
    about = "Simulate a Tetris next-piece queue and hold stack"
)]
pub struct Cli {
    /// Menu variant: novice, adventurer or master
    #[arg(long, default_value = "master", value_parser = parse_level)]
    pub level: Level,

    /// Seed for piece kinds (defaults to the current time)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Also print the state as one JSON line per turn
    #[arg(long)]
    pub json: bool,
}

fn parse_level(s: &str) -> Result<Level, String> {
    Level::from_str(s).ok_or_else(|| {
        format!(
            "unknown level {:?} (expected novice, adventurer or master)",
            s
        )
    })
}

impl Cli {
    /// Resolve defaults that depend on the environment (clock, terminal).
    pub fn into_config(self) -> AppConfig {
        AppConfig {
            level: self.level,
            seed: self.seed.unwrap_or_else(clock_seed),
            color: !self.no_color && std::io::stdout().is_terminal(),
            json: self.json,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32 ^ d.subsec_nanos())
        .unwrap_or(1)
}
