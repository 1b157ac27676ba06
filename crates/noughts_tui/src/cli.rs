//! Command-line interface for noughts.

use clap::Parser;
use noughts::PlayerNames;
use std::path::PathBuf;

/// Noughts - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Name for the X player (skips the name screen together with --player-o)
    #[arg(long)]
    pub player_x: Option<String>,

    /// Name for the O player (skips the name screen together with --player-x)
    #[arg(long)]
    pub player_o: Option<String>,

    /// Hide the win/loss/draw records
    #[arg(long)]
    pub no_stats: bool,

    /// Hide the elapsed-time display
    #[arg(long)]
    pub no_timer: bool,

    /// Settings file (ignored if missing)
    #[arg(long, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Log file; the terminal is owned by the UI
    #[arg(long, default_value = "noughts.log")]
    pub log_file: PathBuf,
}

impl Cli {
    /// Names given on the command line, if both seats were named.
    pub fn preset_names(&self) -> Option<PlayerNames> {
        match (&self.player_x, &self.player_o) {
            (Some(x), Some(o)) => Some(PlayerNames::new(x, o)),
            _ => None,
        }
    }
}
