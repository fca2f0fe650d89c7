//! Command-line interface for strictly_boxes.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_boxes::{ConfigError, GameConfig, Player};
use tracing::debug;

/// Strictly Boxes - dots and boxes against the computer
#[derive(Parser, Debug)]
#[command(name = "strictly_boxes")]
#[command(about = "Dots and boxes in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the computer
    Play {
        /// Board settings
        #[command(flatten)]
        board: BoardArgs,

        /// Let the computer draw the first edge
        #[arg(long)]
        computer_first: bool,
    },

    /// Watch the computer play itself
    Demo {
        /// Board settings
        #[command(flatten)]
        board: BoardArgs,
    },
}

/// Board settings shared by every command.
///
/// Flags override values from the config file.
#[derive(Args, Debug, Clone)]
pub struct BoardArgs {
    /// Path to a TOML game config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Boxes per column
    #[arg(short, long)]
    pub rows: Option<usize>,

    /// Boxes per row
    #[arg(short = 'C', long)]
    pub columns: Option<usize>,

    /// Seed for the computer's tie-breaking
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause between moves in milliseconds
    #[arg(long)]
    pub pace_ms: Option<u64>,
}

impl BoardArgs {
    /// Loads the config file, if any, and applies flag overrides.
    pub fn resolve(&self, computer_first: bool) -> Result<GameConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };
        if let Some(rows) = self.rows {
            config = config.with_box_rows(rows);
        }
        if let Some(columns) = self.columns {
            config = config.with_box_columns(columns);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(pace_ms) = self.pace_ms {
            config = config.with_pace_ms(pace_ms);
        }
        if computer_first {
            config = config.with_first_player(Player::Computer);
        }
        config.validate()?;
        debug!(?config, "Resolved game config");
        Ok(config)
    }
}
