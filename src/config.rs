//! Game configuration loaded from TOML.

use crate::games::dots::{Dimensions, Player};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Largest board, in boxes, that still renders comfortably.
const MAX_COMFORTABLE_BOX_ROWS: usize = 12;
const MAX_COMFORTABLE_BOX_COLUMNS: usize = 25;

/// Settings for one game.
///
/// Board size is given in boxes; the grid matrix is twice that along each
/// axis. `line_length` is the spacing between dots and only matters to the
/// renderer.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Boxes per column.
    #[serde(default = "default_box_rows")]
    box_rows: usize,

    /// Boxes per row.
    #[serde(default = "default_box_columns")]
    box_columns: usize,

    /// Spacing between dots.
    #[serde(default = "default_line_length")]
    line_length: u32,

    /// Who draws the first edge.
    #[serde(default = "default_first_player")]
    first_player: Player,

    /// Seed for the computer's tie-breaking. Random when absent.
    #[serde(default)]
    #[setters(strip_option)]
    seed: Option<u64>,

    /// Pause between turns, in milliseconds.
    #[serde(default = "default_pace_ms")]
    pace_ms: u64,
}

fn default_box_rows() -> usize {
    3
}

fn default_box_columns() -> usize {
    3
}

fn default_line_length() -> u32 {
    50
}

fn default_first_player() -> Player {
    Player::Human
}

fn default_pace_ms() -> u64 {
    200
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            box_rows: default_box_rows(),
            box_columns: default_box_columns(),
            line_length: default_line_length(),
            first_player: default_first_player(),
            seed: None,
            pace_ms: default_pace_ms(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    ///
    /// Missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            box_rows = config.box_rows,
            box_columns = config.box_columns,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Checks the board size.
    ///
    /// Zero-sized boards and boards whose grid cannot be sized are rejected.
    /// Boards past 12x25 boxes are allowed but logged, since they won't fit
    /// a typical terminal.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.box_rows == 0 || self.box_columns == 0 {
            return Err(ConfigError::new(format!(
                "Board must have at least one box per side, got {}x{}",
                self.box_rows, self.box_columns
            )));
        }
        self.dimensions()?;
        let too_tall = self.box_rows > MAX_COMFORTABLE_BOX_ROWS;
        let too_wide = self.box_columns > MAX_COMFORTABLE_BOX_COLUMNS;
        if too_tall || too_wide {
            warn!(
                box_rows = self.box_rows,
                box_columns = self.box_columns,
                "Board is too big to display comfortably"
            );
        }
        Ok(())
    }

    /// Grid matrix dimensions for this board.
    pub fn dimensions(&self) -> Result<Dimensions, ConfigError> {
        Dimensions::from_boxes(self.box_rows, self.box_columns).ok_or_else(|| {
            ConfigError::new(format!(
                "Board of {}x{} boxes is too large to build",
                self.box_rows, self.box_columns
            ))
        })
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
