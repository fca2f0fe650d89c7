//! Error types for the dots and boxes core.

use super::types::Player;
use derive_more::{Display, Error};

/// Errors raised by grid access and move commits.
///
/// Double-draws and clicks on non-edge cells are not errors; they are
/// absorbed as no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Coordinate outside the grid matrix.
    #[display("Cell ({}, {}) is outside the {}x{} grid", row, col, rows + 1, cols + 1)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Grid row span.
        rows: usize,
        /// Grid column span.
        cols: usize,
    },

    /// Rows or columns not even, or smaller than 2.
    #[display("Grid dimensions {}x{} must both be even and at least 2", rows, cols)]
    InvalidDimensions {
        /// Requested row span.
        rows: usize,
        /// Requested column span.
        cols: usize,
    },

    /// The move was submitted by the player who does not own the turn.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(#[error(not(source))] Player),

    /// Every box is already captured.
    #[display("Game is already over")]
    GameOver,

    /// A post-move invariant check failed.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}
