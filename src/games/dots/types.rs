//! Core domain types for dots and boxes.

use serde::{Deserialize, Serialize};

/// A participant in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// The person at the keyboard.
    Human,
    /// The automated opponent.
    Computer,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Single-letter mark used when rendering owned boxes.
    pub fn mark(self) -> char {
        match self {
            Player::Human => 'H',
            Player::Computer => 'C',
        }
    }
}

/// Whose turn it is.
///
/// `HumanRetry` is a UI-facing signal: the human made an invalid pick and
/// has to try again. The turn still belongs to the human.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// Human to move.
    Human,
    /// Computer to move.
    Computer,
    /// Human to move again after a rejected pick.
    HumanRetry,
}

impl Turn {
    /// The player who owns this turn.
    pub fn owner(self) -> Player {
        match self {
            Turn::Human | Turn::HumanRetry => Player::Human,
            Turn::Computer => Player::Computer,
        }
    }
}

impl From<Player> for Turn {
    fn from(player: Player) -> Self {
        match player {
            Player::Human => Turn::Human,
            Player::Computer => Turn::Computer,
        }
    }
}

/// A cell position in the (rows+1) x (cols+1) grid matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, 0-based.
    pub row: usize,
    /// Column index, 0-based.
    pub col: usize,
}

impl Coord {
    /// Creates a new coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Classifies the cell at this coordinate by parity.
    pub fn kind(self) -> CellKind {
        CellKind::of(self.row, self.col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// What a grid cell is. Never stored; always derived from coordinate parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    /// Even row, even column.
    Dot,
    /// Even row, odd column.
    HEdge,
    /// Odd row, even column.
    VEdge,
    /// Odd row, odd column.
    Box,
}

impl CellKind {
    /// Classifies `(row, col)`.
    pub const fn of(row: usize, col: usize) -> Self {
        match (row % 2 == 0, col % 2 == 0) {
            (true, true) => CellKind::Dot,
            (true, false) => CellKind::HEdge,
            (false, true) => CellKind::VEdge,
            (false, false) => CellKind::Box,
        }
    }

    /// True for horizontal and vertical edges.
    pub const fn is_edge(self) -> bool {
        matches!(self, CellKind::HEdge | CellKind::VEdge)
    }
}

/// Grid dimensions in cell units: twice the box count along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    /// Matrix row span (last row index).
    pub rows: usize,
    /// Matrix column span (last column index).
    pub cols: usize,
}

impl Dimensions {
    /// Dimensions for a board `box_rows` boxes tall and `box_cols` boxes wide.
    ///
    /// `None` when the matrix would not fit in memory addressing.
    pub fn from_boxes(box_rows: usize, box_cols: usize) -> Option<Self> {
        let dims = Self {
            rows: box_rows.checked_mul(2)?,
            cols: box_cols.checked_mul(2)?,
        };
        dims.cell_count().map(|_| dims)
    }

    /// Number of boxes on the board.
    pub const fn box_count(self) -> usize {
        (self.rows / 2) * (self.cols / 2)
    }

    /// Number of cells in the matrix, or `None` on overflow.
    pub fn cell_count(self) -> Option<usize> {
        self.rows
            .checked_add(1)?
            .checked_mul(self.cols.checked_add(1)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_follows_parity() {
        assert_eq!(CellKind::of(0, 0), CellKind::Dot);
        assert_eq!(CellKind::of(0, 1), CellKind::HEdge);
        assert_eq!(CellKind::of(1, 0), CellKind::VEdge);
        assert_eq!(CellKind::of(1, 1), CellKind::Box);
        assert_eq!(CellKind::of(4, 6), CellKind::Dot);
        assert_eq!(CellKind::of(3, 5), CellKind::Box);
    }

    #[test]
    fn test_retry_is_owned_by_human() {
        assert_eq!(Turn::HumanRetry.owner(), Player::Human);
        assert_eq!(Turn::from(Player::Computer).owner(), Player::Computer);
    }

    #[test]
    fn test_opponent_toggles() {
        assert_eq!(Player::Human.opponent(), Player::Computer);
        assert_eq!(Player::Computer.opponent().opponent(), Player::Computer);
    }

    #[test]
    fn test_dimensions_from_boxes() {
        let dims = Dimensions::from_boxes(2, 3).unwrap();
        assert_eq!(dims.rows, 4);
        assert_eq!(dims.cols, 6);
        assert_eq!(dims.box_count(), 6);
        assert_eq!(dims.cell_count(), Some(35));
    }

    #[test]
    fn test_dimensions_overflow_is_none() {
        assert_eq!(Dimensions::from_boxes(usize::MAX / 2 + 1, 1), None);
        assert!(Dimensions::from_boxes(1 << 20, 1 << 20).is_some());
        assert_eq!(Dimensions::from_boxes(usize::MAX / 4, 2), None);
        let huge = Dimensions {
            rows: usize::MAX - 1,
            cols: 2,
        };
        assert_eq!(huge.cell_count(), None);
    }
}
