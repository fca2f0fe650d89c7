//! Edge-to-box adjacency.
//!
//! For an edge, a [`NeighborSet`] describes one box the edge borders: the
//! other three sides of that box, observed on both the `drawn` and the
//! `shadow` layer. Boundary edges border one box, interior edges two.
//!
//! | position                   | sides consulted                          |
//! |----------------------------|------------------------------------------|
//! | top row horizontal         | (r+2,c) (r+1,c-1) (r+1,c+1)              |
//! | bottom row horizontal      | (r-2,c) (r-1,c-1) (r-1,c+1)              |
//! | middle row horizontal      | both of the above                        |
//! | left column vertical       | (r,c+2) (r+1,c+1) (r-1,c+1)              |
//! | right column vertical      | (r,c-2) (r+1,c-1) (r-1,c-1)              |
//! | middle column vertical     | both of the above                        |

use super::error::GameError;
use super::grid::Grid;
use super::types::{CellKind, Coord};
use tracing::instrument;

/// The other three sides of one box adjacent to an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborSet {
    /// The box these sides bound.
    pub box_cell: Coord,
    /// The three other sides of the box.
    pub sides: [Coord; 3],
    /// `drawn` layer observation per side.
    pub drawn: [bool; 3],
    /// `shadow` layer observation per side.
    pub shadow: [bool; 3],
}

impl NeighborSet {
    fn observe(grid: &Grid, box_cell: Coord, sides: [Coord; 3]) -> Result<Self, GameError> {
        let mut drawn = [false; 3];
        let mut shadow = [false; 3];
        for (i, side) in sides.iter().enumerate() {
            drawn[i] = grid.is_drawn(*side)?;
            shadow[i] = grid.is_shadowed(*side)?;
        }
        Ok(Self {
            box_cell,
            sides,
            drawn,
            shadow,
        })
    }

    /// Sides already committed.
    pub fn drawn_count(&self) -> usize {
        self.drawn.iter().filter(|&&d| d).count()
    }

    /// Sides drawn on either layer.
    pub fn effective_count(&self) -> usize {
        self.drawn
            .iter()
            .zip(self.shadow.iter())
            .filter(|(d, s)| **d || **s)
            .count()
    }

    /// Drawing the edge would close this box.
    pub fn completes(&self) -> bool {
        self.effective_count() == 3
    }
}

fn below(grid: &Grid, Coord { row, col }: Coord) -> Result<NeighborSet, GameError> {
    NeighborSet::observe(
        grid,
        Coord::new(row + 1, col),
        [
            Coord::new(row + 2, col),
            Coord::new(row + 1, col - 1),
            Coord::new(row + 1, col + 1),
        ],
    )
}

fn above(grid: &Grid, Coord { row, col }: Coord) -> Result<NeighborSet, GameError> {
    NeighborSet::observe(
        grid,
        Coord::new(row - 1, col),
        [
            Coord::new(row - 2, col),
            Coord::new(row - 1, col - 1),
            Coord::new(row - 1, col + 1),
        ],
    )
}

fn right_of(grid: &Grid, Coord { row, col }: Coord) -> Result<NeighborSet, GameError> {
    NeighborSet::observe(
        grid,
        Coord::new(row, col + 1),
        [
            Coord::new(row, col + 2),
            Coord::new(row + 1, col + 1),
            Coord::new(row - 1, col + 1),
        ],
    )
}

fn left_of(grid: &Grid, Coord { row, col }: Coord) -> Result<NeighborSet, GameError> {
    NeighborSet::observe(
        grid,
        Coord::new(row, col - 1),
        [
            Coord::new(row, col - 2),
            Coord::new(row + 1, col - 1),
            Coord::new(row - 1, col - 1),
        ],
    )
}

/// Neighbor sets for the cell at `coord`.
///
/// One set for a boundary edge, two for an interior edge, none for dots
/// and boxes.
///
/// # Errors
///
/// Returns [`GameError::OutOfBounds`] if `coord` is outside the grid.
pub fn neighbor_sets(grid: &Grid, coord: Coord) -> Result<Vec<NeighborSet>, GameError> {
    // Bounds first: the offset helpers assume a valid edge.
    grid.is_drawn(coord)?;

    let sets = match grid.kind_of(coord) {
        CellKind::HEdge if coord.row == 0 => vec![below(grid, coord)?],
        CellKind::HEdge if coord.row == grid.rows() => vec![above(grid, coord)?],
        CellKind::HEdge => vec![above(grid, coord)?, below(grid, coord)?],
        CellKind::VEdge if coord.col == 0 => vec![right_of(grid, coord)?],
        CellKind::VEdge if coord.col == grid.cols() => vec![left_of(grid, coord)?],
        CellKind::VEdge => vec![left_of(grid, coord)?, right_of(grid, coord)?],
        CellKind::Dot | CellKind::Box => Vec::new(),
    };
    Ok(sets)
}

/// How many boxes drawing `coord` would close, counting shadow marks.
#[instrument(level = "trace", skip(grid))]
pub fn boxes_closed_by(grid: &Grid, coord: Coord) -> Result<usize, GameError> {
    Ok(neighbor_sets(grid, coord)?
        .iter()
        .filter(|set| set.completes())
        .count())
}

/// Worst exposure of an edge: the most drawn sides among its neighbor sets.
///
/// 0 or 1 means drawing it leaves no three-sided box behind.
pub fn exposure(grid: &Grid, coord: Coord) -> Result<usize, GameError> {
    Ok(neighbor_sets(grid, coord)?
        .iter()
        .map(NeighborSet::drawn_count)
        .max()
        .unwrap_or(0))
}
