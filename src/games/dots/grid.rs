//! Grid model: cell classification plus the `drawn` and `shadow` layers.
//!
//! The grid is an (R+1) x (C+1) matrix. Dots sit on even/even indices,
//! horizontal edges on even/odd, vertical edges on odd/even and boxes on
//! odd/odd. Kinds are never stored; [`Grid::kind_of`] derives them.

use super::error::GameError;
use super::types::{CellKind, Coord, Dimensions, Player};
use tracing::{instrument, trace};

/// Board state for one game.
///
/// Shape is fixed at construction. The `shadow` layer is a scratch overlay
/// for move simulation and is never authoritative; see
/// [`ShadowScope`](super::shadow::ShadowScope).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dims: Dimensions,
    drawn: Vec<bool>,
    shadow: Vec<bool>,
    owners: Vec<Option<Player>>,
}

impl Grid {
    /// Creates a grid spanning `rows` x `cols` cell units.
    ///
    /// Both must be even and at least 2. Every dot starts drawn.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidDimensions`] otherwise, or when the cell
    /// count overflows `usize`.
    #[instrument]
    pub fn new(rows: usize, cols: usize) -> Result<Self, GameError> {
        if rows < 2 || cols < 2 || rows % 2 != 0 || cols % 2 != 0 {
            return Err(GameError::InvalidDimensions { rows, cols });
        }

        let dims = Dimensions { rows, cols };
        let Some(cells) = dims.cell_count() else {
            return Err(GameError::InvalidDimensions { rows, cols });
        };
        let mut drawn = vec![false; cells];
        for row in (0..=rows).step_by(2) {
            for col in (0..=cols).step_by(2) {
                drawn[row * (cols + 1) + col] = true;
            }
        }

        trace!(cells, boxes = dims.box_count(), "Grid built");
        Ok(Self {
            dims,
            drawn,
            shadow: vec![false; cells],
            owners: vec![None; cells],
        })
    }

    /// Returns the grid dimensions.
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Last row index.
    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    /// Last column index.
    pub fn cols(&self) -> usize {
        self.dims.cols
    }

    /// True if `coord` lies inside the matrix.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row <= self.dims.rows && coord.col <= self.dims.cols
    }

    fn index(&self, coord: Coord) -> Result<usize, GameError> {
        if self.contains(coord) {
            Ok(coord.row * (self.dims.cols + 1) + coord.col)
        } else {
            Err(GameError::OutOfBounds {
                row: coord.row,
                col: coord.col,
                rows: self.dims.rows,
                cols: self.dims.cols,
            })
        }
    }

    /// Classifies the cell at `coord`. Pure function of parity.
    pub fn kind_of(&self, coord: Coord) -> CellKind {
        coord.kind()
    }

    /// Whether the cell has been committed.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] for coordinates outside the matrix.
    pub fn is_drawn(&self, coord: Coord) -> Result<bool, GameError> {
        Ok(self.drawn[self.index(coord)?])
    }

    /// Whether the cell is marked on the shadow layer.
    pub fn is_shadowed(&self, coord: Coord) -> Result<bool, GameError> {
        Ok(self.shadow[self.index(coord)?])
    }

    /// `drawn OR shadow`: the state a simulation sees.
    pub fn is_effectively_drawn(&self, coord: Coord) -> Result<bool, GameError> {
        let idx = self.index(coord)?;
        Ok(self.drawn[idx] || self.shadow[idx])
    }

    /// Commits the cell. Idempotent.
    ///
    /// Returns `true` when the cell transitioned from undrawn to drawn, which
    /// is when renderers need to hear about it.
    pub fn mark_drawn(&mut self, coord: Coord) -> Result<bool, GameError> {
        let idx = self.index(coord)?;
        if self.drawn[idx] {
            return Ok(false);
        }
        self.drawn[idx] = true;
        Ok(true)
    }

    /// Fills a box and records its owner. No-op if the box is already filled.
    pub(crate) fn fill_box(&mut self, coord: Coord, player: Player) -> Result<bool, GameError> {
        let idx = self.index(coord)?;
        if self.drawn[idx] {
            return Ok(false);
        }
        self.drawn[idx] = true;
        self.owners[idx] = Some(player);
        Ok(true)
    }

    /// Who captured the box at `coord`, if anyone.
    pub fn owner_of(&self, coord: Coord) -> Result<Option<Player>, GameError> {
        Ok(self.owners[self.index(coord)?])
    }

    /// Marks the cell on the shadow layer.
    pub fn set_shadow(&mut self, coord: Coord) -> Result<(), GameError> {
        let idx = self.index(coord)?;
        self.shadow[idx] = true;
        Ok(())
    }

    /// Resets the whole shadow layer to false.
    pub fn clear_all_shadows(&mut self) {
        self.shadow.fill(false);
    }

    /// True when no cell is marked on the shadow layer.
    pub fn shadow_is_clear(&self) -> bool {
        !self.shadow.iter().any(|&s| s)
    }

    /// All coordinates in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + use<> {
        let Dimensions { rows, cols } = self.dims;
        (0..=rows).flat_map(move |row| (0..=cols).map(move |col| Coord::new(row, col)))
    }

    /// Edge coordinates in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = Coord> + use<> {
        self.cells().filter(|c| c.kind().is_edge())
    }

    /// Box coordinates in row-major order.
    pub fn boxes(&self) -> impl Iterator<Item = Coord> + use<> {
        self.cells().filter(|c| c.kind() == CellKind::Box)
    }

    /// Edges not yet committed, in row-major order.
    pub fn undrawn_edges(&self) -> impl Iterator<Item = Coord> + '_ {
        self.edges().filter(|&c| !self.drawn_unchecked(c))
    }

    /// True iff every box is drawn.
    #[instrument(skip(self))]
    pub fn is_complete(&self) -> bool {
        self.boxes().all(|c| self.drawn_unchecked(c))
    }

    /// Reads `drawn` for a coordinate produced by this grid's own iterators.
    fn drawn_unchecked(&self, coord: Coord) -> bool {
        self.drawn[coord.row * (self.dims.cols + 1) + coord.col]
    }

    /// The four sides of a box: top, bottom, left, right.
    ///
    /// `None` unless `coord` is a box inside the grid.
    pub fn box_sides(&self, coord: Coord) -> Option<[Coord; 4]> {
        if !self.contains(coord) || coord.kind() != CellKind::Box {
            return None;
        }
        // Box cells are odd/odd, so every neighbour is inside the matrix.
        Some([
            Coord::new(coord.row - 1, coord.col),
            Coord::new(coord.row + 1, coord.col),
            Coord::new(coord.row, coord.col - 1),
            Coord::new(coord.row, coord.col + 1),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_odd_and_tiny_dimensions() {
        assert!(matches!(Grid::new(3, 4), Err(GameError::InvalidDimensions { .. })));
        assert!(matches!(Grid::new(4, 5), Err(GameError::InvalidDimensions { .. })));
        assert!(matches!(Grid::new(0, 4), Err(GameError::InvalidDimensions { .. })));
        assert!(Grid::new(2, 2).is_ok());
    }

    #[test]
    fn test_dots_start_drawn_edges_do_not() {
        let grid = Grid::new(4, 6).unwrap();
        for cell in grid.cells() {
            let drawn = grid.is_drawn(cell).unwrap();
            assert_eq!(drawn, cell.kind() == CellKind::Dot, "cell {cell}");
        }
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = Grid::new(2, 2).unwrap();
        assert!(matches!(
            grid.is_drawn(Coord::new(3, 0)),
            Err(GameError::OutOfBounds { row: 3, col: 0, .. })
        ));
        assert!(grid.is_drawn(Coord::new(2, 2)).is_ok());
    }

    #[test]
    fn test_mark_drawn_reports_transition_once() {
        let mut grid = Grid::new(2, 2).unwrap();
        let edge = Coord::new(0, 1);
        assert!(grid.mark_drawn(edge).unwrap());
        assert!(!grid.mark_drawn(edge).unwrap());
        assert!(grid.is_drawn(edge).unwrap());
    }

    #[test]
    fn test_shadow_layer_is_separate() {
        let mut grid = Grid::new(2, 2).unwrap();
        let edge = Coord::new(1, 0);
        grid.set_shadow(edge).unwrap();
        assert!(!grid.is_drawn(edge).unwrap());
        assert!(grid.is_effectively_drawn(edge).unwrap());
        assert!(!grid.shadow_is_clear());
        grid.clear_all_shadows();
        assert!(grid.shadow_is_clear());
        assert!(!grid.is_effectively_drawn(edge).unwrap());
    }

    #[test]
    fn test_iterators_are_row_major() {
        let grid = Grid::new(2, 2).unwrap();
        let edges: Vec<_> = grid.edges().collect();
        assert_eq!(
            edges,
            vec![
                Coord::new(0, 1),
                Coord::new(1, 0),
                Coord::new(1, 2),
                Coord::new(2, 1)
            ]
        );
        assert_eq!(grid.boxes().collect::<Vec<_>>(), vec![Coord::new(1, 1)]);
    }

    #[test]
    fn test_box_sides() {
        let grid = Grid::new(4, 4).unwrap();
        let sides = grid.box_sides(Coord::new(3, 1)).unwrap();
        assert_eq!(
            sides,
            [
                Coord::new(2, 1),
                Coord::new(4, 1),
                Coord::new(3, 0),
                Coord::new(3, 2)
            ]
        );
        assert!(grid.box_sides(Coord::new(2, 1)).is_none());
        assert!(grid.box_sides(Coord::new(5, 1)).is_none());
    }
}
