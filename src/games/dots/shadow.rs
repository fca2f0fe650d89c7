//! Scoped access to the grid's shadow layer.

use super::error::GameError;
use super::grid::Grid;
use super::types::Coord;
use tracing::trace;

/// Exclusive handle on a grid for hypothetical moves.
///
/// The shadow layer is cleared when the scope is opened and again when it
/// is dropped, on every exit path. Simulations never touch `drawn`.
#[derive(Debug)]
pub struct ShadowScope<'g> {
    grid: &'g mut Grid,
}

impl<'g> ShadowScope<'g> {
    /// Opens a scope over `grid`, starting from a clear shadow layer.
    pub fn open(grid: &'g mut Grid) -> Self {
        grid.clear_all_shadows();
        Self { grid }
    }

    /// Marks a hypothetical draw.
    pub fn draw(&mut self, coord: Coord) -> Result<(), GameError> {
        self.grid.set_shadow(coord)
    }

    /// Read-only view of the grid, shadow layer included.
    pub fn grid(&self) -> &Grid {
        self.grid
    }
}

impl Drop for ShadowScope<'_> {
    fn drop(&mut self) {
        trace!("Clearing shadow layer");
        self.grid.clear_all_shadows();
    }
}
