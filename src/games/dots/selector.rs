//! Move selection policy for the computer player.
//!
//! Priority order:
//!
//! 1. Take any edge that closes a box (first in row-major order).
//! 2. Otherwise rank undrawn edges by exposure, the most drawn sides of any
//!    box they border. At exposure 0 or 1 pick uniformly among the least
//!    exposed edges.
//! 3. At exposure 2 or more every move hands the opponent something. Try
//!    each least exposed edge on the shadow layer, let the opponent greedily
//!    chain-capture in response, and keep the edge that gives away the
//!    fewest boxes. Ties go to the first edge in scan order.
//!
//! One ply only. This is not a game-tree search.

use super::adjacency::{boxes_closed_by, exposure};
use super::error::GameError;
use super::grid::Grid;
use super::shadow::ShadowScope;
use super::types::Coord;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument, trace};

/// Exposure at or below which a move leaves no three-sided box behind.
const SAFE_EXPOSURE: usize = 1;

/// An undrawn edge and its exposure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    edge: Coord,
    exposure: usize,
}

/// Chooses edges for the automated player.
#[derive(Debug, Clone)]
pub struct MoveSelector<R = StdRng> {
    rng: R,
}

impl MoveSelector<StdRng> {
    /// Selector seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Selector with reproducible tie-breaking.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for MoveSelector<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> MoveSelector<R> {
    /// Selector driven by a caller-supplied RNG.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Picks the next edge to draw.
    ///
    /// Only reads `drawn`; the shadow layer is used for simulation and is
    /// clear again when this returns. Returns `Ok(None)` when no undrawn edge
    /// is left.
    #[instrument(skip(self, grid))]
    pub fn choose_move(&mut self, grid: &mut Grid) -> Result<Option<Coord>, GameError> {
        grid.clear_all_shadows();

        let mut candidates = Vec::new();
        for edge in grid.undrawn_edges() {
            if boxes_closed_by(grid, edge)? > 0 {
                debug!(edge = %edge, "Taking free box");
                return Ok(Some(edge));
            }
            candidates.push(Candidate {
                edge,
                exposure: exposure(grid, edge)?,
            });
        }

        let Some(least) = candidates.iter().map(|c| c.exposure).min() else {
            debug!("No undrawn edges left");
            return Ok(None);
        };
        let pool: Vec<Coord> = candidates
            .iter()
            .filter(|c| c.exposure == least)
            .map(|c| c.edge)
            .collect();
        trace!(least, pool = pool.len(), "Least exposed edges");

        if least <= SAFE_EXPOSURE {
            let edge = pool.choose(&mut self.rng).copied();
            debug!(edge = ?edge, exposure = least, "Safe move");
            return Ok(edge);
        }

        let edge = forced_move(grid, &pool)?;
        debug!(edge = ?edge, exposure = least, "Forced move");
        Ok(edge)
    }
}

/// Among `pool`, the edge that gives the opponent the fewest boxes.
fn forced_move(grid: &mut Grid, pool: &[Coord]) -> Result<Option<Coord>, GameError> {
    let mut best: Option<(Coord, usize)> = None;
    for &edge in pool {
        let given = simulate_reply(grid, edge)?;
        trace!(edge = %edge, given, "Simulated reply");
        if best.is_none_or(|(_, fewest)| given < fewest) {
            best = Some((edge, given));
        }
    }
    Ok(best.map(|(edge, _)| edge))
}

/// Draws `edge` on the shadow layer, then lets the opponent take every box
/// that becomes free, one capturing edge at a time. Returns the boxes taken.
pub fn simulate_reply(grid: &mut Grid, edge: Coord) -> Result<usize, GameError> {
    let mut scope = ShadowScope::open(grid);
    scope.draw(edge)?;

    let mut taken = 0;
    while let Some((reply, closed)) = next_capture(scope.grid())? {
        scope.draw(reply)?;
        taken += closed;
    }
    Ok(taken)
}

/// First edge, in scan order, free on both layers that closes a box.
fn next_capture(grid: &Grid) -> Result<Option<(Coord, usize)>, GameError> {
    for edge in grid.undrawn_edges() {
        if grid.is_shadowed(edge)? {
            continue;
        }
        let closed = boxes_closed_by(grid, edge)?;
        if closed > 0 {
            return Ok(Some((edge, closed)));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw_all(grid: &mut Grid, edges: &[(usize, usize)]) {
        for &edge in edges {
            grid.mark_drawn(edge.into()).unwrap();
        }
    }

    #[test]
    fn test_takes_free_box() {
        let mut grid = Grid::new(4, 4).unwrap();
        draw_all(&mut grid, &[(0, 3), (1, 2), (1, 4)]);
        let mut selector = MoveSelector::seeded(7);
        assert_eq!(
            selector.choose_move(&mut grid).unwrap(),
            Some(Coord::new(2, 3))
        );
    }

    #[test]
    fn test_first_capture_in_scan_order_wins() {
        let mut grid = Grid::new(4, 4).unwrap();
        // Bottom-right box missing its bottom, top-left box missing its top.
        draw_all(&mut grid, &[(2, 3), (3, 2), (3, 4), (2, 1), (1, 0), (1, 2)]);
        let mut selector = MoveSelector::seeded(1);
        assert_eq!(
            selector.choose_move(&mut grid).unwrap(),
            Some(Coord::new(0, 1))
        );
    }

    #[test]
    fn test_full_board_returns_none() {
        let mut grid = Grid::new(2, 2).unwrap();
        draw_all(&mut grid, &[(0, 1), (1, 0), (1, 2), (2, 1)]);
        let mut selector = MoveSelector::seeded(3);
        assert_eq!(selector.choose_move(&mut grid).unwrap(), None);
    }

    #[test]
    fn test_simulation_counts_chain() {
        // 1x3 corridor with only the outer boundary ends drawn.
        let mut grid = Grid::new(2, 6).unwrap();
        draw_all(&mut grid, &[(0, 1), (0, 3), (0, 5), (2, 1), (2, 3), (2, 5)]);
        // Closing the left end gives away the whole corridor.
        assert_eq!(simulate_reply(&mut grid, Coord::new(1, 0)).unwrap(), 3);
        assert!(grid.shadow_is_clear());
        assert!(!grid.is_drawn(Coord::new(1, 0)).unwrap());
    }

    #[test]
    fn test_forced_move_prefers_smaller_gift() {
        // 2x2 boxes. The top-left box is a stub walled off from the others;
        // the remaining three boxes form one chain. Every box has two sides.
        let mut grid = Grid::new(4, 4).unwrap();
        draw_all(&mut grid, &[(1, 2), (2, 1), (0, 3), (3, 0), (4, 3), (3, 4)]);
        assert_eq!(simulate_reply(&mut grid, Coord::new(0, 1)).unwrap(), 1);
        assert_eq!(simulate_reply(&mut grid, Coord::new(1, 4)).unwrap(), 3);
        assert_eq!(simulate_reply(&mut grid, Coord::new(3, 2)).unwrap(), 3);

        let mut selector = MoveSelector::seeded(11);
        let edge = selector.choose_move(&mut grid).unwrap().unwrap();
        // Both stub walls give away one box; the first in scan order wins.
        assert_eq!(edge, Coord::new(0, 1));
        assert!(grid.shadow_is_clear());
    }

    #[test]
    fn test_safe_moves_only_from_least_exposed() {
        let mut grid = Grid::new(4, 4).unwrap();
        // Top-left box has two sides drawn; edges around it are exposed.
        draw_all(&mut grid, &[(0, 1), (1, 0)]);
        let exposed = [Coord::new(1, 2), Coord::new(2, 1)];
        let mut selector = MoveSelector::seeded(99);
        for _ in 0..200 {
            let edge = selector.choose_move(&mut grid).unwrap().unwrap();
            assert!(!exposed.contains(&edge), "picked exposed edge {edge}");
            assert_eq!(exposure(&grid, edge).unwrap(), 0);
        }
    }
}
