//! Shadow invariant: simulation marks never outlive a simulation.

use super::super::{GameSession, Grid};
use super::Invariant;

/// Invariant: the shadow layer is clear between simulations.
pub struct ShadowClearInvariant;

impl Invariant<Grid> for ShadowClearInvariant {
    fn holds(grid: &Grid) -> bool {
        grid.shadow_is_clear()
    }

    fn description() -> &'static str {
        "Shadow layer is clear outside simulation"
    }
}

impl Invariant<GameSession> for ShadowClearInvariant {
    fn holds(session: &GameSession) -> bool {
        <Self as Invariant<Grid>>::holds(session.grid())
    }

    fn description() -> &'static str {
        <Self as Invariant<Grid>>::description()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::dots::Coord;

    #[test]
    fn test_leftover_shadow_violates() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert!(<ShadowClearInvariant as Invariant<Grid>>::holds(&grid));
        grid.set_shadow(Coord::new(0, 1)).unwrap();
        assert!(!<ShadowClearInvariant as Invariant<Grid>>::holds(&grid));
    }
}
