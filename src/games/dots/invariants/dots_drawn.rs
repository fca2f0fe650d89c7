//! Dots invariant: every dot is drawn from construction onward.

use super::super::{CellKind, GameSession, Grid};
use super::Invariant;

/// Invariant: every dot cell reads as drawn.
pub struct DotsDrawnInvariant;

impl Invariant<Grid> for DotsDrawnInvariant {
    fn holds(grid: &Grid) -> bool {
        grid.cells()
            .filter(|c| c.kind() == CellKind::Dot)
            .all(|c| grid.is_drawn(c).unwrap_or(false))
    }

    fn description() -> &'static str {
        "Every dot is drawn"
    }
}

impl Invariant<GameSession> for DotsDrawnInvariant {
    fn holds(session: &GameSession) -> bool {
        <Self as Invariant<Grid>>::holds(session.grid())
    }

    fn description() -> &'static str {
        <Self as Invariant<Grid>>::description()
    }
}
