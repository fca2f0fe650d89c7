//! Enclosure invariant: a box is drawn exactly when its four sides are.

use super::super::capture::is_enclosed;
use super::super::{GameSession, Grid};
use super::Invariant;

/// Invariant: a box is drawn iff all four of its sides are drawn.
pub struct EnclosedBoxesInvariant;

impl Invariant<Grid> for EnclosedBoxesInvariant {
    fn holds(grid: &Grid) -> bool {
        grid.boxes().all(|b| match (grid.is_drawn(b), is_enclosed(grid, b)) {
            (Ok(drawn), Ok(enclosed)) => drawn == enclosed,
            _ => false,
        })
    }

    fn description() -> &'static str {
        "A box is drawn iff its four sides are drawn"
    }
}

impl Invariant<GameSession> for EnclosedBoxesInvariant {
    fn holds(session: &GameSession) -> bool {
        <Self as Invariant<Grid>>::holds(session.grid())
    }

    fn description() -> &'static str {
        <Self as Invariant<Grid>>::description()
    }
}
