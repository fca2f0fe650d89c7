//! Score ledger invariant: scores match box ownership.

use super::super::{GameSession, Player};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: each player's score equals the boxes they own, and every
/// drawn box has an owner.
pub struct ScoreLedgerInvariant;

impl Invariant<GameSession> for ScoreLedgerInvariant {
    fn holds(session: &GameSession) -> bool {
        let grid = session.grid();
        let mut owned = Vec::new();
        for b in grid.boxes() {
            match (grid.is_drawn(b), grid.owner_of(b)) {
                (Ok(true), Ok(Some(player))) => owned.push(player),
                (Ok(false), Ok(None)) => {}
                _ => return false,
            }
        }

        Player::iter().all(|p| owned.iter().filter(|&&o| o == p).count() == session.score_of(p))
    }

    fn description() -> &'static str {
        "Scores equal the boxes each player owns"
    }
}
