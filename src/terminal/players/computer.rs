//! Computer contestant backed by the move selector.

use super::{Choice, Contestant};
use crate::games::dots::{GameSession, MoveSelector};
use anyhow::Result;
use tracing::debug;

/// Automated player.
pub struct ComputerContestant {
    name: String,
    selector: MoveSelector,
}

impl ComputerContestant {
    /// Creates a computer contestant. `seed` fixes its tie-breaking.
    pub fn new(name: impl Into<String>, seed: Option<u64>) -> Self {
        let selector = match seed {
            Some(seed) => MoveSelector::seeded(seed),
            None => MoveSelector::new(),
        };
        Self {
            name: name.into(),
            selector,
        }
    }
}

impl Contestant for ComputerContestant {
    fn choose(&mut self, session: &mut GameSession) -> Result<Choice> {
        debug!(computer = %self.name, "Computer making move");
        match session.suggest_move(&mut self.selector)? {
            Some(edge) => {
                debug!(computer = %self.name, edge = %edge, "Computer chose edge");
                Ok(Choice::Edge(edge))
            }
            None => anyhow::bail!("No undrawn edges left"),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::dots::{Coord, Player};

    #[test]
    fn test_takes_last_edge() {
        let mut session = GameSession::replay(
            2,
            2,
            Player::Human,
            &[
                (Player::Human, Coord::new(0, 1)),
                (Player::Computer, Coord::new(1, 0)),
                (Player::Human, Coord::new(1, 2)),
            ],
        )
        .unwrap();
        let mut computer = ComputerContestant::new("Bot", Some(5));
        assert_eq!(
            computer.choose(&mut session).unwrap(),
            Choice::Edge(Coord::new(2, 1))
        );
    }

    #[test]
    fn test_full_board_is_an_error() {
        let mut session = GameSession::replay(
            2,
            2,
            Player::Human,
            &[
                (Player::Human, Coord::new(0, 1)),
                (Player::Computer, Coord::new(1, 0)),
                (Player::Human, Coord::new(1, 2)),
                (Player::Computer, Coord::new(2, 1)),
            ],
        )
        .unwrap();
        let mut computer = ComputerContestant::new("Bot", Some(5));
        assert!(computer.choose(&mut session).is_err());
    }
}
