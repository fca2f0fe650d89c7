//! Per-player box counts.

use super::types::Player;
use serde::{Deserialize, Serialize};

/// Boxes captured by each player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    human: usize,
    computer: usize,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Boxes captured by `player`.
    pub fn score_of(&self, player: Player) -> usize {
        match player {
            Player::Human => self.human,
            Player::Computer => self.computer,
        }
    }

    /// Credits one box to `player`.
    pub(crate) fn credit(&mut self, player: Player) {
        match player {
            Player::Human => self.human += 1,
            Player::Computer => self.computer += 1,
        }
    }

    /// Boxes captured by both players together.
    pub fn total(&self) -> usize {
        self.human + self.computer
    }

    /// The player ahead, or `None` on a tie.
    pub fn leader(&self) -> Option<Player> {
        match self.human.cmp(&self.computer) {
            std::cmp::Ordering::Greater => Some(Player::Human),
            std::cmp::Ordering::Less => Some(Player::Computer),
            std::cmp::Ordering::Equal => None,
        }
    }
}
