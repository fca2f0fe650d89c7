//! Contestant trait and implementations.

mod computer;
mod human;

pub use computer::ComputerContestant;
pub use human::HumanContestant;

use crate::games::dots::{Coord, GameSession};
use anyhow::Result;

/// A contestant's answer when asked for a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// Draw this edge.
    Edge(Coord),
    /// The pick was rejected; ask again.
    Retry(String),
    /// Stop the game.
    Quit,
}

/// Anything that can take a turn.
pub trait Contestant {
    /// Asks for the next move.
    ///
    /// The session is lent mutably so a computer contestant can run its
    /// shadow simulations; contestants never commit moves themselves.
    fn choose(&mut self, session: &mut GameSession) -> Result<Choice>;

    /// Returns the contestant's display name.
    fn name(&self) -> &str;
}
