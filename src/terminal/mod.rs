//! Line-oriented terminal front end.
//!
//! The core never prints. This module renders the board as text, turns
//! typed lines into edges and runs the turn loop between two contestants.

mod board;
mod input;
mod orchestrator;
mod players;

pub use board::{TextBoard, TraceSink};
pub use input::{Pick, Rejection, parse_pick, validate_edge};
pub use orchestrator::{GameEvent, Orchestrator};
pub use players::{Choice, ComputerContestant, Contestant, HumanContestant};
