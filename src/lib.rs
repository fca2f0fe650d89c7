//! Strictly Boxes - dots and boxes with a capture-aware computer opponent
//!
//! The rule engine is a pure model: a grid of dots, edges and boxes with
//! a scratch "shadow" layer the computer uses to look one reply ahead.
//! Rendering and input live behind small seams so the core never touches
//! a terminal.
//!
//! # Architecture
//!
//! - **Grid**: cell kinds from coordinate parity, drawn and shadow layers
//! - **Capture**: committing an edge and claiming every box it closes
//! - **Selector**: capture first, then safe edges, then the smallest gift
//! - **Session**: turn state, scores and move history behind one entry point
//! - **Terminal**: text board, typed input and the turn loop
//!
//! # Example
//!
//! ```
//! use strictly_boxes::{Coord, GameSession, MoveSelector, Player};
//!
//! # fn example() -> Result<(), strictly_boxes::GameError> {
//! let mut session = GameSession::new(4, 4, Player::Human)?;
//! session.commit_move(Player::Human, Coord::new(0, 1))?;
//!
//! let mut selector = MoveSelector::seeded(42);
//! if let Some(edge) = session.suggest_move(&mut selector)? {
//!     session.commit_move(Player::Computer, edge)?;
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod terminal;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game model
pub use games::dots::{
    CellKind, Coord, Dimensions, DrawEvent, GameError, GameSession, Grid, Move, MoveOutcome,
    MoveSelector, NeighborSet, NullSink, Outcome, Player, RenderSink, Scoreboard, ShadowScope,
    Turn, Visual, apply_move, boxes_closed_by, exposure, is_enclosed, neighbor_sets,
    simulate_reply,
};

// Crate-level exports - Invariants
pub use games::dots::invariants::{
    BoxesAndDotsInvariants, DotsDrawnInvariant, EnclosedBoxesInvariant, Invariant, InvariantSet,
    InvariantViolation, ScoreLedgerInvariant, ShadowClearInvariant,
};

// Crate-level exports - Terminal front end
pub use terminal::{
    Choice, ComputerContestant, Contestant, GameEvent, HumanContestant, Orchestrator, Pick,
    Rejection, TextBoard, TraceSink, parse_pick, validate_edge,
};
