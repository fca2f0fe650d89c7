//! Dots and boxes: grid model, capture rules and the computer's policy.

pub mod adjacency;
pub mod capture;
mod error;
mod grid;
pub mod invariants;
mod render;
mod score;
pub mod selector;
mod session;
mod shadow;
mod types;

pub use adjacency::{NeighborSet, boxes_closed_by, exposure, neighbor_sets};
pub use capture::{apply_move, is_enclosed};
pub use error::GameError;
pub use grid::Grid;
pub use render::{DrawEvent, NullSink, RenderSink, Visual};
pub use score::Scoreboard;
pub use selector::{MoveSelector, simulate_reply};
pub use session::{GameSession, Move, MoveOutcome, Outcome};
pub use shadow::ShadowScope;
pub use types::{CellKind, Coord, Dimensions, Player, Turn};
