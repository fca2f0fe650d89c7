//! Render collaborator interface.
//!
//! The core holds no geometry. It reports every cell that flips from
//! undrawn to drawn, and the collaborator decides what that looks like.

use super::types::{Coord, Player};
use serde::{Deserialize, Serialize};

/// What was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visual {
    /// An edge committed by the player.
    Edge(Player),
    /// A box captured by the player.
    Box(Player),
}

/// A cell that just transitioned to drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrawEvent {
    /// The cell.
    pub coord: Coord,
    /// How it should appear.
    pub visual: Visual,
}

/// Receives draw notifications from the core.
pub trait RenderSink {
    /// Called once per undrawn-to-drawn transition.
    fn cell_drawn(&mut self, event: DrawEvent);
}

/// Discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn cell_drawn(&mut self, _event: DrawEvent) {}
}

/// Records notifications in order.
impl RenderSink for Vec<DrawEvent> {
    fn cell_drawn(&mut self, event: DrawEvent) {
        self.push(event);
    }
}
