//! Capture rules: committing an edge and claiming the boxes it closes.

use super::error::GameError;
use super::grid::Grid;
use super::render::{DrawEvent, RenderSink, Visual};
use super::score::Scoreboard;
use super::types::{Coord, Player};
use tracing::{debug, instrument, trace};

/// Checks whether all four sides of a box are drawn.
///
/// Looks at the box's own neighbours directly rather than going through
/// edge adjacency.
pub fn is_enclosed(grid: &Grid, box_cell: Coord) -> Result<bool, GameError> {
    let Some(sides) = grid.box_sides(box_cell) else {
        return Ok(false);
    };
    for side in sides {
        if !grid.is_drawn(side)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Commits `edge` for `player` and claims every box that is now closed.
///
/// Returns the number of boxes captured by this move. A positive count
/// means the same player moves again.
///
/// Drawing an edge that is already drawn, or naming a cell that is not an
/// edge, is a silent no-op that captures nothing.
///
/// # Errors
///
/// Returns [`GameError::OutOfBounds`] if `edge` is outside the grid.
#[instrument(skip(grid, scores, sink), fields(edge = %edge, player = %player))]
pub fn apply_move(
    grid: &mut Grid,
    edge: Coord,
    player: Player,
    scores: &mut Scoreboard,
    sink: &mut dyn RenderSink,
) -> Result<usize, GameError> {
    if !grid.contains(edge) {
        return Err(GameError::OutOfBounds {
            row: edge.row,
            col: edge.col,
            rows: grid.rows(),
            cols: grid.cols(),
        });
    }
    if !grid.kind_of(edge).is_edge() {
        trace!("Not an edge, ignoring");
        return Ok(0);
    }

    if grid.mark_drawn(edge)? {
        sink.cell_drawn(DrawEvent {
            coord: edge,
            visual: Visual::Edge(player),
        });
    } else {
        trace!("Edge already drawn");
    }

    let mut closed = Vec::new();
    for box_cell in grid.boxes() {
        if !grid.is_drawn(box_cell)? && is_enclosed(grid, box_cell)? {
            closed.push(box_cell);
        }
    }

    let mut captured = 0;
    for box_cell in closed {
        if grid.fill_box(box_cell, player)? {
            scores.credit(player);
            captured += 1;
            sink.cell_drawn(DrawEvent {
                coord: box_cell,
                visual: Visual::Box(player),
            });
            debug!(box_cell = %box_cell, "Box captured");
        }
    }

    Ok(captured)
}
