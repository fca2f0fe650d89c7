//! Plain-text board rendering.

use crate::games::dots::{CellKind, Coord, DrawEvent, Grid, RenderSink, Visual};
use tracing::trace;

/// Narrowest horizontal segment, wide enough for a two-digit label.
const MIN_SEGMENT: usize = 3;

/// Width of a dot column, including one pad character on each side.
const DOT_FIELD: usize = 3;

/// Renders a [`Grid`] as ASCII art with coordinate labels.
///
/// Dots are `+`, horizontal edges a run of `-`, vertical edges `|`, and
/// captured boxes show their owner's mark. Column and row labels are grid
/// coordinates, so a human can type exactly what they see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBoard {
    segment: usize,
}

impl TextBoard {
    /// Renderer whose horizontal edges scale with `line_length`.
    pub fn new(line_length: u32) -> Self {
        let segment = usize::try_from(line_length / 10).unwrap_or(MIN_SEGMENT);
        Self {
            segment: segment.max(MIN_SEGMENT),
        }
    }

    /// Characters used for one horizontal edge.
    pub fn segment(&self) -> usize {
        self.segment
    }

    /// Draws the whole board, one line per grid row plus a header.
    pub fn render(&self, grid: &Grid) -> String {
        let mut out = String::new();
        out.push_str("    ");
        for col in 0..=grid.cols() {
            let width = self.field_width(col);
            out.push_str(&format!("{:^width$}", col));
        }
        out.push('\n');

        for row in 0..=grid.rows() {
            out.push_str(&format!("{:>3} ", row));
            for col in 0..=grid.cols() {
                out.push_str(&self.field(grid, Coord::new(row, col)));
            }
            out.truncate(out.trim_end().len());
            out.push('\n');
        }
        out
    }

    fn field_width(&self, col: usize) -> usize {
        if col % 2 == 0 { DOT_FIELD } else { self.segment }
    }

    fn field(&self, grid: &Grid, coord: Coord) -> String {
        let drawn = |c: Coord| grid.is_drawn(c).unwrap_or(false);
        match grid.kind_of(coord) {
            CellKind::Dot => {
                let left = coord.col > 0 && drawn(Coord::new(coord.row, coord.col - 1));
                let right = drawn(Coord::new(coord.row, coord.col + 1));
                format!(
                    "{}+{}",
                    if left { '-' } else { ' ' },
                    if right { '-' } else { ' ' }
                )
            }
            CellKind::HEdge => {
                let fill = if drawn(coord) { '-' } else { ' ' };
                fill.to_string().repeat(self.segment)
            }
            CellKind::VEdge => {
                let fill = if drawn(coord) { '|' } else { ' ' };
                format!(" {fill} ")
            }
            CellKind::Box => {
                let mark = grid
                    .owner_of(coord)
                    .ok()
                    .flatten()
                    .map_or(' ', |owner| owner.mark());
                let width = self.segment;
                format!("{:^width$}", mark)
            }
        }
    }
}

impl Default for TextBoard {
    fn default() -> Self {
        Self::new(50)
    }
}

/// Render sink that narrates each draw to the trace log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TraceSink;

impl RenderSink for TraceSink {
    fn cell_drawn(&mut self, event: DrawEvent) {
        match event.visual {
            Visual::Edge(player) => trace!(coord = %event.coord, %player, "Edge drawn"),
            Visual::Box(player) => trace!(coord = %event.coord, %player, "Box filled"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::dots::GameSession;
    use crate::games::dots::Player;

    #[test]
    fn test_empty_board_shows_only_dots() {
        let grid = Grid::new(2, 2).unwrap();
        let text = TextBoard::new(30).render(&grid);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "  0  +     +");
        assert_eq!(lines[2], "  1");
        assert!(!text.contains('-'));
        assert!(!text.contains('|'));
    }

    #[test]
    fn test_captured_box_shows_owner() {
        let session = GameSession::replay(
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
        let text = TextBoard::new(30).render(session.grid());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "  0  +-----+");
        assert_eq!(lines[2], "  1  |  C  |");
        assert_eq!(lines[3], "  2  +-----+");
    }

    #[test]
    fn test_segment_scales_with_line_length() {
        assert_eq!(TextBoard::new(50).segment(), 5);
        assert_eq!(TextBoard::new(10).segment(), MIN_SEGMENT);
    }
}
