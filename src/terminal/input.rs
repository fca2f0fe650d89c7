//! Parsing typed moves into grid edges.

use crate::games::dots::{CellKind, Coord, Grid};
use derive_more::{Display, Error};

/// What a line of human input asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    /// Draw the edge at this coordinate.
    Edge(Coord),
    /// Leave the game.
    Quit,
}

/// Why a typed move could not be played.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum Rejection {
    /// Input was not two numbers or `q`.
    #[display("Expected \"row col\" or \"q\", got {_0:?}")]
    Unparseable(#[error(not(source))] String),

    /// Coordinate lies outside the board.
    #[display("{_0} is off the board")]
    OffBoard(#[error(not(source))] Coord),

    /// Coordinate names a dot or a box.
    #[display("{_0} is a {_1:?}, not an edge")]
    NotAnEdge(#[error(not(source))] Coord, CellKind),

    /// Edge is already on the board.
    #[display("{_0} is already drawn")]
    AlreadyDrawn(#[error(not(source))] Coord),
}

/// Reads `row col` (any whitespace or a comma between) or `q`.
pub fn parse_pick(line: &str) -> Result<Pick, Rejection> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return Ok(Pick::Quit);
    }

    let unparseable = || Rejection::Unparseable(trimmed.to_string());
    let mut parts = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty());
    let row = parts.next().ok_or_else(unparseable)?;
    let col = parts.next().ok_or_else(unparseable)?;
    if parts.next().is_some() {
        return Err(unparseable());
    }

    let row = row.parse::<usize>().map_err(|_| unparseable())?;
    let col = col.parse::<usize>().map_err(|_| unparseable())?;
    Ok(Pick::Edge(Coord::new(row, col)))
}

/// Confirms `coord` is an undrawn edge on `grid`.
pub fn validate_edge(grid: &Grid, coord: Coord) -> Result<Coord, Rejection> {
    if !grid.contains(coord) {
        return Err(Rejection::OffBoard(coord));
    }
    let kind = grid.kind_of(coord);
    if !kind.is_edge() {
        return Err(Rejection::NotAnEdge(coord, kind));
    }
    match grid.is_drawn(coord) {
        Ok(false) => Ok(coord),
        _ => Err(Rejection::AlreadyDrawn(coord)),
    }
}
