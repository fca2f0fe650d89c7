//! Game session: the one place that owns grid, scores and turn state.
//!
//! The turn driver talks to the core only through [`GameSession`]:
//! [`commit_move`](GameSession::commit_move) is the single mutation entry
//! point, combining capture with turn transfer.

use super::capture;
use super::error::GameError;
use super::grid::Grid;
#[cfg(debug_assertions)]
use super::invariants::{BoxesAndDotsInvariants, InvariantSet};
use super::render::{NullSink, RenderSink};
use super::score::Scoreboard;
use super::selector::MoveSelector;
use super::types::{Coord, Player, Turn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A committed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Who drew the edge.
    pub player: Player,
    /// The edge drawn.
    pub edge: Coord,
    /// Boxes closed by this edge.
    pub captured: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.edge)?;
        if self.captured > 0 {
            write!(f, " (+{})", self.captured)?;
        }
        Ok(())
    }
}

/// What a call to [`GameSession::commit_move`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Boxes captured by the move.
    pub captured: usize,
    /// False when the coordinate was not an undrawn edge and nothing changed.
    pub accepted: bool,
    /// Turn state after the move.
    pub next: Turn,
}

/// Final result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// One player holds more boxes.
    Winner(Player),
    /// Both players hold the same number of boxes.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Tie => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{player} wins"),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// State of one game from construction to the last box.
pub struct GameSession {
    grid: Grid,
    scores: Scoreboard,
    turn: Turn,
    history: Vec<Move>,
    sink: Box<dyn RenderSink>,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("grid", &self.grid)
            .field("scores", &self.scores)
            .field("turn", &self.turn)
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}

impl GameSession {
    /// Starts a game on a `rows` x `cols` grid with `first` to move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidDimensions`] unless both spans are even
    /// and at least 2.
    #[instrument]
    pub fn new(rows: usize, cols: usize, first: Player) -> Result<Self, GameError> {
        let grid = Grid::new(rows, cols)?;
        info!(rows, cols, first = %first, "Starting game");
        Ok(Self {
            grid,
            scores: Scoreboard::new(),
            turn: first.into(),
            history: Vec::new(),
            sink: Box::new(NullSink),
        })
    }

    /// Routes draw notifications to `sink`.
    pub fn with_sink(mut self, sink: impl RenderSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Read-only view of the board.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current turn state, including the retry signal.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// The player who owns the current turn.
    pub fn current_owner(&self) -> Player {
        self.turn.owner()
    }

    /// True once every box is captured.
    pub fn is_game_over(&self) -> bool {
        self.grid.is_complete()
    }

    /// Boxes captured by `player`.
    pub fn score_of(&self, player: Player) -> usize {
        self.scores.score_of(player)
    }

    /// Both players' scores.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Moves committed so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The result, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_game_over() {
            return None;
        }
        Some(match self.scores.leader() {
            Some(player) => Outcome::Winner(player),
            None => Outcome::Tie,
        })
    }

    /// Flags that the human's last pick was rejected by the input layer.
    ///
    /// Only meaningful on the human's turn; scores and ownership are
    /// untouched.
    #[instrument(skip(self))]
    pub fn request_retry(&mut self) {
        if self.turn.owner() == Player::Human {
            self.turn = Turn::HumanRetry;
        } else {
            warn!(turn = ?self.turn, "Retry requested outside the human's turn");
        }
    }

    /// Asks `selector` for the current owner's next edge.
    ///
    /// The board is lent to the selector for shadow simulation only.
    pub fn suggest_move<R: Rng>(
        &mut self,
        selector: &mut MoveSelector<R>,
    ) -> Result<Option<Coord>, GameError> {
        let choice = selector.choose_move(&mut self.grid)?;
        debug_assert!(self.grid.shadow_is_clear());
        Ok(choice)
    }

    /// Commits `edge` for `owner`, claims closed boxes and passes the turn.
    ///
    /// The turn stays with `owner` if the move captured anything and goes
    /// to the opponent otherwise. A coordinate that is not an undrawn edge
    /// changes nothing and comes back with `accepted == false`.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] if every box is already captured.
    /// - [`GameError::NotYourTurn`] if `owner` does not own the turn.
    /// - [`GameError::OutOfBounds`] if `edge` is outside the grid.
    #[instrument(skip(self), fields(owner = %owner, edge = %edge))]
    pub fn commit_move(&mut self, owner: Player, edge: Coord) -> Result<MoveOutcome, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if owner != self.current_owner() {
            return Err(GameError::NotYourTurn(owner));
        }
        let drawn = self.grid.is_drawn(edge)?;
        if drawn || !self.grid.kind_of(edge).is_edge() {
            debug!(drawn, "Not an undrawn edge, ignoring");
            return Ok(self.unchanged());
        }

        let captured = capture::apply_move(
            &mut self.grid,
            edge,
            owner,
            &mut self.scores,
            self.sink.as_mut(),
        )?;

        self.turn = if captured > 0 {
            owner.into()
        } else {
            owner.opponent().into()
        };
        self.history.push(Move {
            player: owner,
            edge,
            captured,
        });

        #[cfg(debug_assertions)]
        BoxesAndDotsInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Post-move invariants failed");
            GameError::InvariantViolation(descriptions)
        })?;

        info!(
            captured,
            next = ?self.turn,
            human = self.scores.score_of(Player::Human),
            computer = self.scores.score_of(Player::Computer),
            "Move committed"
        );

        Ok(MoveOutcome {
            captured,
            accepted: true,
            next: self.turn,
        })
    }

    fn unchanged(&self) -> MoveOutcome {
        MoveOutcome {
            captured: 0,
            accepted: false,
            next: self.turn,
        }
    }

    /// Rebuilds a session by committing `moves` in order.
    ///
    /// Each entry goes through [`commit_move`](Self::commit_move), so turn
    /// order is enforced.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(
        rows: usize,
        cols: usize,
        first: Player,
        moves: &[(Player, Coord)],
    ) -> Result<Self, GameError> {
        let mut session = Self::new(rows, cols, first)?;
        for &(player, edge) in moves {
            session.commit_move(player, edge)?;
        }
        Ok(session)
    }
}
