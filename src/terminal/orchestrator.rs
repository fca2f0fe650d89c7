//! Turn loop between two contestants.

use super::board::TextBoard;
use super::players::{Choice, Contestant};
use crate::games::dots::{Coord, GameSession, Outcome, Player, Turn};
use anyhow::{Context, Result};
use std::io::Write;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Something worth telling the people watching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// An edge was committed.
    MoveMade {
        /// Contestant name.
        player: String,
        /// Edge drawn.
        edge: Coord,
        /// Boxes closed by it.
        captured: usize,
    },
    /// A pick was rejected and the contestant goes again.
    Retry(String),
    /// A contestant left before the end.
    Quit(String),
    /// Every box is taken.
    GameOver {
        /// Winning contestant, `None` on a tie.
        winner: Option<String>,
        /// Boxes held by the human side.
        human: usize,
        /// Boxes held by the computer side.
        computer: usize,
    },
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::MoveMade {
                player,
                edge,
                captured: 0,
            } => write!(f, "{player} drew {edge}"),
            GameEvent::MoveMade {
                player,
                edge,
                captured,
            } => write!(f, "{player} drew {edge} and took {captured} box(es)"),
            GameEvent::Retry(reason) => write!(f, "{reason}. Try again."),
            GameEvent::Quit(player) => write!(f, "{player} left the game"),
            GameEvent::GameOver {
                winner,
                human,
                computer,
            } => {
                match winner {
                    Some(name) => writeln!(f, "{name} wins!")?,
                    None => writeln!(f, "It's a tie!")?,
                }
                write!(f, "Final score: {human} to {computer}")
            }
        }
    }
}

/// Drives a [`GameSession`] until someone wins or quits.
pub struct Orchestrator<W> {
    session: GameSession,
    human_side: Box<dyn Contestant>,
    computer_side: Box<dyn Contestant>,
    board: TextBoard,
    out: W,
    pace: Duration,
    events: Vec<GameEvent>,
}

impl<W: Write> Orchestrator<W> {
    /// Creates a new orchestrator writing to `out`.
    ///
    /// `human_side` plays [`Player::Human`] and `computer_side` plays
    /// [`Player::Computer`], whoever they actually are.
    pub fn new(
        session: GameSession,
        human_side: Box<dyn Contestant>,
        computer_side: Box<dyn Contestant>,
        board: TextBoard,
        out: W,
    ) -> Self {
        Self {
            session,
            human_side,
            computer_side,
            board,
            out,
            pace: Duration::ZERO,
            events: Vec::new(),
        }
    }

    /// Pauses for `pace` after every committed move.
    pub fn with_pace(mut self, pace: Duration) -> Self {
        self.pace = pace;
        self
    }

    /// The session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Everything reported so far.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Runs the game loop.
    ///
    /// Returns the outcome, or `None` if a contestant quit first.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Option<Outcome>> {
        info!("Starting game orchestration");

        loop {
            if let Some(outcome) = self.session.outcome() {
                self.show_board()?;
                let winner = outcome.winner().map(|p| self.name_of(p).to_string());
                self.emit(GameEvent::GameOver {
                    winner,
                    human: self.session.score_of(Player::Human),
                    computer: self.session.score_of(Player::Computer),
                })?;
                info!(%outcome, "Game finished");
                return Ok(Some(outcome));
            }

            let owner = self.session.current_owner();
            if self.session.turn() != Turn::HumanRetry {
                self.show_board()?;
            }

            let player_name = self.name_of(owner).to_string();
            debug!(player = %player_name, "Waiting for move");
            let contestant = match owner {
                Player::Human => &mut self.human_side,
                Player::Computer => &mut self.computer_side,
            };
            let choice = contestant.choose(&mut self.session)?;

            match choice {
                Choice::Quit => {
                    self.emit(GameEvent::Quit(player_name))?;
                    return Ok(None);
                }
                Choice::Retry(reason) => {
                    self.session.request_retry();
                    self.emit(GameEvent::Retry(reason))?;
                }
                Choice::Edge(edge) => {
                    let outcome = self.session.commit_move(owner, edge)?;
                    if !outcome.accepted {
                        warn!(edge = %edge, "Contestant picked an unplayable cell");
                        self.session.request_retry();
                        self.emit(GameEvent::Retry(format!("{edge} can't be drawn")))?;
                        continue;
                    }
                    self.emit(GameEvent::MoveMade {
                        player: player_name,
                        edge,
                        captured: outcome.captured,
                    })?;
                    if !self.pace.is_zero() {
                        std::thread::sleep(self.pace);
                    }
                }
            }
        }
    }

    fn name_of(&self, player: Player) -> &str {
        match player {
            Player::Human => self.human_side.name(),
            Player::Computer => self.computer_side.name(),
        }
    }

    fn show_board(&mut self) -> Result<()> {
        let text = self.board.render(self.session.grid());
        writeln!(
            self.out,
            "\n{}{}: {}   {}: {}",
            text,
            self.human_side.name(),
            self.session.score_of(Player::Human),
            self.computer_side.name(),
            self.session.score_of(Player::Computer),
        )
        .context("Failed to write board")
    }

    fn emit(&mut self, event: GameEvent) -> Result<()> {
        writeln!(self.out, "{event}").context("Failed to write event")?;
        self.events.push(event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::players::{ComputerContestant, HumanContestant};
    use std::io::Cursor;

    #[test]
    fn test_computer_vs_computer_finishes() {
        let session = GameSession::new(4, 4, Player::Human).unwrap();
        let mut orchestrator = Orchestrator::new(
            session,
            Box::new(ComputerContestant::new("Alpha", Some(1))),
            Box::new(ComputerContestant::new("Beta", Some(2))),
            TextBoard::default(),
            Vec::new(),
        );
        let outcome = orchestrator.run().unwrap();
        assert!(outcome.is_some());
        assert!(orchestrator.session().is_game_over());
        assert_eq!(orchestrator.session().scores().total(), 4);
        assert!(matches!(
            orchestrator.events().last(),
            Some(GameEvent::GameOver { .. })
        ));
    }

    #[test]
    fn test_human_quit_stops_game() {
        let session = GameSession::new(2, 2, Player::Human).unwrap();
        let human = HumanContestant::new("You", Cursor::new(b"1 1\nq\n".to_vec()), Vec::new());
        let mut orchestrator = Orchestrator::new(
            session,
            Box::new(human),
            Box::new(ComputerContestant::new("Computer", Some(3))),
            TextBoard::default(),
            Vec::new(),
        );
        assert_eq!(orchestrator.run().unwrap(), None);
        assert!(matches!(orchestrator.events()[0], GameEvent::Retry(_)));
        assert_eq!(orchestrator.events()[1], GameEvent::Quit("You".to_string()));
        assert!(orchestrator.session().history().is_empty());
    }
}
