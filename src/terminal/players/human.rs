//! Human contestant that reads moves from a line-oriented stream.

use super::{Choice, Contestant};
use crate::games::dots::GameSession;
use crate::terminal::input::{Pick, parse_pick, validate_edge};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Human player typing `row col` pairs.
///
/// Generic over the streams so tests can drive it with in-memory buffers.
pub struct HumanContestant<R, W> {
    name: String,
    input: R,
    prompt: W,
}

impl<R: BufRead, W: Write> HumanContestant<R, W> {
    /// Creates a new human contestant.
    pub fn new(name: impl Into<String>, input: R, prompt: W) -> Self {
        Self {
            name: name.into(),
            input,
            prompt,
        }
    }
}

impl<R: BufRead, W: Write> Contestant for HumanContestant<R, W> {
    fn choose(&mut self, session: &mut GameSession) -> Result<Choice> {
        write!(self.prompt, "{}, your move (row col, q to quit): ", self.name)
            .context("Failed to write prompt")?;
        self.prompt.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read move")?;
        if read == 0 {
            info!(human = %self.name, "Input closed, quitting");
            return Ok(Choice::Quit);
        }

        let pick = parse_pick(&line).and_then(|pick| match pick {
            Pick::Edge(coord) => validate_edge(session.grid(), coord).map(Pick::Edge),
            Pick::Quit => Ok(Pick::Quit),
        });
        Ok(match pick {
            Ok(Pick::Edge(coord)) => Choice::Edge(coord),
            Ok(Pick::Quit) => Choice::Quit,
            Err(rejection) => {
                debug!(human = %self.name, %rejection, "Rejected pick");
                Choice::Retry(rejection.to_string())
            }
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
