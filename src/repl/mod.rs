//! REPL Module
//!
//! The interactive read-eval-print loop that drives the API client.

mod commands;

use std::io::{BufRead, Write};

use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::debug;

use crate::api::{Direction, PokeApiClient};
use crate::capture::{attempt_capture, Pokedex};
use crate::error::{PokedexError, Result};

pub use commands::{clean_input, lookup, Command, CommandKind, COMMANDS};

pub const PROMPT: &str = "Pokedex > ";

/// Whether the loop should keep reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// REPL state: the API client (with its paging position), the Pokedex and the
/// random source for capture rolls.
pub struct Repl<R = ThreadRng> {
    client: PokeApiClient,
    pokedex: Pokedex,
    rng: R,
}

impl Repl<ThreadRng> {
    pub fn new(client: PokeApiClient) -> Self {
        Self::with_rng(client, rand::thread_rng())
    }
}

impl<R: Rng> Repl<R> {
    pub fn with_rng(client: PokeApiClient, rng: R) -> Self {
        Self {
            client,
            pokedex: Pokedex::new(),
            rng,
        }
    }

    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    /// Reads commands from `input` until `exit` or end of input.
    ///
    /// Command output goes to `out`; unknown commands and command errors are
    /// reported on `err` and the loop carries on.
    pub async fn run<I, O, E>(&mut self, mut input: I, out: &mut O, err: &mut E) -> Result<()>
    where
        I: BufRead,
        O: Write,
        E: Write,
    {
        let mut line = String::new();

        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("End of input, leaving REPL");
                return Ok(());
            }

            let words = clean_input(&line);
            let Some((name, args)) = words.split_first() else {
                continue;
            };

            let Some(command) = lookup(name) else {
                writeln!(err, "command not recognized")?;
                continue;
            };

            match self.execute(command.kind, args, out).await {
                Ok(Flow::Exit) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(e) => writeln!(err, "{}", e)?,
            }
        }
    }

    /// Runs a single command with its arguments.
    pub async fn execute<O: Write>(
        &mut self,
        kind: CommandKind,
        args: &[String],
        out: &mut O,
    ) -> Result<Flow> {
        match kind {
            CommandKind::Help => self.help(out)?,
            CommandKind::Exit => return Ok(Flow::Exit),
            CommandKind::Map => self.map(Direction::Next, out).await?,
            CommandKind::MapBack => self.map(Direction::Previous, out).await?,
            CommandKind::Explore => {
                let area = args
                    .first()
                    .ok_or(PokedexError::MissingArgument("location area"))?;
                self.explore(area, out).await?;
            }
            CommandKind::Catch => {
                let name = args.first().ok_or(PokedexError::MissingArgument("Pokemon"))?;
                self.catch(name, out).await?;
            }
        }

        Ok(Flow::Continue)
    }

    fn help<O: Write>(&self, out: &mut O) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "Welcome to the Pokedex!")?;
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for command in COMMANDS {
            writeln!(out, "{}: {}", command.name, command.description)?;
        }
        writeln!(out)?;
        Ok(())
    }

    async fn map<O: Write>(&mut self, direction: Direction, out: &mut O) -> Result<()> {
        let page = self.client.location_areas(direction).await?;
        for area in &page.results {
            writeln!(out, "{}", area.name)?;
        }
        Ok(())
    }

    async fn explore<O: Write>(&mut self, area: &str, out: &mut O) -> Result<()> {
        let location = self.client.location_area(area).await?;

        writeln!(out, "Exploring {}...", area)?;
        writeln!(out, "Found Pokemon:")?;
        for encounter in &location.pokemon_encounters {
            writeln!(out, " - {}", encounter.pokemon.name)?;
        }
        Ok(())
    }

    async fn catch<O: Write>(&mut self, name: &str, out: &mut O) -> Result<()> {
        writeln!(out, "Throwing a Pokeball at {}...", name)?;

        let pokemon = self.client.pokemon(name).await?;
        if attempt_capture(&mut self.rng, &pokemon) {
            writeln!(out, "{} was caught!", name)?;
            self.pokedex.insert(name, pokemon);
        } else {
            writeln!(out, "{} escaped!", name)?;
        }
        Ok(())
    }
}
