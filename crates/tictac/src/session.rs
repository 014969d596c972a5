//! Terminal game session.
//!
//! The session is the engine's front end: it turns text into cells, keeps
//! claimed cells away from the engine, draws the board, and announces wins.

use crate::config::TerminalConfig;
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use tictac_engine::{Cell, CellParseError, GameEngine, MoveResult, Player};
use tracing::{debug, info, instrument, warn};

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player typed `quit`.
    Quit,
    /// Input ran out.
    EndOfInput,
    /// Every cell is claimed.
    BoardFull,
    /// A move won and `halt_on_win` is set.
    Halted(Player),
}

/// Input the front end refuses to pass to the engine.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// Not a cell.
    #[display("{}", _0)]
    Unparseable(CellParseError),

    /// The cell is already marked.
    #[display("Cell {} is taken by {}", cell, by)]
    Taken {
        /// The requested cell.
        cell: Cell,
        /// The player holding it.
        by: Player,
    },
}

impl std::error::Error for Rejection {}

/// One game played over a reader and a writer.
#[derive(Debug)]
pub struct Session<R, W> {
    engine: GameEngine,
    config: TerminalConfig,
    json: bool,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session for a fresh game.
    #[instrument(skip(input, output))]
    pub fn new(config: TerminalConfig, json: bool, input: R, output: W) -> Self {
        Self {
            engine: GameEngine::new(),
            config,
            json,
            input,
            output,
        }
    }

    /// The engine driving this session.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Consumes the session, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Resolves text to an unclaimed cell.
    ///
    /// # Errors
    ///
    /// [`Rejection`] when the text names no cell or the cell is claimed.
    #[instrument(skip(self))]
    pub fn select(&self, text: &str) -> Result<Cell, Rejection> {
        let cell: Cell = text.parse().map_err(Rejection::Unparseable)?;
        match self.engine.claims().owner_of(cell) {
            Some(by) => Err(Rejection::Taken { cell, by }),
            None => Ok(cell),
        }
    }

    /// Prompts for moves until the game stops or input runs out.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<SessionEnd> {
        info!("Session started");
        self.draw_board()?;

        let end = loop {
            write!(self.output, "{}> ", self.engine.current_player())?;
            self.output.flush()?;

            let mut buf = Vec::new();
            let read = self
                .input
                .read_until(b'\n', &mut buf)
                .context("Failed to read move")?;
            if read == 0 {
                writeln!(self.output)?;
                break SessionEnd::EndOfInput;
            }

            let line = match String::from_utf8(buf) {
                Ok(line) => line,
                Err(e) => {
                    debug!(error = %e, "Input is not UTF-8");
                    writeln!(self.output, "Input is not valid text. Try again.")?;
                    continue;
                }
            };

            let text = line.trim();
            if text.is_empty() {
                continue;
            }
            if text.eq_ignore_ascii_case("quit") {
                break SessionEnd::Quit;
            }

            match self.select(text) {
                Ok(cell) => {
                    if let Some(end) = self.play(cell)? {
                        break end;
                    }
                }
                Err(rejection) => {
                    debug!(%rejection, "Input rejected");
                    writeln!(self.output, "{}. Try again.", rejection)?;
                }
            }
        };

        info!(?end, moves = self.engine.history().len(), "Session ended");
        Ok(end)
    }

    /// Plays a fixed list of moves.
    ///
    /// Unlike [`run`](Self::run), a bad move is an error rather than a
    /// retry. Moves after the session stops are ignored.
    #[instrument(skip(self, moves))]
    pub fn run_moves<S: AsRef<str>>(&mut self, moves: &[S]) -> Result<SessionEnd> {
        self.draw_board()?;

        for (n, text) in moves.iter().enumerate() {
            let text = text.as_ref();
            let cell = self
                .select(text)
                .with_context(|| format!("Move {} ({:?}) rejected", n + 1, text))?;
            if let Some(end) = self.play(cell)? {
                if n + 1 < moves.len() {
                    warn!(skipped = moves.len() - n - 1, "Moves left over after session ended");
                }
                return Ok(end);
            }
        }

        Ok(SessionEnd::EndOfInput)
    }

    /// Applies a move and reports it. Returns `Some` when the session stops.
    fn play(&mut self, cell: Cell) -> Result<Option<SessionEnd>> {
        let result = self.engine.apply_move(cell);
        self.report(&result)?;

        if result.won() && *self.config.halt_on_win() {
            return Ok(Some(SessionEnd::Halted(result.player())));
        }
        if self.engine.unclaimed().is_empty() {
            writeln!(self.output, "No cells left.")?;
            return Ok(Some(SessionEnd::BoardFull));
        }
        Ok(None)
    }

    fn report(&mut self, result: &MoveResult) -> Result<()> {
        if self.json {
            let line = serde_json::to_string(result).context("Failed to encode move")?;
            writeln!(self.output, "{}", line)?;
        }
        self.draw_board()?;
        if result.won() {
            writeln!(self.output, "{} wins!", result.player())?;
        }
        Ok(())
    }

    fn draw_board(&mut self) -> Result<()> {
        let board = self.engine.board().display(*self.config.show_labels());
        writeln!(self.output, "{}\n", board)?;
        Ok(())
    }
}

/// Prints the winning lines, one per row.
pub fn write_lines(mut output: impl Write) -> Result<()> {
    for line in tictac_engine::WINNING_LINES {
        writeln!(output, "{}", line)?;
    }
    Ok(())
}

/// Checks a move list before any of it is played.
///
/// # Errors
///
/// When an entry is not a cell or repeats an earlier one.
#[instrument(skip(moves))]
pub fn validate_moves<S: AsRef<str>>(moves: &[S]) -> Result<()> {
    let mut indices = Vec::with_capacity(moves.len());
    for text in moves {
        let text = text.as_ref();
        match text.parse::<Cell>() {
            Ok(cell) => indices.push(cell.index()),
            Err(e) => bail!("Invalid move {:?}: {}", text, e),
        }
    }
    GameEngine::replay(&indices).context("Move list is not playable")?;
    Ok(())
}
