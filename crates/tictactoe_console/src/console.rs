//! Console input and output for a human player.

use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use tictactoe_minimax::{Board, GameState, SearchResult, Symbols};
use tracing::{debug, instrument};

/// Printed when a coordinate is not a number.
pub const NOT_A_NUMBER: &str = "Invalid input! Please enter a number.";

/// Final message for a finished game, or `None` while play continues.
pub fn outcome_message(state: GameState) -> Option<&'static str> {
    match state {
        GameState::PlayerWon => Some("Congratulations! You won!"),
        GameState::ComputerWon => Some("Computer wins! You lose!"),
        GameState::Draw => Some("It's a tie!"),
        GameState::PlayerTurn | GameState::ComputerTurn => None,
    }
}

/// Line-oriented terminal over any reader/writer pair.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    symbols: Symbols,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console rendering marks with `symbols`.
    pub fn new(input: R, output: W, symbols: Symbols) -> Self {
        Self {
            input,
            output,
            symbols,
        }
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints the greeting.
    pub fn welcome(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to Tic-Tac-Toe!")?;
        Ok(())
    }

    /// Prints the board framed by blank lines.
    pub fn show_board(&mut self, board: &Board) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", board.render(&self.symbols))?;
        writeln!(self.output)?;
        Ok(())
    }

    /// Prints the suggested move in 1-based coordinates.
    pub fn show_hint(&mut self, result: &SearchResult) -> Result<()> {
        if let Some((row, col)) = result.cell() {
            writeln!(self.output, "Hint: row {}, column {}", row + 1, col + 1)?;
        }
        Ok(())
    }

    /// Prints the end-of-game message for a terminal state.
    pub fn announce(&mut self, state: GameState) -> Result<()> {
        if let Some(message) = outcome_message(state) {
            writeln!(self.output, "{message}")?;
        }
        Ok(())
    }

    /// Prompts until the user enters a legal move, returned zero-based.
    ///
    /// # Errors
    ///
    /// Fails when the input is exhausted or cannot be read.
    #[instrument(skip(self, board), fields(size = board.size()))]
    pub fn read_move(&mut self, board: &Board) -> Result<(usize, usize)> {
        let size = board.size();
        loop {
            let Some(row) = self.read_number(&format!("Enter row (1-{size}): "))? else {
                continue;
            };
            let Some(col) = self.read_number(&format!("Enter column (1-{size}): "))? else {
                continue;
            };

            let (row, col) = (to_index(row), to_index(col));
            match board.check_move(row, col) {
                Ok(()) => return Ok((row, col)),
                Err(e) => {
                    debug!(row, col, error = %e, "Rejected move");
                    writeln!(self.output, "{e}")?;
                }
            }
        }
    }

    fn read_number(&mut self, prompt: &str) -> Result<Option<i64>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed before a move was entered");
        }
        match line.trim().parse() {
            Ok(n) => Ok(Some(n)),
            Err(_) => {
                writeln!(self.output, "{NOT_A_NUMBER}")?;
                Ok(None)
            }
        }
    }
}

/// Converts a 1-based coordinate to 0-based. Values below 1 map past any board.
fn to_index(n: i64) -> usize {
    usize::try_from(n.saturating_sub(1)).unwrap_or(usize::MAX)
}
