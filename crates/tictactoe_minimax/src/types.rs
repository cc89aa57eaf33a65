//! Core domain types for tic-tac-toe: marks, sides and the board.

use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use tracing::instrument;

use super::action::MoveError;

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Mark {
    /// No mark placed yet.
    Empty,
    /// The human player's mark.
    Player,
    /// The computer's mark.
    Computer,
}

/// One of the two competing sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The human player (minimizing side).
    Player,
    /// The computer (maximizing side).
    Computer,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }

    /// Returns the mark this side places.
    pub fn mark(self) -> Mark {
        match self {
            Side::Player => Mark::Player,
            Side::Computer => Mark::Computer,
        }
    }

    /// True for the side whose score the search maximizes.
    pub fn maximizing(self) -> bool {
        matches!(self, Side::Computer)
    }
}

/// Characters used when rendering a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct Symbols {
    /// Symbol for the player's cells.
    pub player: char,
    /// Symbol for the computer's cells.
    pub computer: char,
}

impl Symbols {
    /// Returns the symbol for a mark. Empty cells render as a space.
    pub fn symbol(&self, mark: Mark) -> char {
        match mark {
            Mark::Empty => ' ',
            Mark::Player => self.player,
            Mark::Computer => self.computer,
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::new('X', 'O')
    }
}

/// The eight lines inspected for a win.
///
/// Only the leading 3x3 block is ever checked, so on larger boards a line
/// elsewhere never counts as a win.
const WIN_LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Square tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Side length.
    size: usize,
    /// Cells in row-major order (`row * size + col`).
    cells: Vec<Mark>,
}

impl Board {
    /// Creates a `size x size` board with every cell empty.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Mark::Empty; size * size],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the mark at the given cell, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Mark] {
        &self.cells
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    /// True iff the coordinates are on the board and the cell is empty.
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        self.check_move(row, col).is_ok()
    }

    /// Validates a move, reporting which condition failed.
    ///
    /// Range is checked before occupancy.
    #[instrument(skip(self))]
    pub fn check_move(&self, row: usize, col: usize) -> Result<(), MoveError> {
        match self.get(row, col) {
            None => Err(MoveError::OutOfRange { row, col }),
            Some(Mark::Empty) => Ok(()),
            Some(_) => Err(MoveError::Occupied { row, col }),
        }
    }

    /// Sets a cell. The caller is expected to have validated the move.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the board.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) {
        let i = self.expect_index(row, col);
        self.cells[i] = mark;
    }

    /// Resets a cell to [`Mark::Empty`].
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the board.
    pub fn clear(&mut self, row: usize, col: usize) {
        self.place(row, col, Mark::Empty);
    }

    fn expect_index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) is outside a {0}x{0} board",
            self.size
        );
        row * self.size + col
    }

    /// Places `mark` for the lifetime of the returned guard.
    ///
    /// The previous contents of the cell are restored when the guard drops,
    /// whichever way the scope is left.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the board.
    pub fn speculate(&mut self, row: usize, col: usize, mark: Mark) -> Speculation<'_> {
        let index = self.expect_index(row, col);
        let previous = self.cells[index];
        self.cells[index] = mark;
        Speculation {
            board: self,
            index,
            previous,
        }
    }

    /// True iff `mark` fills a row, column or diagonal of the leading 3x3 block.
    ///
    /// Asking about [`Mark::Empty`] is always false.
    pub fn check_win(&self, mark: Mark) -> bool {
        if mark == Mark::Empty {
            return false;
        }
        WIN_LINES
            .iter()
            .any(|line| line.iter().all(|&(r, c)| self.get(r, c) == Some(mark)))
    }

    /// True iff no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&m| m != Mark::Empty)
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&m| m == mark).count()
    }

    /// Coordinates of the empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, m)| **m == Mark::Empty)
            .map(move |(i, _)| (i / size, i % size))
    }

    /// Renders the grid: cells separated by `" | "` with a dashed rule
    /// between rows.
    pub fn render(&self, symbols: &Symbols) -> String {
        let rule = "-".repeat((self.size * 4).saturating_sub(1));
        self.cells
            .chunks(self.size.max(1))
            .map(|row| {
                row.iter()
                    .map(|&m| symbols.symbol(m).to_string())
                    .collect::<Vec<_>>()
                    .join(" | ")
            })
            .collect::<Vec<_>>()
            .join(&format!("\n{rule}\n"))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(&Symbols::default()))
    }
}

/// A mark placed on a board until this guard is dropped.
///
/// Dereferences to the board so the speculative position can be explored.
#[derive(Debug)]
pub struct Speculation<'a> {
    board: &'a mut Board,
    index: usize,
    previous: Mark,
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Speculation<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board.cells[self.index] = self.previous;
    }
}

/// Builds a 3x3 board from rows of `X` (player), `O` (computer) and blanks.
#[cfg(test)]
pub(crate) fn board_from(rows: [&str; 3]) -> Board {
    let mut board = Board::new(3);
    for (r, row) in rows.iter().enumerate() {
        for (c, ch) in row.chars().enumerate() {
            match ch {
                'X' => board.place(r, c, Mark::Player),
                'O' => board.place(r, c, Mark::Computer),
                _ => {}
            }
        }
    }
    board
}
