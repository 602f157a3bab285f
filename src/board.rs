//! Fixed 5x6 grid and the values its cells hold.
//!
//! The board is a plain data container. It performs bounds checks but no
//! rule checks: `set` will happily overwrite an occupied cell, which is what
//! the lookahead opponent relies on through [`Board::probe`].

use std::fmt;
use std::ops::Deref;

use crate::constants::{COLS, ROWS};
use crate::error::GameError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The other player.
    pub fn other(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The cell value this player's stones occupy.
    pub fn cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }
}

/// A coordinate known to lie on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Result<Self, GameError> {
        if row >= ROWS || col >= COLS {
            return Err(GameError::OutOfBounds { row, col });
        }
        Ok(Self { row, col })
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// Step once along `(d_row, d_col)`, or `None` when that leaves the board.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Coord> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Coord::new(row, col).ok()
    }

    /// True for cells on the outer ring of the board.
    pub fn is_border(self) -> bool {
        self.row == 0 || self.row == ROWS - 1 || self.col == 0 || self.col == COLS - 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The playing grid, indexed `[row][col]` with row 0 at the top.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a cell. Fails with `OutOfBounds` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        Coord::new(row, col).map(|c| self.at(c))
    }

    /// Overwrite a cell without checking that it was empty.
    pub fn set(&mut self, row: usize, col: usize, value: Cell) -> Result<(), GameError> {
        let c = Coord::new(row, col)?;
        self.put(c, value);
        Ok(())
    }

    /// Read a cell at an already-validated coordinate.
    #[inline]
    pub fn at(&self, c: Coord) -> Cell {
        self.cells[c.row][c.col]
    }

    #[inline]
    pub fn put(&mut self, c: Coord, value: Cell) {
        self.cells[c.row][c.col] = value;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| !c.is_empty())
    }

    /// Clear every cell.
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; COLS]; ROWS];
    }

    /// All empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        let mut out = Vec::with_capacity(ROWS * COLS);
        for row in 0..ROWS {
            for col in 0..COLS {
                if self.cells[row][col].is_empty() {
                    out.push(Coord { row, col });
                }
            }
        }
        out
    }

    /// Raw grid snapshot.
    pub fn rows(&self) -> &[[Cell; COLS]; ROWS] {
        &self.cells
    }

    /// Tentatively write `value` at `c`.
    ///
    /// The previous value is restored when the returned guard is dropped, on
    /// every exit path of the caller.
    pub fn probe(&mut self, c: Coord, value: Cell) -> Probe<'_> {
        let previous = self.at(c);
        self.put(c, value);
        Probe {
            board: self,
            coord: c,
            previous,
        }
    }
}

/// Scoped tentative write created by [`Board::probe`].
pub struct Probe<'a> {
    board: &'a mut Board,
    coord: Coord,
    previous: Cell,
}

impl Probe<'_> {
    pub fn coord(&self) -> Coord {
        self.coord
    }
}

impl Deref for Probe<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.board.put(self.coord, self.previous);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in 0..COLS {
            write!(f, " {col}")?;
        }
        writeln!(f)?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{row}")?;
            for cell in cells {
                let ch = match cell {
                    Cell::X => 'X',
                    Cell::O => 'O',
                    Cell::Empty => '.',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
