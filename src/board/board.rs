//! Flat fixed-size board with value semantics
//!
//! Every move produces a brand-new `Board`; nothing mutates a board that
//! another search branch can still see. The grid is small enough (25 cells)
//! that `Copy` is the cheapest way to get that guarantee.

use super::{Cell, Pos, BOARD_SIZE, TOTAL_CELLS};
use std::fmt;

/// Game board: a row-major flat grid of 25 cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
}

/// Piece counts derived from a board, recomputed on demand.
///
/// Counts are never cached across moves: a fresh `counts()` call after every
/// board change keeps them trivially consistent with the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counts {
    pub black: u32,
    pub white: u32,
    pub empty: u32,
    /// Black pieces on the outer ring
    pub black_edge: u32,
    /// White pieces on the outer ring
    pub white_edge: u32,
}

impl Board {
    /// All-Empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; TOTAL_CELLS],
        }
    }

    /// Build a board from a row-major cell array
    #[inline]
    pub fn from_cells(cells: [Cell; TOTAL_CELLS]) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Set cell at position
    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// True when no Empty cell remains (the terminal condition)
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Recount pieces and edge pieces over the whole grid.
    ///
    /// Invariant: `black + white + empty == TOTAL_CELLS`.
    #[must_use]
    pub fn counts(&self) -> Counts {
        let mut counts = Counts::default();

        for idx in 0..TOTAL_CELLS {
            let pos = Pos::from_index(idx);
            match self.cells[idx] {
                Cell::Black => {
                    counts.black += 1;
                    if pos.is_edge() {
                        counts.black_edge += 1;
                    }
                }
                Cell::White => {
                    counts.white += 1;
                    if pos.is_edge() {
                        counts.white_edge += 1;
                    }
                }
                Cell::Empty => counts.empty += 1,
            }
        }

        counts
    }

    /// Total occupied cells
    #[inline]
    pub fn occupied(&self) -> u32 {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count() as u32
    }

    /// Row-major iterator over all positions
    pub fn positions() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).map(Pos::from_index)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// One line per row, cells as 'B' / 'W' / 'E' (the board file format)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                write!(f, "{}", self.get(Pos::new(row as u8, col as u8)).as_char())?;
            }
            if row + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
