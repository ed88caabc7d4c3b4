//! Board file input and result output
//!
//! The board format is a fixed-width text grid: exactly 5 lines of exactly
//! 5 characters, each drawn from {B, W, E}. The result format is a single
//! character, the winning color.
//!
//! All malformed input is rejected here; the core modules only ever see
//! well-formed boards.

use std::fs;
use std::path::Path;

use crate::board::{Board, Cell, Pos, BOARD_SIZE, TOTAL_CELLS};

/// Errors raised while reading or parsing a board file.
#[derive(Debug, thiserror::Error)]
pub enum ParseBoardError {
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid cell character {found:?} at row {row}, column {col}")]
    InvalidChar { row: usize, col: usize, found: char },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse a board from its fixed-width text form.
///
/// # Arguments
/// * `text` - Exactly `BOARD_SIZE` lines of `BOARD_SIZE` characters from
///   {B, W, E}; a trailing newline is tolerated
pub fn parse_board(text: &str) -> Result<Board, ParseBoardError> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() != BOARD_SIZE {
        return Err(ParseBoardError::RowCount {
            expected: BOARD_SIZE,
            found: lines.len(),
        });
    }

    let mut cells = [Cell::Empty; TOTAL_CELLS];
    for (row, line) in lines.iter().enumerate() {
        let width = line.chars().count();
        if width != BOARD_SIZE {
            return Err(ParseBoardError::RowWidth {
                row,
                expected: BOARD_SIZE,
                found: width,
            });
        }
        for (col, c) in line.chars().enumerate() {
            let cell = Cell::from_char(c).ok_or(ParseBoardError::InvalidChar {
                row,
                col,
                found: c,
            })?;
            cells[Pos::new(row as u8, col as u8).to_index()] = cell;
        }
    }

    Ok(Board::from_cells(cells))
}

/// Read and parse a board file.
pub fn read_board(path: &Path) -> Result<Board, ParseBoardError> {
    let text = fs::read_to_string(path)?;
    parse_board(&text)
}

/// Write the single-character result file.
pub fn write_winner(path: &Path, winner: Cell) -> Result<(), std::io::Error> {
    fs::write(path, winner.as_char().to_string())
}
