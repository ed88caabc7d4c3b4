//! 5x5 two-color board solver
//!
//! Given a single 5x5 board position, this crate plays the game out under
//! fully-automated adversarial play and reports which color wins. The search
//! is a bounded-depth minimax (Black maximizes, White minimizes) with a
//! heuristic cutoff based on piece and edge counts.
//!
//! The capture rule is a deliberate variant of classical bracketing: a move
//! walks each of the 8 directions and flips every cell it visits, Empty cells
//! included, until it meets a piece of its own color or runs off the board.
//! Flips are kept even when a walk exits at the boundary.
//!
//! # Architecture
//!
//! - [`board`]: flat fixed-size grid with value semantics and derived counts
//! - [`rules`]: move legality and the capture transform
//! - [`eval`]: heuristic cutoff evaluation with win/loss sentinels
//! - [`search`]: recursive minimax with a fixed ply cap
//! - [`driver`]: top-level loop alternating the two sides until the board
//!   is full
//! - [`io`]: fixed-width board-file parsing and result writing
//!
//! # Quick start
//!
//! ```
//! use reversi::board::Cell;
//! use reversi::driver::GameDriver;
//! use reversi::io::parse_board;
//!
//! let board = parse_board(
//!     "EEEEE\n\
//!      EEEEE\n\
//!      EEBWE\n\
//!      EEWBE\n\
//!      EEEEE",
//! )
//! .unwrap();
//!
//! let winner = GameDriver::new().play(board);
//! assert!(winner == Cell::Black || winner == Cell::White);
//! ```

pub mod board;
pub mod driver;
pub mod eval;
pub mod io;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Pos, BOARD_SIZE};
pub use driver::{GameDriver, PlayResult};
