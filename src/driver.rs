//! Top-level game driver
//!
//! Plays a position out to the end by alternating maximizing (Black) and
//! minimizing (White) searches, then declares the winner from the final
//! counts.
//!
//! # Example
//!
//! ```
//! use reversi::driver::GameDriver;
//! use reversi::io::parse_board;
//! use reversi::board::Cell;
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

use crate::board::{Board, Cell};
use crate::eval::Perspective;
use crate::rules::legal_moves;
use crate::search::{minimax, Node, MAX_DEPTH};

/// Outcome of a played-out game with driver diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayResult {
    /// Winning color, always Black or White
    pub winner: Cell,
    /// Number of moves made by the driver loop
    pub turns: u32,
    /// True when the game ended because the mover had no legal cell
    pub passed: bool,
}

/// Drives a board position to a terminal state.
#[derive(Debug, Clone, Copy)]
pub struct GameDriver {
    depth: u8,
}

impl GameDriver {
    /// Driver with the standard search depth
    pub fn new() -> Self {
        Self { depth: MAX_DEPTH }
    }

    /// Driver with a custom search depth (clamped to at least 1 ply, since a
    /// 0-ply search cannot produce a successor)
    pub fn with_depth(depth: u8) -> Self {
        Self {
            depth: depth.max(1),
        }
    }

    /// Play the game out and return only the winner.
    #[must_use]
    pub fn play(&self, board: Board) -> Cell {
        self.play_with_stats(board).winner
    }

    /// Play the game out from `board` until no Empty cell remains.
    ///
    /// Black moves first and the sides alternate. A mover with no legal cell
    /// ends the game immediately and the winner rule is applied to the
    /// current position; on a 5x5 grid this only happens for the all-Empty
    /// board, where it is the sole way to terminate at all.
    ///
    /// Each iteration fills at least one cell, so the loop runs at most
    /// `empty-cell count` times.
    #[must_use]
    pub fn play_with_stats(&self, board: Board) -> PlayResult {
        let mut node = Node::new(board, Cell::Black);
        let mut perspective = Perspective::Maximizing;
        let mut turns = 0u32;
        let mut passed = false;

        while !node.is_terminal() {
            if legal_moves(&node.board).next().is_none() {
                passed = true;
                break;
            }
            node = minimax(node, self.depth, perspective);
            perspective = perspective.flip();
            turns += 1;
        }

        PlayResult {
            winner: decide_winner(&node),
            turns,
            passed,
        }
    }
}

impl Default for GameDriver {
    fn default() -> Self {
        Self::new()
    }
}

/// Winner rule: the final node's stored color keeps the win only with a
/// strict count majority, so ties resolve against the final mover. The
/// heuristic's internal draw value never reaches this decision.
fn decide_winner(node: &Node) -> Cell {
    let counts = node.board.counts();
    match node.color {
        Cell::White => {
            if counts.white > counts.black {
                Cell::White
            } else {
                Cell::Black
            }
        }
        // The root node carries Black, so Empty cannot reach here; fold it
        // into the Black arm for totality.
        Cell::Black | Cell::Empty => {
            if counts.black > counts.white {
                Cell::Black
            } else {
                Cell::White
            }
        }
    }
}
