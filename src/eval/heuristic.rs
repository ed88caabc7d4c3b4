//! Heuristic evaluation at the search cutoff
//!
//! Counts are recomputed from the grid on every call; nothing is cached
//! across moves. The two perspectives are mirrored, not identical: the
//! maximizing side scores Black-positive, the minimizing side scores the
//! negated form, and the terminal sentinels swap accordingly.

use crate::board::{Board, Cell};

/// Sentinel scores for terminal positions.
///
/// Sentinels are only ever compared, never added or negated, so the extreme
/// integer values are safe.
pub struct Score;

impl Score {
    /// Decided win for the evaluating perspective
    pub const WIN: i32 = i32::MAX;
    /// Decided loss for the evaluating perspective
    pub const LOSS: i32 = i32::MIN;
    /// Full board with equal counts
    pub const DRAW: i32 = 0;
}

/// Which side of the minimax alternation a score is computed for.
///
/// Black always maximizes and White always minimizes; the perspective is a
/// property of the search level, not a separately tracked turn field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Perspective {
    Maximizing,
    Minimizing,
}

impl Perspective {
    /// The color that moves at this level
    #[inline]
    pub fn color(self) -> Cell {
        match self {
            Perspective::Maximizing => Cell::Black,
            Perspective::Minimizing => Cell::White,
        }
    }

    /// The perspective one ply deeper
    #[inline]
    pub fn flip(self) -> Perspective {
        match self {
            Perspective::Maximizing => Perspective::Minimizing,
            Perspective::Minimizing => Perspective::Maximizing,
        }
    }
}

/// Evaluate a board for one perspective.
///
/// Terminal boards (no Empty cell) score `Score::DRAW` on equal counts and
/// the WIN/LOSS sentinels otherwise, mirrored per perspective. Non-terminal
/// boards score `(black - white) + (blackEdge - whiteEdge)` for the
/// maximizing perspective and the negated form for the minimizing one.
#[must_use]
pub fn evaluate(board: &Board, perspective: Perspective) -> i32 {
    let counts = board.counts();

    if counts.empty == 0 {
        if counts.black == counts.white {
            return Score::DRAW;
        }
        let black_wins = counts.black > counts.white;
        return match perspective {
            Perspective::Maximizing if black_wins => Score::WIN,
            Perspective::Maximizing => Score::LOSS,
            Perspective::Minimizing if black_wins => Score::LOSS,
            Perspective::Minimizing => Score::WIN,
        };
    }

    let material = counts.black as i32 - counts.white as i32;
    let edge = counts.black_edge as i32 - counts.white_edge as i32;
    let score = material + edge;

    match perspective {
        Perspective::Maximizing => score,
        Perspective::Minimizing => -score,
    }
}
