//! Recursive minimax with a fixed ply cap
//!
//! Black maximizes and White minimizes. The mover's color at each level is
//! implied by the alternating perspective, not tracked on the board. Every
//! child node owns a fresh board copy, so sibling branches can never observe
//! each other's moves.
//!
//! Selection uses strict comparison (`>` for the maximizing level, `<` for
//! the minimizing one), so among equal-cost children the first one seen in
//! row-major move order wins.

use crate::board::{Board, Cell};
use crate::eval::{evaluate, Perspective};
use crate::rules::{apply_move, legal_moves};

/// Search depth cap in plies
pub const MAX_DEPTH: u8 = 3;

/// One node of the search tree: an immutable board snapshot, the color of
/// the move that produced it, and the cost backed up by the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub board: Board,
    /// Color of the move that created this node; the root carries Black
    pub color: Cell,
    /// Backed-up cost; meaningful only on nodes returned by [`minimax`]
    pub cost: i32,
}

impl Node {
    #[inline]
    pub fn new(board: Board, color: Cell) -> Self {
        Self {
            board,
            color,
            cost: 0,
        }
    }

    /// Terminal when the board has no Empty cell left
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.board.is_full()
    }

    #[inline]
    fn with_cost(mut self, cost: i32) -> Self {
        self.cost = cost;
        self
    }
}

/// Generate all children of `node` for the given level.
///
/// Cells are tried in row-major order and each legal one is played with the
/// color the level implies (Black when maximizing, White when minimizing).
pub fn successors(node: &Node, perspective: Perspective) -> Vec<Node> {
    let color = perspective.color();
    legal_moves(&node.board)
        .map(|pos| Node::new(apply_move(pos, color, &node.board), color))
        .collect()
}

/// Bounded-depth minimax.
///
/// Returns the selected immediate successor of `node`, annotated with the
/// cost backed up from its subtree. At the depth cutoff, on terminal nodes,
/// and when the mover has no legal move, `node` itself is returned annotated
/// with its own heuristic — the no-move case is a defined pass fallback, not
/// an error.
#[must_use]
pub fn minimax(node: Node, depth: u8, perspective: Perspective) -> Node {
    if depth == 0 || node.is_terminal() {
        let cost = evaluate(&node.board, perspective);
        return node.with_cost(cost);
    }

    let mut children = successors(&node, perspective).into_iter();

    let first = match children.next() {
        Some(child) => child,
        None => {
            let cost = evaluate(&node.board, perspective);
            return node.with_cost(cost);
        }
    };

    let below = perspective.flip();
    let mut best = first.with_cost(minimax(first, depth - 1, below).cost);

    for child in children {
        let cost = minimax(child, depth - 1, below).cost;
        let better = match perspective {
            Perspective::Maximizing => cost > best.cost,
            Perspective::Minimizing => cost < best.cost,
        };
        if better {
            best = child.with_cost(cost);
        }
    }

    best
}
