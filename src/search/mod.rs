//! Bounded-depth adversarial search
//!
//! Plain recursive minimax over immutable board snapshots. The depth cap is
//! small and fixed, so no iterative deepening, pruning, or caching is needed.

pub mod minimax;

pub use minimax::{minimax, successors, Node, MAX_DEPTH};
