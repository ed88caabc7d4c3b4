//! Game rules: move legality and the capture transform
//!
//! The capture rule here is a deliberate variant of classical bracketing
//! capture; see [`moves`] for the exact walk semantics.

pub mod moves;

// Re-exports for convenient access
pub use moves::{apply_move, is_legal_move, legal_moves};
