//! Move legality and the variant capture transform
//!
//! Legality is an adjacency test: an Empty cell with at least one occupied
//! neighbor is playable. It is NOT a would-capture test.
//!
//! The capture rule departs from classical bracketing on purpose. After the
//! piece is placed, each of the 8 directions is walked outward from the
//! adjacent cell, overwriting every visited cell with the mover's color,
//! until either a cell already holding that color is reached (left untouched,
//! walk stops) or the boundary is reached (walk stops). There is no closing
//! piece requirement and no rollback: a walk that runs off the edge keeps
//! its flips, and Empty cells inside a run are overwritten along with
//! opponent pieces.

use crate::board::{Board, Cell, Pos};

/// Direction vectors for neighbor checks and capture walks (8 directions)
const DIRECTIONS: [(i32, i32); 8] = [
    (0, 1),   // Right →
    (1, 1),   // Bottom-right ↘
    (1, 0),   // Bottom ↓
    (1, -1),  // Bottom-left ↙
    (0, -1),  // Left ←
    (-1, -1), // Top-left ↖
    (-1, 0),  // Top ↑
    (-1, 1),  // Top-right ↗
];

/// Check whether a move at `pos` is legal.
///
/// A move is legal iff the target cell is Empty and at least one of its
/// grid-bounded 8-neighbors is occupied.
///
/// # Arguments
/// * `pos` - Candidate position
/// * `board` - Current board state
#[must_use]
pub fn is_legal_move(pos: Pos, board: &Board) -> bool {
    if board.get(pos) != Cell::Empty {
        return false;
    }

    DIRECTIONS.iter().any(|&(dr, dc)| {
        let row = pos.row as i32 + dr;
        let col = pos.col as i32 + dc;
        Pos::is_valid(row, col) && board.get(Pos::new(row as u8, col as u8)) != Cell::Empty
    })
}

/// All legal positions in row-major order.
///
/// Row-major enumeration is load-bearing: the search breaks ties in favor of
/// the first candidate seen, so the order here decides which move wins.
pub fn legal_moves(board: &Board) -> impl Iterator<Item = Pos> + '_ {
    Board::positions().filter(move |&pos| is_legal_move(pos, board))
}

/// Apply a move, returning the resulting board.
///
/// The input board is never modified; the caller keeps its snapshot and every
/// sibling branch of the search sees its own copy.
///
/// # Arguments
/// * `pos` - Position being played (must be legal)
/// * `color` - Mover's color (Black or White)
/// * `board` - Board before the move
///
/// # Returns
/// A new board with the piece placed and all 8 capture walks applied
#[must_use]
pub fn apply_move(pos: Pos, color: Cell, board: &Board) -> Board {
    let mut next = *board;
    next.set(pos, color);

    // Walks in distinct directions touch disjoint cells, so order is
    // irrelevant to the result.
    for &(dr, dc) in &DIRECTIONS {
        fill_direction(&mut next, pos, dr, dc, color);
    }

    next
}

/// Walk one direction from the cell adjacent to `from`, overwriting every
/// visited cell with `color`. Stops at the first cell already equal to
/// `color` (untouched) or at the boundary; flips are kept either way.
fn fill_direction(board: &mut Board, from: Pos, dr: i32, dc: i32, color: Cell) {
    let mut row = from.row as i32 + dr;
    let mut col = from.col as i32 + dc;

    while Pos::is_valid(row, col) {
        let pos = Pos::new(row as u8, col as u8);
        if board.get(pos) == color {
            return;
        }
        board.set(pos, color);
        row += dr;
        col += dc;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::parse_board;

    #[test]
    fn test_legal_requires_empty_cell() {
        let board = parse_board(
            "EEEEE\n\
             EEBEE\n\
             EEEEE\n\
             EEEEE\n\
             EEEEE",
        )
        .unwrap();

        // Occupied cell is never legal, even with occupied neighbors
        assert!(!is_legal_move(Pos::new(1, 2), &board));
        // Empty cell next to the piece is legal
        assert!(is_legal_move(Pos::new(0, 1), &board));
        assert!(is_legal_move(Pos::new(2, 3), &board));
        // Empty cell with no occupied neighbor is not
        assert!(!is_legal_move(Pos::new(4, 4), &board));
        assert!(!is_legal_move(Pos::new(3, 0), &board));
    }

    #[test]
    fn test_no_legal_move_on_empty_board() {
        let board = Board::new();
        assert_eq!(legal_moves(&board).count(), 0);
    }

    #[test]
    fn test_legal_moves_row_major_order() {
        let board = parse_board(
            "EEEEE\n\
             EEBEE\n\
             EEEEE\n\
             EEEEE\n\
             EEEEE",
        )
        .unwrap();

        let moves: Vec<Pos> = legal_moves(&board).collect();
        let mut sorted = moves.clone();
        sorted.sort();
        assert_eq!(moves, sorted);
        // The 8 neighbors of (1,2) are exactly the legal cells
        assert_eq!(moves.len(), 8);
        assert_eq!(moves[0], Pos::new(0, 1));
        assert_eq!(moves[7], Pos::new(2, 3));
    }

    #[test]
    fn test_apply_move_places_piece_and_keeps_parent() {
        let board = parse_board(
            "EEEEE\n\
             EEBEE\n\
             EEEEE\n\
             EEEEE\n\
             EEEEE",
        )
        .unwrap();

        let next = apply_move(Pos::new(1, 1), Cell::White, &board);
        assert_eq!(next.get(Pos::new(1, 1)), Cell::White);
        // Parent snapshot untouched
        assert_eq!(board.get(Pos::new(1, 1)), Cell::Empty);
    }

    #[test]
    fn test_walk_stops_at_own_color() {
        // White at (1,2): walking down meets Black at (2,2), overwrites it,
        // then stops at the White piece at (3,2) without touching it.
        let board = parse_board(
            "EEEEE\n\
             EEEEE\n\
             EEBEE\n\
             EEWEE\n\
             EEEEE",
        )
        .unwrap();

        let next = apply_move(Pos::new(1, 2), Cell::White, &board);
        assert_eq!(next.get(Pos::new(2, 2)), Cell::White);
        assert_eq!(next.get(Pos::new(3, 2)), Cell::White);
        // Beyond the stopping piece: untouched
        assert_eq!(next.get(Pos::new(4, 2)), Cell::Empty);
    }

    #[test]
    fn test_walk_to_boundary_keeps_flips() {
        // Lone Black at (2,2); Black plays (2,1). The rightward walk stops
        // at the Black piece; the leftward walk runs off the edge and its
        // flip of (2,0) is kept.
        let board = parse_board(
            "EEEEE\n\
             EEEEE\n\
             EEBEE\n\
             EEEEE\n\
             EEEEE",
        )
        .unwrap();

        let next = apply_move(Pos::new(2, 1), Cell::Black, &board);
        assert_eq!(next.get(Pos::new(2, 1)), Cell::Black);
        assert_eq!(next.get(Pos::new(2, 0)), Cell::Black);
        assert_eq!(next.get(Pos::new(2, 2)), Cell::Black);
    }

    #[test]
    fn test_occupied_count_never_decreases() {
        let board = parse_board(
            "EEEEE\n\
             EWEEE\n\
             EEBWE\n\
             EEWBE\n\
             EEEEE",
        )
        .unwrap();
        let before = board.occupied();

        for pos in legal_moves(&board) {
            for color in [Cell::Black, Cell::White] {
                let next = apply_move(pos, color, &board);
                assert!(next.occupied() >= before + 1);
                assert_eq!(next.get(pos), color);
            }
        }
    }

    #[test]
    fn test_center_cluster_scenario() {
        // 2x2 cluster at the center; White plays (1,2) adjacent to the Black
        // piece at (2,2). Expected result of all 8 walks, exact grid:
        //   right:        (1,3) (1,4) flipped, boundary exit
        //   bottom-right: stopped immediately by White at (2,3)
        //   bottom:       (2,2) flipped, stopped by White at (3,2)
        //   bottom-left:  (2,1) (3,0) flipped, boundary exit
        //   left:         (1,1) (1,0) flipped, boundary exit
        //   top-left:     (0,1) flipped, boundary exit
        //   top:          (0,2) flipped, boundary exit
        //   top-right:    (0,3) flipped, boundary exit
        let board = parse_board(
            "EEEEE\n\
             EEEEE\n\
             EEBWE\n\
             EEWBE\n\
             EEEEE",
        )
        .unwrap();

        let next = apply_move(Pos::new(1, 2), Cell::White, &board);
        let expected = parse_board(
            "EWWWE\n\
             WWWWW\n\
             EWWWE\n\
             WEWBE\n\
             EEEEE",
        )
        .unwrap();

        assert_eq!(next, expected);
    }

    #[test]
    fn test_flipped_run_is_contiguous_prefix() {
        // Black plays (0,0); the rightward run covers (0,1) Empty and (0,2)
        // White, stops at Black (0,3). The run is a contiguous prefix.
        let board = parse_board(
            "EEWBE\n\
             WEEEE\n\
             EEEEE\n\
             EEEEE\n\
             EEEEE",
        )
        .unwrap();

        let next = apply_move(Pos::new(0, 0), Cell::Black, &board);
        assert_eq!(next.get(Pos::new(0, 1)), Cell::Black);
        assert_eq!(next.get(Pos::new(0, 2)), Cell::Black);
        assert_eq!(next.get(Pos::new(0, 3)), Cell::Black);
        assert_eq!(next.get(Pos::new(0, 4)), Cell::Empty);
    }
}
