//! Perft (performance test) for move generation correctness verification.
//!
//! The rules here have no castling, en passant or promotion. None of those
//! can occur within the first four plies from the starting position, so the
//! standard perft counts hold up to depth 4.

use crate::board::Board;
use crate::check::{legal_moves, simulate};
use crate::owner::Owner;

/// Count the leaf nodes `depth` plies deep, starting with `to_move`.
///
/// Depth 0 returns 1 (the current position). The board must have fresh move lists.
pub fn perft(board: &Board, to_move: &Owner, next: &Owner, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(board, to_move);

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|mv| perft(&simulate(board, mv), next, to_move, depth - 1))
        .sum()
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns `(move, node_count)` pairs sorted by move text.
pub fn divide(board: &Board, to_move: &Owner, next: &Owner, depth: usize) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = legal_moves(board, to_move)
        .into_iter()
        .map(|mv| {
            let count = if depth <= 1 {
                1
            } else {
                perft(&simulate(board, mv), next, to_move, depth - 1)
            };
            (mv.to_string(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::owner::Owner;

    fn start() -> (Board, Owner, Owner) {
        let white = Owner::from("white");
        let black = Owner::from("black");
        (Board::starting_position(&white, &black), white, black)
    }

    #[test]
    fn perft_depth_0() {
        let (board, white, black) = start();
        assert_eq!(perft(&board, &white, &black, 0), 1);
    }

    #[test]
    fn perft_startpos_depth_1() {
        let (board, white, black) = start();
        assert_eq!(perft(&board, &white, &black, 1), 20);
    }

    #[test]
    fn perft_startpos_depth_2() {
        let (board, white, black) = start();
        assert_eq!(perft(&board, &white, &black, 2), 400);
    }

    #[test]
    fn perft_startpos_depth_3() {
        let (board, white, black) = start();
        assert_eq!(perft(&board, &white, &black, 3), 8_902);
    }

    #[test]
    #[ignore] // slow
    fn perft_startpos_depth_4() {
        let (board, white, black) = start();
        assert_eq!(perft(&board, &white, &black, 4), 197_281);
    }

    #[test]
    fn black_moves_first_is_symmetric() {
        let (board, white, black) = start();
        assert_eq!(perft(&board, &black, &white, 2), 400);
    }

    #[test]
    fn divide_startpos_depth_1() {
        let (board, white, black) = start();
        let results = divide(&board, &white, &black, 1);
        assert_eq!(results.len(), 20);
        assert!(results.iter().all(|(_, count)| *count == 1));
        assert!(results.iter().any(|(mv, _)| mv == "e2e4"));
        assert!(results.iter().any(|(mv, _)| mv == "g1f3"));
    }
}
