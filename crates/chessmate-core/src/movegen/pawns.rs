//! Pawn move generation.

use crate::board::Board;
use crate::piece::Piece;
use crate::square::Square;

/// Generate pawn candidates: pushes onto empty squares, diagonal captures only.
pub(super) fn pawn_moves(piece: &Piece, board: &Board) -> Vec<Square> {
    let color = piece.color();
    let src = piece.location();
    let dir = color.forward();
    let mut moves = Vec::with_capacity(4);

    // --- Pushes ---
    if let Some(one) = src.offset(dir, 0) {
        if !board.is_occupied(one) {
            moves.push(one);
            if src.row() == color.pawn_row() {
                if let Some(two) = one.offset(dir, 0) {
                    if !board.is_occupied(two) {
                        moves.push(two);
                    }
                }
            }
        }
    }

    // --- Captures ---
    for d_col in [-1, 1] {
        let Some(target) = src.offset(dir, d_col) else {
            continue;
        };
        if board
            .piece_at(target)
            .is_some_and(|other| piece.is_opponent_of(other))
        {
            moves.push(target);
        }
    }

    moves
}
