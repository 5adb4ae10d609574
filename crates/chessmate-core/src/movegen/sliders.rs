//! Sliding piece (bishop, rook, queen) move generation.

use crate::board::Board;
use crate::piece::Piece;
use crate::square::Square;

/// Orthogonal ray directions as (row, col) deltas.
pub(super) const ROOK_RAYS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal ray directions as (row, col) deltas.
pub(super) const BISHOP_RAYS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub(super) const QUEEN_RAYS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Walk each ray outward from the piece until the edge or the first occupied square.
///
/// Empty squares are candidates. The first occupied square is a candidate only
/// if it holds an opponent; either way the ray ends there.
pub(super) fn slide(piece: &Piece, board: &Board, rays: &[(i8, i8)]) -> Vec<Square> {
    let mut moves = Vec::new();
    for &(d_row, d_col) in rays {
        let mut cursor = piece.location();
        while let Some(next) = cursor.offset(d_row, d_col) {
            match board.piece_at(next) {
                None => moves.push(next),
                Some(other) => {
                    if piece.is_opponent_of(other) {
                        moves.push(next);
                    }
                    break;
                }
            }
            cursor = next;
        }
    }
    moves
}
