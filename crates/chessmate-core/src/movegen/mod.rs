//! Pseudo-legal candidate move generation.
//!
//! Candidates obey movement and occupancy rules only; whether a move leaves
//! the mover's own king in check is decided by [`crate::check`].

mod pawns;
mod sliders;
mod steppers;

use crate::board::Board;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use self::pawns::pawn_moves;
use self::sliders::{BISHOP_RAYS, QUEEN_RAYS, ROOK_RAYS, slide};
use self::steppers::{KING_STEPS, KNIGHT_STEPS, step};

/// Compute the candidate destinations of `piece` on `board`.
///
/// The result depends only on the piece and the current occupancy; the
/// piece's cached list is neither read nor written.
pub fn candidate_moves(piece: &Piece, board: &Board) -> Vec<Square> {
    match piece.kind() {
        PieceKind::Pawn => pawn_moves(piece, board),
        PieceKind::Knight => step(piece, board, &KNIGHT_STEPS),
        PieceKind::Bishop => slide(piece, board, &BISHOP_RAYS),
        PieceKind::Rook => slide(piece, board, &ROOK_RAYS),
        PieceKind::Queen => slide(piece, board, &QUEEN_RAYS),
        PieceKind::King => step(piece, board, &KING_STEPS),
    }
}

/// Return `true` if `target` is empty or holds a piece hostile to `piece`.
#[inline]
fn is_free_or_hostile(piece: &Piece, board: &Board, target: Square) -> bool {
    board
        .piece_at(target)
        .is_none_or(|other| piece.is_opponent_of(other))
}
