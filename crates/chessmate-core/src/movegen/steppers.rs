//! Stepping piece (knight, king) move generation.

use crate::board::Board;
use crate::piece::Piece;
use crate::square::Square;

use super::is_free_or_hostile;

pub(super) const KNIGHT_STEPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(super) const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Each offset that lands on the board, on an empty or opponent-held square.
pub(super) fn step(piece: &Piece, board: &Board, offsets: &[(i8, i8)]) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&(d_row, d_col)| piece.location().offset(d_row, d_col))
        .filter(|&target| is_free_or_hostile(piece, board, target))
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::color::Color;
    use crate::movegen::tests::{moves_of, put, sq};
    use crate::piece_kind::PieceKind;

    #[test]
    fn knight_in_corner_has_2() {
        let mut board = Board::empty();
        put(&mut board, PieceKind::Knight, Color::White, sq(0, 0));
        assert_eq!(moves_of(&board, sq(0, 0)), vec![sq(1, 2), sq(2, 1)]);
    }

    #[test]
    fn knight_in_center_has_8() {
        let mut board = Board::empty();
        put(&mut board, PieceKind::Knight, Color::Black, sq(4, 4));
        assert_eq!(moves_of(&board, sq(4, 4)).len(), 8);
    }

    #[test]
    fn knight_jumps_over_but_not_onto_friends() {
        let mut board = Board::empty();
        put(&mut board, PieceKind::Knight, Color::White, sq(7, 1));
        put(&mut board, PieceKind::Pawn, Color::White, sq(6, 1));
        put(&mut board, PieceKind::Pawn, Color::White, sq(6, 3));
        put(&mut board, PieceKind::Pawn, Color::Black, sq(5, 2));
        assert_eq!(moves_of(&board, sq(7, 1)), vec![sq(5, 0), sq(5, 2)]);
    }

    #[test]
    fn king_steps() {
        let mut board = Board::empty();
        put(&mut board, PieceKind::King, Color::White, sq(7, 4));
        assert_eq!(moves_of(&board, sq(7, 4)).len(), 5);

        put(&mut board, PieceKind::Queen, Color::White, sq(7, 3));
        put(&mut board, PieceKind::Rook, Color::Black, sq(6, 4));
        let moves = moves_of(&board, sq(7, 4));
        assert_eq!(moves, vec![sq(6, 3), sq(6, 4), sq(6, 5), sq(7, 5)]);
    }
}
