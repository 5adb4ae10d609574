//! The standard starting layout: one 16-piece set per side.

use crate::color::Color;
use crate::owner::Owner;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Return the 16 starting pieces for `color`, all owned by `owner`.
///
/// Pawns come first (column order), then the back row (column order).
pub fn starting_pieces(color: Color, owner: &Owner) -> Vec<Piece> {
    let pawns = (0..Square::SIZE).map(|col| {
        Piece::new(
            PieceKind::Pawn,
            color,
            owner.clone(),
            Square::new_unchecked(color.pawn_row(), col),
        )
    });
    let back = PieceKind::BACK_ROW.into_iter().zip(0..Square::SIZE).map(|(kind, col)| {
        Piece::new(
            kind,
            color,
            owner.clone(),
            Square::new_unchecked(color.back_row(), col),
        )
    });
    pawns.chain(back).collect()
}

#[cfg(test)]
mod tests {
    use super::starting_pieces;
    use crate::color::Color;
    use crate::owner::Owner;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn sixteen_pieces_per_side() {
        for color in Color::ALL {
            let pieces = starting_pieces(color, &Owner::from("p"));
            assert_eq!(pieces.len(), 16);
            let kings = pieces.iter().filter(|p| p.kind() == PieceKind::King).count();
            let pawns = pieces.iter().filter(|p| p.kind() == PieceKind::Pawn).count();
            assert_eq!(kings, 1);
            assert_eq!(pawns, 8);
        }
    }

    #[test]
    fn sides_are_mirrored() {
        let white = starting_pieces(Color::White, &Owner::from("w"));
        let black = starting_pieces(Color::Black, &Owner::from("b"));
        for (w, b) in white.iter().zip(&black) {
            assert_eq!(w.kind(), b.kind());
            assert_eq!(w.location().col(), b.location().col());
            assert_eq!(w.location().row(), 7 - b.location().row());
        }
    }

    #[test]
    fn kings_on_e_file() {
        let white = starting_pieces(Color::White, &Owner::from("w"));
        let king = white.iter().find(|p| p.kind() == PieceKind::King).unwrap();
        assert_eq!(king.location(), Square::new(7, 4).unwrap());
    }
}
