//! Terminal rendering of the board.

use std::fmt;

use chessmate_core::{Board, Color, Piece, PieceKind};

/// Unicode glyph for a piece.
pub fn glyph(piece: &Piece) -> char {
    match (piece.color(), piece.kind()) {
        (Color::White, PieceKind::King) => '♔',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::Black, PieceKind::King) => '♚',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Pawn) => '♟',
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, rank 8 at the top.
pub struct PrettyBoard<'a>(pub &'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_idx, row) in self.0.rows().enumerate() {
            write!(f, "{}  ", 8 - row_idx)?;
            for (col_idx, cell) in row.iter().enumerate() {
                let c = cell.as_ref().map_or('.', glyph);
                if col_idx < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::PrettyBoard;
    use chessmate_core::{Board, Owner};

    #[test]
    fn pretty_print_start() {
        let board = Board::starting_position(&Owner::from("w"), &Owner::from("b"));
        let output = format!("{}", PrettyBoard(&board));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8  ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜");
        assert_eq!(lines[1], "7  ♟ ♟ ♟ ♟ ♟ ♟ ♟ ♟");
        assert_eq!(lines[4], "4  . . . . . . . .");
        assert_eq!(lines[7], "1  ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖");
        assert_eq!(lines[8], "   a b c d e f g h");
    }
}
