//! FEN piece-placement parsing and serialization for [`Board`].
//!
//! Only the first FEN field is used. Any further fields (side to move,
//! castling, counters) are ignored because the board tracks none of them.

use std::fmt;

use crate::board::Board;
use crate::color::Color;
use crate::error::FenError;
use crate::owner::Owner;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The piece placement of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl Board {
    /// Build a board from a FEN piece placement and refresh every move list.
    ///
    /// Uppercase letters are White pieces owned by `white`, lowercase letters
    /// are Black pieces owned by `black`. The first rank listed is row 0.
    /// No king-count validation is done, so partial fixtures are accepted;
    /// call [`Board::validate`] for a playable position.
    pub fn from_placement(fen: &str, white: &Owner, black: &Owner) -> Result<Board, FenError> {
        let placement = fen.split_whitespace().next().ok_or(FenError::Empty)?;

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != Square::SIZE as usize {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (rank_index, rank_str) in ranks.iter().enumerate() {
            let mut col: u8 = 0;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(FenError::InvalidPieceChar { character: c });
                    }
                    col = col.saturating_add(digit as u8);
                    continue;
                }

                let kind =
                    PieceKind::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                let (color, owner) = if c.is_ascii_uppercase() {
                    (Color::White, white)
                } else {
                    (Color::Black, black)
                };

                let sq = Square::new(rank_index as u8, col).ok_or(FenError::BadRankLength {
                    rank_index,
                    length: col as usize + 1,
                })?;
                board.place(Piece::new(kind, color, owner.clone(), sq));
                col += 1;
            }

            if col != Square::SIZE {
                return Err(FenError::BadRankLength {
                    rank_index,
                    length: col as usize,
                });
            }
        }

        board.update_moves();
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_idx, row) in self.rows().enumerate() {
            let mut empty_count = 0u8;

            for cell in row {
                match cell {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{}", piece.fen_char())?;
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }

            if row_idx < Square::SIZE as usize - 1 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}
