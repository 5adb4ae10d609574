//! The chess board: an 8x8 grid that exclusively owns every piece.

use std::array;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::color::Color;
use crate::error::BoardError;
use crate::layout::starting_pieces;
use crate::movegen::candidate_moves;
use crate::owner::Owner;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

type Grid = [[Option<Piece>; 8]; 8];

/// Complete position state.
///
/// Every piece lives in exactly one cell and its `location` equals that cell.
/// Candidate move lists are refreshed for the whole board by
/// [`Board::update_moves`]; nothing patches them incrementally.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    grid: Grid,
}

impl Board {
    /// Return a board with no pieces.
    pub fn empty() -> Board {
        Board {
            grid: array::from_fn(|_| array::from_fn(|_| None)),
        }
    }

    /// Place two full piece sets and compute every candidate list.
    pub fn build(side1: Vec<Piece>, side2: Vec<Piece>) -> Board {
        let mut board = Board::empty();
        for piece in side1.into_iter().chain(side2) {
            board.place(piece);
        }
        board.update_moves();
        board
    }

    /// Return the standard starting position for the two owners.
    pub fn starting_position(white: &Owner, black: &Owner) -> Board {
        Board::build(
            starting_pieces(Color::White, white),
            starting_pieces(Color::Black, black),
        )
    }

    /// Put `piece` on the cell named by its location, returning any previous occupant.
    ///
    /// Move lists are not refreshed.
    pub fn place(&mut self, piece: Piece) -> Option<Piece> {
        let sq = piece.location();
        self.cell_mut(sq).replace(piece)
    }

    /// Move the piece on `from` to `to`, capturing whatever stood there.
    ///
    /// Returns the captured piece. Moving a piece onto its own square changes
    /// nothing. An empty `from` is a no-op. Candidate lists are stale afterwards.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        if from == to {
            return None;
        }
        let mut piece = self.cell_mut(from).take()?;
        trace!(piece = ?piece, %to, "move piece");
        piece.set_location(to);
        self.cell_mut(to).replace(piece)
    }

    /// Recompute the candidate list of every piece from the current occupancy.
    pub fn update_moves(&mut self) {
        let fresh: Vec<(Square, Vec<Square>)> = self
            .pieces()
            .map(|piece| (piece.location(), candidate_moves(piece, self)))
            .collect();
        for (sq, moves) in fresh {
            if let Some(piece) = self.cell_mut(sq).as_mut() {
                piece.set_moves(moves);
            }
        }
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.grid[sq.row() as usize][sq.col() as usize].as_ref()
    }

    /// Return `true` if `sq` holds a piece.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.piece_at(sq).is_some()
    }

    /// Return the king belonging to `owner`, if it is on the board.
    pub fn find_king(&self, owner: &Owner) -> Option<&Piece> {
        self.pieces()
            .find(|p| p.is_owned_by(owner) && p.kind() == PieceKind::King)
    }

    /// Return the square of `owner`'s king.
    ///
    /// # Panics
    ///
    /// Panics if `owner` has no king (invalid board state).
    pub fn king_square(&self, owner: &Owner) -> Square {
        self.find_king(owner)
            .map(Piece::location)
            .expect("board must have a king for each player")
    }

    /// All pieces not owned by `owner`.
    pub fn attackers<'a>(&'a self, owner: &'a Owner) -> impl Iterator<Item = &'a Piece> {
        self.pieces().filter(move |p| !p.is_owned_by(owner))
    }

    /// All pieces owned by `owner`.
    pub fn defenders<'a>(&'a self, owner: &'a Owner) -> impl Iterator<Item = &'a Piece> {
        self.pieces().filter(move |p| p.is_owned_by(owner))
    }

    /// All pieces, row by row from (0, 0).
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.grid.iter().flatten().flatten()
    }

    /// Read-only rows of the grid, row 0 first.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Piece>; 8]> {
        self.grid.iter()
    }

    /// Distinct owners in order of first appearance.
    pub fn owners(&self) -> Vec<&Owner> {
        let mut owners: Vec<&Owner> = Vec::new();
        for piece in self.pieces() {
            if !owners.contains(&piece.owner()) {
                owners.push(piece.owner());
            }
        }
        owners
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        for sq in Square::all() {
            let Some(piece) = self.piece_at(sq) else {
                continue;
            };
            if piece.location() != sq {
                return Err(BoardError::MisplacedPiece {
                    cell: sq,
                    location: piece.location(),
                });
            }
            if piece
                .moves()
                .iter()
                .any(|m| Square::new(m.row(), m.col()).is_none())
            {
                return Err(BoardError::OffBoardMove { from: sq });
            }
        }

        let owners = self.owners();
        if owners.len() > 2 {
            return Err(BoardError::TooManyOwners {
                count: owners.len(),
            });
        }

        for owner in owners {
            let mut colors = self.defenders(owner).map(Piece::color);
            if let Some(first) = colors.next() {
                if colors.any(|c| c != first) {
                    return Err(BoardError::MixedColors {
                        owner: owner.to_string(),
                    });
                }
            }

            let kings = self
                .defenders(owner)
                .filter(|p| p.kind() == PieceKind::King)
                .count();
            if kings != 1 {
                return Err(BoardError::InvalidKingCount {
                    owner: owner.to_string(),
                    count: kings,
                });
            }
        }

        Ok(())
    }

    #[inline]
    fn cell_mut(&mut self, sq: Square) -> &mut Option<Piece> {
        &mut self.grid[sq.row() as usize][sq.col() as usize]
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}
