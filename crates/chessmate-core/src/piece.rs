//! A single chess unit and its cached candidate moves.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::owner::Owner;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A piece on the board.
///
/// `location` always matches the grid cell the piece sits in; only
/// [`Board`](crate::Board) may change it. `moves` holds the pseudo-legal
/// destinations computed by the last [`Board::update_moves`](crate::Board::update_moves)
/// and is stale after any board mutation until the next refresh.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    owner: Owner,
    location: Square,
    #[serde(default)]
    moves: Vec<Square>,
}

impl Piece {
    /// Create a piece with an empty move list.
    pub fn new(kind: PieceKind, color: Color, owner: Owner, location: Square) -> Piece {
        Piece {
            kind,
            color,
            owner,
            location,
            moves: Vec::new(),
        }
    }

    /// Return the piece kind.
    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Return the player controlling this piece.
    #[inline]
    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    /// Return the square this piece stands on.
    #[inline]
    pub fn location(&self) -> Square {
        self.location
    }

    /// Candidate destinations from the last refresh, in generation order.
    #[inline]
    pub fn moves(&self) -> &[Square] {
        &self.moves
    }

    /// Return `true` if `sq` is one of this piece's candidate destinations.
    #[inline]
    pub fn can_reach(&self, sq: Square) -> bool {
        self.moves.contains(&sq)
    }

    /// Return `true` if `other` belongs to a different player.
    #[inline]
    pub fn is_opponent_of(&self, other: &Piece) -> bool {
        self.owner != other.owner
    }

    /// Return `true` if `owner` controls this piece.
    #[inline]
    pub fn is_owned_by(&self, owner: &Owner) -> bool {
        &self.owner == owner
    }

    /// Return the FEN character: uppercase for White, lowercase for Black.
    pub fn fen_char(&self) -> char {
        let base = self.kind.fen_char();
        match self.color {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }

    #[inline]
    pub(crate) fn set_location(&mut self, sq: Square) {
        self.location = sq;
    }

    #[inline]
    pub(crate) fn set_moves(&mut self, moves: Vec<Square>) {
        self.moves = moves;
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.fen_char(), self.location)
    }
}
