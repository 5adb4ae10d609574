//! Error types for placement parsing and board validation.

use crate::square::Square;

/// Errors that occur when parsing a FEN piece-placement field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The input contained no placement field at all.
    #[error("empty piece placement")]
    Empty,
    /// The piece placement does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index, which is also the board row.
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// An owner does not have exactly one king.
    #[error("expected 1 king for {owner}, found {count}")]
    InvalidKingCount {
        /// The owner with the wrong king count.
        owner: String,
        /// Number of kings found.
        count: usize,
    },
    /// More than two players own pieces.
    #[error("expected at most 2 owners, found {count}")]
    TooManyOwners {
        /// Number of distinct owners.
        count: usize,
    },
    /// One owner controls pieces of both colors.
    #[error("{owner} owns pieces of both colors")]
    MixedColors {
        /// The offending owner.
        owner: String,
    },
    /// A piece's recorded location differs from the cell holding it.
    #[error("piece in cell {cell} records location {location}")]
    MisplacedPiece {
        /// The grid cell holding the piece.
        cell: Square,
        /// The location the piece claims.
        location: Square,
    },
    /// A cached candidate move lies outside the board.
    #[error("piece on {from} lists an off-board destination")]
    OffBoardMove {
        /// Square of the piece with the bad move list.
        from: Square,
    },
}
