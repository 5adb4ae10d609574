//! Core chess rules: board model, candidate move generation, check and checkmate.

mod board;
pub mod check;
mod chess_move;
mod color;
mod error;
mod fen;
mod layout;
pub mod movegen;
mod owner;
pub mod perft;
mod piece;
mod piece_kind;
mod square;

pub use board::Board;
pub use chess_move::Move;
pub use color::Color;
pub use error::{BoardError, FenError};
pub use fen::STARTING_PLACEMENT;
pub use layout::starting_pieces;
pub use owner::Owner;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::Square;
