//! Errors raised while running a game.

use chessmate_core::{BoardError, Move, PieceKind, Square};

/// Errors that can occur while playing, saving or loading a game.
///
/// The move-related variants are user mistakes: the session reports them and
/// prompts again. I/O and YAML failures end the session.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    /// The text is not a coordinate such as `g2`.
    #[error("invalid coordinates: \"{input}\", expected a file a-h and a rank 1-8 such as 'g2'")]
    InvalidSquare {
        /// The rejected input.
        input: String,
    },

    /// The square is empty or holds an opponent's piece.
    #[error("you do not have a piece on {square}")]
    NotYourPiece {
        /// The selected square.
        square: Square,
    },

    /// The selected piece has no candidate destination.
    #[error("your {kind} on {square} cannot move")]
    Immobile {
        /// Kind of the selected piece.
        kind: PieceKind,
        /// The selected square.
        square: Square,
    },

    /// The destination is not among the piece's candidates.
    #[error("your {kind} cannot move to {to}")]
    Unreachable {
        /// Kind of the moving piece.
        kind: PieceKind,
        /// The requested destination.
        to: Square,
    },

    /// The move would leave the mover's own king attacked.
    #[error("{mv} would leave your king in check")]
    LeavesKingInCheck {
        /// The rejected move.
        mv: Move,
    },

    /// A move was requested after checkmate.
    #[error("the game is already over")]
    GameOver,

    /// A save name is empty or has characters other than letters, digits and spaces.
    #[error("save name \"{name}\" must be letters, digits and spaces")]
    InvalidSaveName {
        /// The rejected name.
        name: String,
    },

    /// A save with this name already exists.
    #[error("a saved game named \"{name}\" already exists")]
    SaveExists {
        /// The taken name.
        name: String,
    },

    /// No save with this name exists.
    #[error("no saved game named \"{name}\"")]
    SaveNotFound {
        /// The requested name.
        name: String,
    },

    /// The saved board breaks a structural invariant.
    #[error("saved board is invalid: {source}")]
    InvalidBoard {
        /// The underlying validation error.
        #[from]
        source: BoardError,
    },

    /// The saved players, turn or board owners do not fit together.
    #[error("saved game is inconsistent: {reason}")]
    InconsistentSave {
        /// What did not match.
        reason: String,
    },

    /// A save or configuration file is not valid YAML for its type.
    #[error("YAML error: {source}")]
    Yaml {
        /// The underlying serde_yaml error.
        #[from]
        source: serde_yaml::Error,
    },

    /// Reading input or touching the filesystem failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Input ended before the session finished.
    #[error("input closed")]
    InputClosed,
}
