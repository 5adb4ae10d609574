//! Turn sequencing with trial-and-rollback legality.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use chessmate_core::check::{is_checkmate, is_in_check};
use chessmate_core::{Board, Color, Move, Owner, Piece, Square};

use crate::error::PlayError;

/// Who drives a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Computer,
}

/// A participant: the identity stamped on its pieces and how it moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: Owner,
    pub kind: PlayerKind,
}

impl Player {
    pub fn human(name: impl Into<String>) -> Player {
        Player {
            name: Owner::new(name),
            kind: PlayerKind::Human,
        }
    }

    pub fn computer(name: impl Into<String>) -> Player {
        Player {
            name: Owner::new(name),
            kind: PlayerKind::Computer,
        }
    }

    #[inline]
    pub fn is_computer(&self) -> bool {
        self.kind == PlayerKind::Computer
    }
}

/// Result of the game so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    /// The side to move is mated; `winner` moved last.
    Checkmate { winner: Color },
}

/// A game in progress: board, players, side to move and check status.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: [Player; Color::COUNT],
    turn: Color,
    check: bool,
    outcome: Outcome,
}

impl Game {
    /// Start a new game from the standard layout. White moves first.
    pub fn new(white: Player, black: Player) -> Game {
        let board = Board::starting_position(&white.name, &black.name);
        info!(white = %white.name, black = %black.name, "new game");
        Game {
            board,
            players: [white, black],
            turn: Color::White,
            check: false,
            outcome: Outcome::Ongoing,
        }
    }

    /// Reassemble a game from saved parts without building a fresh board.
    ///
    /// Move lists are refreshed once. A restored position that is already
    /// mate is reported as such.
    pub fn from_parts(mut board: Board, white: Player, black: Player, turn: Color) -> Game {
        board.update_moves();
        let mut game = Game {
            board,
            players: [white, black],
            turn,
            check: false,
            outcome: Outcome::Ongoing,
        };
        game.refresh_status();
        game
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn player(&self, color: Color) -> &Player {
        &self.players[color.index()]
    }

    /// The player whose turn it is.
    #[inline]
    pub fn current(&self) -> &Player {
        self.player(self.turn)
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Whether the side to move is in check.
    #[inline]
    pub fn in_check(&self) -> bool {
        self.check
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The winning player once the game is over.
    pub fn winner(&self) -> Option<&Player> {
        match self.outcome {
            Outcome::Ongoing => None,
            Outcome::Checkmate { winner } => Some(self.player(winner)),
        }
    }

    /// Check that `sq` holds a piece of the side to move that has somewhere to go.
    ///
    /// Candidates are pseudo-legal, so a piece may be selectable even though
    /// every one of its moves will be rejected by [`Game::play`].
    pub fn select(&self, sq: Square) -> Result<&Piece, PlayError> {
        let piece = self
            .board
            .piece_at(sq)
            .filter(|p| p.is_owned_by(&self.current().name))
            .ok_or(PlayError::NotYourPiece { square: sq })?;
        if piece.moves().is_empty() {
            return Err(PlayError::Immobile {
                kind: piece.kind(),
                square: sq,
            });
        }
        Ok(piece)
    }

    /// Play `mv` for the side to move and pass the turn.
    ///
    /// The move is tried on a copy of the board. If it leaves the mover's king
    /// in check the copy is dropped and the game is unchanged. Returns the
    /// captured piece, if any; it is not kept anywhere else.
    pub fn play(&mut self, mv: Move) -> Result<Option<Piece>, PlayError> {
        if self.outcome != Outcome::Ongoing {
            return Err(PlayError::GameOver);
        }

        let piece = self.select(mv.source())?;
        if !piece.can_reach(mv.dest()) {
            return Err(PlayError::Unreachable {
                kind: piece.kind(),
                to: mv.dest(),
            });
        }

        let mover = self.current().name.clone();
        let mut next = self.board.clone();
        let captured = next.move_piece(mv.source(), mv.dest());
        next.update_moves();
        if is_in_check(&next, &mover) {
            warn!(player = %mover, %mv, "move rejected, king left in check");
            return Err(PlayError::LeavesKingInCheck { mv });
        }

        self.board = next;
        info!(player = %mover, %mv, "move played");
        if let Some(ref taken) = captured {
            debug!(captured = %taken, square = %mv.dest(), "piece captured");
        }

        self.turn = !self.turn;
        self.refresh_status();
        Ok(captured)
    }

    /// Recompute check and checkmate for the side to move.
    fn refresh_status(&mut self) {
        let owner = &self.players[self.turn.index()].name;
        self.check = is_in_check(&self.board, owner);
        if self.check {
            debug!(player = %owner, "in check");
            if is_checkmate(&self.board, owner) {
                let winner = !self.turn;
                info!(winner = %self.player(winner).name, "checkmate");
                self.outcome = Outcome::Checkmate { winner };
            }
        }
    }
}
