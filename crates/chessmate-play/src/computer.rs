//! The computer opponent: a uniform random choice among legal moves.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

use chessmate_core::Move;
use chessmate_core::check::legal_moves;

use crate::game::Game;

/// Random mover with its own RNG.
pub struct Computer {
    rng: StdRng,
}

impl Computer {
    /// Create a computer player; a fixed `seed` makes its choices repeatable.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Pick a move for the side to move, or `None` if it has no legal move.
    pub fn choose(&mut self, game: &Game) -> Option<Move> {
        let moves = legal_moves(game.board(), &game.current().name);
        let choice = moves.choose(&mut self.rng).copied();
        debug!(candidates = moves.len(), choice = ?choice, "computer move");
        choice
    }
}
