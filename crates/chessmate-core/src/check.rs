//! Check and checkmate detection.
//!
//! Every function here reads the cached candidate lists, so the board passed
//! in must have been refreshed with [`Board::update_moves`] since its last
//! mutation. Stale lists give wrong answers without any error.
//!
//! Move trials never touch the caller's board: each one runs on a clone that
//! is refreshed, inspected and dropped.

use tracing::debug;

use crate::board::Board;
use crate::chess_move::Move;
use crate::owner::Owner;
use crate::square::Square;

/// Return `true` if any opposing piece lists `owner`'s king square as a candidate.
///
/// # Panics
///
/// Panics if `owner` has no king on the board.
pub fn is_in_check(board: &Board, owner: &Owner) -> bool {
    let king = board.king_square(owner);
    board.attackers(owner).any(|p| p.can_reach(king))
}

/// Squares of the opposing pieces currently giving check to `owner`.
pub fn checkers(board: &Board, owner: &Owner) -> Vec<Square> {
    let king = board.king_square(owner);
    board
        .attackers(owner)
        .filter(|p| p.can_reach(king))
        .map(|p| p.location())
        .collect()
}

/// Play `mv` on a copy of `board` and return the refreshed copy.
pub fn simulate(board: &Board, mv: Move) -> Board {
    let mut trial = board.clone();
    trial.move_piece(mv.source(), mv.dest());
    trial.update_moves();
    trial
}

/// Return `true` if playing `mv` would leave `owner`'s king in check.
pub fn leaves_king_in_check(board: &Board, owner: &Owner, mv: Move) -> bool {
    is_in_check(&simulate(board, mv), owner)
}

/// Every candidate move of `owner` that does not leave its king in check.
///
/// When `owner` is in check these are exactly the moves that escape it.
pub fn legal_moves(board: &Board, owner: &Owner) -> Vec<Move> {
    candidates(board, owner)
        .filter(|&mv| !leaves_king_in_check(board, owner, mv))
        .collect()
}

/// Moves of `owner` that lift the current check, on freshly computed lists.
pub fn protectors(board: &Board, owner: &Owner) -> Vec<Move> {
    let mut fresh = board.clone();
    fresh.update_moves();
    legal_moves(&fresh, owner)
}

/// Return `true` if `owner` is in check and no candidate move escapes it.
///
/// Returns `false` when `owner` is not in check: a side without legal moves
/// outside of check is not mated.
pub fn is_checkmate(board: &Board, owner: &Owner) -> bool {
    let attacking = checkers(board, owner);
    if attacking.is_empty() {
        return false;
    }
    debug!(%owner, checkers = ?attacking, "searching for a protector");

    let mut fresh = board.clone();
    fresh.update_moves();
    let escape = candidates(&fresh, owner).find(|&mv| !leaves_king_in_check(&fresh, owner, mv));
    match escape {
        Some(mv) => {
            debug!(%owner, protector = %mv, "check can be answered");
            false
        }
        None => true,
    }
}

/// All candidate moves of `owner`'s pieces, in board order.
fn candidates<'a>(board: &'a Board, owner: &'a Owner) -> impl Iterator<Item = Move> {
    board
        .defenders(owner)
        .filter(|p| !p.moves().is_empty())
        .flat_map(|p| p.moves().iter().map(move |&to| Move::new(p.location(), to)))
}
