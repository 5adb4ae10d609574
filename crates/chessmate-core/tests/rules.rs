//! Integration tests for the rules engine through its public API.
//!
//! Games are scripted move by move with `move_piece` + `update_moves`, the
//! same sequence a caller performs after accepting a move.

use chessmate_core::check::{checkers, is_checkmate, is_in_check, legal_moves};
use chessmate_core::{Board, Move, Owner, PieceKind, STARTING_PLACEMENT, Square};

fn sq(name: &str) -> Square {
    let bytes = name.as_bytes();
    Square::new(b'8' - bytes[1], bytes[0] - b'a').unwrap()
}

fn owners() -> (Owner, Owner) {
    (Owner::from("white"), Owner::from("black"))
}

/// Play `moves` (as "e2e4" pairs) in order, asserting each one is legal.
fn play_all(board: &mut Board, moves: &[&str]) {
    let (white, black) = owners();
    for (ply, text) in moves.iter().enumerate() {
        let mv = Move::new(sq(&text[0..2]), sq(&text[2..4]));
        let mover = if ply % 2 == 0 { &white } else { &black };
        assert!(
            legal_moves(board, mover).contains(&mv),
            "{text} should be legal at ply {ply} in {board:?}"
        );
        board.move_piece(mv.source(), mv.dest());
        board.update_moves();
    }
}

// ── Scripted games ────────────────────────────────────────────────────────────

#[test]
fn scholars_mate() {
    let (white, black) = owners();
    let mut board = Board::starting_position(&white, &black);
    play_all(
        &mut board,
        &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"],
    );

    assert!(is_in_check(&board, &black));
    assert_eq!(checkers(&board, &black), vec![sq("f7")]);
    assert!(is_checkmate(&board, &black));
    assert!(legal_moves(&board, &black).is_empty());
    assert!(!is_in_check(&board, &white));
}

#[test]
fn check_that_can_be_blocked_is_not_mate() {
    let (white, black) = owners();
    let mut board = Board::starting_position(&white, &black);
    // 1. d4 e5 2. dxe5 Bb4+ leaves several blocks on c3 and d2.
    play_all(&mut board, &["d2d4", "e7e5", "d4e5", "f8b4"]);

    assert!(is_in_check(&board, &white));
    assert!(!is_checkmate(&board, &white));

    let escapes = legal_moves(&board, &white);
    for text in ["c2c3", "b1c3", "b1d2", "c1d2", "d1d2"] {
        let mv = Move::new(sq(&text[0..2]), sq(&text[2..4]));
        assert!(escapes.contains(&mv), "{text} should answer the check");
    }
    assert!(!escapes.contains(&Move::new(sq("a2"), sq("a3"))));
}

#[test]
fn capture_removes_the_piece() {
    let (white, black) = owners();
    let mut board = Board::starting_position(&white, &black);
    play_all(&mut board, &["e2e4", "d7d5"]);

    let captured = board.move_piece(sq("e4"), sq("d5")).unwrap();
    board.update_moves();

    assert_eq!(captured.kind(), PieceKind::Pawn);
    assert_eq!(captured.owner(), &black);
    assert_eq!(board.pieces().count(), 31);
    assert_eq!(board.piece_at(sq("d5")).unwrap().owner(), &white);
    board.validate().unwrap();
}

// ── Invariants over a longer line ─────────────────────────────────────────────

#[test]
fn invariants_hold_through_a_game() {
    let (white, black) = owners();
    let mut board = Board::starting_position(&white, &black);

    for ply in 0..60 {
        let mover = if ply % 2 == 0 { &white } else { &black };
        let moves = legal_moves(&board, mover);
        if moves.is_empty() {
            break;
        }
        let mv = moves[(ply * 7) % moves.len()];
        board.move_piece(mv.source(), mv.dest());
        board.update_moves();

        board.validate().unwrap();
        assert!(!is_in_check(&board, mover), "{mv} left {mover} in check");
        for piece in board.pieces() {
            assert_eq!(board.piece_at(piece.location()), Some(piece));
            for &target in piece.moves() {
                let friendly = board
                    .piece_at(target)
                    .is_some_and(|p| p.owner() == piece.owner());
                assert!(!friendly, "{piece:?} lists its own side's square {target}");
            }
        }
        assert_eq!(board.owners().len(), 2);
    }
}

#[test]
fn placement_roundtrips_after_moves() {
    let (white, black) = owners();
    let mut board = Board::starting_position(&white, &black);
    assert_eq!(board.to_string(), STARTING_PLACEMENT);

    play_all(&mut board, &["g1f3", "d7d5", "g2g3", "c8g4"]);
    let text = board.to_string();
    assert_eq!(text, "rn1qkbnr/ppp1pppp/8/3p4/6b1/5NP1/PPPPPP1P/RNBQKB1R");

    let reparsed = Board::from_placement(&text, &white, &black).unwrap();
    assert_eq!(reparsed, board);
}

#[test]
fn pawn_on_last_rank_stays_a_pawn() {
    let (white, black) = owners();
    let board = Board::from_placement("P3k3/8/8/8/8/8/8/4K3", &white, &black).unwrap();

    let pawn = board.piece_at(sq("a8")).unwrap();
    assert_eq!(pawn.kind(), PieceKind::Pawn);
    assert!(pawn.moves().is_empty());
    board.validate().unwrap();
}
