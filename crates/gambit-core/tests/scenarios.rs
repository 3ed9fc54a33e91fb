//! Whole-game scenarios driven through the public move pipeline.

use gambit_core::{Board, Side, Square, Status};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

/// Play a list of `"e2e4"` moves, alternating sides from White.
fn play_line(board: &mut Board, moves: &[&str]) {
    let mut side = Side::White;
    for mv in moves {
        let (from, to) = mv.split_at(2);
        assert!(board.play(sq(from), sq(to), side), "{side} could not play {mv}");
        side = side.flip();
    }
}

#[test]
fn opening_pawn_push() {
    let mut board = Board::new();
    assert!(board.play(sq("e2"), sq("e4"), Side::White));
    assert_eq!(board.occupant_symbol(sq("e4")), Some("wp"));
    assert_eq!(board.occupant_symbol(sq("e2")), None);
    assert_eq!(board.piece_count(), 32);
}

#[test]
fn blocked_rook_rejected() {
    let mut board = Board::new();
    let before = board.clone();
    assert!(!board.play(sq("a1"), sq("a8"), Side::White));
    assert_eq!(board, before);
}

#[test]
fn rejected_moves_are_idempotent() {
    let mut board = Board::new();
    let before = board.clone();
    for _ in 0..3 {
        assert!(!board.play(sq("d1"), sq("h5"), Side::White));
        assert!(!board.play(sq("e2"), sq("e5"), Side::White));
        assert!(!board.play(sq("g8"), sq("f6"), Side::White));
    }
    assert_eq!(board, before);
}

#[test]
fn capture_shrinks_opposing_roster_by_one() {
    let mut board = Board::new();
    play_line(&mut board, &["e2e4", "d7d5"]);
    assert!(board.play(sq("e4"), sq("d5"), Side::White));
    assert_eq!(board.pieces_of(Side::Black).count(), 15);
    assert_eq!(board.pieces_of(Side::White).count(), 16);
    assert_eq!(board.occupant_symbol(sq("d5")), Some("wp"));
}

#[test]
fn king_side_castle() {
    let mut board = Board::new();
    play_line(&mut board, &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"]);
    assert!(board.play(sq("e1"), sq("g1"), Side::White));
    assert_eq!(board.occupant_symbol(sq("g1")), Some("wK"));
    assert_eq!(board.occupant_symbol(sq("f1")), Some("wR"));
    assert_eq!(board.occupant_symbol(sq("h1")), None);
    assert_eq!(board.occupant_symbol(sq("e1")), None);
}

#[test]
fn queen_side_castle() {
    let mut board = Board::from_placement("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R").unwrap();
    assert!(board.play(sq("e1"), sq("c1"), Side::White));
    assert_eq!(board.occupant_symbol(sq("c1")), Some("wK"));
    assert_eq!(board.occupant_symbol(sq("d1")), Some("wR"));
    assert_eq!(board.occupant_symbol(sq("a1")), None);
    assert!(board.play(sq("e8"), sq("c8"), Side::Black));
    assert_eq!(board.occupant_symbol(sq("d8")), Some("bR"));
}

#[test]
fn no_castle_after_rook_returns_home() {
    let mut board = Board::from_placement("4k3/8/8/8/8/8/8/4K2R").unwrap();
    play_line(&mut board, &["h1h3", "e8d8", "h3h1", "d8e8"]);
    let before = board.clone();
    assert!(!board.play(sq("e1"), sq("g1"), Side::White));
    assert_eq!(board, before);
}

#[test]
fn no_castle_after_king_returns_home() {
    let mut board = Board::from_placement("4k3/8/8/8/8/8/8/4K2R").unwrap();
    play_line(&mut board, &["e1f1", "e8d8", "f1e1", "d8e8"]);
    assert!(!board.play(sq("e1"), sq("g1"), Side::White));
}

#[test]
fn no_castle_out_of_or_through_check() {
    let mut in_check = Board::from_placement("4r1k1/8/8/8/8/8/8/R3K2R").unwrap();
    assert!(!in_check.play(sq("e1"), sq("g1"), Side::White));
    assert!(!in_check.play(sq("e1"), sq("c1"), Side::White));

    let mut through = Board::from_placement("3r2k1/8/8/8/8/8/8/R3K2R").unwrap();
    assert!(!through.play(sq("e1"), sq("c1"), Side::White));
    assert!(through.play(sq("e1"), sq("g1"), Side::White));
}

#[test]
fn promotion_to_queen() {
    let mut board = Board::from_placement("k7/4P3/8/8/8/8/8/4K3").unwrap();
    assert!(board.promote(sq("e7"), sq("e8"), Side::White, "Q"));
    assert_eq!(board.occupant_symbol(sq("e8")), Some("wQ"));
    assert_eq!(board.occupant_symbol(sq("e7")), None);
    assert_eq!(board.pieces_of(Side::White).count(), 2);
    assert!(board.pieces_of(Side::White).all(|p| p.symbol() != "wp"));
}

#[test]
fn promotion_with_capture() {
    let mut board = Board::from_placement("r3k3/1P6/8/8/8/8/8/4K3").unwrap();
    assert!(board.promote(sq("b7"), sq("a8"), Side::White, "N"));
    assert_eq!(board.occupant_symbol(sq("a8")), Some("wN"));
    assert_eq!(board.pieces_of(Side::Black).count(), 1);
}

#[test]
fn black_promotion_gives_check() {
    let mut board = Board::from_placement("4k3/8/8/8/8/8/3p4/4K3").unwrap();
    assert!(board.promote(sq("d2"), sq("d1"), Side::Black, "Q"));
    assert_eq!(board.occupant_symbol(sq("d1")), Some("bQ"));
    assert!(board.is_in_check(Side::White));
    assert!(!board.is_checkmate(Side::White), "the king can take the queen");
}

#[test]
fn invalid_promotion_letter() {
    let mut board = Board::from_placement("k7/4P3/8/8/8/8/8/4K3").unwrap();
    let before = board.clone();
    assert!(!board.promote(sq("e7"), sq("e8"), Side::White, "X"));
    assert_eq!(board, before);
    assert!(board.promote(sq("e7"), sq("e8"), Side::White, "B"));
    assert_eq!(board.occupant_symbol(sq("e8")), Some("wB"));
}

#[test]
fn fools_mate() {
    let mut board = Board::new();
    play_line(&mut board, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert!(board.is_in_check(Side::White));
    assert!(board.is_checkmate(Side::White));
    assert_eq!(board.status(Side::White), Status::Checkmate);
    assert!(board.legal_moves(Side::White).is_empty());
}

#[test]
fn scholars_mate() {
    let mut board = Board::new();
    play_line(
        &mut board,
        &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"],
    );
    assert!(board.is_checkmate(Side::Black));
    assert_eq!(board.pieces_of(Side::Black).count(), 15);
}

#[test]
fn check_can_be_answered() {
    let mut board = Board::new();
    play_line(&mut board, &["e2e4", "f7f6", "d1h5"]);
    assert_eq!(board.status(Side::Black), Status::Check);
    // Anything that leaves the king exposed is refused.
    assert!(!board.play(sq("a7"), sq("a6"), Side::Black));
    assert!(board.play(sq("g7"), sq("g6"), Side::Black));
    assert_eq!(board.status(Side::Black), Status::Normal);
}

#[test]
fn pretty_board_after_moves() {
    let mut board = Board::new();
    play_line(&mut board, &["e2e4"]);
    let text = board.pretty().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[5], "   ##    ## wp ##    ## 4");
    assert_eq!(lines[7], "wp wp wp wp    wp wp wp 2");
}
