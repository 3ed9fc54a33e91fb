//! Random playouts checking the board invariants after every move.

use gambit_core::{Board, Side, Square};
use proptest::prelude::*;

/// Indices into the legal move list, one per ply.
fn choices() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(any::<usize>(), 0..80)
}

fn square() -> impl Strategy<Value = Square> {
    (0u8..64).prop_map(|i| Square::from_index(i).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn playouts_keep_invariants(picks in choices()) {
        let mut board = Board::new();
        let mut side = Side::White;
        for pick in picks {
            let moves = board.legal_moves(side);
            if moves.is_empty() {
                break;
            }
            let (from, to) = moves[pick % moves.len()];
            let capture = board.side_on(to) == Some(side.flip());
            let (own, theirs) = (
                board.pieces_of(side).count(),
                board.pieces_of(side.flip()).count(),
            );

            prop_assert!(board.play(from, to, side), "{side} {from}{to} listed but refused");
            prop_assert_eq!(board.validate(), Ok(()));
            prop_assert!(!board.is_in_check(side), "{side} left its king in check");
            prop_assert_eq!(board.pieces_of(side).count(), own);
            prop_assert_eq!(
                board.pieces_of(side.flip()).count(),
                if capture { theirs - 1 } else { theirs }
            );
            side = side.flip();
        }
    }

    #[test]
    fn rejected_moves_leave_board_unchanged(
        picks in choices(),
        from in square(),
        to in square(),
    ) {
        let mut board = Board::new();
        let mut side = Side::White;
        for pick in picks.into_iter().take(20) {
            let moves = board.legal_moves(side);
            if moves.is_empty() {
                break;
            }
            let (a, b) = moves[pick % moves.len()];
            board.play(a, b, side);
            side = side.flip();
        }

        let legal = board.legal_moves(side).contains(&(from, to));
        let before = board.clone();
        let played = board.play(from, to, side);
        prop_assert_eq!(played, legal);
        if !played {
            prop_assert_eq!(&board, &before);
            prop_assert!(!board.play(from, to, side));
        }
    }
}
