//! Pawn pushes and diagonal captures. En passant is not part of the rules.

use crate::board::Board;
use crate::side::Side;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Pawn destinations: one step forward onto an empty square, two from the
/// start rank when both squares are empty, and one step diagonally forward
/// onto an opposing piece.
pub(super) fn destinations(board: &Board, from: Square, side: Side) -> SquareSet {
    let mut set = SquareSet::EMPTY;
    let forward = side.forward();

    if let Some(one) = from.offset(0, forward)
        && !board.is_occupied(one)
    {
        set.insert(one);
        if from.rank() == side.pawn_rank()
            && let Some(two) = one.offset(0, forward)
            && !board.is_occupied(two)
        {
            set.insert(two);
        }
    }

    for df in [-1, 1] {
        if let Some(diag) = from.offset(df, forward)
            && board.side_on(diag) == Some(side.flip())
        {
            set.insert(diag);
        }
    }
    set
}

#[cfg(test)]
mod tests {
    use super::destinations;
    use crate::board::Board;
    use crate::side::Side;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn single_and_double_push_from_start() {
        let board = Board::new();
        let white = destinations(&board, Square::E2, Side::White);
        assert_eq!(white.count(), 2);
        assert!(white.contains(sq("e3")) && white.contains(sq("e4")));

        let black = destinations(&board, sq("d7"), Side::Black);
        assert!(black.contains(sq("d6")) && black.contains(sq("d5")));
    }

    #[test]
    fn no_double_push_after_leaving_start() {
        let board = Board::from_placement("4k3/8/8/8/8/4P3/8/4K3").unwrap();
        let set = destinations(&board, sq("e3"), Side::White);
        assert_eq!(set.count(), 1);
        assert!(set.contains(sq("e4")));
    }

    #[test]
    fn blocked_straight_ahead() {
        // Black pawn on e3 blocks the white pawn on e2; the double push is blocked too.
        let board = Board::from_placement("4k3/8/8/8/8/4p3/4P3/4K3").unwrap();
        assert!(destinations(&board, Square::E2, Side::White).is_empty());
    }

    #[test]
    fn double_push_blocked_on_second_square() {
        let board = Board::from_placement("4k3/8/8/8/4n3/8/4P3/4K3").unwrap();
        let set = destinations(&board, Square::E2, Side::White);
        assert_eq!(set.count(), 1);
        assert!(set.contains(sq("e3")));
    }

    #[test]
    fn captures_diagonally_only_opponents() {
        // White pawn e4; black pawn d5, black rook e5, white knight f5.
        let board = Board::from_placement("4k3/8/8/3prN2/4P3/8/8/4K3").unwrap();
        let set = destinations(&board, sq("e4"), Side::White);
        assert!(set.contains(sq("d5")));
        assert!(!set.contains(sq("f5")), "own piece");
        assert_eq!(set.count(), 1, "never captures straight ahead");
    }

    #[test]
    fn black_moves_down_the_board() {
        let board = Board::from_placement("4k3/8/8/8/8/8/p7/4K3").unwrap();
        let set = destinations(&board, sq("a2"), Side::Black);
        assert_eq!(set.count(), 1);
        assert!(set.contains(Square::A1));
    }
}
