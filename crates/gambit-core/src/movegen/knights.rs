//! Knight jumps.

use crate::board::Board;
use crate::side::Side;
use crate::square::Square;
use crate::square_set::SquareSet;

use super::can_land;

/// The eight (file, rank) knight offsets.
const JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// On-board knight targets not held by an own piece. Knights ignore blockers.
pub(super) fn destinations(board: &Board, from: Square, side: Side) -> SquareSet {
    JUMPS
        .iter()
        .filter_map(|&(df, dr)| from.offset(df, dr))
        .filter(|&to| can_land(board, to, side))
        .collect()
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
    fn jumps_over_pawns() {
        let board = Board::new();
        let set = destinations(&board, Square::G1, Side::White);
        assert_eq!(set.count(), 2);
        assert!(set.contains(sq("f3")));
        assert!(set.contains(sq("h3")));
    }

    #[test]
    fn centre_knight_has_eight_targets() {
        let board = Board::from_placement("4k3/8/8/8/3N4/8/8/4K3").unwrap();
        assert_eq!(destinations(&board, sq("d4"), Side::White).count(), 8);
    }

    #[test]
    fn corner_knight() {
        let board = Board::from_placement("n3k3/8/8/8/8/8/8/4K3").unwrap();
        let set = destinations(&board, Square::A8, Side::Black);
        assert_eq!(set.count(), 2);
        assert!(set.contains(sq("b6")));
        assert!(set.contains(sq("c7")));
    }
}
