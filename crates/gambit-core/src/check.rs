//! Check and checkmate detection.

use crate::board::Board;
use crate::legality::{exposes_king, holds_king};
use crate::movegen::{pseudo_legal, reaches};
use crate::side::Side;
use crate::square::Square;

/// State of a side that is about to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Not in check.
    Normal,
    /// In check with at least one legal reply.
    Check,
    /// In check with no legal reply.
    Checkmate,
}

/// Return `true` if any piece of `by` standing on the board reaches `sq`.
///
/// Attackers are enumerated from the occupancy map, not the rosters, so a
/// piece displaced during a simulation does not count. Only the raw move
/// shapes are used: this never asks the legality filter.
pub fn is_square_attacked(board: &Board, sq: Square, by: Side) -> bool {
    Square::all()
        .filter_map(|from| board.occupant_id(from))
        .filter(|&id| board.piece(id).side() == by)
        .any(|id| reaches(board, id, sq))
}

/// Return `true` if `side`'s king is attacked by an opposing piece.
pub fn is_in_check(board: &Board, side: Side) -> bool {
    is_square_attacked(board, board.king_of(side).square(), side.flip())
}

/// Return `true` if some piece of `side` has a legal ordinary move.
///
/// Exhaustive: every destination of every roster piece goes through the
/// legality filter. Castling is left out, as it is never available in check.
pub(crate) fn has_legal_move(board: &mut Board, side: Side) -> bool {
    let roster = board.roster(side).to_vec();
    roster.into_iter().any(|id| {
        pseudo_legal(board, id)
            .into_iter()
            .any(|to| !holds_king(board, to) && !exposes_king(board, id, to))
    })
}

impl Board {
    /// Return `true` if `side`'s king is in check.
    pub fn is_in_check(&self, side: Side) -> bool {
        is_in_check(self, side)
    }

    /// Return `true` if `side` has any legal ordinary move.
    pub fn has_legal_move(&self, side: Side) -> bool {
        has_legal_move(&mut self.clone(), side)
    }

    /// Return `true` if `side` is in check and has no legal move.
    ///
    /// A side with no legal move that is not in check is not reported here.
    pub fn is_checkmate(&self, side: Side) -> bool {
        self.is_in_check(side) && !self.has_legal_move(side)
    }

    /// Classify the position for `side`, the side about to move.
    pub fn status(&self, side: Side) -> Status {
        if !self.is_in_check(side) {
            Status::Normal
        } else if self.has_legal_move(side) {
            Status::Check
        } else {
            Status::Checkmate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Status, is_in_check, is_square_attacked};
    use crate::board::Board;
    use crate::side::Side;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn opening_has_no_check() {
        let board = Board::new();
        for side in Side::ALL {
            assert!(!board.is_in_check(side));
            assert!(board.has_legal_move(side));
            assert_eq!(board.status(side), Status::Normal);
        }
    }

    #[test]
    fn pawn_gives_check_diagonally_only() {
        let diagonal = Board::from_placement("8/8/8/3k4/4P3/8/8/4K3").unwrap();
        assert!(is_in_check(&diagonal, Side::Black));

        let ahead = Board::from_placement("8/8/8/4k3/4P3/8/8/4K3").unwrap();
        assert!(!is_in_check(&ahead, Side::Black));
    }

    #[test]
    fn blocked_slider_gives_no_check() {
        let board = Board::from_placement("4r1k1/8/8/8/8/8/4N3/4K3").unwrap();
        assert!(!board.is_in_check(Side::White));
        assert!(is_square_attacked(&board, sq("e2"), Side::Black));
    }

    #[test]
    fn back_rank_mate() {
        let board = Board::from_placement("3R2k1/5ppp/8/8/8/8/8/6K1").unwrap();
        assert!(board.is_in_check(Side::Black));
        assert!(board.is_checkmate(Side::Black));
        assert_eq!(board.status(Side::Black), Status::Checkmate);
    }

    #[test]
    fn check_with_escape_is_not_mate() {
        let board = Board::from_placement("3R2k1/5pp1/8/8/8/8/8/6K1").unwrap();
        assert!(board.is_in_check(Side::Black));
        assert!(!board.is_checkmate(Side::Black));
        assert_eq!(board.status(Side::Black), Status::Check);
    }

    #[test]
    fn capture_of_checker_avoids_mate() {
        // The rook on d8 gives check but the black queen on d2 can take it.
        let board = Board::from_placement("3R2k1/5ppp/8/8/8/8/3q4/6K1").unwrap();
        assert!(board.is_in_check(Side::Black));
        assert!(!board.is_checkmate(Side::Black));
    }

    #[test]
    fn stalemate_is_not_checkmate() {
        // Black king a8, white queen c7, white king b6: black to move has no legal move.
        let board = Board::from_placement("k7/2Q5/1K6/8/8/8/8/8").unwrap();
        assert!(!board.is_in_check(Side::Black));
        assert!(!board.has_legal_move(Side::Black));
        assert!(!board.is_checkmate(Side::Black));
        assert_eq!(board.status(Side::Black), Status::Normal);
    }

    #[test]
    fn queries_leave_board_untouched() {
        let board = Board::from_placement("3R2k1/5ppp/8/8/8/8/8/6K1").unwrap();
        let before = board.clone();
        let _ = board.is_checkmate(Side::Black);
        assert_eq!(board, before);
    }
}
