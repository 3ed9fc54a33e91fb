//! King steps. Castling is a separate rule in [`crate::castling`].

use crate::board::Board;
use crate::side::Side;
use crate::square::Square;
use crate::square_set::SquareSet;

use super::{DIAGONALS, ORTHOGONALS, can_land};

/// The adjacent squares the king may step to.
pub(super) fn destinations(board: &Board, from: Square, side: Side) -> SquareSet {
    DIAGONALS
        .iter()
        .chain(ORTHOGONALS.iter())
        .filter_map(|&(df, dr)| from.offset(df, dr))
        .filter(|&to| can_land(board, to, side))
        .collect()
}
