//! Sliding pieces: bishops, rooks and queens.

use crate::board::Board;
use crate::side::Side;
use crate::square::Square;
use crate::square_set::SquareSet;

use super::can_land;

/// Diagonal (file, rank) steps.
pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// Orthogonal (file, rank) steps.
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Walk each direction from `from` until the edge or the first occupied square.
///
/// The blocking square is included only when it holds an opposing piece.
pub(super) fn destinations(
    board: &Board,
    from: Square,
    side: Side,
    directions: &[(i8, i8)],
) -> SquareSet {
    let mut set = SquareSet::EMPTY;
    for &(df, dr) in directions {
        let mut cursor = from;
        while let Some(next) = cursor.offset(df, dr) {
            if can_land(board, next, side) {
                set.insert(next);
            }
            if board.is_occupied(next) {
                break;
            }
            cursor = next;
        }
    }
    set
}
