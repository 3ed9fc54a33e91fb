//! Piece behavior table: pseudo-legal destinations per piece variant.
//!
//! Pseudo-legal destinations follow each variant's movement shape and the
//! blocking/capture rules, but ignore whether the move would leave the
//! mover's own king in check. [`crate::legality`] adds that veto.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::piece::{PieceId, Variant};
use crate::side::Side;
use crate::square::Square;
use crate::square_set::SquareSet;

pub(crate) use self::sliders::{DIAGONALS, ORTHOGONALS};

/// All pseudo-legal destinations of the piece `id` in the current position.
pub fn pseudo_legal(board: &Board, id: PieceId) -> SquareSet {
    let piece = board.piece(id);
    let from = piece.square();
    let side = piece.side();
    match piece.variant() {
        Variant::Pawn { .. } => pawns::destinations(board, from, side),
        Variant::Knight => knights::destinations(board, from, side),
        Variant::Bishop => sliders::destinations(board, from, side, &DIAGONALS),
        Variant::Rook { .. } => sliders::destinations(board, from, side, &ORTHOGONALS),
        Variant::Queen => {
            let mut set = sliders::destinations(board, from, side, &DIAGONALS);
            set |= sliders::destinations(board, from, side, &ORTHOGONALS);
            set
        }
        Variant::King { .. } => king::destinations(board, from, side),
    }
}

/// Return `true` if `target` is a pseudo-legal destination of the piece `id`.
#[inline]
pub fn reaches(board: &Board, id: PieceId, target: Square) -> bool {
    pseudo_legal(board, id).contains(target)
}

/// A square a non-pawn piece of `side` may land on: empty or held by the opponent.
#[inline]
fn can_land(board: &Board, sq: Square, side: Side) -> bool {
    board.side_on(sq) != Some(side)
}
