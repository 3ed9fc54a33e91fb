//! Pawn promotion on the far rank.

use tracing::debug;

use crate::board::Board;
use crate::piece::{PieceId, Variant};
use crate::piece_kind::PieceKind;

/// Replace pawn `id` by its pending promotion choice if it stands on the far rank.
///
/// The pawn leaves its roster and the new piece takes the cell. A promoted
/// rook counts as moved, so it can never castle. Returns the new piece.
pub(crate) fn promote_if_due(board: &mut Board, id: PieceId) -> Option<PieceId> {
    let pawn = board.piece(id);
    let Variant::Pawn { promotion } = pawn.variant() else {
        return None;
    };
    let (side, sq) = (pawn.side(), pawn.square());
    if sq.rank() != side.promotion_rank() {
        return None;
    }

    board.remove_from_roster(id);
    let kind = promotion.piece_kind();
    let promoted = board.add_piece(kind, side, sq);
    if kind == PieceKind::Rook {
        board.piece_mut(promoted).mark_moved();
    }
    debug!(%side, %sq, %kind, "pawn promoted");
    Some(promoted)
}
