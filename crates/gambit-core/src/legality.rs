//! Legality filter: the "does this leave my own king in check" veto.
//!
//! Candidate moves are tried on the real board inside a [`Simulation`], which
//! snapshots every cell it touches and puts them back when it is dropped. The
//! restore runs on every exit path, unwinding included, so a query can never
//! leave the board half-mutated.

use std::ops::Deref;

use crate::board::Board;
use crate::check::is_in_check;
use crate::movegen;
use crate::piece::PieceId;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Most cells one simulation touches: king and rook, source and destination.
const MAX_TOUCHED: usize = 4;

/// A scoped rearrangement of the board, undone on drop.
pub(crate) struct Simulation<'a> {
    board: &'a mut Board,
    saved: [(Square, Option<PieceId>); MAX_TOUCHED],
    len: usize,
}

impl<'a> Simulation<'a> {
    pub(crate) fn new(board: &'a mut Board) -> Simulation<'a> {
        Simulation {
            board,
            saved: [(Square::A1, None); MAX_TOUCHED],
            len: 0,
        }
    }

    /// Remember the original occupant of `sq`, once.
    fn save(&mut self, sq: Square) {
        if self.saved[..self.len].iter().any(|&(s, _)| s == sq) {
            return;
        }
        assert!(self.len < MAX_TOUCHED, "simulation touched too many squares");
        self.saved[self.len] = (sq, self.board.occupant_id(sq));
        self.len += 1;
    }

    /// Move whatever stands on `from` to `to`, displacing any occupant of `to`.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) {
        self.save(from);
        self.save(to);
        let mover = self.board.occupant_id(from);
        self.board.set_occupant(from, None);
        self.board.set_occupant(to, mover);
    }
}

impl Deref for Simulation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Simulation<'_> {
    fn drop(&mut self) {
        for &(sq, occupant) in self.saved[..self.len].iter().rev() {
            self.board.set_occupant(sq, occupant);
        }
    }
}

/// Would moving piece `id` to `to` leave its own king in check?
///
/// Only king safety is examined; whether `to` is reachable is not.
pub(crate) fn exposes_king(board: &mut Board, id: PieceId, to: Square) -> bool {
    let piece = board.piece(id);
    let (from, side) = (piece.square(), piece.side());
    let mut sim = Simulation::new(board);
    sim.relocate(from, to);
    is_in_check(&sim, side)
}

/// Return `true` if a king stands on `sq`. Kings are never captured.
#[inline]
pub(crate) fn holds_king(board: &Board, sq: Square) -> bool {
    board
        .occupant_at(sq)
        .is_some_and(|piece| piece.kind() == PieceKind::King)
}

/// A pseudo-legal move of piece `id` to `to` that keeps its own king safe
/// and does not take a king.
pub fn is_legal(board: &mut Board, id: PieceId, to: Square) -> bool {
    movegen::reaches(board, id, to) && !holds_king(board, to) && !exposes_king(board, id, to)
}

/// Carry out an ordinary move that already passed [`is_legal`].
///
/// Any piece on `to` is captured and leaves its roster. Kings and rooks are
/// marked as moved. Returns the captured piece.
pub(crate) fn commit(board: &mut Board, id: PieceId, to: Square) -> Option<PieceId> {
    let from = board.piece(id).square();
    let captured = board.occupant_id(to);
    if let Some(victim) = captured {
        board.remove_from_roster(victim);
    }
    board.set_occupant(from, None);
    board.set_occupant(to, Some(id));
    board.piece_mut(id).mark_moved();
    captured
}
