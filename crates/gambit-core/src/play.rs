//! The move pipeline: the public entry points that change the board.

use tracing::{debug, trace};

use crate::board::Board;
use crate::castling::{CastleSide, try_castle};
use crate::legality::{commit, exposes_king, holds_king, is_legal};
use crate::movegen::pseudo_legal;
use crate::piece::Variant;
use crate::piece_kind::{PieceKind, PromotionKind};
use crate::promotion::promote_if_due;
use crate::side::Side;
use crate::square::Square;

impl Board {
    /// Move `side`'s piece from `from` to `to` if the rules allow it.
    ///
    /// A king whose ordinary move fails is tried as a castle onto `to`. A pawn
    /// reaching the far rank is promoted to its pending choice. Returns `false`
    /// and leaves the board untouched when the move is illegal.
    pub fn play(&mut self, from: Square, to: Square, side: Side) -> bool {
        let Some(id) = self.occupant_id(from) else {
            trace!(%from, %to, %side, "rejected: source square is empty");
            return false;
        };
        let piece = self.piece(id);
        if piece.side() != side {
            trace!(%from, %to, %side, "rejected: piece belongs to the opponent");
            return false;
        }
        if self.side_on(to) == Some(side) {
            trace!(%from, %to, %side, "rejected: target holds an own piece");
            return false;
        }
        if holds_king(self, to) {
            trace!(%from, %to, %side, "rejected: kings are never captured");
            return false;
        }
        let is_king = piece.kind() == PieceKind::King;

        if is_legal(self, id, to) {
            let captured = commit(self, id, to);
            debug!(%from, %to, %side, capture = captured.is_some(), "move played");
            promote_if_due(self, id);
        } else if !(is_king && try_castle(self, side, to, true)) {
            trace!(%from, %to, %side, "rejected: illegal move");
            return false;
        }

        debug_assert_eq!(self.validate(), Ok(()));
        true
    }

    /// Move a pawn, naming the piece it becomes if it reaches the far rank.
    ///
    /// `letter` must be exactly one of `Q`, `N`, `B`, `R` and `from` must hold
    /// a pawn of `side`. The choice only lasts for this call: afterwards the
    /// pawn's pending choice is back to the queen, whatever the outcome.
    pub fn promote(&mut self, from: Square, to: Square, side: Side, letter: &str) -> bool {
        let Some(id) = self.occupant_id(from) else {
            trace!(%from, %to, %side, "rejected: source square is empty");
            return false;
        };
        let piece = self.piece(id);
        if piece.side() != side || !matches!(piece.variant(), Variant::Pawn { .. }) {
            trace!(%from, %to, %side, "rejected: no own pawn to promote");
            return false;
        }

        let Some(choice) = PromotionKind::from_letter(letter) else {
            trace!(%from, %to, %side, letter, "rejected: unknown promotion piece");
            self.piece_mut(id).set_promotion(PromotionKind::Queen);
            return false;
        };

        self.piece_mut(id).set_promotion(choice);
        let played = self.play(from, to, side);
        self.piece_mut(id).set_promotion(PromotionKind::Queen);
        played
    }

    /// Every legal move of `side` as `(from, to)` pairs, castles included.
    pub fn legal_moves(&self, side: Side) -> Vec<(Square, Square)> {
        let mut scratch = self.clone();
        let mut moves = Vec::new();
        for id in self.roster(side).iter().copied() {
            let from = self.piece(id).square();
            for to in pseudo_legal(self, id) {
                if !holds_king(self, to) && !exposes_king(&mut scratch, id, to) {
                    moves.push((from, to));
                }
            }
        }

        let king = self.king_of(side).square();
        for wing in CastleSide::ALL {
            let target = Square::new(wing.landing_file(), side.home_rank());
            if try_castle(&mut scratch, side, target, false) {
                moves.push((king, target));
            }
        }
        moves
    }
}
