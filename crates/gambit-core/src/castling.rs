//! Castling: the compound king-and-rook move.

use std::fmt;

use tracing::{debug, trace};

use crate::board::Board;
use crate::check::is_in_check;
use crate::file::File;
use crate::legality::Simulation;
use crate::piece::{PieceId, Variant};
use crate::side::Side;
use crate::square::Square;

/// Which wing a castle goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Both wings.
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// The wing a king landing on `file` castles to, if any.
    pub const fn from_landing(file: File) -> Option<CastleSide> {
        match file {
            File::FileG => Some(CastleSide::KingSide),
            File::FileC => Some(CastleSide::QueenSide),
            _ => None,
        }
    }

    /// File of the corner rook.
    pub const fn rook_file(self) -> File {
        match self {
            CastleSide::KingSide => File::FileH,
            CastleSide::QueenSide => File::FileA,
        }
    }

    /// File the king crosses, where the rook ends up.
    pub const fn transit_file(self) -> File {
        match self {
            CastleSide::KingSide => File::FileF,
            CastleSide::QueenSide => File::FileD,
        }
    }

    /// File the king lands on.
    pub const fn landing_file(self) -> File {
        match self {
            CastleSide::KingSide => File::FileG,
            CastleSide::QueenSide => File::FileC,
        }
    }

    /// Files strictly between the king and the rook.
    fn between(self) -> &'static [File] {
        match self {
            CastleSide::KingSide => &[File::FileF, File::FileG],
            CastleSide::QueenSide => &[File::FileB, File::FileC, File::FileD],
        }
    }
}

impl fmt::Display for CastleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastleSide::KingSide => f.write_str("O-O"),
            CastleSide::QueenSide => f.write_str("O-O-O"),
        }
    }
}

/// A castle that passed every precondition, ready to be carried out.
#[derive(Debug, Clone, Copy)]
struct Castle {
    wing: CastleSide,
    king: PieceId,
    rook: PieceId,
    king_from: Square,
    king_to: Square,
    rook_from: Square,
    rook_to: Square,
}

impl Castle {
    /// Check every castling precondition for `side`'s king heading to `target`.
    fn plan(board: &mut Board, side: Side, target: Square) -> Option<Castle> {
        let home = side.home_rank();
        if target.rank() != home {
            return None;
        }
        let wing = CastleSide::from_landing(target.file())?;

        let king = board.king_id(side);
        let king_from = board.piece(king).square();
        if board.piece(king).has_moved() != Some(false)
            || king_from != Square::new(File::FileE, home)
        {
            trace!(%side, %wing, "castle refused: king has moved");
            return None;
        }

        let rook_from = Square::new(wing.rook_file(), home);
        let rook = board.occupant_id(rook_from)?;
        let rook_piece = board.piece(rook);
        if rook_piece.side() != side || rook_piece.variant() != (Variant::Rook { has_moved: false }) {
            trace!(%side, %wing, "castle refused: no unmoved rook in the corner");
            return None;
        }

        if wing
            .between()
            .iter()
            .any(|&file| board.is_occupied(Square::new(file, home)))
        {
            trace!(%side, %wing, "castle refused: path blocked");
            return None;
        }

        if is_in_check(board, side) {
            trace!(%side, %wing, "castle refused: king in check");
            return None;
        }

        let transit = Square::new(wing.transit_file(), home);
        let king_to = Square::new(wing.landing_file(), home);
        {
            let mut sim = Simulation::new(board);
            sim.relocate(king_from, transit);
            if is_in_check(&sim, side) {
                trace!(%side, %wing, %transit, "castle refused: king passes through check");
                return None;
            }
            sim.relocate(transit, king_to);
            if is_in_check(&sim, side) {
                trace!(%side, %wing, "castle refused: king lands in check");
                return None;
            }
        }

        Some(Castle {
            wing,
            king,
            rook,
            king_from,
            king_to,
            rook_from,
            rook_to: transit,
        })
    }

    fn apply(self, board: &mut Board) {
        board.set_occupant(self.king_from, None);
        board.set_occupant(self.rook_from, None);
        board.set_occupant(self.king_to, Some(self.king));
        board.set_occupant(self.rook_to, Some(self.rook));
        board.piece_mut(self.king).mark_moved();
        board.piece_mut(self.rook).mark_moved();
    }
}

/// Try to castle `side`'s king onto `target` (g- or c-file of its home rank).
///
/// Returns whether the castle is legal. With `commit` the king and rook are
/// moved and both marked as moved; otherwise the board is left as it was.
pub(crate) fn try_castle(board: &mut Board, side: Side, target: Square, commit: bool) -> bool {
    let Some(castle) = Castle::plan(board, side, target) else {
        return false;
    };
    if commit {
        castle.apply(board);
        debug!(%side, wing = %castle.wing, "castled");
    }
    true
}
