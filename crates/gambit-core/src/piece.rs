//! Pieces on the board: side, variant with its per-variant state, and cached square.

use std::fmt;

use crate::piece_kind::{PieceKind, PromotionKind};
use crate::side::Side;
use crate::square::Square;

/// Two-character display codes, indexed by side then kind.
const SYMBOLS: [[&str; PieceKind::COUNT]; Side::COUNT] = [
    ["wp", "wN", "wB", "wR", "wQ", "wK"],
    ["bp", "bN", "bB", "bR", "bQ", "bK"],
];

/// Stable handle to a piece in a [`Board`](crate::Board)'s arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId(u16);

impl PieceId {
    #[inline]
    pub(crate) const fn new(index: usize) -> PieceId {
        PieceId(index as u16)
    }

    /// Position in the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Piece variant together with the state only that variant carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Pending promotion choice, applied when the pawn reaches the far rank.
    Pawn { promotion: PromotionKind },
    Knight,
    Bishop,
    /// A rook that has moved can no longer castle.
    Rook { has_moved: bool },
    Queen,
    /// A king that has moved can no longer castle.
    King { has_moved: bool },
}

impl Variant {
    /// Fresh state for a newly constructed piece of `kind`.
    pub const fn fresh(kind: PieceKind) -> Variant {
        match kind {
            PieceKind::Pawn => Variant::Pawn {
                promotion: PromotionKind::Queen,
            },
            PieceKind::Knight => Variant::Knight,
            PieceKind::Bishop => Variant::Bishop,
            PieceKind::Rook => Variant::Rook { has_moved: false },
            PieceKind::Queen => Variant::Queen,
            PieceKind::King => Variant::King { has_moved: false },
        }
    }

    /// The variant tag without state.
    pub const fn kind(self) -> PieceKind {
        match self {
            Variant::Pawn { .. } => PieceKind::Pawn,
            Variant::Knight => PieceKind::Knight,
            Variant::Bishop => PieceKind::Bishop,
            Variant::Rook { .. } => PieceKind::Rook,
            Variant::Queen => PieceKind::Queen,
            Variant::King { .. } => PieceKind::King,
        }
    }
}

/// A piece owned by a board.
///
/// `square` caches where the board shows the piece; the board keeps the two
/// in sync whenever it moves a piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    side: Side,
    variant: Variant,
    square: Square,
}

impl Piece {
    /// A newly constructed piece of `kind` standing on `square`.
    pub const fn new(kind: PieceKind, side: Side, square: Square) -> Piece {
        Piece {
            side,
            variant: Variant::fresh(kind),
            square,
        }
    }

    /// The side this piece belongs to.
    #[inline]
    pub const fn side(&self) -> Side {
        self.side
    }

    /// The piece's variant tag.
    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.variant.kind()
    }

    /// The piece's variant with its state.
    #[inline]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// The square this piece stands on.
    #[inline]
    pub const fn square(&self) -> Square {
        self.square
    }

    /// For kings and rooks, whether the piece has moved; `None` otherwise.
    pub const fn has_moved(&self) -> Option<bool> {
        match self.variant {
            Variant::Rook { has_moved } | Variant::King { has_moved } => Some(has_moved),
            _ => None,
        }
    }

    /// For pawns, the pending promotion choice; `None` otherwise.
    pub const fn promotion(&self) -> Option<PromotionKind> {
        match self.variant {
            Variant::Pawn { promotion } => Some(promotion),
            _ => None,
        }
    }

    /// Two-character display code such as `"wQ"` or `"bp"`.
    #[inline]
    pub const fn symbol(&self) -> &'static str {
        SYMBOLS[self.side.index()][self.kind().index()]
    }

    #[inline]
    pub(crate) fn set_square(&mut self, square: Square) {
        self.square = square;
    }

    /// Record that a king or rook has moved. No effect on other variants.
    pub(crate) fn mark_moved(&mut self) {
        if let Variant::Rook { has_moved } | Variant::King { has_moved } = &mut self.variant {
            *has_moved = true;
        }
    }

    /// Set a pawn's pending promotion choice. No effect on other variants.
    pub(crate) fn set_promotion(&mut self, choice: PromotionKind) {
        if let Variant::Pawn { promotion } = &mut self.variant {
            *promotion = choice;
        }
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.symbol(), self.square)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
