//! Piece variants and promotion choices.

use std::fmt;

/// The variant of a piece, without side or per-piece state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// Total number of piece kinds.
    pub const COUNT: usize = 6;

    /// All piece kinds in index order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Return the index (0..5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The letter shown after the side initial in a piece symbol.
    ///
    /// Pawns use a lowercase `p` (`"wp"`), every other piece an uppercase letter.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Lowercase FEN letter for this kind.
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Parse a FEN piece character (case-insensitive).
    pub fn from_fen_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The piece a pawn turns into on the far rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PromotionKind {
    #[default]
    Queen,
    Knight,
    Bishop,
    Rook,
}

impl PromotionKind {
    /// All promotion choices.
    pub const ALL: [PromotionKind; 4] = [
        PromotionKind::Queen,
        PromotionKind::Knight,
        PromotionKind::Bishop,
        PromotionKind::Rook,
    ];

    /// Parse a promotion letter: exactly one of `Q`, `N`, `B`, `R`.
    pub fn from_letter(s: &str) -> Option<PromotionKind> {
        match s {
            "Q" => Some(PromotionKind::Queen),
            "N" => Some(PromotionKind::Knight),
            "B" => Some(PromotionKind::Bishop),
            "R" => Some(PromotionKind::Rook),
            _ => None,
        }
    }

    /// The piece kind constructed by this promotion.
    #[inline]
    pub const fn piece_kind(self) -> PieceKind {
        match self {
            PromotionKind::Queen => PieceKind::Queen,
            PromotionKind::Knight => PieceKind::Knight,
            PromotionKind::Bishop => PieceKind::Bishop,
            PromotionKind::Rook => PieceKind::Rook,
        }
    }
}
