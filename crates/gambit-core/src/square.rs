//! Board squares.

use std::fmt;
use std::str::FromStr;

use crate::error::SquareError;
use crate::file::File;
use crate::rank::Rank;

/// One of the 64 board cells, stored as `rank * 8 + file` (a1 = 0, h8 = 63).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// Number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from its file and rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Square {
        Square(rank.index() as u8 * 8 + file.index() as u8)
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    /// Parse the two-character coordinate form, e.g. `"e4"`.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file = File::from_char(chars.next()?)?;
        let rank = Rank::from_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Square::new(file, rank))
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the file of this square.
    #[inline]
    pub const fn file(self) -> File {
        File::ALL[(self.0 % 8) as usize]
    }

    /// Return the rank of this square.
    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 / 8) as usize]
    }

    /// The square `files` columns and `ranks` rows away, if it is on the board.
    #[inline]
    pub const fn offset(self, files: i8, ranks: i8) -> Option<Square> {
        let Some(file) = self.file().offset(files) else {
            return None;
        };
        let Some(rank) = self.rank().offset(ranks) else {
            return None;
        };
        Some(Square::new(file, rank))
    }

    /// Iterate over all 64 squares in index order (a1, b1, ..., h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }

    pub const A1: Square = Square::new(File::FileA, Rank::Rank1);
    pub const B1: Square = Square::new(File::FileB, Rank::Rank1);
    pub const C1: Square = Square::new(File::FileC, Rank::Rank1);
    pub const D1: Square = Square::new(File::FileD, Rank::Rank1);
    pub const E1: Square = Square::new(File::FileE, Rank::Rank1);
    pub const F1: Square = Square::new(File::FileF, Rank::Rank1);
    pub const G1: Square = Square::new(File::FileG, Rank::Rank1);
    pub const H1: Square = Square::new(File::FileH, Rank::Rank1);
    pub const E2: Square = Square::new(File::FileE, Rank::Rank2);
    pub const E4: Square = Square::new(File::FileE, Rank::Rank4);
    pub const A8: Square = Square::new(File::FileA, Rank::Rank8);
    pub const B8: Square = Square::new(File::FileB, Rank::Rank8);
    pub const C8: Square = Square::new(File::FileC, Rank::Rank8);
    pub const D8: Square = Square::new(File::FileD, Rank::Rank8);
    pub const E8: Square = Square::new(File::FileE, Rank::Rank8);
    pub const F8: Square = Square::new(File::FileF, Rank::Rank8);
    pub const G8: Square = Square::new(File::FileG, Rank::Rank8);
    pub const H8: Square = Square::new(File::FileH, Rank::Rank8);
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Square, SquareError> {
        Square::from_algebraic(s).ok_or_else(|| SquareError::Malformed {
            found: s.to_string(),
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({self})")
    }
}
