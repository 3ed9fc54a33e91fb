//! Error types for coordinate parsing, board setup and board validation.
//!
//! Rule violations (illegal moves, failed castling, bad promotion letters)
//! are not errors: the move pipeline reports them as `false`.

use crate::side::Side;

/// A coordinate string that does not name one of the 64 squares.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SquareError {
    /// Not a file letter `a`-`h` followed by a rank digit `1`-`8`.
    #[error("invalid square: \"{found}\"")]
    Malformed {
        /// The rejected input.
        found: String,
    },
}

/// Errors from parsing a piece-placement string into a [`Board`](crate::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// The placement does not have exactly 8 `/`-separated ranks.
    #[error("expected 8 ranks in placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index as written (0 = rank 8).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The described position breaks a board invariant.
    #[error("invalid board: {0}")]
    InvalidBoard(#[from] BoardError),
}

/// A broken board invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {side}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        side: Side,
        /// Number of kings found.
        count: usize,
    },
    /// Pawns occupy the first or eighth rank.
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
    /// A piece's cached square differs from the cell that holds it.
    #[error("piece cached at {cached} but occupies {occupied}")]
    StaleSquare {
        /// The square the piece believes it is on.
        cached: String,
        /// The square whose cell refers to the piece.
        occupied: String,
    },
    /// Occupied cells and the two rosters do not describe the same pieces.
    #[error("rosters do not partition the occupied squares")]
    RosterMismatch,
}
