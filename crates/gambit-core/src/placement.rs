//! Piece-placement strings (the first field of FEN) for setting up a [`Board`].
//!
//! Only the placement field is understood: side to move, castling and the
//! move counters are not part of the board model. Kings and rooks standing on
//! their home squares start out unmoved; anywhere else they count as moved.

use std::fmt::Write as _;
use std::str::FromStr;

use crate::board::Board;
use crate::error::{BoardError, PlacementError};
use crate::file::File;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::side::Side;
use crate::square::Square;

/// Placement of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl Board {
    /// Build a board from a FEN piece-placement field.
    pub fn from_placement(placement: &str) -> Result<Board, PlacementError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != Rank::COUNT {
            return Err(PlacementError::WrongRankCount { found: ranks.len() });
        }

        let mut pieces = Vec::with_capacity(32);
        for (rank_index, rank_str) in ranks.iter().enumerate() {
            // Placement ranks run from 8 down to 1.
            let rank = Rank::ALL[Rank::COUNT - 1 - rank_index];
            let mut file_index: usize = 0;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(PlacementError::InvalidPieceChar { character: c });
                    }
                    file_index += digit as usize;
                    continue;
                }
                let kind = PieceKind::from_fen_char(c)
                    .ok_or(PlacementError::InvalidPieceChar { character: c })?;
                let side = if c.is_ascii_uppercase() {
                    Side::White
                } else {
                    Side::Black
                };
                let Some(file) = File::from_index(file_index as u8) else {
                    return Err(PlacementError::BadRankLength {
                        rank_index,
                        length: file_index + 1,
                    });
                };
                pieces.push((kind, side, Square::new(file, rank)));
                file_index += 1;
            }

            if file_index != File::COUNT {
                return Err(PlacementError::BadRankLength {
                    rank_index,
                    length: file_index,
                });
            }
        }

        let king_square = |side: Side| -> Result<Square, PlacementError> {
            let found: Vec<Square> = pieces
                .iter()
                .filter(|&&(kind, s, _)| kind == PieceKind::King && s == side)
                .map(|&(_, _, sq)| sq)
                .collect();
            match found.as_slice() {
                [sq] => Ok(*sq),
                _ => Err(BoardError::InvalidKingCount {
                    side,
                    count: found.len(),
                }
                .into()),
            }
        };
        let white_king = king_square(Side::White)?;
        let black_king = king_square(Side::Black)?;

        let mut board = Board::with_kings(white_king, black_king);
        for &(kind, side, sq) in &pieces {
            if kind != PieceKind::King {
                board.add_piece(kind, side, sq);
            }
        }
        for side in Side::ALL {
            let off_home: Vec<_> = board
                .roster(side)
                .iter()
                .copied()
                .filter(|&id| {
                    let piece = board.piece(id);
                    piece.has_moved().is_some() && !is_home_square(piece.kind(), side, piece.square())
                })
                .collect();
            for id in off_home {
                board.piece_mut(id).mark_moved();
            }
        }

        board.validate()?;
        Ok(board)
    }

    /// Render the occupancy as a FEN piece-placement field.
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(64);
        for (i, rank) in Rank::ALL.iter().rev().enumerate() {
            if i > 0 {
                out.push('/');
            }
            let mut empty = 0;
            for file in File::ALL {
                match self.occupant_at(Square::new(file, *rank)) {
                    Some(piece) => {
                        if empty > 0 {
                            let _ = write!(out, "{empty}");
                            empty = 0;
                        }
                        let c = piece.kind().fen_char();
                        out.push(match piece.side() {
                            Side::White => c.to_ascii_uppercase(),
                            Side::Black => c,
                        });
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                let _ = write!(out, "{empty}");
            }
        }
        out
    }
}

impl FromStr for Board {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Board, PlacementError> {
        Board::from_placement(s)
    }
}

/// Whether `sq` is where a king or rook of `side` starts the game.
fn is_home_square(kind: PieceKind, side: Side, sq: Square) -> bool {
    if sq.rank() != side.home_rank() {
        return false;
    }
    match kind {
        PieceKind::King => sq.file() == File::FileE,
        PieceKind::Rook => sq.file() == File::FileA || sq.file() == File::FileH,
        _ => false,
    }
}
