//! Chess rules: board representation, piece movement, legality and the special moves.

mod board;
mod castling;
mod check;
mod error;
mod file;
mod legality;
pub mod movegen;
mod piece;
mod piece_kind;
mod placement;
mod play;
mod promotion;
mod rank;
mod side;
mod square;
mod square_set;

pub use board::{Board, PrettyBoard};
pub use castling::CastleSide;
pub use check::{Status, is_in_check, is_square_attacked};
pub use error::{BoardError, PlacementError, SquareError};
pub use file::File;
pub use legality::is_legal;
pub use piece::{Piece, PieceId, Variant};
pub use piece_kind::{PieceKind, PromotionKind};
pub use placement::STARTING_PLACEMENT;
pub use rank::Rank;
pub use side::Side;
pub use square::Square;
pub use square_set::SquareSet;
