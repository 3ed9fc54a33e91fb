//! The board: 64-cell occupancy map, piece arena, side rosters and king references.

use std::fmt;

use crate::error::BoardError;
use crate::file::File;
use crate::piece::{Piece, PieceId};
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::side::Side;
use crate::square::Square;

/// Back-rank piece for each file, a through h.
const BACK_RANK: [PieceKind; File::COUNT] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Complete game state.
///
/// Every square always has a cell (possibly empty). Pieces live in an arena
/// addressed by [`PieceId`]; captured or promoted-away pieces keep their arena
/// slot but leave their side's roster, so a roster lists exactly the pieces
/// still on the board.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    /// Occupant of each square, indexed by [`Square::index()`].
    cells: [Option<PieceId>; Square::COUNT],
    /// Every piece ever placed on this board.
    arena: Vec<Piece>,
    /// Live pieces per side, indexed by [`Side::index()`].
    rosters: [Vec<PieceId>; Side::COUNT],
    /// The king of each side.
    kings: [PieceId; Side::COUNT],
}

impl Board {
    /// Return a board set up in the standard starting position.
    pub fn new() -> Board {
        let mut board = Board::with_kings(
            Square::new(File::FileE, Side::White.home_rank()),
            Square::new(File::FileE, Side::Black.home_rank()),
        );
        for side in Side::ALL {
            for file in File::ALL {
                let kind = BACK_RANK[file.index()];
                if kind != PieceKind::King {
                    board.add_piece(kind, side, Square::new(file, side.home_rank()));
                }
                board.add_piece(PieceKind::Pawn, side, Square::new(file, side.pawn_rank()));
            }
        }
        board
    }

    /// A board holding only the two kings.
    pub(crate) fn with_kings(white: Square, black: Square) -> Board {
        let mut board = Board {
            cells: [None; Square::COUNT],
            arena: Vec::with_capacity(32),
            rosters: [Vec::with_capacity(16), Vec::with_capacity(16)],
            kings: [PieceId::new(0), PieceId::new(1)],
        };
        let white_king = board.add_piece(PieceKind::King, Side::White, white);
        let black_king = board.add_piece(PieceKind::King, Side::Black, black);
        board.kings = [white_king, black_king];
        board
    }

    /// Construct a new piece on `sq` and enter it in its side's roster.
    ///
    /// Whatever occupied `sq` is overwritten in the cell but not removed from
    /// its roster; callers clear captures first.
    pub(crate) fn add_piece(&mut self, kind: PieceKind, side: Side, sq: Square) -> PieceId {
        let id = PieceId::new(self.arena.len());
        self.arena.push(Piece::new(kind, side, sq));
        self.rosters[side.index()].push(id);
        self.cells[sq.index()] = Some(id);
        id
    }

    /// Drop a piece from its side's roster. Its cell is left to the caller.
    pub(crate) fn remove_from_roster(&mut self, id: PieceId) {
        let side = self.piece(id).side();
        self.rosters[side.index()].retain(|&other| other != id);
    }

    /// Return the id of the piece on `sq`, if any.
    #[inline]
    pub fn occupant_id(&self, sq: Square) -> Option<PieceId> {
        self.cells[sq.index()]
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn occupant_at(&self, sq: Square) -> Option<&Piece> {
        self.occupant_id(sq).map(|id| self.piece(id))
    }

    /// Return `true` if a piece stands on `sq`.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_some()
    }

    /// Return the side of the piece on `sq`, if any.
    #[inline]
    pub fn side_on(&self, sq: Square) -> Option<Side> {
        self.occupant_at(sq).map(Piece::side)
    }

    /// Set the occupant of `sq` and bring the occupant's cached square in line.
    ///
    /// No rule checks are made; this is the primitive the move pipeline builds on.
    #[inline]
    pub(crate) fn set_occupant(&mut self, sq: Square, occupant: Option<PieceId>) {
        self.cells[sq.index()] = occupant;
        if let Some(id) = occupant {
            self.arena[id.index()].set_square(sq);
        }
    }

    /// Look up a piece issued by this board.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different board.
    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.arena[id.index()]
    }

    #[inline]
    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.arena[id.index()]
    }

    /// Return the id of `side`'s king.
    #[inline]
    pub fn king_id(&self, side: Side) -> PieceId {
        self.kings[side.index()]
    }

    /// Return `side`'s king.
    #[inline]
    pub fn king_of(&self, side: Side) -> &Piece {
        self.piece(self.king_id(side))
    }

    /// Ids of `side`'s pieces still on the board.
    #[inline]
    pub fn roster(&self, side: Side) -> &[PieceId] {
        &self.rosters[side.index()]
    }

    /// `side`'s pieces still on the board, in roster order.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = &Piece> + '_ {
        self.roster(side).iter().map(|&id| self.piece(id))
    }

    /// Two-character code of the piece on `sq` (`"wQ"`, `"bp"`), or `None` for an empty square.
    pub fn occupant_symbol(&self, sq: Square) -> Option<&'static str> {
        self.occupant_at(sq).map(Piece::symbol)
    }

    /// Number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.rosters.iter().map(Vec::len).sum()
    }

    /// Check the structural invariants of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        for side in Side::ALL {
            let kings = self
                .pieces_of(side)
                .filter(|p| p.kind() == PieceKind::King)
                .count();
            let registered = self.king_of(side);
            if kings != 1
                || registered.kind() != PieceKind::King
                || registered.side() != side
                || !self.roster(side).contains(&self.king_id(side))
            {
                return Err(BoardError::InvalidKingCount { side, count: kings });
            }
        }

        let mut occupied = 0;
        for sq in Square::all() {
            let Some(id) = self.occupant_id(sq) else {
                continue;
            };
            occupied += 1;
            let piece = self.piece(id);
            if piece.square() != sq {
                return Err(BoardError::StaleSquare {
                    cached: piece.square().to_string(),
                    occupied: sq.to_string(),
                });
            }
            if !self.roster(piece.side()).contains(&id) {
                return Err(BoardError::RosterMismatch);
            }
            let back_rank = sq.rank() == Rank::Rank1 || sq.rank() == Rank::Rank8;
            if back_rank && piece.kind() == PieceKind::Pawn {
                return Err(BoardError::PawnsOnBackRank);
            }
        }

        if occupied != self.piece_count() {
            return Err(BoardError::RosterMismatch);
        }
        for side in Side::ALL {
            let consistent = self.roster(side).iter().all(|&id| {
                let piece = self.piece(id);
                piece.side() == side && self.occupant_id(piece.square()) == Some(id)
            });
            if !consistent {
                return Err(BoardError::RosterMismatch);
            }
        }
        Ok(())
    }

    /// Return a printable wrapper that draws the board as a grid.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for side in Side::ALL {
            list.entries(self.pieces_of(side));
        }
        list.finish()
    }
}

/// Board drawn rank 8 first, with `##` on empty dark squares.
///
/// ```text
/// a  b  c  d  e  f  g  h
/// bR bN bB bQ bK bB bN bR 8
/// bp bp bp bp bp bp bp bp 7
///    ##    ##    ##    ## 6
/// ```
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        let header: Vec<String> = File::ALL.iter().map(ToString::to_string).collect();
        writeln!(f, "{}", header.join("  "))?;
        for rank in Rank::ALL.iter().rev() {
            for file in File::ALL {
                let sq = Square::new(file, *rank);
                let cell = match board.occupant_symbol(sq) {
                    Some(symbol) => symbol,
                    None if (file.index() + rank.index()) % 2 == 0 => "##",
                    None => "  ",
                };
                write!(f, "{cell} ")?;
            }
            writeln!(f, "{rank}")?;
        }
        Ok(())
    }
}
