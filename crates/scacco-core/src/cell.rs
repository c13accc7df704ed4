//! Contents of one padded-board slot.

use std::fmt;

use crate::piece::Piece;

/// What a board slot holds: a sentinel outside the playable area, nothing,
/// or a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    OffBoard,
    Empty,
    Piece(Piece),
}

impl Cell {
    /// True for an empty playable slot.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// True for a sentinel slot outside the playable area.
    #[inline]
    pub const fn is_off_board(self) -> bool {
        matches!(self, Cell::OffBoard)
    }

    /// Return the occupying piece, if any.
    #[inline]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Cell::Piece(piece) => Some(piece),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::OffBoard => write!(f, "x"),
            Cell::Empty => write!(f, "."),
            Cell::Piece(piece) => write!(f, "{piece}"),
        }
    }
}
