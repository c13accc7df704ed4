//! Error types for FEN parsing and board validation.

use std::fmt;

use crate::color::Color;
use crate::piece::Piece;
use crate::square::Square;

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// The FEN string does not have exactly 6 space-separated fields.
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement section does not have exactly 8 ranks.
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank in the piece placement describes more or fewer than 8 squares.
    BadRankLength {
        /// Zero-based rank index (0 = rank 8 in FEN, 7 = rank 1).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The active color field is not "w" or "b".
    InvalidColor {
        /// The invalid color string.
        found: String,
    },
    /// An unrecognized character appeared in the castling rights field.
    InvalidCastlingChar {
        /// The invalid character.
        character: char,
    },
    /// The en passant field is not "-" or a valid algebraic square.
    InvalidEnPassant {
        /// The invalid en passant string.
        found: String,
    },
    /// A move counter (halfmove clock or fullmove number) is not a valid number.
    InvalidMoveCounter {
        /// The field name ("halfmove clock" or "fullmove number").
        field: &'static str,
        /// The invalid string.
        found: String,
    },
    /// The parsed board fails structural validation.
    InvalidBoard {
        /// The underlying board validation error.
        source: BoardError,
    },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "expected 6 FEN fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "expected 8 ranks in piece placement, found {found}")
            }
            FenError::BadRankLength { rank_index, length } => {
                write!(
                    f,
                    "rank {rank_index} describes {length} squares, expected 8"
                )
            }
            FenError::InvalidPieceChar { character } => {
                write!(f, "invalid piece character: '{character}'")
            }
            FenError::InvalidColor { found } => {
                write!(f, "invalid active color: \"{found}\"")
            }
            FenError::InvalidCastlingChar { character } => {
                write!(f, "invalid castling character: '{character}'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "invalid en passant square: \"{found}\"")
            }
            FenError::InvalidMoveCounter { field, found } => {
                write!(f, "invalid {field}: \"{found}\"")
            }
            FenError::InvalidBoard { source } => {
                write!(f, "invalid board: {source}")
            }
        }
    }
}

impl std::error::Error for FenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FenError::InvalidBoard { source } => Some(source),
            _ => None,
        }
    }
}

impl From<BoardError> for FenError {
    fn from(source: BoardError) -> Self {
        FenError::InvalidBoard { source }
    }
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A slot disagrees with the padded frame: an off-board slot holds
    /// something other than the sentinel, or a playable slot holds it.
    #[error("slot {index} disagrees with the padded frame")]
    CorruptFrame {
        /// Padded-board index of the offending slot.
        index: usize,
    },
    /// A board square holds a piece that its piece list does not record
    /// exactly once.
    #[error("{piece} on {square} is not listed exactly once")]
    PieceListMismatch {
        /// The piece on the board.
        piece: Piece,
        /// The square it occupies.
        square: Square,
    },
    /// A piece list entry points at a square that does not hold that piece.
    #[error("stale list entry: {piece} listed on {square}")]
    StalePieceListEntry {
        /// The listed piece.
        piece: Piece,
        /// The square the list claims it occupies.
        square: Square,
    },
    /// A piece count disagrees with the number of board occurrences.
    #[error("count mismatch for {piece}: listed {listed}, on board {on_board}")]
    PieceCountMismatch {
        /// The affected piece.
        piece: Piece,
        /// Entries in the piece list.
        listed: usize,
        /// Occurrences found on the board.
        on_board: usize,
    },
    /// The incremental material tally disagrees with a recount.
    #[error("material mismatch for {color}: recorded {recorded}, recounted {recounted}")]
    MaterialMismatch {
        /// The affected side.
        color: Color,
        /// The incrementally maintained value.
        recorded: i32,
        /// The value recomputed from the board.
        recounted: i32,
    },
    /// The en passant target is off the board or on an impossible rank.
    #[error("implausible en passant target {square}")]
    BadEnPassantTarget {
        /// The recorded target square.
        square: Square,
    },
    /// More simultaneous copies of one piece than the lists can hold.
    #[error("too many {piece} pieces, the limit is {limit}")]
    TooManyPieces {
        /// The piece that overflowed.
        piece: Piece,
        /// List capacity per piece.
        limit: usize,
    },
}
