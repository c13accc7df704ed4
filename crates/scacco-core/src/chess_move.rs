//! Move descriptors, bit-packed into a u32.

use std::fmt;

use crate::piece::Piece;
use crate::square::Square;

// Private bit-field constants.
const SRC_MASK: u32 = 0x0000_007F;
const DST_MASK: u32 = 0x0000_3F80;
const CAPTURE_MASK: u32 = 0x0003_C000;
const PROMO_MASK: u32 = 0x003C_0000;
const KIND_MASK: u32 = 0x00C0_0000;
const SRC_SHIFT: u32 = 0;
const DST_SHIFT: u32 = 7;
const CAPTURE_SHIFT: u32 = 14;
const PROMO_SHIFT: u32 = 18;
const KIND_SHIFT: u32 = 22;

/// Bit pattern marking an empty piece field (no capture / no promotion).
/// 0b1111 is not a valid [`Piece`] raw value.
const PIECE_NONE: u32 = 0b1111;

/// The category of a move, beyond what its piece fields say.
///
/// Exactly one category applies; plain quiet moves and plain captures are
/// both `Normal`, distinguished by the captured-piece field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoveKind {
    Normal = 0,
    DoublePawn = 1,
    EnPassant = 2,
    Castling = 3,
}

impl MoveKind {
    /// Return the bit pattern for this kind, shifted to position.
    const fn bits(self) -> u32 {
        (self as u32) << KIND_SHIFT
    }
}

/// A move descriptor encoded in 32 bits.
///
/// ```text
/// bits  0-6:  origin square       (padded index 0-119)
/// bits  7-13: destination square  (padded index 0-119)
/// bits 14-17: captured piece      (Piece raw value, or 15 for none)
/// bits 18-21: promoted piece      (Piece raw value, or 15 for none)
/// bits 22-23: move kind           (Normal=0, DoublePawn=1, EnPassant=2, Castling=3)
/// ```
///
/// The captured piece is recorded so undo can reinsert it without any other
/// source of information; an en-passant capture leaves the field empty and
/// is reconstructed from its kind instead.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u32);

impl Move {
    /// Null move sentinel: both squares are the index-0 off-board slot and
    /// both piece fields are empty. Never a playable move.
    pub const NULL: Move = Move(PIECE_NONE << CAPTURE_SHIFT | PIECE_NONE << PROMO_SHIFT);

    /// Pack a full move descriptor. The convenience constructors below
    /// cover every combination the generator emits.
    pub const fn encode(
        source: Square,
        dest: Square,
        captured: Option<Piece>,
        promoted: Option<Piece>,
        kind: MoveKind,
    ) -> Move {
        Move(
            ((source.index() as u32) << SRC_SHIFT)
                | ((dest.index() as u32) << DST_SHIFT)
                | (piece_bits(captured) << CAPTURE_SHIFT)
                | (piece_bits(promoted) << PROMO_SHIFT)
                | kind.bits(),
        )
    }

    /// Create a quiet move.
    pub const fn new(source: Square, dest: Square) -> Move {
        Move::encode(source, dest, None, None, MoveKind::Normal)
    }

    /// Create a capture, recording the victim for undo.
    pub const fn new_capture(source: Square, dest: Square, victim: Piece) -> Move {
        Move::encode(source, dest, Some(victim), None, MoveKind::Normal)
    }

    /// Create a double pawn step.
    pub const fn new_double_pawn(source: Square, dest: Square) -> Move {
        Move::encode(source, dest, None, None, MoveKind::DoublePawn)
    }

    /// Create an en passant capture.
    ///
    /// The removed pawn is implied by the kind and is not stored in the
    /// captured-piece field.
    pub const fn new_en_passant(source: Square, dest: Square) -> Move {
        Move::encode(source, dest, None, None, MoveKind::EnPassant)
    }

    /// Create a castling move using the king's origin and destination.
    pub const fn new_castle(king_src: Square, king_dst: Square) -> Move {
        Move::encode(king_src, king_dst, None, None, MoveKind::Castling)
    }

    /// Create a promotion, optionally capturing on the promotion square.
    pub const fn new_promotion(
        source: Square,
        dest: Square,
        captured: Option<Piece>,
        promoted: Piece,
    ) -> Move {
        Move::encode(source, dest, captured, Some(promoted), MoveKind::Normal)
    }

    /// Extract the origin square.
    pub const fn source(self) -> Square {
        Square::from_index_unchecked((self.0 & SRC_MASK) as u8)
    }

    /// Extract the destination square.
    pub const fn dest(self) -> Square {
        Square::from_index_unchecked(((self.0 & DST_MASK) >> DST_SHIFT) as u8)
    }

    /// Extract the captured piece, if any.
    pub const fn captured(self) -> Option<Piece> {
        piece_from_bits((self.0 & CAPTURE_MASK) >> CAPTURE_SHIFT)
    }

    /// Extract the promoted piece, if any.
    pub const fn promoted(self) -> Option<Piece> {
        piece_from_bits((self.0 & PROMO_MASK) >> PROMO_SHIFT)
    }

    /// Extract the move kind.
    pub const fn kind(self) -> MoveKind {
        match (self.0 & KIND_MASK) >> KIND_SHIFT {
            0 => MoveKind::Normal,
            1 => MoveKind::DoublePawn,
            2 => MoveKind::EnPassant,
            _ => MoveKind::Castling,
        }
    }

    /// Return `true` if this is the null move sentinel.
    pub const fn is_null(self) -> bool {
        self.0 == Move::NULL.0
    }

    /// Return `true` if a captured piece is recorded.
    ///
    /// En passant captures return `false` here; their victim is implied by
    /// the kind.
    pub const fn is_capture(self) -> bool {
        (self.0 & CAPTURE_MASK) >> CAPTURE_SHIFT != PIECE_NONE
    }

    /// Return `true` if this is a promotion.
    pub const fn is_promotion(self) -> bool {
        (self.0 & PROMO_MASK) >> PROMO_SHIFT != PIECE_NONE
    }

    /// Return `true` if this is a double pawn step.
    pub const fn is_double_pawn(self) -> bool {
        (self.0 & KIND_MASK) >> KIND_SHIFT == MoveKind::DoublePawn as u32
    }

    /// Return `true` if this is an en passant capture.
    pub const fn is_en_passant(self) -> bool {
        (self.0 & KIND_MASK) >> KIND_SHIFT == MoveKind::EnPassant as u32
    }

    /// Return `true` if this is a castling move.
    pub const fn is_castle(self) -> bool {
        (self.0 & KIND_MASK) >> KIND_SHIFT == MoveKind::Castling as u32
    }

    /// Return the coordinate ("UCI") string representation.
    ///
    /// # Panics
    ///
    /// Debug-asserts that the move is not null.
    pub fn to_uci(self) -> String {
        debug_assert!(!self.is_null(), "to_uci called on null move");
        match self.promoted() {
            Some(piece) => format!("{}{}{}", self.source(), self.dest(), piece.kind().fen_char()),
            None => format!("{}{}", self.source(), self.dest()),
        }
    }
}

/// Encode an optional piece into a 4-bit field value.
const fn piece_bits(piece: Option<Piece>) -> u32 {
    match piece {
        Some(piece) => piece.raw() as u32,
        None => PIECE_NONE,
    }
}

/// Decode a 4-bit field value back into an optional piece.
const fn piece_from_bits(bits: u32) -> Option<Piece> {
    if bits == PIECE_NONE {
        return None;
    }
    let piece = Piece::from_raw(bits as u8);
    debug_assert!(piece.is_some(), "corrupt piece field in move encoding");
    piece
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "0000");
        }
        match self.promoted() {
            Some(piece) => write!(
                f,
                "{}{}{}",
                self.source(),
                self.dest(),
                piece.kind().fen_char()
            ),
            None => write!(f, "{}{}", self.source(), self.dest()),
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} kind={:?})", self, self.kind())
    }
}
