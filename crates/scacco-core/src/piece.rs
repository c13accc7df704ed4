//! Colored chess piece, bit-packed into a single byte.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A colored chess piece, bit-packed into a single byte.
///
/// Bit layout:
/// - bits 0-2: [`PieceKind`] (values 0-5)
/// - bit 3: [`Color`] (0 = White, 1 = Black)
///
/// Valid raw values are 0-5 (White pieces) and 8-13 (Black pieces), which
/// fit the four-bit piece fields of the move encoding.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    /// All 12 valid pieces in order (White 0-5, Black 6-11 by index).
    pub const COUNT: usize = 12;

    /// White pawn. Raw value: 0.
    pub const WHITE_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::White);
    /// White knight. Raw value: 1.
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::White);
    /// White bishop. Raw value: 2.
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::White);
    /// White rook. Raw value: 3.
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Color::White);
    /// White queen. Raw value: 4.
    pub const WHITE_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::White);
    /// White king. Raw value: 5.
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Color::White);

    /// Black pawn. Raw value: 8.
    pub const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::Black);
    /// Black knight. Raw value: 9.
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::Black);
    /// Black bishop. Raw value: 10.
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::Black);
    /// Black rook. Raw value: 11.
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Color::Black);
    /// Black queen. Raw value: 12.
    pub const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::Black);
    /// Black king. Raw value: 13.
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Color::Black);

    /// All 12 pieces: White pieces (indices 0-5) followed by Black pieces
    /// (indices 6-11).
    pub const ALL: [Piece; 12] = [
        Self::WHITE_PAWN,
        Self::WHITE_KNIGHT,
        Self::WHITE_BISHOP,
        Self::WHITE_ROOK,
        Self::WHITE_QUEEN,
        Self::WHITE_KING,
        Self::BLACK_PAWN,
        Self::BLACK_KNIGHT,
        Self::BLACK_BISHOP,
        Self::BLACK_ROOK,
        Self::BLACK_QUEEN,
        Self::BLACK_KING,
    ];

    /// Create a piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece((color as u8) << 3 | (kind as u8))
    }

    /// Reconstruct a piece from its raw byte, rejecting the gaps in the
    /// encoding (6, 7 and anything above 13).
    #[inline]
    pub const fn from_raw(raw: u8) -> Option<Piece> {
        if raw & !0x0F != 0 || raw & 0x07 > 5 {
            return None;
        }
        Some(Piece(raw))
    }

    /// Parse a FEN character into a piece.
    ///
    /// Uppercase letters produce White pieces; lowercase letters produce
    /// Black pieces. Returns `None` for characters that are not valid piece
    /// letters.
    #[inline]
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_fen_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }

    /// Return the piece kind (the lower 3 bits).
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self.0 & 0x07 {
            0 => PieceKind::Pawn,
            1 => PieceKind::Knight,
            2 => PieceKind::Bishop,
            3 => PieceKind::Rook,
            4 => PieceKind::Queen,
            _ => PieceKind::King,
        }
    }

    /// Return the color (bit 3: 0 = White, 1 = Black).
    #[inline]
    pub const fn color(self) -> Color {
        match self.0 >> 3 {
            0 => Color::White,
            _ => Color::Black,
        }
    }

    /// Return a contiguous index 0-11, the key into the per-piece lists.
    ///
    /// White pieces occupy indices 0-5, Black pieces occupy indices 6-11.
    /// The kind index within each color group matches [`PieceKind::index`].
    #[inline]
    pub const fn index(self) -> usize {
        let color_bit = (self.0 >> 3) as usize;
        let kind_bits = (self.0 & 0x07) as usize;
        color_bit * 6 + kind_bits
    }

    /// Return the raw bit-packed byte (0-5 for White, 8-13 for Black).
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Return the FEN character for this piece.
    ///
    /// Uppercase for White pieces, lowercase for Black pieces.
    #[inline]
    pub fn fen_char(self) -> char {
        let base = self.kind().fen_char();
        match self.color() {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color() {
            Color::White => 'W',
            Color::Black => 'B',
        };
        let kind_char = self.kind().fen_char().to_ascii_uppercase();
        write!(f, "{}{}", color_prefix, kind_char)
    }
}
