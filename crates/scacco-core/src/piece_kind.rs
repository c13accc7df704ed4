//! Chess piece kinds and their movement descriptors.

use std::fmt;

const KNIGHT_OFFSETS: [i8; 8] = [-8, -19, -21, -12, 8, 19, 21, 12];
const DIAGONAL_OFFSETS: [i8; 4] = [-9, -11, 11, 9];
const STRAIGHT_OFFSETS: [i8; 4] = [-1, -10, 1, 10];
const ALL_DIRECTIONS: [i8; 8] = [-1, -10, 1, 10, -9, -11, 11, 9];

/// The kind of a chess piece, without color information.
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

/// How a piece kind moves on the padded board: the offsets it may step by,
/// and whether each offset repeats along a ray until blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovePattern {
    pub offsets: &'static [i8],
    pub sliding: bool,
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

    /// Kinds a pawn may promote to, in generation order.
    pub const PROMOTABLE: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Return the index (0..5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Material value in centipawns.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 325,
            PieceKind::Bishop => 325,
            PieceKind::Rook => 550,
            PieceKind::Queen => 1000,
            PieceKind::King => 50_000,
        }
    }

    /// Movement descriptor for this kind.
    ///
    /// Pawns get an empty descriptor: their movement depends on color and
    /// occupancy and is handled through [`Color`](crate::Color)'s pawn
    /// offsets instead of this table.
    #[inline]
    pub const fn pattern(self) -> MovePattern {
        match self {
            PieceKind::Pawn => MovePattern {
                offsets: &[],
                sliding: false,
            },
            PieceKind::Knight => MovePattern {
                offsets: &KNIGHT_OFFSETS,
                sliding: false,
            },
            PieceKind::Bishop => MovePattern {
                offsets: &DIAGONAL_OFFSETS,
                sliding: true,
            },
            PieceKind::Rook => MovePattern {
                offsets: &STRAIGHT_OFFSETS,
                sliding: true,
            },
            PieceKind::Queen => MovePattern {
                offsets: &ALL_DIRECTIONS,
                sliding: true,
            },
            PieceKind::King => MovePattern {
                offsets: &ALL_DIRECTIONS,
                sliding: false,
            },
        }
    }

    /// Return the FEN character for this piece kind (lowercase).
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

    /// Parse a FEN character (case-insensitive) into a piece kind.
    #[inline]
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
        write!(f, "{}", self.fen_char())
    }
}

#[cfg(test)]
mod tests {
    use super::PieceKind;

    #[test]
    fn index_values() {
        assert_eq!(PieceKind::Pawn.index(), 0);
        assert_eq!(PieceKind::Knight.index(), 1);
        assert_eq!(PieceKind::Bishop.index(), 2);
        assert_eq!(PieceKind::Rook.index(), 3);
        assert_eq!(PieceKind::Queen.index(), 4);
        assert_eq!(PieceKind::King.index(), 5);
    }

    #[test]
    fn values_rank_sensibly() {
        assert!(PieceKind::Pawn.value() < PieceKind::Knight.value());
        assert_eq!(PieceKind::Knight.value(), PieceKind::Bishop.value());
        assert!(PieceKind::Bishop.value() < PieceKind::Rook.value());
        assert!(PieceKind::Rook.value() < PieceKind::Queen.value());
        assert!(PieceKind::Queen.value() < PieceKind::King.value());
    }

    #[test]
    fn patterns() {
        assert!(PieceKind::Pawn.pattern().offsets.is_empty());
        assert_eq!(PieceKind::Knight.pattern().offsets.len(), 8);
        assert!(!PieceKind::Knight.pattern().sliding);
        assert_eq!(PieceKind::Bishop.pattern().offsets.len(), 4);
        assert!(PieceKind::Bishop.pattern().sliding);
        assert_eq!(PieceKind::Rook.pattern().offsets.len(), 4);
        assert!(PieceKind::Rook.pattern().sliding);
        assert_eq!(PieceKind::Queen.pattern().offsets.len(), 8);
        assert!(PieceKind::Queen.pattern().sliding);
        assert_eq!(
            PieceKind::King.pattern().offsets,
            PieceKind::Queen.pattern().offsets
        );
        assert!(!PieceKind::King.pattern().sliding);
    }

    #[test]
    fn promotable_kinds() {
        assert_eq!(PieceKind::PROMOTABLE.len(), 4);
        assert_eq!(PieceKind::PROMOTABLE[0], PieceKind::Queen);
        assert!(!PieceKind::PROMOTABLE.contains(&PieceKind::Pawn));
        assert!(!PieceKind::PROMOTABLE.contains(&PieceKind::King));
    }

    #[test]
    fn fen_char_roundtrip() {
        for kind in PieceKind::ALL {
            let c = kind.fen_char();
            assert_eq!(PieceKind::from_fen_char(c), Some(kind));
            assert_eq!(PieceKind::from_fen_char(c.to_ascii_uppercase()), Some(kind));
        }
    }

    #[test]
    fn from_fen_char_invalid() {
        assert_eq!(PieceKind::from_fen_char('x'), None);
        assert_eq!(PieceKind::from_fen_char('1'), None);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", PieceKind::Pawn), "p");
        assert_eq!(format!("{}", PieceKind::King), "k");
    }
}
