//! Squares of the padded 120-slot board.
//!
//! The board is stored as 10 columns × 12 rows: the playable 8×8 area sits
//! at indices 21..=98, surrounded by two sentinel rows top and bottom and
//! one sentinel column on each side. Fixed-offset movement can therefore
//! step blindly and test the landing square against the sentinel tables
//! instead of doing edge arithmetic.

use std::fmt;

use crate::file::File;
use crate::rank::Rank;

/// Padded-board file lookup: `None` marks an off-board slot.
const FILE_OF: [Option<File>; 120] = {
    let mut table = [None; 120];
    let mut rank = 0u8;
    while rank < 8 {
        let mut file = 0u8;
        while file < 8 {
            table[(21 + rank * 10 + file) as usize] = File::from_index(file);
            file += 1;
        }
        rank += 1;
    }
    table
};

/// Padded-board rank lookup: `None` marks an off-board slot.
const RANK_OF: [Option<Rank>; 120] = {
    let mut table = [None; 120];
    let mut rank = 0u8;
    while rank < 8 {
        let mut file = 0u8;
        while file < 8 {
            table[(21 + rank * 10 + file) as usize] = Rank::from_index(rank);
            file += 1;
        }
        rank += 1;
    }
    table
};

/// A square of the padded board, encoded as a `u8` index in 0..120.
///
/// Index = 21 + rank * 10 + file for playable squares, so A1 = 21,
/// B1 = 22, ..., H8 = 98. Every other index is an off-board sentinel.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of padded-board slots.
    pub const COUNT: usize = 120;

    /// Number of playable squares.
    pub const PLAYABLE_COUNT: usize = 64;

    /// Create a playable square from a rank and file.
    #[inline]
    pub const fn new(rank: Rank, file: File) -> Square {
        Square(21 + rank.index() as u8 * 10 + file.index() as u8)
    }

    /// Create a square from a padded-board index, returning `None` if out
    /// of range. The result may be an off-board sentinel slot.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 120 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Create a square from a padded-board index without bounds checking.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `index < 120`.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!(index < 120);
        Square(index)
    }

    /// Parse an algebraic notation string (e.g. "e4") into a square.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let file_byte = bytes[0];
        let rank_byte = bytes[1];

        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }

        let file = File::from_index(file_byte - b'a')?;
        let rank = Rank::from_index(rank_byte - b'1')?;
        Some(Square::new(rank, file))
    }

    /// Return the padded-board index (0..119).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the rank, or `None` for an off-board slot.
    #[inline]
    pub const fn rank(self) -> Option<Rank> {
        RANK_OF[self.0 as usize]
    }

    /// Return the file, or `None` for an off-board slot.
    #[inline]
    pub const fn file(self) -> Option<File> {
        FILE_OF[self.0 as usize]
    }

    /// True for the 64 squares of the real board, false for sentinels.
    #[inline]
    pub const fn is_playable(self) -> bool {
        FILE_OF[self.0 as usize].is_some()
    }

    /// Step by a movement offset.
    ///
    /// From a playable square every single step of the movement tables
    /// lands inside 0..120, so the result is always representable; it may
    /// be an off-board sentinel, which the caller tests for.
    #[inline]
    pub const fn offset(self, delta: i8) -> Square {
        let target = self.0 as i16 + delta as i16;
        debug_assert!(0 <= target && target < 120);
        Square(target as u8)
    }

    /// Iterate over the 64 playable squares in index order (A1, B1, ..., H8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(|i| Square(21 + (i / 8) * 10 + (i % 8)))
    }

    // Named playable-square constants
    pub const A1: Square = Square(21);
    pub const B1: Square = Square(22);
    pub const C1: Square = Square(23);
    pub const D1: Square = Square(24);
    pub const E1: Square = Square(25);
    pub const F1: Square = Square(26);
    pub const G1: Square = Square(27);
    pub const H1: Square = Square(28);
    pub const A2: Square = Square(31);
    pub const B2: Square = Square(32);
    pub const C2: Square = Square(33);
    pub const D2: Square = Square(34);
    pub const E2: Square = Square(35);
    pub const F2: Square = Square(36);
    pub const G2: Square = Square(37);
    pub const H2: Square = Square(38);
    pub const A3: Square = Square(41);
    pub const B3: Square = Square(42);
    pub const C3: Square = Square(43);
    pub const D3: Square = Square(44);
    pub const E3: Square = Square(45);
    pub const F3: Square = Square(46);
    pub const G3: Square = Square(47);
    pub const H3: Square = Square(48);
    pub const A4: Square = Square(51);
    pub const B4: Square = Square(52);
    pub const C4: Square = Square(53);
    pub const D4: Square = Square(54);
    pub const E4: Square = Square(55);
    pub const F4: Square = Square(56);
    pub const G4: Square = Square(57);
    pub const H4: Square = Square(58);
    pub const A5: Square = Square(61);
    pub const B5: Square = Square(62);
    pub const C5: Square = Square(63);
    pub const D5: Square = Square(64);
    pub const E5: Square = Square(65);
    pub const F5: Square = Square(66);
    pub const G5: Square = Square(67);
    pub const H5: Square = Square(68);
    pub const A6: Square = Square(71);
    pub const B6: Square = Square(72);
    pub const C6: Square = Square(73);
    pub const D6: Square = Square(74);
    pub const E6: Square = Square(75);
    pub const F6: Square = Square(76);
    pub const G6: Square = Square(77);
    pub const H6: Square = Square(78);
    pub const A7: Square = Square(81);
    pub const B7: Square = Square(82);
    pub const C7: Square = Square(83);
    pub const D7: Square = Square(84);
    pub const E7: Square = Square(85);
    pub const F7: Square = Square(86);
    pub const G7: Square = Square(87);
    pub const H7: Square = Square(88);
    pub const A8: Square = Square(91);
    pub const B8: Square = Square(92);
    pub const C8: Square = Square(93);
    pub const D8: Square = Square(94);
    pub const E8: Square = Square(95);
    pub const F8: Square = Square(96);
    pub const G8: Square = Square(97);
    pub const H8: Square = Square(98);
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.file(), self.rank()) {
            (Some(file), Some(rank)) => write!(f, "{file}{rank}"),
            _ => write!(f, "--"),
        }
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
