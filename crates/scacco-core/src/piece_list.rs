//! Per-piece lists of occupied squares.

use crate::piece::Piece;
use crate::square::Square;

/// Maximum simultaneous pieces of one exact kind and color: two originals
/// plus eight promotions (ten rooks is the legal worst case).
pub(crate) const MAX_PER_PIECE: usize = 10;

/// Squares occupied by each piece, maintained incrementally as moves are
/// made and unmade so iteration never has to scan the board.
///
/// Each per-piece row is a fixed array plus a count; slots beyond the count
/// are stale and only the prefix returned by [`PieceList::squares`] is
/// meaningful. Removal swaps the last entry into the vacated slot, so list
/// order is insertion order disturbed only by captures.
#[derive(Debug, Clone)]
pub(crate) struct PieceList {
    squares: [[Square; MAX_PER_PIECE]; Piece::COUNT],
    counts: [u8; Piece::COUNT],
}

impl PieceList {
    pub(crate) const fn new() -> PieceList {
        PieceList {
            squares: [[Square::A1; MAX_PER_PIECE]; Piece::COUNT],
            counts: [0; Piece::COUNT],
        }
    }

    /// Number of pieces of this exact kind and color on the board.
    #[inline]
    pub(crate) fn count(&self, piece: Piece) -> usize {
        self.counts[piece.index()] as usize
    }

    /// The squares currently holding `piece`.
    #[inline]
    pub(crate) fn squares(&self, piece: Piece) -> &[Square] {
        &self.squares[piece.index()][..self.count(piece)]
    }

    /// Record `piece` appearing on `square`.
    pub(crate) fn add(&mut self, piece: Piece, square: Square) {
        let idx = piece.index();
        let count = self.counts[idx] as usize;
        assert!(count < MAX_PER_PIECE, "piece list overflow");
        self.squares[idx][count] = square;
        self.counts[idx] = count as u8 + 1;
    }

    /// Record `piece` leaving `square`.
    pub(crate) fn remove(&mut self, piece: Piece, square: Square) {
        let idx = piece.index();
        let count = self.counts[idx] as usize;
        let slot = self.squares[idx][..count]
            .iter()
            .position(|&sq| sq == square)
            .expect("piece list entry missing on remove");
        self.squares[idx][slot] = self.squares[idx][count - 1];
        self.counts[idx] = count as u8 - 1;
    }

    /// Update the entry for `piece` standing on `from` to point at `to`.
    pub(crate) fn relocate(&mut self, piece: Piece, from: Square, to: Square) {
        let idx = piece.index();
        let count = self.counts[idx] as usize;
        let slot = self.squares[idx][..count]
            .iter()
            .position(|&sq| sq == from)
            .expect("piece list entry missing on relocate");
        self.squares[idx][slot] = to;
    }

    /// Forget every entry.
    pub(crate) fn clear(&mut self) {
        *self = PieceList::new();
    }
}
