//! The attack oracle: can a side reach a square in one step?

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Non-pawn kinds in probe order, cheapest patterns first.
const PROBE_ORDER: [PieceKind; 5] = [
    PieceKind::Knight,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

impl Board {
    /// Return `true` if `sq` is attacked by any piece of `by_color`.
    ///
    /// One-step pseudo-legal reachability under each piece's movement rule,
    /// regardless of whose turn it is. Driven by the piece lists, so the
    /// cost is proportional to the attacker's piece count.
    pub fn is_square_attacked(&self, sq: Square, by_color: Color) -> bool {
        debug_assert!(sq.is_playable(), "attack probe needs a playable square");

        // Pawns attack along their two capture offsets only.
        let pawn = Piece::new(PieceKind::Pawn, by_color);
        for &from in self.piece_squares(pawn) {
            for step in by_color.pawn_capture_steps() {
                if from.offset(step) == sq {
                    return true;
                }
            }
        }

        for kind in PROBE_ORDER {
            let piece = Piece::new(kind, by_color);
            let pattern = kind.pattern();
            for &from in self.piece_squares(piece) {
                for &step in pattern.offsets {
                    if pattern.sliding {
                        // Walk the ray; reaching `sq` before any blocker
                        // means the square is attacked, whatever it holds.
                        let mut to = from.offset(step);
                        loop {
                            if to == sq {
                                return true;
                            }
                            if !self.cell(to).is_empty() {
                                break;
                            }
                            to = to.offset(step);
                        }
                    } else if from.offset(step) == sq {
                        return true;
                    }
                }
            }
        }

        false
    }
}
