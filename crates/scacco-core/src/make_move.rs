//! Move execution and retraction.
//!
//! Moves are applied in place. Each application pushes a history entry
//! holding the state the move destroys, and [`Board::undo_move`] pops one
//! entry and reverses every step, so a make/undo pair restores the
//! position exactly.

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Per-move snapshot of the fields a move overwrites irrecoverably. The
/// rest of the position is restored by reversing the move itself.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HistoryEntry {
    mv: Move,
    castling: CastleRights,
    en_passant: Option<Square>,
    halfmove_clock: u16,
}

impl HistoryEntry {
    /// The move this entry records.
    #[inline]
    pub(crate) fn moved(&self) -> Move {
        self.mv
    }
}

/// Castling rights that survive a move touching the indexed square.
///
/// Every square keeps all rights except the six king and rook home
/// squares; applying the mask for both endpoints of a move covers moving
/// a king or rook as well as capturing a rook that never moved.
const CASTLE_KEEP: [CastleRights; Square::COUNT] = {
    let mut table = [CastleRights::ALL; Square::COUNT];
    table[Square::E1.index()] = CastleRights::ALL.remove(CastleRights::WHITE_BOTH);
    table[Square::A1.index()] = CastleRights::ALL.remove(CastleRights::WHITE_QUEEN);
    table[Square::H1.index()] = CastleRights::ALL.remove(CastleRights::WHITE_KING);
    table[Square::E8.index()] = CastleRights::ALL.remove(CastleRights::BLACK_BOTH);
    table[Square::A8.index()] = CastleRights::ALL.remove(CastleRights::BLACK_QUEEN);
    table[Square::H8.index()] = CastleRights::ALL.remove(CastleRights::BLACK_KING);
    table
};

/// Rook relocation for a castling move, keyed on the king's destination.
fn rook_lane(king_dst: Square) -> (Square, Square) {
    if king_dst == Square::G1 {
        (Square::H1, Square::F1)
    } else if king_dst == Square::C1 {
        (Square::A1, Square::D1)
    } else if king_dst == Square::G8 {
        (Square::H8, Square::F8)
    } else if king_dst == Square::C8 {
        (Square::A8, Square::D8)
    } else {
        unreachable!("castling king destination must be g1, c1, g8 or c8")
    }
}

impl Board {
    /// Apply a move to the board.
    ///
    /// The move must have been generated on this position: the executor
    /// trusts the encoded source, victim and kind and panics on a board
    /// that contradicts them.
    pub fn make_move(&mut self, mv: Move) {
        debug_assert!(!mv.is_null());
        let us = self.side_to_move();
        let src = mv.source();
        let dst = mv.dest();
        let mover = self
            .piece_at(src)
            .expect("make_move needs a piece on the source square");
        debug_assert_eq!(mover.color(), us, "the mover must belong to the side to move");

        // An en passant victim does not stand on the destination: it sits
        // one step behind it, back toward the mover's side.
        if mv.is_en_passant() {
            let victim = self.remove_piece(dst.offset(-us.pawn_step()));
            debug_assert_eq!(victim.kind(), PieceKind::Pawn);
        }

        // The rook half of a castle. The king half runs through the
        // common relocation below.
        if mv.is_castle() {
            let (rook_from, rook_to) = rook_lane(dst);
            self.relocate_piece(rook_from, rook_to);
        }

        self.push_history(HistoryEntry {
            mv,
            castling: self.castling(),
            en_passant: self.en_passant(),
            halfmove_clock: self.halfmove_clock(),
        });

        self.set_castling(self.castling() & CASTLE_KEEP[src.index()] & CASTLE_KEEP[dst.index()]);

        // A double step exposes the bypassed square; anything else clears
        // the previous target.
        if mv.is_double_pawn() {
            self.set_en_passant(Some(src.offset(us.pawn_step())));
        } else {
            self.set_en_passant(None);
        }

        if mover.kind() == PieceKind::Pawn || mv.is_capture() {
            self.set_halfmove_clock(0);
        } else {
            self.set_halfmove_clock(self.halfmove_clock() + 1);
        }

        if let Some(victim) = mv.captured() {
            let removed = self.remove_piece(dst);
            debug_assert_eq!(removed, victim, "the destination must hold the encoded victim");
        }

        self.relocate_piece(src, dst);

        if let Some(promoted) = mv.promoted() {
            self.remove_piece(dst);
            self.add_piece(promoted, dst);
        }

        self.set_side_to_move(us.flip());
        self.set_ply(self.ply() + 1);
        self.set_game_ply(self.game_ply() + 1);
        if us == Color::Black {
            self.set_fullmove_number(self.fullmove_number() + 1);
        }
    }

    /// Retract the most recently applied move.
    ///
    /// # Panics
    ///
    /// Panics if no move has been applied since the position was set up.
    pub fn undo_move(&mut self) {
        let entry = self
            .pop_history()
            .expect("undo_move needs an applied move to retract");
        let mv = entry.mv;
        let src = mv.source();
        let dst = mv.dest();

        // Flip back first so `us` names the side that played the move.
        let us = self.side_to_move().flip();
        self.set_side_to_move(us);
        self.set_ply(self.ply() - 1);
        self.set_game_ply(self.game_ply() - 1);
        if us == Color::Black {
            self.set_fullmove_number(self.fullmove_number() - 1);
        }

        self.set_castling(entry.castling);
        self.set_en_passant(entry.en_passant);
        self.set_halfmove_clock(entry.halfmove_clock);

        // Demote before walking home, so a pawn and not the promoted
        // piece returns to the source square.
        if mv.promoted().is_some() {
            self.remove_piece(dst);
            self.add_piece(Piece::new(PieceKind::Pawn, us), dst);
        }

        self.relocate_piece(dst, src);

        if let Some(victim) = mv.captured() {
            self.add_piece(victim, dst);
        }

        if mv.is_castle() {
            let (rook_from, rook_to) = rook_lane(dst);
            self.relocate_piece(rook_to, rook_from);
        }

        if mv.is_en_passant() {
            let victim_sq = dst.offset(-us.pawn_step());
            self.add_piece(Piece::new(PieceKind::Pawn, us.flip()), victim_sq);
        }
    }
}
