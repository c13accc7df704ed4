//! Pawn move generation.

use crate::board::Board;
use crate::cell::Cell;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;

use super::MoveList;

/// Generate pawn moves for the side to move.
///
/// Each pawn is handled in piece-list order: push, double step, then the
/// two capture directions. Moves onto the last rank fan out over the
/// promotion kinds.
pub(super) fn gen_pawns(board: &Board, list: &mut MoveList) {
    let us = board.side_to_move();
    let step = us.pawn_step();
    let home = Rank::pawn_home(us);
    let promotion = Rank::pawn_promotion(us);

    for &from in board.piece_squares(Piece::new(PieceKind::Pawn, us)) {
        // --- Pushes ---
        let ahead = from.offset(step);
        if board.cell(ahead).is_empty() {
            push_pawn_move(list, us, from, ahead, None, promotion);
            if from.rank() == Some(home) {
                let two = ahead.offset(step);
                if board.cell(two).is_empty() {
                    list.push(Move::new_double_pawn(from, two));
                }
            }
        }

        // --- Captures ---
        for delta in us.pawn_capture_steps() {
            let target = from.offset(delta);
            match board.cell(target) {
                Cell::Piece(victim) if victim.color() != us => {
                    push_pawn_move(list, us, from, target, Some(victim), promotion);
                }
                Cell::Empty if board.en_passant() == Some(target) => {
                    list.push(Move::new_en_passant(from, target));
                }
                _ => {}
            }
        }
    }
}

/// Push one pawn move, fanning out over the promotion kinds when the
/// destination lies on the last rank.
fn push_pawn_move(
    list: &mut MoveList,
    us: Color,
    from: Square,
    to: Square,
    victim: Option<Piece>,
    promotion: Rank,
) {
    if to.rank() == Some(promotion) {
        for kind in PieceKind::PROMOTABLE {
            list.push(Move::new_promotion(from, to, victim, Piece::new(kind, us)));
        }
    } else {
        match victim {
            Some(victim) => list.push(Move::new_capture(from, to, victim)),
            None => list.push(Move::new(from, to)),
        }
    }
}
