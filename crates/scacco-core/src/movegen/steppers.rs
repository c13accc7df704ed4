//! Knight and king move generation.

use crate::board::Board;
use crate::cell::Cell;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

use super::MoveList;

const STEPPERS: [PieceKind; 2] = [PieceKind::Knight, PieceKind::King];

/// Generate knight and king moves, one offset step per target.
pub(super) fn gen_steppers(board: &Board, list: &mut MoveList) {
    let us = board.side_to_move();

    for kind in STEPPERS {
        let pattern = kind.pattern();
        for &from in board.piece_squares(Piece::new(kind, us)) {
            for &delta in pattern.offsets {
                let to = from.offset(delta);
                match board.cell(to) {
                    Cell::Empty => list.push(Move::new(from, to)),
                    Cell::Piece(victim) if victim.color() != us => {
                        list.push(Move::new_capture(from, to, victim));
                    }
                    _ => {}
                }
            }
        }
    }
}
