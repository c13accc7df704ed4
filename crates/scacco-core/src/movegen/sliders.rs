//! Sliding piece (bishop, rook, queen) move generation.

use crate::board::Board;
use crate::cell::Cell;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

use super::MoveList;

const SLIDERS: [PieceKind; 3] = [PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen];

/// Generate slider moves by walking each ray until it hits a piece or
/// runs off the board.
pub(super) fn gen_sliders(board: &Board, list: &mut MoveList) {
    let us = board.side_to_move();

    for kind in SLIDERS {
        let pattern = kind.pattern();
        for &from in board.piece_squares(Piece::new(kind, us)) {
            for &delta in pattern.offsets {
                let mut to = from.offset(delta);
                loop {
                    match board.cell(to) {
                        Cell::Empty => list.push(Move::new(from, to)),
                        Cell::Piece(victim) => {
                            if victim.color() != us {
                                list.push(Move::new_capture(from, to, victim));
                            }
                            break;
                        }
                        Cell::OffBoard => break,
                    }
                    to = to.offset(delta);
                }
            }
        }
    }
}
