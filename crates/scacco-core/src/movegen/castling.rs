//! Castling move generation.

use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::MoveList;

/// One castling corridor: where the king and rook start, which squares
/// must be empty, and which squares must be free of enemy attack.
///
/// The attack probe covers the king's origin and transit square only;
/// whether the destination is safe is settled downstream like any other
/// move that exposes the king.
struct CastleLane {
    side: CastleSide,
    king_from: Square,
    king_to: Square,
    rook_from: Square,
    between: &'static [Square],
    safe: [Square; 2],
}

const WHITE_LANES: [CastleLane; 2] = [
    CastleLane {
        side: CastleSide::KingSide,
        king_from: Square::E1,
        king_to: Square::G1,
        rook_from: Square::H1,
        between: &[Square::F1, Square::G1],
        safe: [Square::E1, Square::F1],
    },
    CastleLane {
        side: CastleSide::QueenSide,
        king_from: Square::E1,
        king_to: Square::C1,
        rook_from: Square::A1,
        between: &[Square::D1, Square::C1, Square::B1],
        safe: [Square::E1, Square::D1],
    },
];

const BLACK_LANES: [CastleLane; 2] = [
    CastleLane {
        side: CastleSide::KingSide,
        king_from: Square::E8,
        king_to: Square::G8,
        rook_from: Square::H8,
        between: &[Square::F8, Square::G8],
        safe: [Square::E8, Square::F8],
    },
    CastleLane {
        side: CastleSide::QueenSide,
        king_from: Square::E8,
        king_to: Square::C8,
        rook_from: Square::A8,
        between: &[Square::D8, Square::C8, Square::B8],
        safe: [Square::E8, Square::D8],
    },
];

/// Generate castling moves for the side to move, king side first.
pub(super) fn gen_castling(board: &Board, list: &mut MoveList) {
    let us = board.side_to_move();
    let them = us.flip();
    let lanes = match us {
        Color::White => &WHITE_LANES,
        Color::Black => &BLACK_LANES,
    };

    'lane: for lane in lanes {
        if !board.castling().has(us, lane.side) {
            continue;
        }
        // Rights can outlive the pieces across a position reload, so the
        // king and rook must still stand on their home squares.
        if board.piece_at(lane.king_from) != Some(Piece::new(PieceKind::King, us))
            || board.piece_at(lane.rook_from) != Some(Piece::new(PieceKind::Rook, us))
        {
            continue;
        }
        for &sq in lane.between {
            if !board.cell(sq).is_empty() {
                continue 'lane;
            }
        }
        for sq in lane.safe {
            if board.is_square_attacked(sq, them) {
                continue 'lane;
            }
        }
        list.push(Move::new_castle(lane.king_from, lane.king_to));
    }
}
