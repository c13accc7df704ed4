//! Move generation.
//!
//! Generation is deterministic: the same position always yields the same
//! moves in the same order. Moves obey the movement rules and the castling
//! path conditions but are not screened for king safety; a caller that
//! needs strictly legal moves applies each one and probes its own king.

mod castling;
mod pawns;
mod sliders;
mod steppers;

use crate::board::Board;
use crate::chess_move::Move;

use self::castling::gen_castling;
use self::pawns::gen_pawns;
use self::sliders::gen_sliders;
use self::steppers::gen_steppers;

/// Stack-allocated buffer for generated moves. Capacity 256 covers the theoretical max of 218.
pub struct MoveList {
    moves: [Move; 256],
    len: u16,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: [Move::NULL; 256],
            len: 0,
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!((self.len as usize) < 256);
        self.moves[self.len as usize] = mv;
        self.len += 1;
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len as usize]
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Generate every move available to the side to move.
///
/// The pipeline order is fixed: pawns, castling, knights and kings, then
/// the sliding pieces. Within each stage, pieces come in piece-list order
/// and target squares in declared offset order.
pub fn generate_moves(board: &Board) -> MoveList {
    let mut list = MoveList::new();
    gen_pawns(board, &mut list);
    gen_castling(board, &mut list);
    gen_steppers(board, &mut list);
    gen_sliders(board, &mut list);
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::Square;

    fn board(fen: &str) -> Board {
        fen.parse().unwrap()
    }

    fn uci(list: &MoveList) -> Vec<String> {
        list.as_slice().iter().map(|m| m.to_uci()).collect()
    }

    fn castles(fen: &str) -> Vec<String> {
        generate_moves(&board(fen))
            .as_slice()
            .iter()
            .filter(|m| m.is_castle())
            .map(|m| m.to_uci())
            .collect()
    }

    #[test]
    fn move_list_basics() {
        let mut list = MoveList::new();
        assert!(list.is_empty());

        list.push(Move::new(Square::E2, Square::E4));
        list.push(Move::new(Square::G1, Square::F3));
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].to_uci(), "e2e4");
        assert_eq!(list[1].to_uci(), "g1f3");

        let collected: Vec<&Move> = (&list).into_iter().collect();
        assert_eq!(collected.len(), 2);
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let moves = generate_moves(&Board::starting_position());
        assert_eq!(moves.len(), 20);

        // Pawns first, a-file to h-file, single push before double step.
        assert_eq!(moves[0].to_uci(), "a2a3");
        assert_eq!(moves[1].to_uci(), "a2a4");
        assert_eq!(moves[15].to_uci(), "h2h4");

        // Then the knights, b1 before g1, lower target index first.
        assert_eq!(moves[16].to_uci(), "b1a3");
        assert_eq!(moves[17].to_uci(), "b1c3");
        assert_eq!(moves[18].to_uci(), "g1f3");
        assert_eq!(moves[19].to_uci(), "g1h3");

        assert!(moves.as_slice().iter().all(|m| !m.is_capture()));
        assert!(moves.as_slice().iter().all(|m| !m.is_castle()));
    }

    #[test]
    fn generation_order_is_stable() {
        let pos = board("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
        let first = generate_moves(&pos);
        let second = generate_moves(&pos);
        assert_eq!(first.as_slice(), second.as_slice());
    }

    #[test]
    fn open_position_full_move_set() {
        // Black queen and bishop sit on the rook home squares, so the kq
        // rights must not produce castling moves.
        let moves = generate_moves(&board("q3k2b/8/3n4/8/8/8/8/R3K2R b KQkq - 0 1"));
        let expected = [
            "d6f5", "d6e4", "d6c4", "d6b5", "d6b7", "d6c8", "d6f7", // knight
            "e8d8", "e8e7", "e8f8", "e8f7", "e8d7", // king
            "h8g7", "h8f6", "h8e5", "h8d4", "h8c3", "h8b2", "h8a1", // bishop
            "a8a7", "a8a6", "a8a5", "a8a4", "a8a3", "a8a2", "a8a1", // queen, a-file
            "a8b8", "a8c8", "a8d8", // queen, back rank
            "a8b7", "a8c6", "a8d5", "a8e4", "a8f3", "a8g2", "a8h1", // queen, long diagonal
        ];
        assert_eq!(uci(&moves), expected);

        assert!(moves.as_slice().iter().all(|m| !m.is_castle()));
        let captures: Vec<String> = moves
            .as_slice()
            .iter()
            .filter(|m| m.is_capture())
            .map(|m| m.to_uci())
            .collect();
        assert_eq!(captures, ["h8a1", "a8a1", "a8h1"]);
    }

    #[test]
    fn castling_generated_for_both_wings() {
        let got = castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert_eq!(got, ["e1g1", "e1c1"]);

        let got = castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
        assert_eq!(got, ["e8g8", "e8c8"]);
    }

    #[test]
    fn castling_blocked_by_piece_between() {
        let got = castles("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1");
        assert_eq!(got, ["e1g1"]);
    }

    #[test]
    fn castling_blocked_when_path_attacked() {
        // Bishop on a6 covers f1: the king would cross an attacked square.
        let got = castles("4k3/8/b7/8/8/8/8/R3K2R w KQ - 0 1");
        assert_eq!(got, ["e1c1"]);

        // Rook on e2 attacks the king's own square: no castling at all.
        let got = castles("4k3/8/8/8/8/8/4r3/R3K2R w KQ - 0 1");
        assert!(got.is_empty());
    }

    #[test]
    fn castling_needs_rights_and_home_rooks() {
        // Rooks in place but every right withdrawn.
        assert!(castles("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1").is_empty());

        // The king-side right survives in the FEN, but h1 holds a bishop.
        assert!(castles("4k3/8/8/8/8/8/8/4K2B w K - 0 1").is_empty());
    }

    #[test]
    fn en_passant_capture_is_generated() {
        let moves = generate_moves(&board("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1"));
        let ep: Vec<String> = moves
            .as_slice()
            .iter()
            .filter(|m| m.is_en_passant())
            .map(|m| m.to_uci())
            .collect();
        assert_eq!(ep, ["e5d6"]);

        let moves = generate_moves(&board("4k3/8/8/8/3pP3/8/8/4K3 b - e3 0 1"));
        let ep: Vec<String> = moves
            .as_slice()
            .iter()
            .filter(|m| m.is_en_passant())
            .map(|m| m.to_uci())
            .collect();
        assert_eq!(ep, ["d4e3"]);
    }

    #[test]
    fn promotions_fan_out_in_fixed_order() {
        let moves = generate_moves(&board("4k3/P7/8/8/8/8/8/4K3 w - - 0 1"));
        assert_eq!(moves.len(), 9); // four promotions and five king steps
        assert_eq!(moves[0].to_uci(), "a7a8q");
        assert_eq!(moves[1].to_uci(), "a7a8r");
        assert_eq!(moves[2].to_uci(), "a7a8b");
        assert_eq!(moves[3].to_uci(), "a7a8n");
    }

    #[test]
    fn capture_promotions_fan_out_too() {
        let moves = generate_moves(&board("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1"));
        let promos: Vec<&Move> = moves.as_slice().iter().filter(|m| m.is_promotion()).collect();
        assert_eq!(promos.len(), 8);
        assert_eq!(
            promos.iter().filter(|m| m.is_capture()).count(),
            4,
            "the b8 knight offers four capture promotions"
        );
        assert!(
            promos
                .iter()
                .filter(|m| m.is_capture())
                .all(|m| m.dest() == Square::B8)
        );
    }

    #[test]
    fn double_step_requires_both_squares_clear() {
        let moves = uci(&generate_moves(&board(
            "4k3/8/8/8/4p3/8/4P3/4K3 w - - 0 1",
        )));
        assert!(moves.contains(&"e2e3".to_string()));
        assert!(!moves.contains(&"e2e4".to_string()));

        let moves = uci(&generate_moves(&board(
            "4k3/8/8/8/8/4p3/4P3/4K3 w - - 0 1",
        )));
        assert!(moves.iter().all(|m| !m.starts_with("e2")));
    }
}
