//! The chess board: a padded mailbox, piece lists, and game metadata.

use std::fmt;

use crate::castle_rights::CastleRights;
use crate::cell::Cell;
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::BoardError;
use crate::file::File;
use crate::make_move::HistoryEntry;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::piece_list::{MAX_PER_PIECE, PieceList};
use crate::rank::Rank;
use crate::square::Square;

/// A board with the sentinel frame in place and every playable slot empty.
pub(crate) const EMPTY_CELLS: [Cell; Square::COUNT] = {
    let mut cells = [Cell::OffBoard; Square::COUNT];
    let mut rank = 0u8;
    while rank < 8 {
        let mut file = 0u8;
        while file < 8 {
            cells[(21 + rank * 10 + file) as usize] = Cell::Empty;
            file += 1;
        }
        rank += 1;
    }
    cells
};

/// Complete chess position state.
///
/// The board proper is the 120-slot padded cell array; the piece lists and
/// the per-color material tally are maintained alongside it by the three
/// mutation primitives so they never diverge. Cloning yields a fully
/// independent line of play, undo history included.
#[derive(Clone)]
pub struct Board {
    /// Padded 10x12 mailbox, indexed by [`Square::index()`].
    cells: [Cell; Square::COUNT],
    /// Squares occupied by each piece, indexed by [`Piece::index()`].
    piece_list: PieceList,
    /// Which side moves next.
    side_to_move: Color,
    /// Current castling rights.
    castling: CastleRights,
    /// En passant target square, if any.
    en_passant: Option<Square>,
    /// Halfmove clock for the fifty-move rule.
    halfmove_clock: u16,
    /// Half-moves made since this board was seeded; the undo stack depth.
    ply: u16,
    /// Half-moves since the start of the game.
    game_ply: u16,
    /// Fullmove number (starts at 1, incremented after Black moves).
    fullmove_number: u16,
    /// Material value per side in centipawns, indexed by [`Color::index()`].
    material: [i32; Color::COUNT],
    /// Undo stack, one entry per applied move.
    history: Vec<HistoryEntry>,
}

impl Board {
    /// Return a board with no pieces, White to move, and no rights.
    pub(crate) fn empty() -> Board {
        Board {
            cells: EMPTY_CELLS,
            piece_list: PieceList::new(),
            side_to_move: Color::White,
            castling: CastleRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            ply: 0,
            game_ply: 0,
            fullmove_number: 1,
            material: [0; Color::COUNT],
            history: Vec::new(),
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut cells = EMPTY_CELLS;
        for (file, kind) in File::ALL.into_iter().zip(BACK_RANK) {
            let white = Piece::new(kind, Color::White);
            let black = Piece::new(kind, Color::Black);
            cells[Square::new(Rank::Rank1, file).index()] = Cell::Piece(white);
            cells[Square::new(Rank::Rank8, file).index()] = Cell::Piece(black);
            cells[Square::new(Rank::Rank2, file).index()] = Cell::Piece(Piece::WHITE_PAWN);
            cells[Square::new(Rank::Rank7, file).index()] = Cell::Piece(Piece::BLACK_PAWN);
        }

        Board::from_parts(cells, Color::White, CastleRights::ALL, None, 0, 1)
            .expect("starting position is structurally valid")
    }

    /// Construct a board from parsed components. Used by FEN parsing.
    ///
    /// Piece lists and material are rebuilt from the cells; the move-depth
    /// counters are seeded from the move counters and the side to move.
    pub(crate) fn from_parts(
        cells: [Cell; Square::COUNT],
        side_to_move: Color,
        castling: CastleRights,
        en_passant: Option<Square>,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> Result<Board, BoardError> {
        let game_ply = fullmove_number.saturating_sub(1) * 2
            + matches!(side_to_move, Color::Black) as u16;
        let mut board = Board {
            cells,
            piece_list: PieceList::new(),
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            ply: 0,
            game_ply,
            fullmove_number,
            material: [0; Color::COUNT],
            history: Vec::new(),
        };
        board.rebuild_piece_lists()?;
        Ok(board)
    }

    /// Rescan the playable squares and rebuild piece lists and material
    /// from the cells. Used once after a load; move execution maintains
    /// both incrementally.
    pub(crate) fn rebuild_piece_lists(&mut self) -> Result<(), BoardError> {
        self.piece_list.clear();
        self.material = [0; Color::COUNT];
        for square in Square::all() {
            if let Some(piece) = self.cells[square.index()].piece() {
                if self.piece_list.count(piece) == MAX_PER_PIECE {
                    return Err(BoardError::TooManyPieces {
                        piece,
                        limit: MAX_PER_PIECE,
                    });
                }
                self.piece_list.add(piece, square);
                self.material[piece.color().index()] += piece.kind().value();
            }
        }
        Ok(())
    }

    /// Return the contents of the given slot.
    #[inline]
    pub(crate) fn cell(&self, sq: Square) -> Cell {
        self.cells[sq.index()]
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()].piece()
    }

    /// Return the squares currently holding `piece`, in list order.
    #[inline]
    pub fn piece_squares(&self, piece: Piece) -> &[Square] {
        self.piece_list.squares(piece)
    }

    /// Return the number of pieces of this exact kind and color.
    #[inline]
    pub fn piece_count(&self, piece: Piece) -> usize {
        self.piece_list.count(piece)
    }

    /// Return the square of the king for the given side.
    ///
    /// # Panics
    ///
    /// Panics if the board has no king for the given color.
    pub fn king_square(&self, color: Color) -> Square {
        let king = Piece::new(PieceKind::King, color);
        self.piece_list
            .squares(king)
            .first()
            .copied()
            .expect("board must have a king for each side")
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Return the current castling rights.
    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    /// Return the en passant target square, if any.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Return the halfmove clock.
    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    /// Return the number of half-moves applied since this board was seeded.
    #[inline]
    pub fn ply(&self) -> u16 {
        self.ply
    }

    /// Return the number of half-moves since the start of the game.
    #[inline]
    pub fn game_ply(&self) -> u16 {
        self.game_ply
    }

    /// Return the fullmove number.
    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Return the material value of the given side in centipawns.
    #[inline]
    pub fn material(&self, color: Color) -> i32 {
        self.material[color.index()]
    }

    /// Return the most recently applied move, if any remains un-undone.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(HistoryEntry::moved)
    }

    /// Set the side to move.
    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Set the castling rights.
    #[inline]
    pub(crate) fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    /// Set the en passant target square.
    #[inline]
    pub(crate) fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    /// Set the halfmove clock.
    #[inline]
    pub(crate) fn set_halfmove_clock(&mut self, clock: u16) {
        self.halfmove_clock = clock;
    }

    /// Set the seed-relative ply counter.
    #[inline]
    pub(crate) fn set_ply(&mut self, ply: u16) {
        self.ply = ply;
    }

    /// Set the game ply counter.
    #[inline]
    pub(crate) fn set_game_ply(&mut self, ply: u16) {
        self.game_ply = ply;
    }

    /// Set the fullmove number.
    #[inline]
    pub(crate) fn set_fullmove_number(&mut self, number: u16) {
        self.fullmove_number = number;
    }

    /// Push an undo record for the move being applied.
    #[inline]
    pub(crate) fn push_history(&mut self, entry: HistoryEntry) {
        self.history.push(entry);
    }

    /// Pop the undo record of the most recently applied move.
    #[inline]
    pub(crate) fn pop_history(&mut self) -> Option<HistoryEntry> {
        self.history.pop()
    }

    /// Put `piece` on an empty playable square, updating the piece list
    /// and the material tally together.
    pub(crate) fn add_piece(&mut self, piece: Piece, square: Square) {
        debug_assert!(
            self.cells[square.index()].is_empty(),
            "add_piece target must be an empty playable square"
        );
        self.cells[square.index()] = Cell::Piece(piece);
        self.piece_list.add(piece, square);
        self.material[piece.color().index()] += piece.kind().value();
    }

    /// Remove and return the piece on `square`, updating the piece list
    /// and the material tally together.
    ///
    /// # Panics
    ///
    /// Panics if the square is empty or off-board.
    pub(crate) fn remove_piece(&mut self, square: Square) -> Piece {
        let piece = self.cells[square.index()]
            .piece()
            .expect("remove_piece needs an occupied square");
        self.cells[square.index()] = Cell::Empty;
        self.piece_list.remove(piece, square);
        self.material[piece.color().index()] -= piece.kind().value();
        piece
    }

    /// Move the piece on `from` to the empty square `to`.
    ///
    /// # Panics
    ///
    /// Panics if `from` is empty or off-board.
    pub(crate) fn relocate_piece(&mut self, from: Square, to: Square) {
        let piece = self.cells[from.index()]
            .piece()
            .expect("relocate_piece needs an occupied origin");
        debug_assert!(
            self.cells[to.index()].is_empty(),
            "relocate_piece target must be an empty playable square"
        );
        self.cells[from.index()] = Cell::Empty;
        self.cells[to.index()] = Cell::Piece(piece);
        self.piece_list.relocate(piece, from, to);
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        // The sentinel frame must be exactly the non-playable slots.
        for (index, cell) in self.cells.iter().enumerate() {
            let playable = Square::from_index_unchecked(index as u8).is_playable();
            if playable == cell.is_off_board() {
                return Err(BoardError::CorruptFrame { index });
            }
        }

        // Every list entry must point at a square holding that piece.
        for piece in Piece::ALL {
            for &square in self.piece_list.squares(piece) {
                if self.cells[square.index()].piece() != Some(piece) {
                    return Err(BoardError::StalePieceListEntry { piece, square });
                }
            }
        }

        // Every board piece must be listed exactly once, and the counts
        // must agree.
        let mut on_board = [0usize; Piece::COUNT];
        for square in Square::all() {
            if let Some(piece) = self.cells[square.index()].piece() {
                on_board[piece.index()] += 1;
                let listed = self
                    .piece_list
                    .squares(piece)
                    .iter()
                    .filter(|&&sq| sq == square)
                    .count();
                if listed != 1 {
                    return Err(BoardError::PieceListMismatch { piece, square });
                }
            }
        }
        for piece in Piece::ALL {
            let listed = self.piece_list.count(piece);
            if listed != on_board[piece.index()] {
                return Err(BoardError::PieceCountMismatch {
                    piece,
                    listed,
                    on_board: on_board[piece.index()],
                });
            }
        }

        // The incremental material tally must match a recount.
        for color in Color::ALL {
            let recounted: i32 = Square::all()
                .filter_map(|sq| self.cells[sq.index()].piece())
                .filter(|piece| piece.color() == color)
                .map(|piece| piece.kind().value())
                .sum();
            if recounted != self.material[color.index()] {
                return Err(BoardError::MaterialMismatch {
                    color,
                    recorded: self.material[color.index()],
                    recounted,
                });
            }
        }

        // An en passant target only makes sense on the rank a pawn of the
        // side that just moved passed over.
        if let Some(square) = self.en_passant {
            let expected = match self.side_to_move {
                Color::White => Rank::Rank6,
                Color::Black => Rank::Rank3,
            };
            if square.rank() != Some(expected) {
                return Err(BoardError::BadEnPassantTarget { square });
            }
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

/// Equality over the observable position: cells, metadata, counters and
/// material. The piece lists are derivable from the cells (their internal
/// order varies with capture history) and the undo history is the path,
/// not the position, so both are excluded.
impl PartialEq for Board {
    fn eq(&self, other: &Board) -> bool {
        self.cells == other.cells
            && self.side_to_move == other.side_to_move
            && self.castling == other.castling
            && self.en_passant == other.en_passant
            && self.halfmove_clock == other.halfmove_clock
            && self.ply == other.ply
            && self.game_ply == other.game_ply
            && self.fullmove_number == other.fullmove_number
            && self.material == other.material
    }
}

impl Eq for Board {}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid with its metadata.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for rank in Rank::ALL.into_iter().rev() {
            write!(f, "{rank}  ")?;
            for file in File::ALL {
                let sq = Square::new(rank, file);
                let c = match board.piece_at(sq) {
                    Some(piece) => piece.fen_char(),
                    None => '.',
                };
                if file == File::FileH {
                    write!(f, "{c}")?;
                } else {
                    write!(f, "{c} ")?;
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        let en_passant = match board.en_passant() {
            Some(sq) => sq.to_string(),
            None => "-".to_string(),
        };
        write!(
            f,
            "side: {}  castling: {}  en passant: {}",
            board.side_to_move(),
            board.castling(),
            en_passant
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::cell::Cell;
    use crate::color::Color;
    use crate::error::BoardError;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn starting_position_validates() {
        let board = Board::starting_position();
        board.validate().unwrap();
    }

    #[test]
    fn starting_position_layout() {
        let board = Board::starting_position();
        assert_eq!(board.piece_at(Square::E1), Some(Piece::WHITE_KING));
        assert_eq!(board.piece_at(Square::D1), Some(Piece::WHITE_QUEEN));
        assert_eq!(board.piece_at(Square::A1), Some(Piece::WHITE_ROOK));
        assert_eq!(board.piece_at(Square::E2), Some(Piece::WHITE_PAWN));
        assert_eq!(board.piece_at(Square::E8), Some(Piece::BLACK_KING));
        assert_eq!(board.piece_at(Square::G8), Some(Piece::BLACK_KNIGHT));
        assert_eq!(board.piece_at(Square::E4), None);
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.halfmove_clock(), 0);
        assert_eq!(board.fullmove_number(), 1);
        assert_eq!(board.ply(), 0);
        assert_eq!(board.game_ply(), 0);
        assert_eq!(board.en_passant(), None);
    }

    #[test]
    fn starting_position_piece_lists() {
        let board = Board::starting_position();
        assert_eq!(board.piece_count(Piece::WHITE_PAWN), 8);
        assert_eq!(board.piece_count(Piece::BLACK_PAWN), 8);
        assert_eq!(
            board.piece_squares(Piece::WHITE_ROOK),
            &[Square::A1, Square::H1]
        );
        assert_eq!(board.piece_squares(Piece::BLACK_KING), &[Square::E8]);
    }

    #[test]
    fn starting_position_material() {
        let board = Board::starting_position();
        let expected = 8 * 100 + 2 * 325 + 2 * 325 + 2 * 550 + 1000 + 50_000;
        assert_eq!(board.material(Color::White), expected);
        assert_eq!(board.material(Color::Black), expected);
    }

    #[test]
    fn king_square() {
        let board = Board::starting_position();
        assert_eq!(board.king_square(Color::White), Square::E1);
        assert_eq!(board.king_square(Color::Black), Square::E8);
    }

    #[test]
    fn mutation_primitives_keep_the_invariant() {
        let mut board = Board::empty();
        board.add_piece(Piece::WHITE_QUEEN, Square::D4);
        board.validate().unwrap();
        assert_eq!(board.material(Color::White), 1000);
        assert_eq!(board.piece_squares(Piece::WHITE_QUEEN), &[Square::D4]);

        board.relocate_piece(Square::D4, Square::H8);
        board.validate().unwrap();
        assert_eq!(board.piece_at(Square::D4), None);
        assert_eq!(board.piece_at(Square::H8), Some(Piece::WHITE_QUEEN));

        let removed = board.remove_piece(Square::H8);
        assert_eq!(removed, Piece::WHITE_QUEEN);
        board.validate().unwrap();
        assert_eq!(board.material(Color::White), 0);
        assert_eq!(board.piece_count(Piece::WHITE_QUEEN), 0);
    }

    #[test]
    fn validate_detects_list_divergence() {
        let mut board = Board::empty();
        // Bypass the primitives to plant a piece only in the cells.
        board.cells[Square::E4.index()] = Cell::Piece(Piece::WHITE_PAWN);
        assert!(matches!(
            board.validate(),
            Err(BoardError::PieceListMismatch { .. })
        ));
    }

    #[test]
    fn validate_detects_material_drift() {
        let mut board = Board::starting_position();
        board.material[Color::White.index()] += 1;
        assert!(matches!(
            board.validate(),
            Err(BoardError::MaterialMismatch { .. })
        ));
    }

    #[test]
    fn validate_detects_frame_damage() {
        let mut board = Board::empty();
        board.cells[0] = Cell::Empty;
        assert!(matches!(
            board.validate(),
            Err(BoardError::CorruptFrame { index: 0 })
        ));
    }

    #[test]
    fn validate_detects_bad_en_passant_rank() {
        let mut board = Board::starting_position();
        // White to move: only rank 6 is a plausible target.
        board.en_passant = Some(Square::E4);
        assert!(matches!(
            board.validate(),
            Err(BoardError::BadEnPassantTarget { .. })
        ));
        board.en_passant = Some(Square::E6);
        board.validate().unwrap();
    }

    #[test]
    fn equality_ignores_piece_list_order() {
        let mut a = Board::empty();
        a.add_piece(Piece::WHITE_ROOK, Square::A1);
        a.add_piece(Piece::WHITE_ROOK, Square::H1);

        let mut b = Board::empty();
        b.add_piece(Piece::WHITE_ROOK, Square::H1);
        b.add_piece(Piece::WHITE_ROOK, Square::A1);

        assert_ne!(
            a.piece_squares(Piece::WHITE_ROOK),
            b.piece_squares(Piece::WHITE_ROOK)
        );
        assert_eq!(a, b);
    }

    #[test]
    fn clone_is_independent() {
        let original = Board::starting_position();
        let mut branch = original.clone();
        branch.remove_piece(Square::E2);
        assert_ne!(original, branch);
        assert_eq!(original.piece_at(Square::E2), Some(Piece::WHITE_PAWN));
    }

    #[test]
    fn pretty_print() {
        let board = Board::starting_position();
        let output = format!("{}", board.pretty());
        assert!(output.contains("r n b q k b n r"));
        assert!(output.contains("R N B Q K B N R"));
        assert!(output.contains("a b c d e f g h"));
        assert!(output.contains("side: w"));
        assert!(output.contains("castling: KQkq"));
        assert!(output.contains("en passant: -"));
    }
}
