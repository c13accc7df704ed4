//! Core chess types: board representation, move generation, and game rules.

mod attacks;
mod board;
mod castle_rights;
mod cell;
mod chess_move;
mod color;
mod error;
mod fen;
mod file;
mod make_move;
mod movegen;
mod piece;
mod piece_kind;
mod piece_list;
mod rank;
mod square;

pub use board::{Board, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::{Move, MoveKind};
pub use color::Color;
pub use error::{BoardError, FenError};
pub use fen::STARTING_FEN;
pub use file::File;
pub use movegen::{MoveList, generate_moves};
pub use piece::Piece;
pub use piece_kind::{MovePattern, PieceKind};
pub use rank::Rank;
pub use square::Square;
