//! Side-relative bitboard position representation and pseudo-legal move
//! generator.
//!
//! The position is always viewed from the mover's perspective: `Side::Ours`
//! is whoever moves next, `Side::Theirs` is the opponent, and [`position::Position::rotate`]
//! swaps that perspective after a move is applied. This keeps every piece's
//! move-generation routine color-agnostic — there is one code path for
//! pawns, not two mirrored ones for White and Black.

pub mod bits;
pub mod moves;
pub mod movegen;
pub mod position;
pub mod zobrist;

pub use bits::{Bitboard, Square, INVALID_SQUARE};
pub use moves::{Move, MoveList, NULL_MOVE};
pub use movegen::GameState;
pub use position::{CastlingRight, Color, FenError, PieceKind, Position, Side};
