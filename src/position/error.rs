//! FEN parsing errors.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FenError {
    TooFewFields { found: usize },
    BadRank { rank: usize, squares: usize },
    UnrecognizedPieceChar { found: char },
    InvalidSideToMove { found: String },
    CastlingFieldTooLong { found: String },
    UnrecognizedCastlingChar { found: char },
    InvalidEnPassantSquare { found: String },
    InvalidNumber { field: &'static str, found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewFields { found } => {
                write!(f, "FEN has {found} space-separated fields, need at least 4")
            }
            FenError::BadRank { rank, squares } => {
                write!(f, "rank {rank} describes {squares} squares, need exactly 8")
            }
            FenError::UnrecognizedPieceChar { found } => {
                write!(f, "unrecognized piece placement character '{found}'")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "side to move must be 'w' or 'b', found '{found}'")
            }
            FenError::CastlingFieldTooLong { found } => {
                write!(f, "castling field '{found}' is longer than 4 characters")
            }
            FenError::UnrecognizedCastlingChar { found } => {
                write!(f, "unrecognized castling character '{found}'")
            }
            FenError::InvalidEnPassantSquare { found } => {
                write!(f, "invalid en-passant square '{found}'")
            }
            FenError::InvalidNumber { field, found } => {
                write!(f, "field '{field}' is not a valid number: '{found}'")
            }
        }
    }
}

impl std::error::Error for FenError {}
