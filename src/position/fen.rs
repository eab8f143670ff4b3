//! FEN (Forsyth-Edwards Notation) parsing into a side-relative [`Position`].
//!
//! Piece placement is always read as if White were `Ours` (uppercase is
//! `Ours`, lowercase is `Theirs`); the position is rotated once at the end
//! when the side to move is actually Black, so the mover is always `Ours`
//! by the time parsing returns.

use super::error::FenError;
use super::types::{CastlingRight, PieceKind, Side};
use super::{Color, Position};
use crate::bits::Square;

pub(super) fn parse(fen: &str) -> Result<Position, FenError> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    if parts.len() < 4 {
        return Err(FenError::TooFewFields { found: parts.len() });
    }

    let mut position = Position::clear();

    let ranks: Vec<&str> = parts[0].split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::BadRank {
            rank: ranks.len(),
            squares: 0,
        });
    }
    for (rank_from_top, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_from_top as u8;
        let mut file = 0u8;
        for c in rank_str.chars() {
            if let Some(empty) = c.to_digit(10) {
                file += empty as u8;
                continue;
            }
            if file >= 8 {
                return Err(FenError::BadRank {
                    rank: rank as usize,
                    squares: file as usize + 1,
                });
            }
            let kind =
                PieceKind::from_char(c).ok_or(FenError::UnrecognizedPieceChar { found: c })?;
            let side = if c.is_ascii_uppercase() {
                Side::Ours
            } else {
                Side::Theirs
            };
            position.toggle_piece(side, kind, Square::from_rank_file(rank, file));
            file += 1;
        }
        if file != 8 {
            return Err(FenError::BadRank {
                rank: rank as usize,
                squares: file as usize,
            });
        }
    }

    let side_to_move = match parts[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => {
            return Err(FenError::InvalidSideToMove {
                found: other.to_string(),
            })
        }
    };

    if parts[2] != "-" {
        if parts[2].len() > 4 {
            return Err(FenError::CastlingFieldTooLong {
                found: parts[2].to_string(),
            });
        }
        for c in parts[2].chars() {
            match c {
                'K' => position.set_castling_right(Side::Ours, CastlingRight::Kingside, true),
                'Q' => position.set_castling_right(Side::Ours, CastlingRight::Queenside, true),
                'k' => position.set_castling_right(Side::Theirs, CastlingRight::Kingside, true),
                'q' => position.set_castling_right(Side::Theirs, CastlingRight::Queenside, true),
                other => return Err(FenError::UnrecognizedCastlingChar { found: other }),
            }
        }
    }

    if parts[3] != "-" {
        let target = Square::from_notation(parts[3]);
        if !target.is_valid() {
            return Err(FenError::InvalidEnPassantSquare {
                found: parts[3].to_string(),
            });
        }
        // Pre-rotation, `Ours` is always White: the side that just moved
        // (and so owns the vulnerable pawn) is Ours iff Black is now to move.
        let side = if side_to_move == Color::Black {
            Side::Ours
        } else {
            Side::Theirs
        };
        position.set_en_passant_target(side, target);
    }

    if parts.len() > 4 {
        position.halfmoves = parts[4].parse().map_err(|_| FenError::InvalidNumber {
            field: "halfmove clock",
            found: parts[4].to_string(),
        })?;
    }
    position.fullmoves = if parts.len() > 5 {
        parts[5].parse().map_err(|_| FenError::InvalidNumber {
            field: "fullmove number",
            found: parts[5].to_string(),
        })?
    } else {
        1
    };

    if side_to_move == Color::Black {
        position.rotate();
    }

    debug_assert!(position.is_position());
    Ok(position)
}
