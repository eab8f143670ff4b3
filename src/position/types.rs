//! Small value types shared by the position and move-generation modules.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    pub fn to_char(self, color: Color) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        if color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

/// Relative side: `Ours` is whoever moves next, `Theirs` is the opponent.
/// Swaps on every [`crate::position::Position::rotate`]. Distinct from the
/// absolute [`Color`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Ours,
    Theirs,
}

impl Side {
    pub fn index(self) -> usize {
        match self {
            Side::Ours => 0,
            Side::Theirs => 1,
        }
    }

    pub fn opposite(self) -> Side {
        match self {
            Side::Ours => Side::Theirs,
            Side::Theirs => Side::Ours,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CastlingRight {
    Kingside,
    Queenside,
}

impl CastlingRight {
    pub(crate) fn index(self) -> usize {
        match self {
            CastlingRight::Kingside => 0,
            CastlingRight::Queenside => 1,
        }
    }
}

/// Absolute side-to-move, tracked separately from the relative [`Side`]
/// used by the generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

pub(crate) const CASTLE_OURS_K: u8 = 0b1000;
pub(crate) const CASTLE_OURS_Q: u8 = 0b0100;
pub(crate) const CASTLE_THEIRS_K: u8 = 0b0010;
pub(crate) const CASTLE_THEIRS_Q: u8 = 0b0001;

pub(crate) fn castling_bit(side: Side, right: CastlingRight) -> u8 {
    match (side, right) {
        (Side::Ours, CastlingRight::Kingside) => CASTLE_OURS_K,
        (Side::Ours, CastlingRight::Queenside) => CASTLE_OURS_Q,
        (Side::Theirs, CastlingRight::Kingside) => CASTLE_THEIRS_K,
        (Side::Theirs, CastlingRight::Queenside) => CASTLE_THEIRS_Q,
    }
}
