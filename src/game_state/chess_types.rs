//! Value types shared by the board model, move generation and the match
//! state machine.

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;

/// Board square index (`0..=63`, `0 == a1`, `7 == h1`, `63 == h8`).
pub type Square = u8;

/// Side to move / piece owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank (0-based) the king and rooks start on.
    #[inline]
    pub const fn home_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// File of the rook that takes part in this castle.
    #[inline]
    pub const fn rook_file(self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// File the rook lands on after castling.
    #[inline]
    pub const fn rook_target_file(self) -> u8 {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }
}

/// A single relocation, optionally tagged as a castle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub castle: Option<CastleSide>,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            castle: None,
        }
    }

    #[inline]
    pub const fn castling(from: Square, to: Square, side: CastleSide) -> Self {
        Self {
            from,
            to,
            castle: Some(side),
        }
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        self.castle.is_some()
    }
}

/// Per-colour castling bookkeeping. Flags only ever go from `false` to `true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CastlingRights {
    pub king_moved: bool,
    pub rook_moved_queenside: bool,
    pub rook_moved_kingside: bool,
}

impl CastlingRights {
    #[inline]
    pub const fn rook_moved(&self, side: CastleSide) -> bool {
        match side {
            CastleSide::Kingside => self.rook_moved_kingside,
            CastleSide::Queenside => self.rook_moved_queenside,
        }
    }

    #[inline]
    pub const fn can_castle(&self, side: CastleSide) -> bool {
        !self.king_moved && !self.rook_moved(side)
    }

    #[inline]
    pub fn mark_rook_moved(&mut self, side: CastleSide) {
        match side {
            CastleSide::Kingside => self.rook_moved_kingside = true,
            CastleSide::Queenside => self.rook_moved_queenside = true,
        }
    }
}

/// How a match ended. Set at most once per game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    Checkmate { winner: Color },
    Stalemate,
    Timeout { winner: Color },
    Resignation { winner: Color },
}

impl Terminal {
    /// Winning side, `None` for a draw.
    #[inline]
    pub const fn winner(&self) -> Option<Color> {
        match *self {
            Terminal::Checkmate { winner }
            | Terminal::Timeout { winner }
            | Terminal::Resignation { winner } => Some(winner),
            Terminal::Stalemate => None,
        }
    }
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square / 8
}

/// Square at `(file, rank)` if both are on the board.
#[inline]
pub fn square_at(file: i8, rank: i8) -> Option<Square> {
    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Some((rank as u8) * 8 + file as u8)
    } else {
        None
    }
}

/// Offset a square by a file/rank delta, returning `None` when it leaves the board.
#[inline]
pub fn offset_square(square: Square, d_file: i8, d_rank: i8) -> Option<Square> {
    square_at(file_of(square) as i8 + d_file, rank_of(square) as i8 + d_rank)
}
