//! Canonical chess-rule constants.
//!
//! Static literals used to set up a match and to score candidate moves for
//! the automated opponent.

use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank piece order from the a-file to the h-file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Ten minutes per side.
pub const DEFAULT_CLOCK_SECONDS: u32 = 600;

/// King's starting file (e-file).
pub const KING_START_FILE: u8 = 4;

pub const CAPTURE_BONUS: f64 = 10.0;
pub const CENTER_BONUS: f64 = 2.0;

/// Inclusive file/rank bounds of the central 4x4 region (c3..f6).
pub const CENTER_MIN: u8 = 2;
pub const CENTER_MAX: u8 = 5;
