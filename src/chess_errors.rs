//! Errors used throughout the chess engine.
//!
//! `ChessErrors` is the single error type returned by game transitions, the
//! opponent policies and the text utilities. All variants are local to the
//! immediate caller:
//! - `IllegalMove` is a caller fault; re-query legal destinations instead of
//!   retrying the same input.
//! - `InvalidSquare` is a contract violation the host should prevent.
//! - `NoLegalMoves` means a policy was asked to move after the game should
//!   already have been classified as terminal.
//! - `GameOver` is returned for any transition requested on a finished game.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square, Terminal};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    #[error("square index {0} is outside 0..=63")]
    InvalidSquare(u8),

    #[error("{0:?} has no legal moves")]
    NoLegalMoves(Color),

    #[error("game is already over: {0:?}")]
    GameOver(Terminal),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid algebraic notation: {0}")]
    InvalidAlgebraic(String),
}

pub type ChessResult<T> = Result<T, ChessErrors>;

/// Rejects indices outside the board.
#[inline]
pub fn check_square(square: u8) -> ChessResult<Square> {
    if square < 64 {
        Ok(square)
    } else {
        Err(ChessErrors::InvalidSquare(square))
    }
}
