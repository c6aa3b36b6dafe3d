//! Opponent abstraction layer.
//!
//! Every automated player implements `OpponentPolicy`, so the match harness
//! and hosts can swap move-selection strategies at runtime.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::{Color, GameState, Move};

pub trait OpponentPolicy {
    fn name(&self) -> &str;

    /// Returns exactly one legal move for `side`, or `NoLegalMoves` when
    /// `side` has none.
    fn choose_move(&mut self, side: Color, game_state: &GameState) -> ChessResult<Move>;
}
