//! Uniform random-move opponent.
//!
//! Selects uniformly from legal moves and is mainly used for diagnostics,
//! integration testing and low-strength play.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::error;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::engines::engine_trait::OpponentPolicy;
use crate::game_state::chess_types::{Color, GameState, Move};

pub struct RandomOpponent {
    rng: StdRng,
}

impl RandomOpponent {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl OpponentPolicy for RandomOpponent {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, side: Color, game_state: &GameState) -> ChessResult<Move> {
        let legal_moves = game_state.legal_moves_for(side);
        match legal_moves.as_slice().choose(&mut self.rng) {
            Some(mv) => Ok(*mv),
            None => {
                error!(?side, "random opponent asked to move without legal moves");
                Err(ChessErrors::NoLegalMoves(side))
            }
        }
    }
}
