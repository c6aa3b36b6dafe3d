use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{error, trace};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::engines::engine_trait::OpponentPolicy;
use crate::game_state::chess_rules::{CAPTURE_BONUS, CENTER_BONUS, CENTER_MAX, CENTER_MIN};
use crate::game_state::chess_types::*;

/// One-ply scorer: random jitter plus bonuses for captures and for landing
/// in the central 4x4 region. The best score wins; ties keep the first move
/// in generation order.
pub struct HeuristicOpponent {
    rng: StdRng,
}

impl HeuristicOpponent {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible jitter for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    fn is_central(square: Square) -> bool {
        let center = CENTER_MIN..=CENTER_MAX;
        center.contains(&file_of(square)) && center.contains(&rank_of(square))
    }

    fn score_move(&mut self, side: Color, board: &Board, mv: &Move) -> f64 {
        let mut score = self.rng.random::<f64>();
        if board.color_at(mv.to) == Some(side.opposite()) {
            score += CAPTURE_BONUS;
        }
        if Self::is_central(mv.to) {
            score += CENTER_BONUS;
        }
        score
    }
}

impl Default for HeuristicOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl OpponentPolicy for HeuristicOpponent {
    fn name(&self) -> &str {
        "Heuristic"
    }

    fn choose_move(&mut self, side: Color, game_state: &GameState) -> ChessResult<Move> {
        let legal_moves = game_state.legal_moves_for(side);

        let mut best: Option<(Move, f64)> = None;
        for mv in legal_moves {
            let score = self.score_move(side, game_state.board(), &mv);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        match best {
            Some((mv, score)) => {
                trace!(?side, from = mv.from, to = mv.to, score, "heuristic pick");
                Ok(mv)
            }
            None => {
                error!(?side, "heuristic opponent asked to move without legal moves");
                Err(ChessErrors::NoLegalMoves(side))
            }
        }
    }
}
