//! Minimal head-to-head match harness for local testing.
//!
//! Runs two `OpponentPolicy` implementations against each other on one
//! `GameState`, optionally charging a fixed simulated think time to the
//! mover's clock before every ply.

use std::time::{Duration, Instant};

use tracing::info;

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::OpponentPolicy;
use crate::game_state::chess_types::{Color, GameState, Terminal};
use crate::game_state::game_config::GameConfig;
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Finished(Terminal),
    PlyLimit,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub simulated_move_time: Option<Duration>,
    pub game: GameConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            simulated_move_time: None,
            game: GameConfig::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub played_moves_lan: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

/// Play a match from the standard starting position.
///
/// `white` moves first; `black` replies.
pub fn play_match(
    white: &mut dyn OpponentPolicy,
    black: &mut dyn OpponentPolicy,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    play_match_from_state(GameState::with_config(&config.game), white, black, config)
}

/// Play a match from a caller-provided state. `config.game` is ignored here
/// since the state already carries its clocks.
pub fn play_match_from_state(
    mut state: GameState,
    white: &mut dyn OpponentPolicy,
    black: &mut dyn OpponentPolicy,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    info!(white = white.name(), black = black.name(), "match started");

    let mut played_moves_lan = Vec::<String>::new();
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    for _ in 0..config.max_plies {
        if let Some(elapsed) = config.simulated_move_time {
            state = state.tick_clock(elapsed);
        }
        if state.is_terminal() {
            break;
        }

        let mover = state.side_to_move();
        let started = Instant::now();
        let chosen = match mover {
            Color::White => white.choose_move(mover, &state)?,
            Color::Black => black.choose_move(mover, &state)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::White => {
                white_move_count = white_move_count.saturating_add(1);
                white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Black => {
                black_move_count = black_move_count.saturating_add(1);
                black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        played_moves_lan.push(move_to_long_algebraic(&chosen)?);
        state = state.play(chosen)?;
    }

    let outcome = match state.outcome() {
        Some(terminal) => MatchOutcome::Finished(terminal),
        None => MatchOutcome::PlyLimit,
    };
    info!(?outcome, plies = played_moves_lan.len(), "match finished");

    Ok(MatchResult {
        outcome,
        final_state: state,
        played_moves_lan,
        white_move_count,
        black_move_count,
        white_total_time_ns,
        black_total_time_ns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_errors::ChessErrors;
    use crate::engines::engine_heuristic::HeuristicOpponent;
    use crate::engines::engine_random::RandomOpponent;
    use crate::game_state::chess_types::Move;
    use crate::utils::long_algebraic::long_algebraic_to_squares;

    struct ScriptedPolicy {
        moves: Vec<&'static str>,
        next: usize,
    }

    impl ScriptedPolicy {
        fn new(moves: &[&'static str]) -> Self {
            Self {
                moves: moves.to_vec(),
                next: 0,
            }
        }
    }

    impl OpponentPolicy for ScriptedPolicy {
        fn name(&self) -> &str {
            "Scripted"
        }

        fn choose_move(&mut self, side: Color, _game_state: &GameState) -> ChessResult<Move> {
            let lan = self
                .moves
                .get(self.next)
                .ok_or(ChessErrors::NoLegalMoves(side))?;
            self.next += 1;
            let (from, to) = long_algebraic_to_squares(lan)?;
            Ok(Move::new(from, to))
        }
    }

    #[test]
    fn scripted_fools_mate() {
        let mut white = ScriptedPolicy::new(&["f2f3", "g2g4"]);
        let mut black = ScriptedPolicy::new(&["e7e5", "d8h4"]);
        let result = play_match(&mut white, &mut black, &MatchConfig::default()).expect("match should run");
        assert_eq!(
            result.outcome,
            MatchOutcome::Finished(Terminal::Checkmate {
                winner: Color::Black
            })
        );
        assert_eq!(result.played_moves_lan, vec!["f2f3", "e7e5", "g2g4", "d8h4"]);
        assert_eq!(result.white_move_count, 2);
        assert_eq!(result.black_move_count, 2);
    }

    #[test]
    fn stops_at_ply_limit() {
        let mut white = HeuristicOpponent::seeded(11);
        let mut black = RandomOpponent::seeded(12);
        let config = MatchConfig {
            max_plies: 6,
            ..MatchConfig::default()
        };
        let result = play_match(&mut white, &mut black, &config).expect("match should run");
        if result.outcome == MatchOutcome::PlyLimit {
            assert!(!result.final_state.is_terminal());
            assert_eq!(result.played_moves_lan.len(), 6);
        }
        assert!(result.played_moves_lan.len() <= 6);
        assert_eq!(
            result.final_state.move_history().len(),
            result.played_moves_lan.len()
        );
    }

    #[test]
    fn simulated_time_flags_the_mover() {
        let mut white = RandomOpponent::seeded(1);
        let mut black = RandomOpponent::seeded(2);
        let config = MatchConfig {
            max_plies: 50,
            simulated_move_time: Some(Duration::from_secs(2)),
            game: GameConfig { clock_seconds: 3 },
        };
        let result = play_match(&mut white, &mut black, &config).expect("match should run");
        assert_eq!(
            result.outcome,
            MatchOutcome::Finished(Terminal::Timeout {
                winner: Color::Black
            })
        );
        assert_eq!(result.played_moves_lan.len(), 2);
    }

    #[test]
    fn same_seeds_replay_the_same_game() {
        let config = MatchConfig {
            max_plies: 40,
            ..MatchConfig::default()
        };
        let first = play_match(
            &mut HeuristicOpponent::seeded(5),
            &mut HeuristicOpponent::seeded(6),
            &config,
        )
        .expect("match should run");
        let second = play_match(
            &mut HeuristicOpponent::seeded(5),
            &mut HeuristicOpponent::seeded(6),
            &config,
        )
        .expect("match should run");
        assert_eq!(first.played_moves_lan, second.played_moves_lan);
        assert_eq!(first.outcome, second.outcome);
    }
}
