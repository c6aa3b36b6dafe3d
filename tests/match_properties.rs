//! Whole-game properties checked over seeded random and heuristic play.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use bitflix_chess::chess_errors::ChessErrors;
use bitflix_chess::engines::engine_heuristic::HeuristicOpponent;
use bitflix_chess::engines::engine_random::RandomOpponent;
use bitflix_chess::engines::engine_trait::OpponentPolicy;
use bitflix_chess::game_state::chess_types::*;
use bitflix_chess::game_state::game_config::GameConfig;
use bitflix_chess::move_generation::legal_move_checks::is_king_in_check;
use bitflix_chess::utils::long_algebraic::long_algebraic_to_squares;

const GAMES: u64 = 12;
const MAX_PLIES: usize = 120;

fn assert_position_invariants(game: &GameState) {
    for color in [Color::White, Color::Black] {
        assert_eq!(game.board().count_kings(color), 1, "{}", game.get_fen());
    }
}

// =============================================================================
// Legality
// =============================================================================

#[test]
fn mover_never_leaves_own_king_attacked() {
    for seed in 0..GAMES {
        let mut policy = RandomOpponent::seeded(seed);
        let mut game = GameState::new_game();

        for _ in 0..MAX_PLIES {
            if game.is_terminal() {
                break;
            }
            let mover = game.side_to_move();
            let mv = policy.choose_move(mover, &game).expect("live game has moves");
            game = game.play(mv).expect("policy move should apply");

            assert!(
                !is_king_in_check(game.board(), mover),
                "seed {seed}: {mover:?} left its king attacked in {}",
                game.get_fen()
            );
            assert_position_invariants(&game);
        }
    }
}

#[test]
fn policies_only_return_moves_from_the_legal_set() {
    let mut policies: Vec<Box<dyn OpponentPolicy>> = vec![
        Box::new(HeuristicOpponent::seeded(21)),
        Box::new(RandomOpponent::seeded(22)),
    ];

    for policy in policies.iter_mut() {
        let mut game = GameState::new_game();
        for _ in 0..MAX_PLIES {
            if game.is_terminal() {
                break;
            }
            let side = game.side_to_move();
            let mv = policy.choose_move(side, &game).expect("live game has moves");
            assert!(
                game.legal_moves_for(side).contains(&mv),
                "{} returned {mv:?} outside the legal set",
                policy.name()
            );
            game = game.play(mv).expect("policy move should apply");
        }
    }
}

#[test]
fn legal_destinations_agree_with_apply_move() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut game = GameState::new_game();

    for _ in 0..40 {
        if game.is_terminal() {
            break;
        }
        for from in 0..64u8 {
            let destinations = game.legal_destinations(from).expect("square in range");
            for to in 0..64u8 {
                let applied = game.apply_move(from, to);
                assert_eq!(
                    applied.is_ok(),
                    destinations.contains(&to),
                    "{from}->{to} in {}",
                    game.get_fen()
                );
            }
        }

        let moves = game.legal_moves_for(game.side_to_move());
        let pick = moves[rng.random_range(0..moves.len())];
        game = game.play(pick).expect("generated move should apply");
    }
}

// =============================================================================
// Terminal states
// =============================================================================

#[test]
fn fools_mate() {
    let mut game = GameState::new_game();
    for lan in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        let (from, to) = long_algebraic_to_squares(lan).expect("move should parse");
        game = game.apply_move(from, to).expect("line should be legal");
    }

    assert_eq!(
        game.outcome(),
        Some(Terminal::Checkmate {
            winner: Color::Black
        })
    );
    assert!(game.legal_moves_for(Color::White).is_empty());
    assert!(matches!(game.apply_move(8, 16), Err(ChessErrors::GameOver(_))));
}

#[test]
fn flag_fall_beats_material() {
    // White is up two queens but still loses on time.
    let game = GameState::from_fen_with_config(
        "4k3/8/8/8/8/8/8/QQ2K3 w - - 0 1",
        &GameConfig { clock_seconds: 5 },
    )
    .expect("FEN should parse");

    let mut ticked = game.clone();
    for _ in 0..9 {
        ticked = ticked.tick_clock(Duration::from_millis(500));
        assert!(!ticked.is_terminal());
    }
    ticked = ticked.tick_clock(Duration::from_millis(500));

    assert_eq!(ticked.remaining_seconds(Color::White), 0);
    assert_eq!(
        ticked.outcome(),
        Some(Terminal::Timeout {
            winner: Color::Black
        })
    );
}

#[test]
fn terminal_states_are_absorbing() {
    for seed in 0..GAMES {
        let mut white = HeuristicOpponent::seeded(seed);
        let mut black = RandomOpponent::seeded(seed + 100);
        let mut game = GameState::new_game();

        while !game.is_terminal() && game.move_history().len() < 400 {
            let side = game.side_to_move();
            let mv = match side {
                Color::White => white.choose_move(side, &game),
                Color::Black => black.choose_move(side, &game),
            }
            .expect("live game has moves");
            game = game.play(mv).expect("policy move should apply");
        }

        if let Some(outcome) = game.outcome() {
            assert_eq!(game.tick_clock(Duration::from_secs(1)), game);
            assert_eq!(game.resign(Color::White), Err(ChessErrors::GameOver(outcome)));
            for from in 0..64u8 {
                assert!(game.legal_destinations(from).expect("square in range").is_empty());
            }
        }
    }
}
