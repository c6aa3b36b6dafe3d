//! Standalone engine-vs-engine runner.
//!
//! Run with:
//! `cargo run --release --bin self_play`
//! `cargo run --release --bin self_play -- --random --seed 7`
//! `RUST_LOG=debug cargo run --bin self_play` to trace every ply.

use bitflix_chess::engines::engine_heuristic::HeuristicOpponent;
use bitflix_chess::engines::engine_random::RandomOpponent;
use bitflix_chess::engines::engine_trait::OpponentPolicy;
use bitflix_chess::utils::long_algebraic::move_list_to_text;
use bitflix_chess::utils::match_harness::{play_match, MatchConfig};
use tracing_subscriber::EnvFilter;

fn parse_seed(args: &[String]) -> Result<Option<u64>, String> {
    match args.iter().position(|a| a == "--seed") {
        Some(idx) => {
            let value = args
                .get(idx + 1)
                .ok_or_else(|| "--seed expects a number".to_owned())?;
            value
                .parse::<u64>()
                .map(Some)
                .map_err(|e| format!("invalid seed {value}: {e}"))
        }
        None => Ok(None),
    }
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let random_black = args.iter().any(|a| a == "--random");
    let seed = parse_seed(&args)?;

    let mut white = match seed {
        Some(seed) => HeuristicOpponent::seeded(seed),
        None => HeuristicOpponent::new(),
    };
    let mut black: Box<dyn OpponentPolicy> = match (random_black, seed) {
        (true, Some(seed)) => Box::new(RandomOpponent::seeded(seed.wrapping_add(1))),
        (true, None) => Box::new(RandomOpponent::new()),
        (false, Some(seed)) => Box::new(HeuristicOpponent::seeded(seed.wrapping_add(1))),
        (false, None) => Box::new(HeuristicOpponent::new()),
    };

    let result = play_match(&mut white, black.as_mut(), &MatchConfig::default()).map_err(|e| e.to_string())?;

    let move_list = move_list_to_text(result.final_state.move_history()).map_err(|e| e.to_string())?;
    println!("{move_list}");
    println!("outcome: {:?}", result.outcome);
    println!("final position: {}", result.final_state.get_fen());
    Ok(())
}
