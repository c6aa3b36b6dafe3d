use std::thread;

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub castles: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.castles += rhs.castles;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Leaf-node count of the legal move tree below `game_state`.
pub fn perft(game_state: &GameState, depth: u8) -> ChessResult<u64> {
    perft_counts(game_state, depth).map(|counts| counts.nodes)
}

pub fn perft_counts(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    let mut total = PerftCounts::default();
    perft_recurse(game_state, depth, &mut total)?;
    Ok(total)
}

/// Same totals as [`perft_counts`], with one worker thread per root move.
pub fn perft_multi_threaded(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 || game_state.is_terminal() {
        return perft_counts(game_state, depth);
    }

    let root_moves = game_state.legal_moves_for(game_state.side_to_move());
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let root = game_state.clone();
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            let result = visit_move(&root, mv, depth, &mut local);
            (result, local)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let (result, local) = handle
            .join()
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
        result?;
        total.merge(local);
    }

    Ok(total)
}

fn perft_recurse(game_state: &GameState, depth: u8, counts: &mut PerftCounts) -> ChessResult<()> {
    if depth == 0 {
        counts.nodes += 1;
        return Ok(());
    }
    if game_state.is_terminal() {
        return Ok(());
    }

    for mv in game_state.legal_moves_for(game_state.side_to_move()) {
        visit_move(game_state, mv, depth, counts)?;
    }
    Ok(())
}

fn visit_move(game_state: &GameState, mv: Move, depth: u8, counts: &mut PerftCounts) -> ChessResult<()> {
    let is_capture = !game_state.board().is_empty(mv.to);
    let next = game_state.play(mv)?;

    if depth > 1 {
        return perft_recurse(&next, depth - 1, counts);
    }

    counts.nodes += 1;
    if is_capture {
        counts.captures += 1;
    }
    if mv.is_castle() {
        counts.castles += 1;
    }
    if next.check().is_some() {
        counts.checks += 1;
    }
    if matches!(next.outcome(), Some(Terminal::Checkmate { .. })) {
        counts.checkmates += 1;
    }
    Ok(())
}
