//! Notifications for the presentation layer.
//!
//! Hosts diff the state before and after a transition and forward the
//! resulting events to rendering, sound or scoring collaborators.

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    MovePlayed(Move),
    Captured { by: Color, piece: Piece },
    Check(Color),
    SideToMove(Color),
    GameOver(Terminal),
}

/// Events produced by one `apply_move`, `tick_clock` or `resign` step, in
/// the order a host would announce them.
pub fn transition_events(before: &GameState, after: &GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();

    let moved = after.move_history().len() > before.move_history().len();
    if moved {
        if let Some(mv) = after.last_move() {
            events.push(GameEvent::MovePlayed(*mv));
        }

        let mover = before.side_to_move();
        if after.captured_by(mover).len() > before.captured_by(mover).len() {
            if let Some(piece) = after.captured_by(mover).last() {
                events.push(GameEvent::Captured {
                    by: mover,
                    piece: *piece,
                });
            }
        }
    }

    if let Some(checked) = after.check() {
        if moved || before.check() != Some(checked) {
            events.push(GameEvent::Check(checked));
        }
    }

    if let (None, Some(outcome)) = (before.outcome(), after.outcome()) {
        events.push(GameEvent::GameOver(outcome));
    } else if after.side_to_move() != before.side_to_move() {
        events.push(GameEvent::SideToMove(after.side_to_move()));
    }

    events
}
