//! Long algebraic move notation (`e2e4`).
//!
//! Castling is written as the king's two-square move (`e1g1`). Promotion
//! suffixes are not produced since pawns never promote here.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{Move, Square};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_to_long_algebraic(mv: &Move) -> ChessResult<String> {
    Ok(format!(
        "{}{}",
        square_to_algebraic(mv.from)?,
        square_to_algebraic(mv.to)?
    ))
}

/// Parse `e2e4` into its from/to squares.
pub fn long_algebraic_to_squares(text: &str) -> ChessResult<(Square, Square)> {
    let text = text.trim();
    if text.len() != 4 || !text.is_ascii() {
        return Err(ChessErrors::InvalidAlgebraic(format!(
            "move must be four characters: {text}"
        )));
    }
    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    Ok((from, to))
}

/// Numbered move list, e.g. `1. e2e4 e7e5 2. g1f3`.
pub fn move_list_to_text(moves: &[Move]) -> ChessResult<String> {
    let mut parts = Vec::<String>::with_capacity(moves.len() + moves.len() / 2 + 1);
    for (ply, mv) in moves.iter().enumerate() {
        let lan = move_to_long_algebraic(mv)?;
        if ply % 2 == 0 {
            parts.push(format!("{}. {}", ply / 2 + 1, lan));
        } else {
            parts.push(lan);
        }
    }
    Ok(parts.join(" "))
}
