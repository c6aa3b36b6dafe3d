//! Attack detection over a board snapshot.
//!
//! Every query scans the occupied squares of the attacking colour and
//! recomputes their attack sets; nothing is cached between calls.

use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::attacked_squares;

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    board
        .pieces_of(attacker_color)
        .any(|(from, _)| attacked_squares(board, from).contains(&square))
}

/// `false` when that king is not on the board.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.find_king(color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

pub fn attackers_to_square(board: &Board, square: Square, attacker_color: Color) -> Vec<(Square, PieceKind)> {
    board
        .pieces_of(attacker_color)
        .filter(|(from, _)| attacked_squares(board, *from).contains(&square))
        .map(|(from, piece)| (from, piece.kind))
        .collect()
}
