//! Legal move filtering.
//!
//! Each pseudo-legal candidate is played on a copy of the board; the move is
//! kept only if the mover's king is not attacked afterwards. A missing king
//! on the resulting board rejects the move as well.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::move_generator::pseudo_moves;

/// True when playing `mv` leaves the mover's own king safe.
pub fn keeps_king_safe(board: &Board, mv: &Move, mover: Color) -> bool {
    let next = board.with_move_applied(mv.from, mv.to, mv.castle);
    match next.find_king(mover) {
        Some(king_sq) => !is_square_attacked(&next, king_sq, mover.opposite()),
        None => false,
    }
}

/// Legal moves for the piece on `square`, in generation order.
pub fn legal_moves(board: &Board, square: Square, rights: &CastlingRights) -> Vec<Move> {
    let Some(piece) = board.piece_at(square) else {
        return Vec::new();
    };

    pseudo_moves(board, square, Some(rights))
        .into_iter()
        .filter(|mv| keeps_king_safe(board, mv, piece.color))
        .collect()
}

/// Every legal move for `color`, scanning squares a1..h8.
pub fn all_legal_moves(board: &Board, color: Color, rights: &CastlingRights) -> Vec<Move> {
    board
        .pieces_of(color)
        .flat_map(|(sq, _)| legal_moves(board, sq, rights))
        .collect()
}

/// Stops at the first legal move found.
pub fn has_any_legal_move(board: &Board, color: Color, rights: &CastlingRights) -> bool {
    board
        .pieces_of(color)
        .any(|(sq, _)| !legal_moves(board, sq, rights).is_empty())
}
