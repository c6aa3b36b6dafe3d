use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{ray_targets, BISHOP_DIRECTIONS, ROOK_DIRECTIONS};

pub fn generate_queen_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    ray_targets(board, from, color, &ROOK_DIRECTIONS, out);
    ray_targets(board, from, color, &BISHOP_DIRECTIONS, out);
}
