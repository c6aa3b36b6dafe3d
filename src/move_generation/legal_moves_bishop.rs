use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{ray_targets, BISHOP_DIRECTIONS};

pub fn generate_bishop_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    ray_targets(board, from, color, &BISHOP_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bishop_on_d4_sees_thirteen_squares_on_empty_board() {
        let mut out = Vec::new();
        generate_bishop_moves(&Board::empty(), 27, Color::White, &mut out);
        assert_eq!(out.len(), 13);
    }

    #[test]
    fn bishop_is_boxed_in_at_start() {
        let mut out = Vec::new();
        generate_bishop_moves(&Board::starting_position(), 2, Color::White, &mut out);
        assert!(out.is_empty());
    }
}
