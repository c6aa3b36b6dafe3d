use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{ray_targets, ROOK_DIRECTIONS};

pub fn generate_rook_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    ray_targets(board, from, color, &ROOK_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_on_d4_sees_fourteen_squares_on_empty_board() {
        let mut out = Vec::new();
        generate_rook_moves(&Board::empty(), 27, Color::Black, &mut out);
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let mut board = Board::empty();
        board.set(24, Some(Piece::new(PieceKind::Knight, Color::Black)));
        let mut out = Vec::new();
        generate_rook_moves(&board, 0, Color::White, &mut out);

        assert!(out.contains(&24));
        assert!(!out.contains(&32));
    }
}
