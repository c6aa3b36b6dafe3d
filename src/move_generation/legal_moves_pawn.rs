//! Pawn pushes and captures.
//!
//! No en-passant and no promotion: a pawn on its last rank has no forward
//! moves left.

use crate::game_state::chess_types::*;

#[inline]
const fn forward(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

#[inline]
const fn start_rank(color: Color) -> u8 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

pub fn generate_pawn_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    let dir = forward(color);

    if let Some(one_step) = offset_square(from, 0, dir) {
        if board.is_empty(one_step) {
            out.push(one_step);

            if rank_of(from) == start_rank(color) {
                if let Some(two_step) = offset_square(from, 0, 2 * dir) {
                    if board.is_empty(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for file_delta in [-1i8, 1i8] {
        let Some(to) = offset_square(from, file_delta, dir) else {
            continue;
        };
        if board.color_at(to) == Some(color.opposite()) {
            out.push(to);
        }
    }
}

/// Diagonal squares a pawn attacks, whether or not they are occupied.
pub fn pawn_attacks(from: Square, color: Color, out: &mut Vec<Square>) {
    let dir = forward(color);
    for file_delta in [-1i8, 1i8] {
        if let Some(to) = offset_square(from, file_delta, dir) {
            out.push(to);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pawn(color: Color) -> Option<Piece> {
        Some(Piece::new(PieceKind::Pawn, color))
    }

    #[test]
    fn double_push_only_from_start_rank() {
        let mut board = Board::empty();
        board.set(12, pawn(Color::White));
        board.set(21, pawn(Color::White));

        let mut from_start = Vec::new();
        generate_pawn_moves(&board, 12, Color::White, &mut from_start);
        assert_eq!(from_start, vec![20, 28]);

        let mut advanced = Vec::new();
        generate_pawn_moves(&board, 21, Color::White, &mut advanced);
        assert_eq!(advanced, vec![29]);
    }

    #[test]
    fn double_push_needs_both_squares_empty() {
        let mut board = Board::empty();
        board.set(52, pawn(Color::Black));
        board.set(36, Some(Piece::new(PieceKind::Knight, Color::White)));

        let mut out = Vec::new();
        generate_pawn_moves(&board, 52, Color::Black, &mut out);
        assert_eq!(out, vec![44]);

        board.set(44, Some(Piece::new(PieceKind::Knight, Color::White)));
        let mut blocked = Vec::new();
        generate_pawn_moves(&board, 52, Color::Black, &mut blocked);
        assert!(blocked.is_empty());
    }

    #[test]
    fn captures_only_enemy_pieces_diagonally() {
        let mut board = Board::empty();
        board.set(27, pawn(Color::White));
        board.set(34, pawn(Color::Black));
        board.set(36, pawn(Color::White));
        board.set(35, pawn(Color::Black));

        let mut out = Vec::new();
        generate_pawn_moves(&board, 27, Color::White, &mut out);
        assert_eq!(out, vec![34]);
    }

    #[test]
    fn pawn_on_last_rank_is_stuck() {
        let mut board = Board::empty();
        board.set(60, pawn(Color::White));
        let mut out = Vec::new();
        generate_pawn_moves(&board, 60, Color::White, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn edge_pawn_attacks_one_square() {
        let mut out = Vec::new();
        pawn_attacks(8, Color::White, &mut out);
        assert_eq!(out, vec![17]);
    }
}
