use crate::game_state::chess_types::*;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// True when a piece of `mover` may land on `square`: empty or enemy-held.
#[inline]
pub fn can_enter(board: &Board, square: Square, mover: Color) -> bool {
    board.color_at(square) != Some(mover)
}

/// Fixed-offset destinations (knight, king step).
pub fn step_targets(board: &Board, from: Square, mover: Color, offsets: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(d_file, d_rank) in offsets {
        if let Some(to) = offset_square(from, d_file, d_rank) {
            if can_enter(board, to, mover) {
                out.push(to);
            }
        }
    }
}

/// Ray-cast destinations. Each ray stops at the first occupied square, which
/// is included only when it holds an enemy piece.
pub fn ray_targets(board: &Board, from: Square, mover: Color, directions: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(d_file, d_rank) in directions {
        let mut current = from;
        while let Some(to) = offset_square(current, d_file, d_rank) {
            match board.color_at(to) {
                None => out.push(to),
                Some(owner) => {
                    if owner != mover {
                        out.push(to);
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_stops_at_blockers() {
        let mut board = Board::empty();
        board.set(0, Some(Piece::new(PieceKind::Rook, Color::White)));
        board.set(24, Some(Piece::new(PieceKind::Pawn, Color::Black)));
        board.set(2, Some(Piece::new(PieceKind::Pawn, Color::White)));

        let mut out = Vec::new();
        ray_targets(&board, 0, Color::White, &ROOK_DIRECTIONS, &mut out);
        out.sort_unstable();

        // a2, a3, a4 (capture) and b1; c1 is an own piece.
        assert_eq!(out, vec![1, 8, 16, 24]);
    }

    #[test]
    fn knight_in_corner_has_two_targets() {
        let board = Board::empty();
        let mut out = Vec::new();
        step_targets(&board, 0, Color::White, &KNIGHT_OFFSETS, &mut out);
        out.sort_unstable();
        assert_eq!(out, vec![10, 17]);
    }
}
