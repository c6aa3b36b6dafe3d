use crate::game_state::chess_rules::KING_START_FILE;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{step_targets, KING_OFFSETS};

pub fn generate_king_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    step_targets(board, from, color, &KING_OFFSETS, out);
}

/// Castling candidates for the king on `from`, kingside first.
///
/// Offered only when the king and the relevant rook are unmoved, an own rook
/// still stands on the corner, every square strictly between them is empty,
/// and the king's start, transit and destination squares are not attacked.
pub fn generate_castling_moves(
    board: &Board,
    from: Square,
    color: Color,
    rights: &CastlingRights,
    out: &mut Vec<Move>,
) {
    let home = color.home_rank();
    if from != home * 8 + KING_START_FILE || rights.king_moved {
        return;
    }

    let enemy = color.opposite();

    // Cannot castle out of check.
    if is_square_attacked(board, from, enemy) {
        return;
    }

    for side in [CastleSide::Kingside, CastleSide::Queenside] {
        if !rights.can_castle(side) {
            continue;
        }

        let rook_square = home * 8 + side.rook_file();
        if board.piece_at(rook_square) != Some(Piece::new(PieceKind::Rook, color)) {
            continue;
        }

        let (low, high) = if rook_square > from {
            (from + 1, rook_square)
        } else {
            (rook_square + 1, from)
        };
        if (low..high).any(|sq| !board.is_empty(sq)) {
            continue;
        }

        let (transit, destination) = match side {
            CastleSide::Kingside => (from + 1, from + 2),
            CastleSide::Queenside => (from - 1, from - 2),
        };
        if is_square_attacked(board, transit, enemy) || is_square_attacked(board, destination, enemy) {
            continue;
        }

        out.push(Move::castling(from, destination, side));
    }
}
