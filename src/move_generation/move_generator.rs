//! Pseudo-legal move generation.
//!
//! Dispatches on the piece standing on a square. Results obey each piece's
//! movement pattern but may still leave the mover's own king attacked; see
//! `legal_move_generator` for the filtered set.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::{generate_castling_moves, generate_king_moves};
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::{generate_pawn_moves, pawn_attacks};
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Destination squares for the piece on `square`, without castling.
/// Empty when the square is empty. Order is stable and duplicate-free.
pub fn pseudo_destinations(board: &Board, square: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    let Some(piece) = board.piece_at(square) else {
        return out;
    };

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, square, piece.color, &mut out),
        PieceKind::Knight => generate_knight_moves(board, square, piece.color, &mut out),
        PieceKind::Bishop => generate_bishop_moves(board, square, piece.color, &mut out),
        PieceKind::Rook => generate_rook_moves(board, square, piece.color, &mut out),
        PieceKind::Queen => generate_queen_moves(board, square, piece.color, &mut out),
        PieceKind::King => generate_king_moves(board, square, piece.color, &mut out),
    }

    out
}

/// Pseudo-legal moves for the piece on `square`.
///
/// Castling candidates are appended for a king only when `rights` is given.
/// Attack detection passes `None`, so castling can never justify an attack.
pub fn pseudo_moves(board: &Board, square: Square, rights: Option<&CastlingRights>) -> Vec<Move> {
    let mut moves: Vec<Move> = pseudo_destinations(board, square)
        .into_iter()
        .map(|to| Move::new(square, to))
        .collect();

    if let (Some(rights), Some(piece)) = (rights, board.piece_at(square)) {
        if piece.kind == PieceKind::King {
            generate_castling_moves(board, square, piece.color, rights, &mut moves);
        }
    }

    moves
}

/// Squares the piece on `square` attacks. Same as its destinations except
/// for pawns, which attack both forward diagonals and never the push squares.
pub fn attacked_squares(board: &Board, square: Square) -> Vec<Square> {
    match board.piece_at(square) {
        Some(Piece {
            kind: PieceKind::Pawn,
            color,
        }) => {
            let mut out = Vec::with_capacity(2);
            pawn_attacks(square, color, &mut out);
            out
        }
        Some(_) => pseudo_destinations(board, square),
        None => Vec::new(),
    }
}
