//! FEN-to-GameState parser.
//!
//! Reads piece placement, side to move and castling availability. The
//! en-passant field is accepted and ignored; the halfmove clock is ignored;
//! the fullmove number is kept when present.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::game_config::GameConfig;
use crate::utils::algebraic::algebraic_to_square;

fn invalid(msg: impl Into<String>) -> ChessErrors {
    ChessErrors::InvalidFen(msg.into())
}

pub fn parse_fen(fen: &str, config: &GameConfig) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().unwrap_or("-");
    let en_passant_part = parts.next().unwrap_or("-");
    let _halfmove_part = parts.next();
    let fullmove_part = parts.next();

    if parts.next().is_some() {
        return Err(invalid("FEN has extra trailing fields"));
    }

    let board = parse_board(board_part)?;
    for color in [Color::White, Color::Black] {
        let kings = board.count_kings(color);
        if kings != 1 {
            return Err(invalid(format!("{color:?} must have exactly one king, found {kings}")));
        }
    }

    let side_to_move = parse_side_to_move(side_part)?;
    let castling_rights = parse_castling_rights(castling_part)?;
    if en_passant_part != "-" {
        algebraic_to_square(en_passant_part)?;
    }
    let fullmove_number = match fullmove_part {
        Some(text) => text
            .parse::<u16>()
            .map_err(|_| invalid(format!("invalid fullmove number: {text}")))?,
        None => 1,
    };

    Ok(GameState::from_parts(
        board,
        side_to_move,
        castling_rights,
        fullmove_number,
        config,
    ))
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board = Board::empty();
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(invalid("board rank has too many files"));
                }
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(format!("invalid piece character '{ch}' in board layout")))?;

            if file >= 8 {
                return Err(invalid("board rank has too many files"));
            }

            board.set(board_rank * 8 + file, Some(piece));
            file += 1;
        }

        if file != 8 {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(format!("invalid side-to-move field: {side_part}"))),
    }
}

/// Each missing letter marks that rook as moved; a colour with no letters
/// at all is treated as having moved its king.
fn parse_castling_rights(castling_part: &str) -> ChessResult<[CastlingRights; 2]> {
    let moved = CastlingRights {
        king_moved: true,
        rook_moved_queenside: true,
        rook_moved_kingside: true,
    };
    let mut rights = [moved; 2];

    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        let (color, side) = match ch {
            'K' => (Color::White, CastleSide::Kingside),
            'Q' => (Color::White, CastleSide::Queenside),
            'k' => (Color::Black, CastleSide::Kingside),
            'q' => (Color::Black, CastleSide::Queenside),
            _ => return Err(invalid(format!("invalid castling rights character: {ch}"))),
        };
        let entry = &mut rights[color.index()];
        entry.king_moved = false;
        match side {
            CastleSide::Kingside => entry.rook_moved_kingside = false,
            CastleSide::Queenside => entry.rook_moved_queenside = false,
        }
    }

    Ok(rights)
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(kind, color))
}
