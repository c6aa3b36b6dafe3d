use crate::game_state::chess_types::*;

/// FEN for the current position. En-passant is always `-` and the halfmove
/// clock is always `0` since neither is tracked.
pub fn generate_fen(game_state: &GameState) -> String {
    let side_to_move = match game_state.side_to_move() {
        Color::White => "w",
        Color::Black => "b",
    };

    format!(
        "{} {} {} - 0 {}",
        generate_board_field(game_state.board()),
        side_to_move,
        generate_castling_field(game_state),
        game_state.fullmove_number()
    )
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match board.piece_at(rank * 8 + file) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_to_fen_char(piece));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn piece_to_fen_char(piece: Piece) -> char {
    let base = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match piece.color {
        Color::White => base.to_ascii_uppercase(),
        Color::Black => base,
    }
}

fn generate_castling_field(game_state: &GameState) -> String {
    let mut out = String::new();
    for (color, letters) in [(Color::White, ['K', 'Q']), (Color::Black, ['k', 'q'])] {
        let rights = game_state.castling_rights(color);
        if rights.can_castle(CastleSide::Kingside) {
            out.push(letters[0]);
        }
        if rights.can_castle(CastleSide::Queenside) {
            out.push(letters[1]);
        }
    }

    if out.is_empty() {
        out.push('-');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::GameState;

    #[test]
    fn starting_position_round_trips() {
        assert_eq!(generate_fen(&GameState::new_game()), STARTING_POSITION_FEN);
    }

    #[test]
    fn tracks_moves_and_lost_rights() {
        let game = GameState::new_game()
            .apply_move(12, 28)
            .and_then(|g| g.apply_move(52, 36))
            .and_then(|g| g.apply_move(4, 12))
            .expect("line should be legal");
        assert_eq!(
            generate_fen(&game),
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPPKPPP/RNBQ1BNR b kq - 0 2"
        );
    }
}
