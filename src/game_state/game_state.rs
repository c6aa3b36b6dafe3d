//! Match state machine.
//!
//! `GameState` owns the board together with the bookkeeping derived from the
//! moves played so far: side to move, castling rights, clocks, history,
//! captures, check flag and the terminal outcome. Every transition takes
//! `&self` and returns a new state; a state whose outcome is set never
//! changes again.

use std::time::Duration;

use tracing::{debug, info};

use crate::chess_errors::{check_square, ChessErrors, ChessResult};
use crate::game_state::chess_rules::{KING_START_FILE, STARTING_POSITION_FEN};
use crate::game_state::chess_types::*;
use crate::game_state::clock::Clock;
use crate::game_state::game_config::GameConfig;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{all_legal_moves, has_any_legal_move, legal_moves};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    castling_rights: [CastlingRights; 2],
    clock: Clock,
    fullmove_number: u16,
    move_history: Vec<Move>,
    // [color] = pieces captured by that colour
    captured: [Vec<Piece>; 2],
    check: Option<Color>,
    outcome: Option<Terminal>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard initial position, default clocks, White to move.
    pub fn new_game() -> Self {
        Self::with_config(&GameConfig::default())
    }

    pub fn with_config(config: &GameConfig) -> Self {
        Self::from_parts(
            Board::starting_position(),
            Color::White,
            [CastlingRights::default(); 2],
            1,
            config,
        )
    }

    /// Builds a state from an arbitrary position and classifies it right away,
    /// so a position with no legal moves is terminal from the start.
    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        castling_rights: [CastlingRights; 2],
        fullmove_number: u16,
        config: &GameConfig,
    ) -> Self {
        let mut state = Self {
            board,
            side_to_move,
            castling_rights,
            clock: Clock::new(config.clock_seconds),
            fullmove_number,
            move_history: Vec::new(),
            captured: [Vec::new(), Vec::new()],
            check: None,
            outcome: None,
        };
        state.refresh_status();
        state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen, &GameConfig::default())
    }

    #[inline]
    pub fn from_fen_with_config(fen: &str, config: &GameConfig) -> ChessResult<Self> {
        parse_fen(fen, config)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn is_starting_position(&self) -> bool {
        self.get_fen() == STARTING_POSITION_FEN
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self, color: Color) -> &CastlingRights {
        &self.castling_rights[color.index()]
    }

    #[inline]
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    #[inline]
    pub fn remaining_seconds(&self, color: Color) -> u32 {
        self.clock.remaining(color)
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    #[inline]
    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.move_history.last()
    }

    /// Pieces `color` has taken from the opponent, in capture order.
    #[inline]
    pub fn captured_by(&self, color: Color) -> &[Piece] {
        &self.captured[color.index()]
    }

    /// The colour whose king is attacked, if any.
    #[inline]
    pub fn check(&self) -> Option<Color> {
        self.check
    }

    #[inline]
    pub fn outcome(&self) -> Option<Terminal> {
        self.outcome
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Legal target squares for the piece on `from`, for highlighting.
    ///
    /// Empty when the game is over or the square does not hold a piece of the
    /// side to move.
    pub fn legal_destinations(&self, from: u8) -> ChessResult<Vec<Square>> {
        let from = check_square(from)?;
        if self.is_terminal() || self.board.color_at(from) != Some(self.side_to_move) {
            return Ok(Vec::new());
        }
        Ok(self
            .legal_moves_from(from)
            .into_iter()
            .map(|mv| mv.to)
            .collect())
    }

    /// Legal moves for the piece on `from`, whichever side owns it.
    pub fn legal_moves_from(&self, from: Square) -> Vec<Move> {
        match self.board.color_at(from) {
            Some(owner) => legal_moves(&self.board, from, self.castling_rights(owner)),
            None => Vec::new(),
        }
    }

    /// Every legal move `color` could play on the current board.
    pub fn legal_moves_for(&self, color: Color) -> Vec<Move> {
        all_legal_moves(&self.board, color, self.castling_rights(color))
    }

    /// Plays `from -> to` for the side to move.
    pub fn apply_move(&self, from: u8, to: u8) -> ChessResult<GameState> {
        let from = check_square(from)?;
        let to = check_square(to)?;
        if let Some(outcome) = self.outcome {
            return Err(ChessErrors::GameOver(outcome));
        }

        let mover = self.side_to_move;
        let candidate = if self.board.color_at(from) == Some(mover) {
            self.legal_moves_from(from).into_iter().find(|mv| mv.to == to)
        } else {
            None
        };
        let Some(mv) = candidate else {
            debug!(?mover, from, to, "rejected illegal move");
            return Err(ChessErrors::IllegalMove { from, to });
        };

        let mut next = self.clone();
        next.play_unchecked(mv);
        Ok(next)
    }

    /// Plays a move produced by the generator (for example by a policy).
    #[inline]
    pub fn play(&self, mv: Move) -> ChessResult<GameState> {
        self.apply_move(mv.from, mv.to)
    }

    /// Charges `elapsed` to the side to move. Running out of time ends the
    /// game for that side regardless of the position. No-op once terminal.
    pub fn tick_clock(&self, elapsed: Duration) -> GameState {
        let mut next = self.clone();
        if next.is_terminal() {
            return next;
        }

        let side = next.side_to_move;
        if next.clock.charge(side, elapsed) {
            let outcome = Terminal::Timeout {
                winner: side.opposite(),
            };
            info!(?outcome, "clock ran out");
            next.outcome = Some(outcome);
        }
        next
    }

    pub fn resign(&self, color: Color) -> ChessResult<GameState> {
        if let Some(outcome) = self.outcome {
            return Err(ChessErrors::GameOver(outcome));
        }

        let mut next = self.clone();
        let outcome = Terminal::Resignation {
            winner: color.opposite(),
        };
        info!(?outcome, "resigned");
        next.outcome = Some(outcome);
        Ok(next)
    }

    fn play_unchecked(&mut self, mv: Move) {
        let mover = self.side_to_move;
        let opponent = mover.opposite();

        let captured = self.board.relocate(mv.from, mv.to, mv.castle);

        self.record_vacated(mover, mv.from);
        if let Some(side) = mv.castle {
            self.record_vacated(mover, mover.home_rank() * 8 + side.rook_file());
        }
        if let Some(piece) = captured {
            // A rook taken on its corner can no longer castle.
            self.record_vacated(opponent, mv.to);
            self.captured[mover.index()].push(piece);
        }

        self.move_history.push(mv);
        if mover == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = opponent;

        debug!(
            ?mover,
            from = mv.from,
            to = mv.to,
            castle = ?mv.castle,
            captured = ?captured,
            "applied move"
        );

        self.refresh_status();
    }

    /// Flips the castling flag tied to `square` when it is `color`'s king
    /// start square or one of its rook corners.
    fn record_vacated(&mut self, color: Color, square: Square) {
        let home = color.home_rank();
        let rights = &mut self.castling_rights[color.index()];
        if square == home * 8 + KING_START_FILE {
            rights.king_moved = true;
        }
        for side in [CastleSide::Kingside, CastleSide::Queenside] {
            if square == home * 8 + side.rook_file() {
                rights.mark_rook_moved(side);
            }
        }
    }

    /// Recomputes the check flag and classifies checkmate/stalemate for the
    /// side to move.
    fn refresh_status(&mut self) {
        let side = self.side_to_move;
        self.check = is_king_in_check(&self.board, side).then_some(side);

        if has_any_legal_move(&self.board, side, self.castling_rights(side)) {
            return;
        }

        let outcome = if self.check == Some(side) {
            Terminal::Checkmate {
                winner: side.opposite(),
            }
        } else {
            Terminal::Stalemate
        };
        info!(?outcome, plies = self.move_history.len(), "game over");
        self.outcome = Some(outcome);
    }
}
