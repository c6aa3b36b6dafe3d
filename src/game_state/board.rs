//! Mailbox board: 64 optional pieces indexed by square.
//!
//! The board is plain data. Move generation and attack detection read it
//! through shared references; relocation produces a new board so legality
//! checks can test "what-if" positions without touching the original.

use crate::game_state::chess_rules::BACK_RANK;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    /// Standard initial setup.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for (file, kind) in BACK_RANK.iter().copied().enumerate() {
            let file = file as u8;
            board.set(file, Some(Piece::new(kind, Color::White)));
            board.set(8 + file, Some(Piece::new(PieceKind::Pawn, Color::White)));
            board.set(48 + file, Some(Piece::new(PieceKind::Pawn, Color::Black)));
            board.set(56 + file, Some(Piece::new(kind, Color::Black)));
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square as usize] = piece;
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square as usize].is_none()
    }

    /// Colour of the piece on `square`, if any.
    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.squares[square as usize].map(|p| p.color)
    }

    /// Occupied squares with their pieces, in square order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(sq, p)| p.map(|piece| (sq as Square, piece)))
    }

    /// Occupied squares of one colour, in square order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    /// Scans all squares; `None` when that king is not on the board.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, p)| p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    pub fn count_kings(&self, color: Color) -> usize {
        self.pieces_of(color)
            .filter(|(_, p)| p.kind == PieceKind::King)
            .count()
    }

    /// New board with the piece on `from` moved to `to`. A castle also moves
    /// the matching rook from its corner to the square the king passed over.
    pub fn with_move_applied(&self, from: Square, to: Square, castle: Option<CastleSide>) -> Board {
        let mut next = *self;
        next.relocate(from, to, castle);
        next
    }

    /// In-place form of [`Board::with_move_applied`]. Returns whatever stood on `to`.
    pub fn relocate(&mut self, from: Square, to: Square, castle: Option<CastleSide>) -> Option<Piece> {
        let moving = self.squares[from as usize].take();
        let captured = std::mem::replace(&mut self.squares[to as usize], moving);

        if let Some(side) = castle {
            let rank = rank_of(from);
            let rook_from = rank * 8 + side.rook_file();
            let rook_to = rank * 8 + side.rook_target_file();
            let rook = self.squares[rook_from as usize].take();
            self.squares[rook_to as usize] = rook;
        }

        captured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_has_one_king_each() {
        let board = Board::starting_position();
        assert_eq!(board.find_king(Color::White), Some(4));
        assert_eq!(board.find_king(Color::Black), Some(60));
        assert_eq!(board.count_kings(Color::White), 1);
        assert_eq!(board.pieces().count(), 32);
    }

    #[test]
    fn with_move_applied_leaves_original_untouched() {
        let board = Board::starting_position();
        let next = board.with_move_applied(12, 28, None);
        assert!(board.is_empty(28));
        assert_eq!(
            next.piece_at(28),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert!(next.is_empty(12));
    }

    #[test]
    fn castle_relocates_rook() {
        let mut board = Board::empty();
        board.set(4, Some(Piece::new(PieceKind::King, Color::White)));
        board.set(7, Some(Piece::new(PieceKind::Rook, Color::White)));
        board.set(0, Some(Piece::new(PieceKind::Rook, Color::White)));

        let short = board.with_move_applied(4, 6, Some(CastleSide::Kingside));
        assert_eq!(short.piece_at(5).map(|p| p.kind), Some(PieceKind::Rook));
        assert!(short.is_empty(7));

        let long = board.with_move_applied(4, 2, Some(CastleSide::Queenside));
        assert_eq!(long.piece_at(3).map(|p| p.kind), Some(PieceKind::Rook));
        assert!(long.is_empty(0));
    }

    #[test]
    fn find_king_reports_missing_king() {
        assert_eq!(Board::empty().find_king(Color::Black), None);
    }
}
