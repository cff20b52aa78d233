use super::piece::{Piece, PieceKind};
use super::types::{Side, Square, BOARD_SIZE};
use serde::{Deserialize, Serialize};

/// 盤面 (5x5 固定)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// cells[row][col]
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Board::default()
    }

    pub fn place_piece(&mut self, sq: Square, piece: Piece) {
        self.cells[sq.row][sq.col] = Some(piece);
    }

    pub fn get_piece(&self, sq: Square) -> Option<&Piece> {
        self.cells[sq.row][sq.col].as_ref()
    }

    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.row][sq.col].take()
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.row][sq.col].is_none()
    }

    /// 駒を row-major 昇順で列挙する
    pub fn pieces(&self) -> impl Iterator<Item = (Square, &Piece)> {
        Square::all().filter_map(move |sq| self.get_piece(sq).map(|p| (sq, p)))
    }

    pub fn find_king(&self, side: Side) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.owner == side && p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    pub fn rows(&self) -> &[[Option<Piece>; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_get_remove() {
        let mut board = Board::new();
        let sq = Square::new(2, 3);
        assert!(board.is_empty(sq));

        board.place_piece(sq, Piece::new(PieceKind::Knight, Side::Black));
        assert_eq!(
            board.get_piece(sq),
            Some(&Piece::new(PieceKind::Knight, Side::Black))
        );

        let removed = board.remove_piece(sq);
        assert_eq!(removed.map(|p| p.kind), Some(PieceKind::Knight));
        assert!(board.is_empty(sq));
    }

    #[test]
    fn find_king_per_side() {
        let mut board = Board::new();
        board.place_piece(Square::new(0, 0), Piece::new(PieceKind::King, Side::Black));
        board.place_piece(Square::new(4, 4), Piece::new(PieceKind::King, Side::White));
        assert_eq!(board.find_king(Side::Black), Some(Square::new(0, 0)));
        assert_eq!(board.find_king(Side::White), Some(Square::new(4, 4)));

        board.remove_piece(Square::new(4, 4));
        assert_eq!(board.find_king(Side::White), None);
    }
}
