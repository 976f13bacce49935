use std::ops::{Index, IndexMut};

use crate::{board_display::IndexableBoard, coord::Coord, piece::Piece};

/// Plain 8×8 grid indexed by [`Coord`], rank 1 first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SimpleBoard<T>(pub [[T; 8]; 8]);

impl<T> SimpleBoard<T> {
    pub fn row(&self, rank: u8) -> &[T; 8] {
        &self.0[rank as usize]
    }
    pub fn row_mut(&mut self, rank: u8) -> &mut [T; 8] {
        &mut self.0[rank as usize]
    }
}
impl<T> Index<Coord> for SimpleBoard<T> {
    type Output = T;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.row(index.rank())[index.file() as usize]
    }
}
impl<T> IndexMut<Coord> for SimpleBoard<T> {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        &mut self.row_mut(index.rank())[index.file() as usize]
    }
}
impl IndexableBoard for SimpleBoard<Option<Piece>> {
    fn index(&self, position: Coord) -> Option<Piece> {
        self[position]
    }
}
#[cfg(test)]
mod test {
    use crate::{board::Board, coord, piece::PieceKind};

    #[test]
    fn indexed_by_coord() {
        let mut snapshot = Board::starting_position().snapshot();
        assert_eq!(snapshot[coord!("a1")].map(|piece| piece.kind), Some(PieceKind::Rook));
        assert_eq!(snapshot[coord!("d8")].map(|piece| piece.kind), Some(PieceKind::Queen));
        assert_eq!(snapshot.row(3), &[None; 8]);
        snapshot[coord!("e2")] = None;
        assert!(snapshot[coord!("e2")].is_none());
        assert_eq!(snapshot.0.iter().flatten().filter(|piece| piece.is_some()).count(), 31);
    }
}
