use crate::{board::Board, coord::Coord, piece::PieceKind};

/// Board from eight rank strings, rank 8 first. `.` is an empty square, letters follow
/// the usual uppercase-for-white convention.
pub fn diagram(rows: [&str; 8]) -> Board {
    let mut board = Board::empty();
    for (rank, row) in (0..8).rev().zip(rows) {
        assert_eq!(row.chars().count(), 8, "rank {} is not 8 squares", rank + 1);
        for (file, letter) in (0..).zip(row.chars()) {
            if letter == '.' {
                continue;
            }
            let square = Coord::from_indices(file, rank).unwrap();
            board.place(square, Some(PieceKind::from_letter(letter).unwrap()));
        }
    }
    board
}
