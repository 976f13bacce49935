use std::fmt::{self, Display, Formatter};

use crate::{board::Board, color::Color, coord::Coord, piece::Piece};

const WHITE: &str = "\x1b[30;107m";
const BLACK: &str = "\x1b[30;47m";
const HIGHLIGHTED: &str = "\x1b[30;103m";
const RESET: &str = "\x1b[0m";

pub trait IndexableBoard {
    fn index(&self, position: Coord) -> Option<Piece>;
}
impl IndexableBoard for Board {
    fn index(&self, position: Coord) -> Option<Piece> {
        self.piece_at(position).copied()
    }
}
impl<T: IndexableBoard> IndexableBoard for &T {
    fn index(&self, position: Coord) -> Option<Piece> {
        (*self).index(position)
    }
}

/// Renders a board with ANSI colored squares. `info` lines are printed to the right of
/// the board, one per rank, overflow below it.
pub struct BoardDisplay<'a, 'b, T> {
    pub board: T,
    pub view: Color,
    pub highlighted: &'a [Coord],
    pub info: &'b str,
}
impl<T> BoardDisplay<'_, '_, T> {
    pub fn new(board: T) -> Self {
        BoardDisplay {
            board,
            view: Color::White,
            highlighted: &[],
            info: "",
        }
    }
}
impl<T> Display for BoardDisplay<'_, '_, T>
where
    T: IndexableBoard,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut lines = self.info.lines().fuse();
        for row in 0..8 {
            let rank = match self.view {
                Color::White => 7 - row,
                Color::Black => row,
            };
            for column in 0..8 {
                let file = match self.view {
                    Color::White => column,
                    Color::Black => 7 - column,
                };
                let Some(position) = Coord::from_indices(file, rank) else {
                    continue;
                };
                let color = if self.highlighted.contains(&position) {
                    HIGHLIGHTED
                } else {
                    match position.board_color() {
                        Color::White => WHITE,
                        Color::Black => BLACK,
                    }
                };
                let figurine = self.board.index(position).map_or(' ', Piece::figurine);
                write!(f, "{color}{figurine} {RESET}")?;
            }
            write!(f, "{}", rank + 1)?;
            if let Some(line) = lines.next() {
                write!(f, " {line}")?;
            }
            writeln!(f)?;
        }
        match self.view {
            Color::White => write!(f, "a b c d e f g h")?,
            Color::Black => write!(f, "h g f e d c b a")?,
        }
        if let Some(line) = lines.next() {
            write!(f, "   {line}")?;
        }
        writeln!(f)?;
        for line in lines {
            writeln!(f, "                  {line}")?;
        }
        Ok(())
    }
}
#[cfg(test)]
mod test {
    use crate::{board::Board, board_display::BoardDisplay, color::Color, coord};

    #[test]
    fn white_view_starts_with_rank_8() {
        let board = Board::starting_position();
        let text = BoardDisplay::new(&board).to_string();
        let first = text.lines().next().unwrap();
        assert!(first.contains('♜'));
        assert!(first.ends_with('8'));
        assert!(text.contains("a b c d e f g h"));
    }
    #[test]
    fn black_view_is_flipped() {
        let board = Board::starting_position();
        let highlighted = [coord!("e2")];
        let text = BoardDisplay {
            board: &board,
            view: Color::Black,
            highlighted: &highlighted,
            info: "white plays",
        }
        .to_string();
        let first = text.lines().next().unwrap();
        assert!(first.contains('♖'));
        assert!(first.ends_with("1 white plays"));
        assert!(text.contains("h g f e d c b a"));
        assert!(text.contains("\x1b[30;103m"));
    }
}
