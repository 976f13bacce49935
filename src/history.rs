use std::fmt::{self, Display, Formatter};

use crate::{color::Color, coord::Coord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HistoryEntry {
    pub origin: Coord,
    pub destination: Coord,
}
impl Display for HistoryEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.origin, self.destination)?;
        Ok(())
    }
}

/// Ordered log of accepted moves together with whose turn it is.
///
/// The turn number starts at 1 and goes up each time the turn comes back to the side that
/// moved first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MoveHistory {
    moves: Vec<HistoryEntry>,
    first_mover: Color,
    turn_color: Color,
    turn_number: u32,
}
impl MoveHistory {
    pub fn new(first_mover: Color) -> Self {
        MoveHistory {
            moves: Vec::new(),
            first_mover,
            turn_color: first_mover,
            turn_number: 1,
        }
    }
    pub fn record(&mut self, origin: Coord, destination: Coord) {
        self.moves.push(HistoryEntry {
            origin,
            destination,
        });
        self.turn_color = !self.turn_color;
        if self.turn_color == self.first_mover {
            self.turn_number += 1;
        }
    }
    pub fn previous_move(&self) -> Option<HistoryEntry> {
        self.moves.last().copied()
    }
    pub fn moves(&self) -> &[HistoryEntry] {
        &self.moves
    }
    pub fn turn_color(&self) -> Color {
        self.turn_color
    }
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }
}
impl Default for MoveHistory {
    fn default() -> Self {
        MoveHistory::new(Color::White)
    }
}
#[cfg(test)]
mod test {
    use crate::{color::Color, coord, history::MoveHistory};

    #[test]
    fn turns_alternate() {
        let mut history = MoveHistory::default();
        assert_eq!(history.turn_color(), Color::White);
        assert_eq!(history.turn_number(), 1);
        assert_eq!(history.previous_move(), None);

        let squares = [
            (coord!("e2"), coord!("e4")),
            (coord!("e7"), coord!("e5")),
            (coord!("g1"), coord!("f3")),
            (coord!("b8"), coord!("c6")),
            (coord!("f1"), coord!("b5")),
        ];
        for (n, (origin, destination)) in (1..).zip(squares) {
            history.record(origin, destination);
            let expected = if n % 2 == 0 { Color::White } else { Color::Black };
            assert_eq!(history.turn_color(), expected);
            assert_eq!(history.turn_number(), n / 2 + 1);
        }
        assert_eq!(history.moves().len(), 5);
        assert_eq!(history.previous_move().unwrap().to_string(), "f1b5");
    }
    #[test]
    fn turn_number_follows_first_mover() {
        let mut history = MoveHistory::new(Color::Black);
        history.record(coord!("e7"), coord!("e5"));
        assert_eq!(history.turn_color(), Color::White);
        assert_eq!(history.turn_number(), 1);
        history.record(coord!("e2"), coord!("e4"));
        assert_eq!(history.turn_color(), Color::Black);
        assert_eq!(history.turn_number(), 2);
    }
}
