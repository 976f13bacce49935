#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    io::{self, BufRead, Write, stderr, stdin, stdout},
    str::FromStr,
};

use chess_arbiter::{Color, Coord, Game, board_display::BoardDisplay, coord::ParseCoordError};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Input {
    Help,
    Flip,
    Restart,
    Quit,
    Coord(Coord),
    Move(Coord, Coord),
}
impl Display for Input {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Input::Help => write!(f, "help")?,
            Input::Flip => write!(f, "flip")?,
            Input::Restart => write!(f, "restart")?,
            Input::Quit => write!(f, "quit")?,
            Input::Coord(position) => write!(f, "{position}")?,
            Input::Move(origin, destination) => write!(f, "{origin}{destination}")?,
        }
        Ok(())
    }
}
impl FromStr for Input {
    type Err = ParseInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "help" => Ok(Input::Help),
            "flip" => Ok(Input::Flip),
            "restart" => Ok(Input::Restart),
            "quit" => Ok(Input::Quit),
            s => {
                if let Ok(position) = s.parse() {
                    return Ok(Input::Coord(position));
                }
                let middle = s.char_indices().nth(2).map_or(s.len(), |(i, _)| i);
                let (origin, destination) = s.split_at(middle);
                Ok(Input::Move(origin.parse()?, destination.parse()?))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ParseInputError(ParseCoordError);

impl From<ParseCoordError> for ParseInputError {
    fn from(value: ParseCoordError) -> Self {
        ParseInputError(value)
    }
}
impl Display for ParseInputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        Ok(())
    }
}
impl Error for ParseInputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

#[allow(
    clippy::too_many_lines,
    reason = "further decomposition could potentially hurt readability"
)]
fn main() -> io::Result<()> {
    let input = stdin().lock();
    let mut output = stdout().lock();
    let mut error = stderr().lock();

    let mut lines = input.lines();

    let mut game = Game::starting_position();
    let mut info = String::new();
    let mut highlighted = Vec::new();
    let mut legal_moves: FxHashMap<Coord, Vec<Coord>> = FxHashMap::default();
    let mut check = false;
    let mut update = true;
    let mut view = Color::White;
    let mut first_time = true;
    loop {
        if update {
            legal_moves.clear();
            info = match game.outcome() {
                Some(end_state) => format!("{end_state}\n"),
                None => {
                    let squares: Vec<_> = game
                        .board()
                        .pieces_of(game.turn())
                        .map(|(_, piece)| piece.position)
                        .collect();
                    for square in squares {
                        match game.legal_destinations(square) {
                            Ok(destinations) => {
                                legal_moves.insert(square, destinations);
                            }
                            Err(err) => writeln!(error, "Error: {err}")?,
                        }
                    }
                    if check {
                        format!("{} plays\n{} is in check\n", game.turn(), game.turn())
                    } else {
                        format!("{} plays\n", game.turn())
                    }
                }
            };
        }
        if first_time {
            info.push_str("type `help` for instructions\n");
            first_time = false;
        }
        update = false;
        writeln!(
            output,
            "{}",
            BoardDisplay {
                board: game.board(),
                view,
                highlighted: &highlighted,
                info: &info,
            },
        )?;
        loop {
            write!(output, "> ")?;
            output.flush()?;
            let Some(text) = lines.next() else {
                return Ok(());
            };
            let input = match text?.trim().parse() {
                Ok(input) => input,
                Err(err) => {
                    writeln!(error, "Error: {err}")?;
                    writeln!(error, "for available command, enter `help`")?;
                    continue;
                }
            };
            match input {
                Input::Help => {
                    writeln!(output, "flip           - flip the board")?;
                    writeln!(output, "restart        - reset to starting position")?;
                    writeln!(output, "quit           - quit the game")?;
                    writeln!(output, "e2             - view legal moves")?;
                    writeln!(output, "e2e4           - play the move")?;
                    writeln!(output, "e1g1           - perform castling")?;
                }
                Input::Flip => {
                    view = !view;
                }
                Input::Restart => {
                    game = Game::starting_position();
                    check = false;
                    update = true;
                    highlighted.clear();
                }
                Input::Quit => return Ok(()),
                Input::Coord(position) => {
                    let Some(piece) = game.board().piece_at(position) else {
                        writeln!(error, "Error: No piece found on {position}")?;
                        continue;
                    };
                    if piece.color != game.turn() {
                        writeln!(error, "Error: It is {}'s turn", game.turn())?;
                        continue;
                    }
                    highlighted.clear();
                    highlighted.extend(legal_moves.get(&position).into_iter().flatten());
                }
                Input::Move(origin, destination) => {
                    let report = match game.play(origin, destination) {
                        Ok(report) => report,
                        Err(err) => {
                            writeln!(error, "Error: {err}")?;
                            continue;
                        }
                    };
                    if let Some(piece) = report.captured {
                        writeln!(output, "captured {piece}")?;
                    }
                    check = report.check;
                    highlighted.clear();
                    highlighted.push(origin);
                    highlighted.push(destination);
                    update = true;
                }
            }
            break;
        }
    }
}
#[cfg(test)]
mod test {
    use chess_arbiter::coord;

    use crate::Input;

    #[test]
    fn parse_input() {
        assert_eq!("help".parse(), Ok(Input::Help));
        assert_eq!("e2".parse(), Ok(Input::Coord(coord!("e2"))));
        assert_eq!("e2e4".parse(), Ok(Input::Move(coord!("e2"), coord!("e4"))));
        assert_eq!("E1G1".parse(), Ok(Input::Move(coord!("e1"), coord!("g1"))));
        assert!("e2e9".parse::<Input>().is_err());
        assert!("castle".parse::<Input>().is_err());
        assert_eq!(Input::Move(coord!("e7"), coord!("e5")).to_string(), "e7e5");
    }
}
