use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use crate::{color::Color, coord::Coord, end_state::EndState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoPieceAtSource(pub Coord);

impl Display for NoPieceAtSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "no piece found on {}", self.0)?;
        Ok(())
    }
}
impl Error for NoPieceAtSource {}

/// The board has no king of the given color. This never comes from user input, it means
/// the board was set up or mutated into a broken state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KingNotFound(pub Color);

impl Display for KingNotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "no {} king found on the board", self.0)?;
        Ok(())
    }
}
impl Error for KingNotFound {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveError {
    NoPieceAtSource(NoPieceAtSource),
    NotYourTurn { piece: Color, turn: Color },
    IllegalMove { origin: Coord, destination: Coord },
    GameOver(EndState),
    KingNotFound(KingNotFound),
}
impl From<NoPieceAtSource> for MoveError {
    fn from(value: NoPieceAtSource) -> Self {
        MoveError::NoPieceAtSource(value)
    }
}
impl From<KingNotFound> for MoveError {
    fn from(value: KingNotFound) -> Self {
        MoveError::KingNotFound(value)
    }
}
impl Display for MoveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoPieceAtSource(err) => write!(f, "{err}")?,
            MoveError::NotYourTurn { piece, turn } => {
                write!(f, "cannot move a {piece} piece, it is {turn}'s turn")?;
            }
            MoveError::IllegalMove {
                origin,
                destination,
            } => write!(f, "{origin}{destination} is an illegal move")?,
            MoveError::GameOver(end_state) => write!(f, "the game is over: {end_state}")?,
            MoveError::KingNotFound(err) => write!(f, "{err}")?,
        }
        Ok(())
    }
}
impl Error for MoveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MoveError::NoPieceAtSource(err) => Some(err),
            MoveError::KingNotFound(err) => Some(err),
            _ => None,
        }
    }
}
