use std::fmt::{self, Display, Formatter};

use crate::coord::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleMove {
    pub king_origin: Coord,
    pub king_destination: Coord,
    pub rook_origin: Coord,
    pub rook_destination: Coord,
}

/// A move as executed on the board. Castling and en passant carry their secondary effect
/// explicitly since it touches a square other than the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Regular {
        origin: Coord,
        destination: Coord,
    },
    Castle(CastleMove),
    EnPassant {
        origin: Coord,
        destination: Coord,
        captured: Coord,
    },
}
impl Move {
    pub fn origin(self) -> Coord {
        match self {
            Move::Regular { origin, .. } | Move::EnPassant { origin, .. } => origin,
            Move::Castle(castle_move) => castle_move.king_origin,
        }
    }
    pub fn destination(self) -> Coord {
        match self {
            Move::Regular { destination, .. } | Move::EnPassant { destination, .. } => {
                destination
            }
            Move::Castle(castle_move) => castle_move.king_destination,
        }
    }
    pub fn is_special(self) -> bool {
        !matches!(self, Move::Regular { .. })
    }
}
impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.origin(), self.destination())?;
        Ok(())
    }
}
