use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use crate::{color::Color, coord::Coord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}
impl PieceKind {
    pub const STARTING_CONFIGURATION: [Self; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];
    pub fn uppercase(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
    pub fn lowercase(self) -> char {
        self.uppercase().to_ascii_lowercase()
    }
    /// Parses a piece letter; uppercase letters are white, lowercase letters are black.
    pub fn from_letter(c: char) -> Result<(Color, Self), InvalidPieceLetter> {
        let piece = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return Err(InvalidPieceLetter(c)),
        };
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Ok((color, piece))
    }
}
impl Display for PieceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Pawn => write!(f, "pawn")?,
            PieceKind::Knight => write!(f, "knight")?,
            PieceKind::Bishop => write!(f, "bishop")?,
            PieceKind::Rook => write!(f, "rook")?,
            PieceKind::Queen => write!(f, "queen")?,
            PieceKind::King => write!(f, "king")?,
        }
        Ok(())
    }
}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidPieceLetter(pub char);
impl Display for InvalidPieceLetter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "found `{}`, expected one of `p`, `n`, `b`, `r`, `k`, `q`, or uppercase forms of these letters",
            self.0
        )?;
        Ok(())
    }
}
impl Error for InvalidPieceLetter {}

/// A piece owned by a [`Board`](crate::board::Board). Pieces are never removed from the
/// board's storage; a captured piece only stops occupying its square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub position: Coord,
    pub captured: bool,
    /// Only consulted for kings and rooks.
    pub moved: bool,
}
impl Piece {
    pub fn new(color: Color, kind: PieceKind, position: Coord) -> Self {
        Piece {
            color,
            kind,
            position,
            captured: false,
            moved: false,
        }
    }
    /// Whether the displacement to `target` fits this piece's movement pattern, ignoring
    /// every other piece on the board.
    pub fn has_shape(self, target: Coord) -> bool {
        let distance = self.position.distance_from(target);
        match self.kind {
            PieceKind::Pawn => {
                let forward = self.color.forward();
                (distance.file == 0 && distance.rank == forward)
                    || (distance.file == 0
                        && distance.rank == forward * 2
                        && self.position.rank() == self.color.pawn_home_rank())
                    || (distance.file.abs() == 1 && distance.rank == forward)
            }
            PieceKind::Knight => distance.is_knight_move(),
            PieceKind::Bishop => distance.is_diagonal(),
            PieceKind::Rook => distance.is_straight(),
            PieceKind::Queen => distance.is_diagonal() || distance.is_straight(),
            PieceKind::King => distance.is_king_move(),
        }
    }
    pub fn letter(self) -> char {
        match self.color {
            Color::White => self.kind.uppercase(),
            Color::Black => self.kind.lowercase(),
        }
    }
    pub fn figurine(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::King) => '♔',
            (Color::Black, PieceKind::Pawn) => '♟',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::King) => '♚',
        }
    }
}
impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on {}", self.color, self.kind, self.position)?;
        Ok(())
    }
}
