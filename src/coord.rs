use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    ops::{Add, Mul, Neg, Sub},
    str::FromStr,
};

use crate::color::Color;

/// Builds a [`Coord`] from a square literal such as `"e4"`, failing at compile time when
/// used in a constant context and the literal is off the board.
#[macro_export]
macro_rules! coord {
    ($square:literal) => {
        $crate::coord::Coord::from_literal($square)
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidCoordinate {
    File(char),
    Rank(u8),
}
impl Display for InvalidCoordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            InvalidCoordinate::File(file) => {
                write!(f, "found file `{file}`, letters from `a` to `h` were expected")?;
            }
            InvalidCoordinate::Rank(rank) => {
                write!(f, "found rank {rank}, numbers from 1 to 8 were expected")?;
            }
        }
        Ok(())
    }
}
impl Error for InvalidCoordinate {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseCoordError {
    Empty,
    RankNotProvided,
    InvalidRank(char),
    InvalidCoordinate(InvalidCoordinate),
    Unexpected(char),
}
impl From<InvalidCoordinate> for ParseCoordError {
    fn from(value: InvalidCoordinate) -> Self {
        ParseCoordError::InvalidCoordinate(value)
    }
}
impl Display for ParseCoordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseCoordError::Empty => write!(f, "expected 2 characters, found none instead")?,
            ParseCoordError::RankNotProvided => {
                write!(f, "expected 2 characters, found 1 instead")?;
            }
            ParseCoordError::InvalidRank(c) => write!(f, "`{c}` is not a number from 1 to 8")?,
            ParseCoordError::InvalidCoordinate(err) => write!(f, "{err}")?,
            ParseCoordError::Unexpected(c) => {
                write!(f, "unexpected `{c}`, only 2 characters are expected")?;
            }
        }
        Ok(())
    }
}
impl Error for ParseCoordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseCoordError::InvalidCoordinate(err) => Some(err),
            _ => None,
        }
    }
}

/// A square of the board. Both fields are zero-based: file 0 is `a`, rank 0 is `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    file: u8,
    rank: u8,
}
impl Coord {
    /// Builds a square from its file letter (either case) and its rank number from 1 to 8.
    pub fn new(file: char, rank: u8) -> Result<Self, InvalidCoordinate> {
        let file = match file {
            'a'..='h' => file as u8 - b'a',
            'A'..='H' => file as u8 - b'A',
            _ => return Err(InvalidCoordinate::File(file)),
        };
        if !(1..=8).contains(&rank) {
            return Err(InvalidCoordinate::Rank(rank));
        }
        Ok(Coord {
            file,
            rank: rank - 1,
        })
    }
    pub const fn from_literal(literal: &str) -> Self {
        let bytes = literal.as_bytes();
        assert!(bytes.len() == 2, "a square is written with two characters");
        let file = match bytes[0] {
            b'a'..=b'h' => bytes[0] - b'a',
            b'A'..=b'H' => bytes[0] - b'A',
            _ => panic!("file must be a letter from a to h"),
        };
        let rank = match bytes[1] {
            b'1'..=b'8' => bytes[1] - b'1',
            _ => panic!("rank must be a number from 1 to 8"),
        };
        Coord { file, rank }
    }
    /// Builds a square from zero-based indices, `None` when off the board.
    pub fn from_indices(file: u8, rank: u8) -> Option<Self> {
        (file < 8 && rank < 8).then_some(Coord { file, rank })
    }
    pub fn all() -> impl Iterator<Item = Self> {
        (0..8).flat_map(|rank| (0..8).map(move |file| Coord { file, rank }))
    }
    pub fn file(self) -> u8 {
        self.file
    }
    pub fn rank(self) -> u8 {
        self.rank
    }
    pub fn file_letter(self) -> char {
        (self.file + b'a') as char
    }
    pub fn rank_number(self) -> u8 {
        self.rank + 1
    }
    /// Signed `(file, rank)` offset leading from `self` to `other`.
    pub fn distance_from(self, other: Self) -> Vector {
        other - self
    }
    pub fn move_by(self, movement: Vector) -> Option<Self> {
        Self::from_indices(
            self.file.checked_add_signed(movement.file)?,
            self.rank.checked_add_signed(movement.rank)?,
        )
    }
    /// Squares walking from `self` in `direction` up to the edge, `self` excluded.
    pub fn line(self, direction: Vector) -> impl Iterator<Item = Self> {
        debug_assert_ne!(direction, Vector::ZERO);
        (1..).map_while(move |distance| self.move_by(direction * distance))
    }
    /// Squares strictly between `self` and `end`. `end` must lie on the line going from
    /// `self` in `direction`.
    pub fn line_exclusive_exclusive(
        self,
        end: Self,
        direction: Vector,
    ) -> impl Iterator<Item = Self> {
        self.line(direction).take_while(move |position| *position != end)
    }
    /// Squares strictly between `self` and `end` when both share a file, a rank or a
    /// diagonal.
    pub fn between(self, end: Self) -> Option<impl Iterator<Item = Self>> {
        let distance = self.distance_from(end);
        (distance.is_straight() || distance.is_diagonal())
            .then(|| self.line_exclusive_exclusive(end, distance.as_unit()))
    }
    pub fn board_color(self) -> Color {
        match (self.file + self.rank) % 2 {
            0 => Color::Black,
            _ => Color::White,
        }
    }
}
impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_letter(), self.rank_number())?;
        Ok(())
    }
}
impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let file = chars.next().ok_or(ParseCoordError::Empty)?;
        let rank = chars.next().ok_or(ParseCoordError::RankNotProvided)?;
        if let Some(c) = chars.next() {
            return Err(ParseCoordError::Unexpected(c));
        }
        let rank = rank
            .to_digit(10)
            .and_then(|rank| u8::try_from(rank).ok())
            .ok_or(ParseCoordError::InvalidRank(rank))?;
        Ok(Coord::new(file, rank)?)
    }
}
impl Sub<Self> for Coord {
    type Output = Vector;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector {
            file: self.file.cast_signed() - rhs.file.cast_signed(),
            rank: self.rank.cast_signed() - rhs.rank.cast_signed(),
        }
    }
}

/// Signed `(file, rank)` displacement between two squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector {
    pub file: i8,
    pub rank: i8,
}
impl Vector {
    pub const ZERO: Self = Vector { file: 0, rank: 0 };

    pub const KNIGHT_MOVES: [Self; 8] = [
        Vector { file: -2, rank: -1 },
        Vector { file: -1, rank: -2 },
        Vector { file: 2, rank: -1 },
        Vector { file: 1, rank: -2 },
        Vector { file: -2, rank: 1 },
        Vector { file: -1, rank: 2 },
        Vector { file: 2, rank: 1 },
        Vector { file: 1, rank: 2 },
    ];
    pub const KING_MOVES: [Self; 8] = [
        Vector { file: -1, rank: -1 },
        Vector { file: -1, rank: 0 },
        Vector { file: -1, rank: 1 },
        Vector { file: 0, rank: -1 },
        Vector { file: 0, rank: 1 },
        Vector { file: 1, rank: -1 },
        Vector { file: 1, rank: 0 },
        Vector { file: 1, rank: 1 },
    ];
    pub const FILE_DIRECTIONS: [Self; 2] =
        [Vector { file: 0, rank: 1 }, Vector { file: 0, rank: -1 }];
    pub const RANK_DIRECTIONS: [Self; 2] =
        [Vector { file: -1, rank: 0 }, Vector { file: 1, rank: 0 }];
    pub const DIAGONAL_DIRECTIONS: [Self; 4] = [
        Vector { file: -1, rank: -1 },
        Vector { file: -1, rank: 1 },
        Vector { file: 1, rank: -1 },
        Vector { file: 1, rank: 1 },
    ];

    pub fn is_straight(self) -> bool {
        (self.file == 0) != (self.rank == 0)
    }
    pub fn is_diagonal(self) -> bool {
        self.file != 0 && self.file.abs() == self.rank.abs()
    }
    pub fn is_knight_move(self) -> bool {
        let file = self.file.unsigned_abs();
        let rank = self.rank.unsigned_abs();
        (file == 1 && rank == 2) || (file == 2 && rank == 1)
    }
    pub fn is_king_move(self) -> bool {
        self != Vector::ZERO && self.file.abs() <= 1 && self.rank.abs() <= 1
    }
    pub fn as_unit(self) -> Self {
        Vector {
            file: self.file.signum(),
            rank: self.rank.signum(),
        }
    }
}
impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Vector {
            file: -self.file,
            rank: -self.rank,
        }
    }
}
impl Add<Self> for Vector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Vector {
            file: self.file + rhs.file,
            rank: self.rank + rhs.rank,
        }
    }
}
impl Mul<i8> for Vector {
    type Output = Self;

    fn mul(self, rhs: i8) -> Self::Output {
        Vector {
            file: self.file * rhs,
            rank: self.rank * rhs,
        }
    }
}
