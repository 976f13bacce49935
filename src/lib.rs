#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

pub mod board;
pub mod board_display;
pub mod color;
pub mod coord;
pub mod end_state;
pub mod error;
pub mod game;
pub mod history;
pub mod movement;
pub mod piece;
pub mod rules;
pub mod simple_board;
pub mod validator;

#[cfg(test)]
mod fuzz;
#[cfg(test)]
mod test_utils;

pub use crate::{
    board::Board,
    color::Color,
    coord::Coord,
    end_state::EndState,
    error::MoveError,
    game::{Game, MoveReport},
    rules::Rules,
};
