use tracing::{debug, info};

use crate::{
    board::Board,
    color::Color,
    coord::Coord,
    end_state::EndState,
    error::MoveError,
    history::{HistoryEntry, MoveHistory},
    movement::Move,
    piece::Piece,
    rules::Rules,
    simple_board::SimpleBoard,
};

/// What an accepted move did and where it left the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveReport {
    pub movement: Move,
    pub captured: Option<Piece>,
    /// The side to move next.
    pub turn: Color,
    pub turn_number: u32,
    /// Whether `turn` is in check.
    pub check: bool,
    pub outcome: Option<EndState>,
}

/// A game in progress. Every move, local or remote, goes through [`Game::play`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    rules: Rules,
    outcome: Option<EndState>,
}
impl Game {
    pub fn new(board: Board, first_mover: Color) -> Self {
        Game {
            rules: Rules::new(board, first_mover),
            outcome: None,
        }
    }
    pub fn starting_position() -> Self {
        Game::new(Board::starting_position(), Color::White)
    }
    pub fn play(&mut self, origin: Coord, destination: Coord) -> Result<MoveReport, MoveError> {
        let report = self.try_play(origin, destination);
        if let Err(err) = &report {
            debug!(%origin, %destination, %err, "rejected move");
        }
        report
    }
    fn try_play(&mut self, origin: Coord, destination: Coord) -> Result<MoveReport, MoveError> {
        if let Some(end_state) = self.outcome {
            return Err(MoveError::GameOver(end_state));
        }
        for color in Color::ALL {
            self.rules.board().king_position_of(color)?;
        }
        let movement = self.rules.checked_move(origin, destination)?;
        let captured = self.rules.apply(movement)?;
        debug!(
            %movement,
            special = movement.is_special(),
            captured = ?captured.map(|piece| piece.kind),
            "accepted move"
        );
        let turn = self.rules.turn();
        let check = self.rules.in_check(turn, None)?;
        let outcome = self.rules.status()?;
        if let Some(end_state) = outcome {
            info!(%end_state, turn_number = self.turn_number(), "game over");
        }
        self.outcome = outcome;
        Ok(MoveReport {
            movement,
            captured,
            turn,
            turn_number: self.turn_number(),
            check,
            outcome,
        })
    }
    /// Fully legal destinations of the piece on `square`.
    pub fn legal_destinations(&mut self, square: Coord) -> Result<Vec<Coord>, MoveError> {
        self.rules.possible_moves_for(square)
    }
    pub fn outcome(&self) -> Option<EndState> {
        self.outcome
    }
    pub fn turn(&self) -> Color {
        self.rules.turn()
    }
    pub fn turn_number(&self) -> u32 {
        self.rules.history().turn_number()
    }
    pub fn last_move(&self) -> Option<HistoryEntry> {
        self.rules.history().previous_move()
    }
    pub fn history(&self) -> &MoveHistory {
        self.rules.history()
    }
    pub fn board(&self) -> &Board {
        self.rules.board()
    }
    pub fn snapshot(&self) -> SimpleBoard<Option<Piece>> {
        self.board().snapshot()
    }
    pub fn captured_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.board().captured_pieces()
    }
}
impl Default for Game {
    fn default() -> Self {
        Game::starting_position()
    }
}
