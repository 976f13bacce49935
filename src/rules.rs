use tracing::trace;

use crate::{
    board::Board,
    color::Color,
    coord::{Coord, Vector},
    end_state::EndState,
    error::{KingNotFound, MoveError, NoPieceAtSource},
    history::MoveHistory,
    movement::{CastleMove, Move},
    piece::{Piece, PieceKind},
    validator::{Validator, en_passant_capture},
};

/// The board together with the move log, answering every legality question about them.
///
/// Queries that need to look one move ahead play that move on the board and take it back
/// before returning, hence `&mut self`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    board: Board,
    history: MoveHistory,
}
impl Rules {
    pub fn new(board: Board, first_mover: Color) -> Self {
        Rules {
            board,
            history: MoveHistory::new(first_mover),
        }
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }
    pub fn turn(&self) -> Color {
        self.history.turn_color()
    }
    /// Interprets moving the piece on `origin` to `destination` as castling, en passant or a
    /// regular move, in that order. `None` when it isn't pseudo-legal.
    pub fn resolve(&self, origin: Coord, destination: Coord) -> Option<Move> {
        let piece = self.board.piece_at(origin)?;
        if let Some(castle_move) = self.castling_move(piece, destination) {
            return Some(Move::Castle(castle_move));
        }
        if let Some(captured) = en_passant_capture(&self.board, &self.history, piece, destination)
        {
            return Some(Move::EnPassant {
                origin,
                destination,
                captured,
            });
        }
        Validator::for_kind(piece.kind)
            .iter()
            .any(|validator| {
                validator.validate_move(&self.board, &self.history, piece, destination)
            })
            .then_some(Move::Regular {
                origin,
                destination,
            })
    }
    pub fn is_pseudo_legal_move(&self, origin: Coord, destination: Coord) -> bool {
        self.resolve(origin, destination).is_some()
    }
    /// Pseudo-legal and not leaving the mover's own king in check. An empty `origin` is
    /// simply not legal, neither is taking a king.
    pub fn is_legal_move(
        &mut self,
        origin: Coord,
        destination: Coord,
    ) -> Result<bool, MoveError> {
        Ok(self.legal_move(origin, destination)?.is_some())
    }
    fn legal_move(
        &mut self,
        origin: Coord,
        destination: Coord,
    ) -> Result<Option<Move>, MoveError> {
        if self
            .board
            .piece_at(destination)
            .is_some_and(|piece| piece.kind == PieceKind::King)
        {
            return Ok(None);
        }
        let Some(movement) = self.resolve(origin, destination) else {
            return Ok(None);
        };
        Ok((!self.leaves_in_check(movement)?).then_some(movement))
    }
    /// The move the side to move would make going from `origin` to `destination`, or why it
    /// can't. Nothing is mutated.
    pub fn checked_move(
        &mut self,
        origin: Coord,
        destination: Coord,
    ) -> Result<Move, MoveError> {
        let piece = self.board.piece_at(origin).ok_or(NoPieceAtSource(origin))?;
        if piece.color != self.turn() {
            return Err(MoveError::NotYourTurn {
                piece: piece.color,
                turn: self.turn(),
            });
        }
        self.legal_move(origin, destination)?
            .ok_or(MoveError::IllegalMove {
                origin,
                destination,
            })
    }
    fn castling_move(&self, king: &Piece, destination: Coord) -> Option<CastleMove> {
        if king.kind != PieceKind::King || king.moved {
            return None;
        }
        let distance = king.position.distance_from(destination);
        if distance.rank != 0 || distance.file.abs() != 2 {
            return None;
        }
        let rook_file = if distance.file > 0 { 7 } else { 0 };
        let rook_origin = Coord::from_indices(rook_file, king.position.rank())?;
        let rook = self.board.piece_at(rook_origin)?;
        if rook.kind != PieceKind::Rook || rook.color != king.color || rook.moved {
            return None;
        }
        if !king
            .position
            .between(rook_origin)?
            .all(|square| self.board.is_empty(square))
        {
            return None;
        }
        let passed = king.position.move_by(distance.as_unit())?;
        if destination == rook_origin
            || !self.board.is_empty(passed)
            || !self.board.is_empty(destination)
        {
            return None;
        }
        if [king.position, passed, destination]
            .into_iter()
            .any(|square| self.is_attacked(square, !king.color))
        {
            return None;
        }
        Some(CastleMove {
            king_origin: king.position,
            king_destination: destination,
            rook_origin,
            rook_destination: passed,
        })
    }
    /// Whether any piece of `attacker` on the current board attacks `square`.
    pub fn is_attacked(&self, square: Coord, attacker: Color) -> bool {
        self.board.pieces_of(attacker).any(|(_, piece)| {
            Validator::for_kind(piece.kind)
                .iter()
                .any(|validator| validator.attacks(&self.board, piece, square))
        })
    }
    /// Whether the king of `color` is attacked, or `square` would be if the king stood there.
    pub fn in_check(&self, color: Color, square: Option<Coord>) -> Result<bool, KingNotFound> {
        let square = match square {
            Some(square) => square,
            None => self.board.king_position_of(color)?,
        };
        Ok(self.is_attacked(square, !color))
    }
    /// Plays `origin` to `destination` on the board, looks for a check against the mover
    /// and takes the move back.
    pub fn would_be_in_check(
        &mut self,
        origin: Coord,
        destination: Coord,
    ) -> Result<bool, MoveError> {
        let movement = self.resolve(origin, destination).unwrap_or(Move::Regular {
            origin,
            destination,
        });
        self.leaves_in_check(movement)
    }
    fn leaves_in_check(&mut self, movement: Move) -> Result<bool, MoveError> {
        let origin = movement.origin();
        let color = self
            .board
            .piece_at(origin)
            .ok_or(NoPieceAtSource(origin))?
            .color;
        let undo = self.board.make(movement)?;
        let check = self.in_check(color, None);
        self.board.unmake(undo);
        trace!(%movement, %color, ?check, "simulated move");
        Ok(check?)
    }
    /// Fully legal destinations of the piece on `square`, recomputed on every call.
    pub fn possible_moves_for(&mut self, square: Coord) -> Result<Vec<Coord>, MoveError> {
        let piece = *self.board.piece_at(square).ok_or(NoPieceAtSource(square))?;
        let mut candidates: Vec<_> = Validator::for_kind(piece.kind)
            .iter()
            .flat_map(|validator| validator.possible_moves(&self.board, &self.history, &piece))
            .collect();
        if piece.kind == PieceKind::King {
            candidates.extend(
                [-2, 2]
                    .into_iter()
                    .filter_map(|file| square.move_by(Vector { file, rank: 0 }))
                    .filter(|destination| self.castling_move(&piece, *destination).is_some()),
            );
        }
        let mut moves = Vec::with_capacity(candidates.len());
        for destination in candidates {
            if self.legal_move(square, destination)?.is_some() {
                moves.push(destination);
            }
        }
        Ok(moves)
    }
    fn has_legal_move(&mut self) -> Result<bool, MoveError> {
        let squares: Vec<_> = self
            .board
            .pieces_of(self.turn())
            .map(|(_, piece)| piece.position)
            .collect();
        for square in squares {
            if !self.possible_moves_for(square)?.is_empty() {
                return Ok(true);
            }
        }
        Ok(false)
    }
    /// The side to move is in check and has no legal move.
    pub fn checkmate(&mut self) -> Result<bool, MoveError> {
        Ok(self.in_check(self.turn(), None)? && !self.has_legal_move()?)
    }
    /// The side to move is not in check and has no legal move.
    pub fn stalemate(&mut self) -> Result<bool, MoveError> {
        Ok(!self.in_check(self.turn(), None)? && !self.has_legal_move()?)
    }
    /// How the game ended for the side to move, `None` while it still has a legal move.
    pub fn status(&mut self) -> Result<Option<EndState>, MoveError> {
        if self.has_legal_move()? {
            return Ok(None);
        }
        if self.in_check(self.turn(), None)? {
            Ok(Some(EndState::Win(!self.turn())))
        } else {
            Ok(Some(EndState::Draw))
        }
    }
    /// Executes an already validated `movement` and records it. Returns the piece it took,
    /// if any.
    pub fn apply(&mut self, movement: Move) -> Result<Option<Piece>, NoPieceAtSource> {
        let captured = match movement {
            Move::Regular { destination, .. } => self.board.index_at(destination),
            Move::EnPassant { captured, .. } => self.board.index_at(captured),
            Move::Castle(_) => None,
        };
        self.board.make(movement)?;
        self.history.record(movement.origin(), movement.destination());
        Ok(captured.map(|index| self.board[index]))
    }
}
impl Default for Rules {
    fn default() -> Self {
        Rules::new(Board::starting_position(), Color::White)
    }
}
