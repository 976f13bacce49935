use std::ops::Index;

use crate::{
    color::Color,
    coord::Coord,
    error::{KingNotFound, NoPieceAtSource},
    movement::Move,
    piece::{Piece, PieceKind},
    simple_board::SimpleBoard,
};

/// Handle of a piece inside a [`Board`]. Stays valid for the whole life of the board,
/// captured pieces included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceIndex(usize);

impl From<PieceIndex> for usize {
    fn from(value: PieceIndex) -> Self {
        value.0
    }
}

/// An 8×8 board owning every piece placed on it.
///
/// Occupancy is kept in `squares` while the pieces themselves live in `pieces`; a square
/// holds the index of the one non-captured piece standing on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pieces: Vec<Piece>,
    squares: [[Option<PieceIndex>; 8]; 8],
}
impl Board {
    pub fn empty() -> Self {
        Board {
            pieces: Vec::new(),
            squares: [[None; 8]; 8],
        }
    }
    /// The standard array, White on ranks 1 and 2.
    pub fn starting_position() -> Self {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (file, kind) in (0..).zip(PieceKind::STARTING_CONFIGURATION) {
                board.place_on_indices(file, color.home_rank(), color, kind);
                board.place_on_indices(file, color.pawn_home_rank(), color, PieceKind::Pawn);
            }
        }
        board
    }
    fn place_on_indices(&mut self, file: u8, rank: u8, color: Color, kind: PieceKind) {
        if let Some(square) = Coord::from_indices(file, rank) {
            self.place(square, Some((color, kind)));
        }
    }
    pub fn index_at(&self, square: Coord) -> Option<PieceIndex> {
        self.squares[square.rank() as usize][square.file() as usize]
    }
    fn index_at_mut(&mut self, square: Coord) -> &mut Option<PieceIndex> {
        &mut self.squares[square.rank() as usize][square.file() as usize]
    }
    pub fn piece_at(&self, square: Coord) -> Option<&Piece> {
        self.index_at(square).map(|index| &self[index])
    }
    pub fn is_empty(&self, square: Coord) -> bool {
        self.index_at(square).is_none()
    }
    /// Puts a fresh, unmoved piece on `square`, or clears it with `None`. A piece already
    /// standing there is flagged captured.
    pub fn place(
        &mut self,
        square: Coord,
        piece: Option<(Color, PieceKind)>,
    ) -> Option<PieceIndex> {
        self.capture(square);
        let (color, kind) = piece?;
        let index = PieceIndex(self.pieces.len());
        self.pieces.push(Piece::new(color, kind, square));
        *self.index_at_mut(square) = Some(index);
        Some(index)
    }
    /// Relocates the piece on `origin`, flagging whatever stands on `destination` captured
    /// regardless of its color. Returns the captured piece's index.
    pub fn move_piece(
        &mut self,
        origin: Coord,
        destination: Coord,
    ) -> Result<Option<PieceIndex>, NoPieceAtSource> {
        let index = self.index_at(origin).ok_or(NoPieceAtSource(origin))?;
        Ok(self.relocate(index, destination))
    }
    fn relocate(&mut self, index: PieceIndex, destination: Coord) -> Option<PieceIndex> {
        if self.pieces[index.0].position == destination {
            return None;
        }
        let captured = self.capture(destination);
        let piece = &mut self.pieces[index.0];
        let origin = piece.position;
        piece.position = destination;
        piece.moved = true;
        *self.index_at_mut(origin) = None;
        *self.index_at_mut(destination) = Some(index);
        captured
    }
    fn capture(&mut self, square: Coord) -> Option<PieceIndex> {
        let index = self.index_at_mut(square).take()?;
        self.pieces[index.0].captured = true;
        Some(index)
    }
    pub fn king_position_of(&self, color: Color) -> Result<Coord, KingNotFound> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(_, piece)| piece.position)
            .ok_or(KingNotFound(color))
    }
    /// Every piece still on the board, in placement order.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceIndex, &Piece)> {
        self.pieces
            .iter()
            .enumerate()
            .filter(|(_, piece)| !piece.captured)
            .map(|(i, piece)| (PieceIndex(i), piece))
    }
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (PieceIndex, &Piece)> {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }
    pub fn captured_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(|piece| piece.captured)
    }
    pub fn snapshot(&self) -> SimpleBoard<Option<Piece>> {
        let mut snapshot = SimpleBoard::default();
        for (_, piece) in self.pieces() {
            snapshot[piece.position] = Some(*piece);
        }
        snapshot
    }
    /// Executes `movement`, compound effects included, and returns what is needed to take
    /// it back with [`Board::unmake`].
    pub fn make(&mut self, movement: Move) -> Result<Undo, NoPieceAtSource> {
        let mut undo = Undo::default();
        match movement {
            Move::Regular {
                origin,
                destination,
            } => {
                let index = self.index_at(origin).ok_or(NoPieceAtSource(origin))?;
                undo.save(index, self[index]);
                if let Some(occupant) = self.index_at(destination) {
                    undo.save(occupant, self[occupant]);
                }
                self.relocate(index, destination);
            }
            Move::Castle(castle_move) => {
                let king = self
                    .index_at(castle_move.king_origin)
                    .ok_or(NoPieceAtSource(castle_move.king_origin))?;
                let rook = self
                    .index_at(castle_move.rook_origin)
                    .ok_or(NoPieceAtSource(castle_move.rook_origin))?;
                undo.save(king, self[king]);
                undo.save(rook, self[rook]);
                self.relocate(king, castle_move.king_destination);
                self.relocate(rook, castle_move.rook_destination);
            }
            Move::EnPassant {
                origin,
                destination,
                captured,
            } => {
                let index = self.index_at(origin).ok_or(NoPieceAtSource(origin))?;
                undo.save(index, self[index]);
                if let Some(captured) = self.index_at(captured) {
                    undo.save(captured, self[captured]);
                }
                self.capture(captured);
                self.relocate(index, destination);
            }
        }
        if cfg!(debug_assertions) {
            self.assert_consistent();
        }
        Ok(undo)
    }
    /// Restores every piece touched by the move `undo` came from, occupancy included.
    pub fn unmake(&mut self, undo: Undo) {
        for (index, _) in undo.saved() {
            let piece = self.pieces[index.0];
            if !piece.captured && self.index_at(piece.position) == Some(index) {
                *self.index_at_mut(piece.position) = None;
            }
        }
        for (index, piece) in undo.saved() {
            self.pieces[index.0] = piece;
            if !piece.captured {
                *self.index_at_mut(piece.position) = Some(index);
            }
        }
        if cfg!(debug_assertions) {
            self.assert_consistent();
        }
    }
    fn assert_consistent(&self) {
        for square in Coord::all() {
            if let Some(index) = self.index_at(square) {
                let piece = self[index];
                assert!(!piece.captured, "captured {piece} still occupies {square}");
                assert_eq!(piece.position, square, "{piece} is indexed on {square}");
            }
        }
        for (index, piece) in self.pieces() {
            assert_eq!(
                self.index_at(piece.position),
                Some(index),
                "{piece} is missing from its square"
            );
        }
    }
}
impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}
impl Index<PieceIndex> for Board {
    type Output = Piece;

    fn index(&self, index: PieceIndex) -> &Self::Output {
        &self.pieces[index.0]
    }
}

/// Pieces as they were before a [`Board::make`]. No move touches more than two pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Undo {
    saved: [Option<(PieceIndex, Piece)>; 2],
}
impl Undo {
    fn save(&mut self, index: PieceIndex, piece: Piece) {
        if let Some(slot) = self.saved.iter_mut().find(|slot| slot.is_none()) {
            *slot = Some((index, piece));
        }
    }
    fn saved(self) -> impl Iterator<Item = (PieceIndex, Piece)> {
        self.saved.into_iter().flatten()
    }
}
