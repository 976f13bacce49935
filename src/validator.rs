use crate::{
    board::Board,
    color::Color,
    coord::{Coord, Vector},
    history::MoveHistory,
    piece::{Piece, PieceKind},
};

/// A movement family. Each piece kind moves along one or more of them; a move is
/// pseudo-legal when any of its families accepts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Validator {
    FileLine,
    RankLine,
    Diagonal,
    KnightJump,
    KingStep,
    Pawn,
}
impl Validator {
    pub fn for_kind(kind: PieceKind) -> &'static [Self] {
        match kind {
            PieceKind::Pawn => &[Validator::Pawn],
            PieceKind::Knight => &[Validator::KnightJump],
            PieceKind::Bishop => &[Validator::Diagonal],
            PieceKind::Rook => &[Validator::FileLine, Validator::RankLine],
            PieceKind::Queen => &[
                Validator::FileLine,
                Validator::RankLine,
                Validator::Diagonal,
            ],
            PieceKind::King => &[Validator::KingStep],
        }
    }
    /// Whether `piece` standing where it stands attacks `target`. What stands on `target`
    /// doesn't matter. Pawns only attack diagonally.
    pub fn attacks(self, board: &Board, piece: &Piece, target: Coord) -> bool {
        let distance = piece.position.distance_from(target);
        match self {
            Validator::FileLine => {
                distance.file == 0 && distance.rank != 0 && path_is_clear(board, piece, target)
            }
            Validator::RankLine => {
                distance.rank == 0 && distance.file != 0 && path_is_clear(board, piece, target)
            }
            Validator::Diagonal => distance.is_diagonal() && path_is_clear(board, piece, target),
            Validator::KnightJump => distance.is_knight_move(),
            Validator::KingStep => distance.is_king_move(),
            Validator::Pawn => {
                distance.file.abs() == 1 && distance.rank == piece.color.forward()
            }
        }
    }
    /// Pseudo-legality of moving `piece` to `target` within this family.
    pub fn validate_move(
        self,
        board: &Board,
        history: &MoveHistory,
        piece: &Piece,
        target: Coord,
    ) -> bool {
        if !piece.has_shape(target) || is_own(board, piece.color, target) {
            return false;
        }
        match self {
            Validator::Pawn => validate_pawn_move(board, history, piece, target),
            _ => self.attacks(board, piece, target),
        }
    }
    /// Pseudo-legal destinations of `piece` within this family, in a fixed order.
    pub fn possible_moves(
        self,
        board: &Board,
        history: &MoveHistory,
        piece: &Piece,
    ) -> Vec<Coord> {
        self.fan(piece)
            .filter(|target| self.validate_move(board, history, piece, *target))
            .collect()
    }
    fn fan(self, piece: &Piece) -> Box<dyn Iterator<Item = Coord>> {
        let origin = piece.position;
        let lines = move |directions: &'static [Vector]| -> Box<dyn Iterator<Item = Coord>> {
            Box::new(
                directions
                    .iter()
                    .flat_map(move |direction| origin.line(*direction)),
            )
        };
        let offsets = move |offsets: &'static [Vector]| -> Box<dyn Iterator<Item = Coord>> {
            Box::new(
                offsets
                    .iter()
                    .filter_map(move |offset| origin.move_by(*offset)),
            )
        };
        match self {
            Validator::FileLine => lines(&Vector::FILE_DIRECTIONS),
            Validator::RankLine => lines(&Vector::RANK_DIRECTIONS),
            Validator::Diagonal => lines(&Vector::DIAGONAL_DIRECTIONS),
            Validator::KnightJump => offsets(&Vector::KNIGHT_MOVES),
            Validator::KingStep => offsets(&Vector::KING_MOVES),
            Validator::Pawn => {
                let forward = piece.color.forward();
                Box::new(
                    [
                        Vector {
                            file: 0,
                            rank: forward,
                        },
                        Vector {
                            file: 0,
                            rank: forward * 2,
                        },
                        Vector {
                            file: -1,
                            rank: forward,
                        },
                        Vector {
                            file: 1,
                            rank: forward,
                        },
                    ]
                    .into_iter()
                    .filter_map(move |offset| origin.move_by(offset)),
                )
            }
        }
    }
}
fn is_own(board: &Board, color: Color, target: Coord) -> bool {
    board
        .piece_at(target)
        .is_some_and(|occupant| occupant.color == color)
}
fn path_is_clear(board: &Board, piece: &Piece, target: Coord) -> bool {
    piece
        .position
        .between(target)
        .is_some_and(|mut squares| squares.all(|square| board.is_empty(square)))
}
fn validate_pawn_move(
    board: &Board,
    history: &MoveHistory,
    piece: &Piece,
    target: Coord,
) -> bool {
    if piece.position.file() == target.file() {
        board.is_empty(target) && path_is_clear(board, piece, target)
    } else {
        board
            .piece_at(target)
            .is_some_and(|occupant| occupant.color != piece.color)
            || en_passant_capture(board, history, piece, target).is_some()
    }
}
/// Square of the pawn taken if `piece` moving to `target` is an en passant capture.
///
/// The mover has to be a pawn on its fifth rank, and the last recorded move has to be an
/// opposing pawn advancing two squares to land right beside it on the file of `target`.
pub fn en_passant_capture(
    board: &Board,
    history: &MoveHistory,
    piece: &Piece,
    target: Coord,
) -> Option<Coord> {
    if piece.kind != PieceKind::Pawn || piece.position.rank() != piece.color.en_passant_rank() {
        return None;
    }
    let distance = piece.position.distance_from(target);
    if distance.file.abs() != 1 || distance.rank != piece.color.forward() || !board.is_empty(target)
    {
        return None;
    }
    let previous = history.previous_move()?;
    let advanced = board.piece_at(previous.destination)?;
    let advance = previous.origin.distance_from(previous.destination);
    let captured = Coord::from_indices(target.file(), piece.position.rank())?;
    (advanced.kind == PieceKind::Pawn
        && advanced.color != piece.color
        && advance.file == 0
        && advance.rank.abs() == 2
        && previous.destination == captured)
        .then_some(captured)
}
#[cfg(test)]
mod test {
    use crate::{
        board::Board,
        color::Color,
        coord,
        coord::Coord,
        history::MoveHistory,
        piece::PieceKind,
        test_utils::diagram,
        validator::{Validator, en_passant_capture},
    };

    fn pseudo_legal(board: &Board, history: &MoveHistory, square: Coord) -> Vec<Coord> {
        let piece = board.piece_at(square).unwrap();
        let mut moves: Vec<_> = Validator::for_kind(piece.kind)
            .iter()
            .flat_map(|validator| validator.possible_moves(board, history, piece))
            .collect();
        moves.sort_by_key(|square| (square.file(), square.rank()));
        moves
    }

    #[test]
    fn starting_knight() {
        let board = Board::starting_position();
        let history = MoveHistory::default();
        assert_eq!(
            pseudo_legal(&board, &history, coord!("g1")),
            [coord!("f3"), coord!("h3")]
        );
        assert!(pseudo_legal(&board, &history, coord!("a1")).is_empty());
        assert!(pseudo_legal(&board, &history, coord!("f1")).is_empty());
    }
    #[test]
    fn pawn_pushes() {
        let board = Board::starting_position();
        let history = MoveHistory::default();
        assert_eq!(
            pseudo_legal(&board, &history, coord!("e2")),
            [coord!("e3"), coord!("e4")]
        );
        assert_eq!(
            pseudo_legal(&board, &history, coord!("d7")),
            [coord!("d5"), coord!("d6")]
        );
    }
    #[test]
    fn pawn_blocked_straight_captures_diagonally() {
        let board = diagram([
            "....k...", //
            "........", //
            "........", //
            "........", //
            "........", //
            "...pn...", //
            "....P...", //
            "....K...", //
        ]);
        let history = MoveHistory::default();
        assert_eq!(pseudo_legal(&board, &history, coord!("e2")), [coord!("d3")]);

        let board = diagram([
            "....k...", //
            "........", //
            "........", //
            "........", //
            "....n...", //
            "........", //
            "....P...", //
            "....K...", //
        ]);
        assert_eq!(pseudo_legal(&board, &history, coord!("e2")), [coord!("e3")]);
    }
    #[test]
    fn sliders_are_blocked_by_either_color() {
        let board = diagram([
            "....k...", //
            "........", //
            "........", //
            "...p....", //
            "........", //
            ".N.R....", //
            "........", //
            "....K...", //
        ]);
        let history = MoveHistory::default();
        let rook = board.piece_at(coord!("d3")).unwrap();
        for validator in Validator::for_kind(PieceKind::Rook) {
            assert!(!validator.validate_move(&board, &history, rook, coord!("a3")));
            assert!(!validator.validate_move(&board, &history, rook, coord!("b3")));
            assert!(!validator.validate_move(&board, &history, rook, coord!("d6")));
        }
        assert_eq!(
            pseudo_legal(&board, &history, coord!("d3")),
            [
                coord!("c3"),
                coord!("d1"),
                coord!("d2"),
                coord!("d4"),
                coord!("d5"),
                coord!("e3"),
                coord!("f3"),
                coord!("g3"),
                coord!("h3"),
            ]
        );
    }
    #[test]
    fn queen_combines_families() {
        let board = diagram([
            "k.......", //
            "........", //
            "........", //
            "........", //
            "........", //
            "........", //
            "........", //
            "Q......K", //
        ]);
        let history = MoveHistory::default();
        assert_eq!(pseudo_legal(&board, &history, coord!("a1")).len(), 7 + 6 + 7);
    }
    #[test]
    fn own_pieces_are_never_targets() {
        let board = Board::starting_position();
        let history = MoveHistory::default();
        for (_, piece) in board.pieces() {
            for target in pseudo_legal(&board, &history, piece.position) {
                if let Some(occupant) = board.piece_at(target) {
                    assert_ne!(occupant.color, piece.color);
                }
            }
        }
    }
    #[test]
    fn pawn_attacks_diagonals_only() {
        let board = Board::starting_position();
        let pawn = board.piece_at(coord!("e2")).unwrap();
        assert!(Validator::Pawn.attacks(&board, pawn, coord!("d3")));
        assert!(Validator::Pawn.attacks(&board, pawn, coord!("f3")));
        assert!(!Validator::Pawn.attacks(&board, pawn, coord!("e3")));
        assert!(!Validator::Pawn.attacks(&board, pawn, coord!("e4")));
    }
    #[test]
    fn en_passant_requires_previous_double_advance() {
        let mut board = diagram([
            "....k...", //
            ".p......", //
            "........", //
            "P.......", //
            "........", //
            "........", //
            "........", //
            "....K...", //
        ]);
        board.move_piece(coord!("b7"), coord!("b5")).unwrap();
        let mut history = MoveHistory::new(Color::Black);
        history.record(coord!("b7"), coord!("b5"));
        let pawn = board.piece_at(coord!("a5")).unwrap();
        assert_eq!(
            en_passant_capture(&board, &history, pawn, coord!("b6")),
            Some(coord!("b5"))
        );
        assert_eq!(
            pseudo_legal(&board, &history, coord!("a5")),
            [coord!("a6"), coord!("b6")]
        );

        history.record(coord!("e1"), coord!("e2"));
        history.record(coord!("e8"), coord!("e7"));
        assert_eq!(en_passant_capture(&board, &history, pawn, coord!("b6")), None);
        assert_eq!(pseudo_legal(&board, &history, coord!("a5")), [coord!("a6")]);
    }
    #[test]
    fn single_steps_do_not_allow_en_passant() {
        let mut board = diagram([
            "....k...", //
            "........", //
            ".p......", //
            "P.......", //
            "........", //
            "........", //
            "........", //
            "....K...", //
        ]);
        board.move_piece(coord!("b6"), coord!("b5")).unwrap();
        let mut history = MoveHistory::new(Color::Black);
        history.record(coord!("b6"), coord!("b5"));
        let pawn = board.piece_at(coord!("a5")).unwrap();
        assert_eq!(en_passant_capture(&board, &history, pawn, coord!("b6")), None);
    }
}
