use std::fmt::Write as _;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use rustc_hash::FxHashSet;

use crate::{
    board_display::BoardDisplay,
    color::Color,
    coord::Coord,
    end_state::EndState,
    piece::PieceKind,
    rules::Rules,
};

impl From<chess::Square> for Coord {
    fn from(value: chess::Square) -> Self {
        Coord::from_indices(
            value.get_file().to_index().try_into().unwrap(),
            value.get_rank().to_index().try_into().unwrap(),
        )
        .unwrap()
    }
}
fn fen(rules: &Rules) -> String {
    let board = rules.board();
    let mut fen = String::new();
    for rank in (0..8).rev() {
        let mut empty = 0;
        for file in 0..8 {
            match board.piece_at(Coord::from_indices(file, rank).unwrap()) {
                Some(piece) => {
                    if empty > 0 {
                        write!(fen, "{empty}").unwrap();
                        empty = 0;
                    }
                    fen.push(piece.letter());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            write!(fen, "{empty}").unwrap();
        }
        if rank > 0 {
            fen.push('/');
        }
    }
    write!(fen, " {} ", rules.turn().lowercase()).unwrap();

    let unmoved = |file, rank, kind| {
        board
            .piece_at(Coord::from_indices(file, rank).unwrap())
            .is_some_and(|piece| piece.kind == kind && !piece.moved)
    };
    let mut castling = String::new();
    for (color, rook_file, letter) in [
        (Color::White, 7, 'K'),
        (Color::White, 0, 'Q'),
        (Color::Black, 7, 'k'),
        (Color::Black, 0, 'q'),
    ] {
        let rank = color.home_rank();
        if unmoved(4, rank, PieceKind::King) && unmoved(rook_file, rank, PieceKind::Rook) {
            castling.push(letter);
        }
    }
    if castling.is_empty() {
        castling.push('-');
    }
    fen.push_str(&castling);

    let en_passant = rules.history().previous_move().filter(|previous| {
        let advance = previous.origin.distance_from(previous.destination);
        advance.file == 0
            && advance.rank.abs() == 2
            && board
                .piece_at(previous.destination)
                .is_some_and(|piece| piece.kind == PieceKind::Pawn)
    });
    match en_passant {
        Some(previous) => {
            let skipped = previous
                .origin
                .move_by(previous.origin.distance_from(previous.destination).as_unit())
                .unwrap();
            write!(fen, " {skipped}").unwrap();
        }
        None => fen.push_str(" -"),
    }
    fen.push_str(" 0 1");
    fen
}
fn legal_moves(rules: &mut Rules) -> FxHashSet<(Coord, Coord)> {
    let squares: Vec<_> = rules
        .board()
        .pieces_of(rules.turn())
        .map(|(_, piece)| piece.position)
        .collect();
    let mut moves = FxHashSet::default();
    for origin in squares {
        for destination in rules.possible_moves_for(origin).unwrap() {
            moves.insert((origin, destination));
        }
    }
    moves
}
#[test]
fn fuzz() {
    const PLIES: u32 = 3000;
    const PLAYOUT_LENGTH: u32 = 200;

    let mut rules = Rules::default();
    let mut rng = SmallRng::seed_from_u64(0x00c0_ffee);
    let mut playout_ply = 0;
    for _ in 0..PLIES {
        let moves = legal_moves(&mut rules);
        let fen = fen(&rules);
        let reference: chess::Board = fen.parse().unwrap();
        let reference_moves: FxHashSet<(Coord, Coord)> = chess::MoveGen::new_legal(&reference)
            .map(|movement| (movement.get_source().into(), movement.get_dest().into()))
            .collect();
        if let Some((origin, destination)) = moves.difference(&reference_moves).next() {
            panic!(
                "found {origin}{destination} but it's not a legal move\n{}\n{fen}",
                BoardDisplay::new(rules.board()),
            );
        }
        if let Some((origin, destination)) = reference_moves.difference(&moves).next() {
            panic!(
                "{origin}{destination} not found\n{}\n{fen}",
                BoardDisplay::new(rules.board()),
            );
        }
        let expected = match reference.status() {
            chess::BoardStatus::Ongoing => None,
            chess::BoardStatus::Stalemate => Some(EndState::Draw),
            chess::BoardStatus::Checkmate => Some(EndState::Win(!rules.turn())),
        };
        assert_eq!(rules.status().unwrap(), expected, "{fen}");

        if moves.is_empty() || playout_ply >= PLAYOUT_LENGTH {
            rules = Rules::default();
            playout_ply = 0;
            continue;
        }
        let mut moves: Box<[_]> = moves.into_iter().collect();
        moves.sort_unstable_by_key(|(origin, destination)| {
            (origin.file(), origin.rank(), destination.file(), destination.rank())
        });
        let (origin, destination) = moves[rng.random_range(0..moves.len())];
        let pawn = rules.board().piece_at(origin).unwrap().kind == PieceKind::Pawn;
        let movement = rules.checked_move(origin, destination).unwrap();
        rules.apply(movement).unwrap();
        playout_ply += 1;
        if pawn && (destination.rank() == 0 || destination.rank() == 7) {
            rules = Rules::default();
            playout_ply = 0;
        }
    }
}
