#![no_main]
use itertools::Itertools;
use libfuzzer_sys::fuzz_target;
use piecemoves::chess::board::Board;
use piecemoves::chess::core::{PieceKind, Rank};
use piecemoves::chess::movegen::moves_for;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(board) = Board::try_from(input) else {
        return;
    };
    for (square, piece) in board.pieces() {
        let moves = moves_for(&board, square).unwrap();
        assert_eq!(moves.iter().unique().count(), moves.len());
        for m in &moves {
            assert_eq!(m.from(), square);
            if let Some(occupant) = board.at(m.to()) {
                assert_ne!(occupant.owner, piece.owner);
            }
            let promotes =
                piece.kind == PieceKind::Pawn && m.to().rank() == Rank::promotion(piece.owner);
            assert_eq!(m.promotion().is_some(), promotes);
        }
    }
});
