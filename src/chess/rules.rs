//! Movement rules of the pieces: the geometry a piece moves by and how
//! occupied squares limit it.
//!
//! There are only three kinds of geometry in standard chess:
//!
//! - [Sliding pieces] (bishop, rook, queen) move any distance along a fixed
//!   set of directions until they hit the edge of the board or another piece.
//! - Stepping pieces (knight, king) jump to a fixed set of offsets exactly
//!   once.
//! - Pawns push forward into empty squares, capture diagonally and make a
//!   double push from their starting rank.
//!
//! The rules produce *pseudo-legal* destinations: checks, pins, castling and
//! en passant depend on the game history and are not considered here.
//!
//! [Sliding pieces]: https://www.chessprogramming.org/Sliding_Pieces

use crate::chess::bitboard::Bitboard;
use crate::chess::board::Board;
use crate::chess::core::{Direction, PieceKind, Player, Rank, Square};

/// (file, rank) increments of a knight jump.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// (file, rank) increments of a king step: one square in any direction.
pub const KING_OFFSETS: [(i8, i8); Direction::ALL.len()] = {
    let mut offsets = [(0, 0); Direction::ALL.len()];
    let mut i = 0;
    while i < Direction::ALL.len() {
        offsets[i] = Direction::ALL[i].delta();
        i += 1;
    }
    offsets
};

/// Movement geometry of a piece kind. Each [`PieceKind`] maps to exactly one
/// rule via [`MovementRule::for_kind`].
///
/// ```
/// use piecemoves::chess::core::{Direction, PieceKind};
/// use piecemoves::chess::rules::MovementRule;
///
/// assert_eq!(
///     MovementRule::for_kind(PieceKind::Rook),
///     MovementRule::Sliding(&Direction::ORTHOGONAL)
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovementRule {
    /// Walks each direction until blocked.
    Sliding(&'static [Direction]),
    /// Applies each (file, rank) offset once.
    Stepping(&'static [(i8, i8)]),
    /// Side-dependent pushes and diagonal captures.
    Pawn,
}

impl MovementRule {
    /// The rule every piece of given kind moves by.
    #[must_use]
    pub const fn for_kind(kind: PieceKind) -> Self {
        match kind {
            PieceKind::King => Self::Stepping(&KING_OFFSETS),
            PieceKind::Queen => Self::Sliding(&Direction::ALL),
            PieceKind::Rook => Self::Sliding(&Direction::ORTHOGONAL),
            PieceKind::Bishop => Self::Sliding(&Direction::DIAGONAL),
            PieceKind::Knight => Self::Stepping(&KNIGHT_OFFSETS),
            PieceKind::Pawn => Self::Pawn,
        }
    }

    /// Destinations of a piece owned by `owner` standing on `from`. Whatever
    /// occupies `from` does not affect the result and `from` is never a
    /// target.
    #[must_use]
    pub fn targets(self, board: &Board, from: Square, owner: Player) -> Bitboard {
        match self {
            Self::Sliding(directions) => slide(board, from, owner, directions),
            Self::Stepping(offsets) => step(board, from, owner, offsets),
            Self::Pawn => pawn(board, from, owner),
        }
    }
}

/// Walks every ray from `from` up to and including the first occupied square.
/// The blocker stays a target only if it belongs to the opponent.
fn slide(board: &Board, from: Square, owner: Player, directions: &[Direction]) -> Bitboard {
    let mut reachable = Bitboard::empty();
    for &direction in directions {
        let mut current = from;
        while let Some(next) = current.shift(direction) {
            reachable |= next;
            if board.at(next).is_some() {
                break;
            }
            current = next;
        }
    }
    reachable - board.occupancy(owner)
}

fn step(board: &Board, from: Square, owner: Player, offsets: &[(i8, i8)]) -> Bitboard {
    let reachable: Bitboard = offsets
        .iter()
        .filter_map(|&(file_delta, rank_delta)| from.offset(file_delta, rank_delta))
        .collect();
    reachable - board.occupancy(owner)
}

fn pawn(board: &Board, from: Square, owner: Player) -> Bitboard {
    let mut targets = Bitboard::empty();
    let forward = owner.push_direction();
    if let Some(single_push) = from.shift(forward) {
        if board.at(single_push).is_none() {
            targets |= single_push;
            // Double push can not jump over a piece: only checked when the
            // single push square is empty.
            if from.rank() == Rank::pawns_starting(owner) {
                if let Some(double_push) = single_push.shift(forward) {
                    if board.at(double_push).is_none() {
                        targets |= double_push;
                    }
                }
            }
        }
    }
    let diagonals: Bitboard = owner
        .pawn_capture_directions()
        .into_iter()
        .filter_map(|diagonal| from.shift(diagonal))
        .collect();
    targets | (diagonals & board.occupancy(owner.opponent()))
}
