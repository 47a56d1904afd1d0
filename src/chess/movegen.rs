//! Move generation: dispatches the piece standing on a square to its
//! [`MovementRule`] and turns the destinations into [`Move`]s.
//!
//! The generated moves are [pseudo-legal]: each one follows the movement
//! pattern of the piece, but the generator does not check whether the move
//! leaves the king of the moving player in check. Castling and en passant
//! require knowledge of the game history and belong to the game state layer.
//!
//! Generation is a pure function of the [`Board`] snapshot: nothing is cached
//! between calls and the board is never modified.
//!
//! [pseudo-legal]: https://www.chessprogramming.org/Pseudo-Legal_Move

use anyhow::bail;
use arrayvec::ArrayVec;
use log::{debug, trace};

use crate::chess::bitboard::Bitboard;
use crate::chess::board::Board;
use crate::chess::core::{Move, Piece, PieceKind, Player, Promotion, Rank, Square};
use crate::chess::rules::MovementRule;

/// Upper bound of moves a single piece can have: a queen reaches at most 27
/// squares, a pawn has at most 3 destinations with 4 promotions each.
pub const MAX_PIECE_MOVES: usize = 32;

/// Moves of a single piece. They live on the stack: generation never
/// allocates.
pub type MoveList = ArrayVec<Move, MAX_PIECE_MOVES>;

/// Produces the pseudo-legal moves of the piece standing on `square`.
///
/// A pawn move landing on the last rank is expanded into four moves, one for
/// each [`Promotion`]. The moves do not come in any particular order and never
/// repeat.
///
/// ```
/// use piecemoves::chess::board::Board;
/// use piecemoves::chess::core::Square;
/// use piecemoves::chess::movegen::moves_for;
///
/// let moves = moves_for(&Board::starting(), Square::G1).unwrap();
/// let mut moves: Vec<String> = moves.iter().map(ToString::to_string).collect();
/// moves.sort();
/// assert_eq!(moves, vec!["g1f3", "g1h3"]);
///
/// assert!(moves_for(&Board::starting(), Square::E4).is_err());
/// ```
///
/// # Errors
///
/// Returns [`anyhow::Error`] if `square` is empty: there is no piece to
/// generate moves for.
pub fn moves_for(board: &Board, square: Square) -> anyhow::Result<MoveList> {
    let piece = occupant(board, square)?;
    let moves = piece.moves(board, square);
    trace!("{piece} on {square}: {} moves", moves.len());
    Ok(moves)
}

/// Squares the piece standing on `square` can move to, before pawn moves are
/// expanded into promotions.
///
/// # Errors
///
/// Returns [`anyhow::Error`] if `square` is empty.
pub fn targets(board: &Board, square: Square) -> anyhow::Result<Bitboard> {
    Ok(occupant(board, square)?.targets(board, square))
}

/// Produces the pseudo-legal moves of every piece `player` has on the board.
/// Pieces are visited in square index order (A1, B1, ..., H8).
#[must_use]
pub fn moves_for_player(board: &Board, player: Player) -> Vec<Move> {
    let moves: Vec<Move> = board
        .pieces()
        .filter(|(_, piece)| piece.owner == player)
        .flat_map(|(square, piece)| piece.moves(board, square))
        .collect();
    trace!("{player} has {} moves", moves.len());
    moves
}

fn occupant(board: &Board, square: Square) -> anyhow::Result<Piece> {
    match board.at(square) {
        Some(piece) => Ok(piece),
        None => {
            debug!("move generation requested for empty square {square}");
            bail!("no piece on {square}")
        },
    }
}

impl Piece {
    /// Destinations of this piece if it stood on `from`.
    #[must_use]
    pub fn targets(self, board: &Board, from: Square) -> Bitboard {
        MovementRule::for_kind(self.kind).targets(board, from, self.owner)
    }

    /// Pseudo-legal moves of this piece if it stood on `from`. Unlike
    /// [`moves_for`], the board is not required to actually hold the piece on
    /// `from`.
    #[must_use]
    pub fn moves(self, board: &Board, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        for to in self.targets(board, from) {
            if self.kind == PieceKind::Pawn && to.rank() == Rank::promotion(self.owner) {
                moves.extend(
                    Promotion::ALL
                        .into_iter()
                        .map(|promotion| Move::new(from, to, Some(promotion))),
                );
            } else {
                moves.push(Move::new(from, to, None));
            }
        }
        moves
    }
}
