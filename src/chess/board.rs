//! Square-centric [`Board`]: a snapshot of which piece stands on which square.
//!
//! Move generation only ever reads the board, hence a simple lookup table
//! (one optional piece per square) is all it needs. Boards are cheap to copy
//! and are built either square-by-square via [`Board::with`] or from the piece
//! placement part of [Forsyth-Edwards Notation] via [`Board::from_placement`].
//!
//! [Forsyth-Edwards Notation]: https://www.chessprogramming.org/Forsyth-Edwards_Notation

use std::fmt::{self, Write};

use anyhow::{bail, Context};
use log::trace;
use strum::IntoEnumIterator;

use crate::chess::bitboard::Bitboard;
use crate::chess::core::{File, Piece, PieceKind, Player, Rank, Square, BOARD_SIZE, BOARD_WIDTH};

/// Maps every square to the piece occupying it, if any. A square can hold at
/// most one piece.
///
/// ```
/// use piecemoves::chess::board::Board;
/// use piecemoves::chess::core::{Piece, PieceKind, Player, Square};
///
/// let board = Board::empty().with(Square::E4, Piece::new(Player::White, PieceKind::Knight));
/// assert_eq!(board.to_string(), "8/8/8/8/4N3/8/8/8");
/// assert_eq!(board.at(Square::E4), Some(Piece::new(Player::White, PieceKind::Knight)));
/// assert_eq!(board.at(Square::E5), None);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; BOARD_SIZE as usize],
}

impl Board {
    /// Creates a board without any pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            squares: [None; BOARD_SIZE as usize],
        }
    }

    /// Creates the starting position of the standard chess variant.
    ///
    /// ```
    /// use piecemoves::chess::board::Board;
    ///
    /// assert_eq!(
    ///     Board::starting().to_string(),
    ///     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
    /// );
    /// ```
    #[must_use]
    pub fn starting() -> Self {
        const BACKRANK: [PieceKind; BOARD_WIDTH as usize] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        let mut result = Self::empty();
        for player in [Player::White, Player::Black] {
            for (file, kind) in File::iter().zip(BACKRANK) {
                result = result
                    .with(
                        Square::new(file, Rank::backrank(player)),
                        Piece::new(player, kind),
                    )
                    .with(
                        Square::new(file, Rank::pawns_starting(player)),
                        Piece::new(player, PieceKind::Pawn),
                    );
            }
        }
        result
    }

    /// Returns a copy of the board with `piece` placed on `square`, replacing
    /// whatever occupied it before.
    #[must_use]
    pub fn with(mut self, square: Square, piece: Piece) -> Self {
        self.squares[square as usize] = Some(piece);
        self
    }

    /// Returns a copy of the board with `square` emptied.
    #[must_use]
    pub fn without(mut self, square: Square) -> Self {
        self.squares[square as usize] = None;
        self
    }

    /// The occupant of given square, if any.
    #[must_use]
    pub const fn at(&self, square: Square) -> Option<Piece> {
        self.squares[square as usize]
    }

    /// Iterates over occupied squares in index order (A1, B1, ..., H8).
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(|square| self.at(square).map(|piece| (square, piece)))
    }

    /// Squares occupied by the pieces of given player.
    #[must_use]
    pub fn occupancy(&self, player: Player) -> Bitboard {
        self.pieces()
            .filter(|(_, piece)| piece.owner == player)
            .map(|(square, _)| square)
            .collect()
    }

    /// Parses the piece placement part of FEN: ranks from 8 to 1 separated by
    /// '/', digits for runs of empty squares and piece symbols (uppercase for
    /// White) for occupied ones.
    ///
    /// A full FEN line is accepted too: everything after the first space
    /// (side to move, castling rights, etc) belongs to the game state and is
    /// ignored here.
    ///
    /// # Errors
    ///
    /// Returns [`anyhow::Error`] if the placement does not describe exactly 8
    /// ranks of exactly 8 squares or contains unknown symbols.
    pub fn from_placement(input: &str) -> anyhow::Result<Self> {
        let placement = input.split_once(' ').map_or(input, |(placement, _)| placement);
        if placement.is_empty() {
            bail!("incorrect placement: empty input");
        }
        let mut result = Self::empty();
        let mut rank_id = BOARD_WIDTH;
        for rank_fen in placement.split('/') {
            if rank_id == 0 {
                bail!("incorrect placement: expected {BOARD_WIDTH} ranks, got {placement}");
            }
            rank_id -= 1;
            let rank = Rank::try_from(rank_id)?;
            let mut file: u8 = 0;
            for symbol in rank_fen.chars() {
                if file >= BOARD_WIDTH {
                    bail!("incorrect placement: rank {rank_fen} is longer than {BOARD_WIDTH} squares");
                }
                match symbol {
                    '0' => bail!("incorrect placement: increment can not be 0"),
                    '1'..='8' => {
                        file += symbol as u8 - b'0';
                        continue;
                    },
                    _ => (),
                }
                let piece = Piece::try_from(symbol)
                    .with_context(|| format!("incorrect placement: {placement}"))?;
                result = result.with(Square::new(File::try_from(file)?, rank), piece);
                file += 1;
            }
            if file != BOARD_WIDTH {
                bail!(
                    "incorrect placement: rank size should be exactly {BOARD_WIDTH}, got {rank_fen} of length {file}"
                );
            }
        }
        if rank_id != 0 {
            bail!("incorrect placement: there should be {BOARD_WIDTH} ranks, got {placement}");
        }
        trace!("parsed board {result}");
        Ok(result)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl TryFrom<&str> for Board {
    type Error = anyhow::Error;

    /// Trims the input and parses it via [`Board::from_placement`].
    fn try_from(input: &str) -> anyhow::Result<Self> {
        Self::from_placement(input.trim())
    }
}

impl fmt::Display for Board {
    /// Prints board representation in FEN piece placement format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            let mut empty_squares = 0i32;
            for file in File::iter() {
                if let Some(piece) = self.at(Square::new(file, rank)) {
                    if empty_squares != 0 {
                        write!(f, "{empty_squares}")?;
                        empty_squares = 0;
                    }
                    write!(f, "{piece}")?;
                } else {
                    empty_squares += 1;
                }
            }
            if empty_squares != 0 {
                write!(f, "{empty_squares}")?;
            }
            if rank != Rank::One {
                const RANK_SEPARATOR: char = '/';
                f.write_char(RANK_SEPARATOR)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    /// Dumps the board in a simple format ('.' for empty square, FEN algebraic
    /// symbol for piece) a-la Stockfish "debug" command in UCI mode.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            for file in File::iter() {
                match self.at(Square::new(file, rank)) {
                    Some(piece) => write!(f, "{piece}"),
                    None => f.write_char('.'),
                }?;
                if file != File::H {
                    f.write_str(SQUARE_SEPARATOR)?;
                }
            }
            if rank != Rank::One {
                f.write_str(LINE_SEPARATOR)?;
            }
        }
        Ok(())
    }
}

const LINE_SEPARATOR: &str = "\n";
const SQUARE_SEPARATOR: &str = " ";
