//! [`Bitboard`] is the set of squares movement rules produce.
//!
//! Bitboard utilizes the fact that modern processors operate on 64 bit
//! integers: a set of squares fits into a single register, insertion and
//! membership checks are single bit operations and the set can never contain
//! a square twice, which is exactly what a destination set needs.
//!
//! [Bitboard]: https://www.chessprogramming.org/Bitboards

use std::ops::{BitAnd, BitOr, BitOrAssign, Not, Sub};
use std::{fmt, mem};

use itertools::Itertools;

use crate::chess::core::{Square, BOARD_SIZE, BOARD_WIDTH};

/// Represents a set of squares and provides common operations (e.g. AND, OR,
/// difference) over these sets. Each bit corresponds to one of 64 squares of
/// the chess board.
///
/// Mirroring [`Square`] semantics, the least significant bit corresponds to
/// A1, and the most significant bit - to H8.
///
/// ```
/// use piecemoves::chess::bitboard::Bitboard;
/// use piecemoves::chess::core::Square;
///
/// let squares: Bitboard = [Square::A1, Square::H8, Square::A1].into_iter().collect();
/// assert_eq!(squares.count_ones(), 2);
/// assert!(squares.is_set(Square::H8));
/// assert!(!squares.is_set(Square::E4));
/// ```
///
/// Bitboard is a thin wrapper around [u64].
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bitboard {
    bits: u64,
}

impl Bitboard {
    /// Constructs Bitboard from pre-calculated bits.
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self { bits }
    }

    /// Constructs a bitboard representing empty set of squares.
    #[must_use]
    pub const fn empty() -> Self {
        Self::from_bits(0)
    }

    /// Returns raw bits.
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.bits
    }

    /// Returns true if this bitboard contains given square.
    #[must_use]
    pub const fn is_set(self, square: Square) -> bool {
        (self.bits & (1u64 << square as u8)) != 0
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Number of squares in the set.
    #[must_use]
    pub const fn count_ones(self) -> u32 {
        self.bits.count_ones()
    }

    /// An efficient way to iterate over the set squares.
    #[must_use]
    pub const fn iter(self) -> BitboardIterator {
        BitboardIterator { bits: self.bits }
    }
}

impl fmt::Debug for Bitboard {
    /// Dumps the set as an 8x8 grid, rank 8 on top: '1' for squares in the
    /// set, '.' otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            format!("{:#066b}", self.bits)
                .chars()
                .rev()
                .take(BOARD_SIZE as usize)
                .chunks(BOARD_WIDTH as usize)
                .into_iter()
                .map(|chunk| chunk
                    .map(|ch| match ch {
                        '1' => '1',
                        _ => '.',
                    })
                    .join(SQUARE_SEPARATOR))
                .collect::<Vec<String>>()
                .iter()
                .rev()
                .join(LINE_SEPARATOR)
        )
    }
}

impl BitOr for Bitboard {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.bits.bitor(rhs.bits))
    }
}

impl BitOrAssign for Bitboard {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits.bitor_assign(rhs.bits);
    }
}

impl BitOrAssign<Square> for Bitboard {
    fn bitor_assign(&mut self, square: Square) {
        *self |= Self::from(square);
    }
}

impl BitAnd for Bitboard {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.bits.bitand(rhs.bits))
    }
}

impl Sub for Bitboard {
    type Output = Self;

    /// [Relative component], i.e. Result = LHS \ RHS.
    ///
    /// [Relative component]: https://en.wikipedia.org/wiki/Complement_%28set_theory%29#Relative_complement
    fn sub(self, rhs: Self) -> Self::Output {
        self & !rhs
    }
}

impl Not for Bitboard {
    type Output = Self;

    /// Returns [complement
    /// set](https://en.wikipedia.org/wiki/Complement_%28set_theory%29) of Self,
    /// i.e. flipping the set squares to unset and vice versa.
    fn not(self) -> Self::Output {
        Self::from_bits(!self.bits)
    }
}

impl From<Square> for Bitboard {
    fn from(square: Square) -> Self {
        Self::from_bits(1u64 << square as u8)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<T: IntoIterator<Item = Square>>(squares: T) -> Self {
        let mut result = Self::empty();
        for square in squares {
            result |= square;
        }
        result
    }
}

impl IntoIterator for Bitboard {
    type IntoIter = BitboardIterator;
    type Item = Square;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterates over set squares in a given [Bitboard] from least significant 1
/// bits (LS1B) to most significant 1 bits (MS1B) through implementing
/// [BitScan] forward operation.
///
/// [BitScan]: https://www.chessprogramming.org/BitScan
pub struct BitboardIterator {
    bits: u64,
}

impl Iterator for BitboardIterator {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        // Get the LS1B and consume it from the iterator.
        let next_index = self.bits.trailing_zeros();
        self.bits ^= 1 << next_index;
        // For performance reasons, it's better to convert directly: the
        // conversion is safe because trailing_zeros() will return a number in
        // 0..64 range.
        Some(unsafe { mem::transmute::<u8, Square>(next_index as u8) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bits.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BitboardIterator {}

const LINE_SEPARATOR: &str = "\n";
const SQUARE_SEPARATOR: &str = " ";

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::Bitboard;
    use crate::chess::core::Square;

    #[test]
    fn basics() {
        assert_eq!(std::mem::size_of::<Bitboard>(), 8);
        assert_eq!((!Bitboard::empty()).bits, u64::MAX);
        assert_eq!(Bitboard::empty().bits, u64::MIN);
        assert!(Bitboard::empty().is_empty());

        assert_eq!(Bitboard::from(Square::A1).bits, 1);
        assert_eq!(Bitboard::from(Square::B1).bits, 2);
        assert_eq!(Bitboard::from(Square::D1).bits, 8);
        assert_eq!(Bitboard::from(Square::H8).bits, 1u64 << 63);

        assert_eq!(
            Bitboard::from(Square::D1) | Bitboard::from(Square::B1),
            Bitboard::from_bits(0b10 | 0b1000)
        );
    }

    #[test]
    fn set_ops() {
        let bitboard: Bitboard = [Square::A1, Square::B1, Square::C1].into_iter().collect();
        let other: Bitboard = [Square::C1, Square::H8].into_iter().collect();

        assert_eq!((bitboard & other).iter().collect::<Vec<_>>(), vec![Square::C1]);
        assert_eq!(
            (bitboard - other).iter().collect::<Vec<_>>(),
            vec![Square::A1, Square::B1]
        );
        assert_eq!((bitboard | other).count_ones(), 4);
        assert_eq!((!bitboard).count_ones(), 61);
        assert_eq!(bitboard - bitboard, Bitboard::empty());

        let mut accumulated = Bitboard::empty();
        accumulated |= Square::E4;
        accumulated |= Square::E4;
        assert_eq!(accumulated.count_ones(), 1);
        assert!(accumulated.is_set(Square::E4));
    }

    #[test]
    fn bitboard_iterator() {
        assert_eq!(Bitboard::empty().iter().next(), None);
        assert_eq!((!Bitboard::empty()).iter().len(), 64);
        assert_eq!(
            (!Bitboard::empty()).iter().collect::<Vec<_>>(),
            Square::iter().collect::<Vec<_>>()
        );
        let squares = [Square::H8, Square::A1, Square::E4, Square::D5];
        let bitboard: Bitboard = squares.into_iter().collect();
        assert_eq!(
            bitboard.into_iter().collect::<Vec<_>>(),
            vec![Square::A1, Square::E4, Square::D5, Square::H8]
        );
    }

    #[test]
    fn bitboard_dump() {
        let bitboard: Bitboard = [Square::A1, Square::B2, Square::H8].into_iter().collect();
        assert_eq!(
            format!("{bitboard:?}"),
            ". . . . . . . 1\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . 1 . . . . . .\n\
             1 . . . . . . ."
        );
    }
}
