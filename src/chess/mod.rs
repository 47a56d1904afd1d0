//! Implementation of chess pieces, the board and the rules of their movement.

pub mod bitboard;
pub mod board;
pub mod core;
pub mod movegen;
pub mod rules;
