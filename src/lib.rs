//! Pseudo-legal move generation for chess pieces: given a board snapshot and a
//! square, compute every move the piece standing there can make according to
//! its movement pattern.
//!
//! ```
//! use piecemoves::{moves_for, Board, Square};
//!
//! let board = Board::from_placement("8/8/8/8/8/8/8/N7").unwrap();
//! assert_eq!(moves_for(&board, Square::A1).unwrap().len(), 2);
//! ```
//!
//! Checking whether a move leaves the king in check, castling, en passant and
//! the rest of the game state are out of scope: this crate is the building
//! block such a layer queries.

// Rustc lints.
#![warn(
    absolute_paths_not_starting_with_crate,
    keyword_idents,
    macro_use_extern_crate,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_extern_crates,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]
// Rustdoc lints.
#![warn(
    rustdoc::private_doc_tests,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::bare_urls
)]
// Clippy lints.
#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
// Move generation is on the hot path of any engine built on top.
#![deny(clippy::perf)]

pub mod chess;

pub use chess::bitboard::Bitboard;
pub use chess::board::Board;
pub use chess::core::{Move, Piece, PieceKind, Player, Promotion, Square};
pub use chess::movegen::{moves_for, moves_for_player, MoveList};
pub use chess::rules::MovementRule;
