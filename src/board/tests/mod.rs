//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Leaf counts of the legal move tree for reference positions
//! - `castling.rs` - Castling availability and its attacked-square rules
//! - `en_passant.rs` - En passant target lifecycle and captures
//! - `edge_cases.rs` - Pins, double checks, promotions and terminal positions
//! - `proptest.rs` - Property-based tests over random games

mod castling;
mod en_passant;
