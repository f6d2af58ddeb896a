//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generation counts against reference positions
//! - `edge_cases.rs` - Special positions and moves
//! - `proptest.rs` - Property-based tests over random legal play

mod perft;
mod proptest;
