//! Pieces, boards and the rules that tie them together.

pub mod board;
pub mod movegen;
pub mod mv;
pub mod piece;
pub mod rules;
