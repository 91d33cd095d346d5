//! Rules core for two-player chess: board state, pseudo-legal and legal move generation,
//! check / checkmate / stalemate detection, and turn-ordered move commitment.
//!
//! Castling, en passant and the draw rules beyond stalemate are not modelled.

pub mod chess;
pub mod config;
pub mod core;
pub mod error;
pub mod game;

pub use chess::board::Board;
pub use chess::mv::{Move, MoveSet};
pub use chess::piece::{Piece, PieceKind, Team, PROMOTION_KINDS};
pub use config::GameConfig;
pub use crate::core::position::{Direction, Position};
pub use error::{ChessError, ConfigError, IllegalMoveReason};
pub use game::{Game, GameStatus};
