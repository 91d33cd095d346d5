//! Error types for chess_core

use thiserror::Error;

use crate::chess::mv::Move;
use crate::core::position::Position;

/// Why [`crate::game::Game::make_move`] turned a move down.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    #[error("no piece on the start square")]
    NoPiece,

    #[error("the piece belongs to the side not on move")]
    WrongTurn,

    #[error("not among the legal moves of that piece")]
    NotLegal,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    #[error("illegal move {mv}: {reason}")]
    IllegalMove {
        mv: Move,
        reason: IllegalMoveReason,
    },

    #[error("position {0} is off the board")]
    OffBoard(Position),

    #[error("board text, line {line}: {reason}")]
    BoardParse { line: usize, reason: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("reading config failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("config YAML is invalid: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
