use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::chess::board::Board;
use crate::chess::mv::{Move, MoveSet};
use crate::chess::piece::Team;
use crate::chess::rules;
use crate::config::GameConfig;
use crate::core::position::Position;
use crate::error::{ChessError, IllegalMoveReason};

/// Outcome of the position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Check(Team),
    Checkmate(Team),
    Stalemate(Team),
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate(_) | GameStatus::Stalemate(_))
    }
}

/// A game in progress: the live board plus the side to move.
///
/// Legality is recomputed from the board on every query; nothing is cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    turn: Team,
    board: Board,
    #[serde(default)]
    config: GameConfig,
}

impl Game {
    /// Standard starting position, White to move.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            turn: Team::White,
            board: Board::standard(),
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn team_turn(&self) -> Team {
        self.turn
    }

    pub fn set_team_turn(&mut self, team: Team) {
        self.turn = team;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replace the live board wholesale. The side to move is left as is.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    /// Legal moves for the piece on `start`; `None` if the square is empty.
    pub fn legal_moves(&self, start: Position) -> Option<MoveSet> {
        rules::legal_moves_from(&self.board, start)
    }

    /// Play `mv` on the live board and pass the turn.
    ///
    /// On error the game is left untouched.
    pub fn make_move(&mut self, mv: Move) -> Result<(), ChessError> {
        let reject = |reason: IllegalMoveReason| {
            debug!("rejected {mv}: {reason}");
            Err(ChessError::IllegalMove { mv, reason })
        };

        let Some(piece) = self.board.piece_at(mv.start()) else {
            return reject(IllegalMoveReason::NoPiece);
        };
        if self.config.enforce_turn_order && piece.team() != self.turn {
            return reject(IllegalMoveReason::WrongTurn);
        }
        let legal = self.legal_moves(mv.start()).unwrap_or_default();
        if !legal.contains(&mv) {
            return reject(IllegalMoveReason::NotLegal);
        }

        self.board.apply_move(mv);
        self.turn = self.turn.other();
        debug!("{} played {mv}; {} to move", piece.team(), self.turn);
        Ok(())
    }

    pub fn is_in_check(&self, team: Team) -> bool {
        rules::is_in_check(&self.board, team)
    }

    pub fn is_in_checkmate(&self, team: Team) -> bool {
        rules::is_checkmate(&self.board, team)
    }

    pub fn is_in_stalemate(&self, team: Team) -> bool {
        rules::is_stalemate(&self.board, team)
    }

    /// Status for the side to move.
    pub fn status(&self) -> GameStatus {
        let team = self.turn;
        let in_check = self.is_in_check(team);
        let can_move = rules::has_legal_move(&self.board, team);
        match (in_check, can_move) {
            (true, false) => GameStatus::Checkmate(team),
            (false, false) => GameStatus::Stalemate(team),
            (true, true) => GameStatus::Check(team),
            (false, true) => GameStatus::InProgress,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Games are equal when the side to move and the board agree; config is not compared.
impl PartialEq for Game {
    fn eq(&self, other: &Self) -> bool {
        self.turn == other.turn && self.board == other.board
    }
}

impl Eq for Game {}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} to move", self.turn)?;
        write!(f, "{}", self.board)
    }
}
