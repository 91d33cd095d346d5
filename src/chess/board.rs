use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chess::mv::Move;
use crate::chess::piece::{Piece, PieceKind, Team};
use crate::core::position::{Position, BOARD_SIZE};
use crate::error::ChessError;

const N: usize = BOARD_SIZE as usize;

/// Back rank from file `a` to file `h`.
const BACK_RANK: [PieceKind; N] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces, indexed `[row - 1][col - 1]`.
///
/// The grid is a plain array, so `clone()` is a full independent copy; legality checks
/// work on such copies and never alias the live board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; N]; N],
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// A board holding the standard starting layout.
    pub fn standard() -> Self {
        let mut board = Self::new();
        board.reset();
        board
    }

    /// Clear the board and set up the standard starting layout.
    pub fn reset(&mut self) {
        self.squares = [[None; N]; N];
        for team in Team::ALL {
            let home = (team.home_row() - 1) as usize;
            let pawns = (team.pawn_row() - 1) as usize;
            for col in 0..N {
                self.squares[home][col] = Some(Piece::new(team, BACK_RANK[col]));
                self.squares[pawns][col] = Some(Piece::new(team, PieceKind::Pawn));
            }
        }
    }

    /// Put `piece` on `pos` (or empty it with `None`), replacing whatever was there.
    pub fn place(&mut self, pos: Position, piece: Option<Piece>) -> Result<(), ChessError> {
        let (r, c) = pos.indices().ok_or(ChessError::OffBoard(pos))?;
        self.squares[r][c] = piece;
        Ok(())
    }

    /// The piece on `pos`. Off-board positions are always empty.
    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        let (r, c) = pos.indices()?;
        self.squares[r][c]
    }

    #[inline]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.piece_at(pos).is_none()
    }

    /// Occupied squares with their pieces, row by row from a1.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.piece_at(pos).map(|p| (pos, p)))
    }

    /// Occupied squares holding a piece of `team`.
    pub fn pieces_of(&self, team: Team) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.team() == team)
    }

    /// Move whatever stands on `mv.start()` to `mv.end()`, promoting it if the move says so.
    ///
    /// No legality checks happen here. An empty start square (or an off-board end) makes
    /// this a no-op.
    pub fn apply_move(&mut self, mv: Move) {
        let Some(piece) = self.piece_at(mv.start()) else {
            return;
        };
        let (Some((sr, sc)), Some((er, ec))) = (mv.start().indices(), mv.end().indices()) else {
            return;
        };
        let landed = match mv.promotion() {
            Some(kind) => Piece::new(piece.team(), kind),
            None => piece,
        };
        self.squares[er][ec] = Some(landed);
        self.squares[sr][sc] = None;
    }
}

/// Rank 8 first, cells separated by `|`, blank for empty: `|r|h|b|q|k|b|h|r|`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.squares.iter().rev() {
            f.write_str("|")?;
            for cell in row {
                let ch = cell.map_or(' ', Piece::symbol);
                write!(f, "{ch}|")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses the [`Display`](fmt::Display) layout. Blank lines around the grid are ignored.
impl FromStr for Board {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<(usize, &str)> = s
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty())
            .collect();

        if rows.len() != N {
            return Err(ChessError::BoardParse {
                line: rows.last().map_or(0, |(i, _)| *i),
                reason: format!("expected {N} ranks, found {}", rows.len()),
            });
        }

        let mut board = Board::new();
        for (rank_idx, (line, text)) in rows.into_iter().enumerate() {
            let chars: Vec<char> = text.chars().collect();
            if chars.len() != 2 * N + 1 {
                return Err(ChessError::BoardParse {
                    line,
                    reason: format!("expected {} characters, found {}", 2 * N + 1, chars.len()),
                });
            }
            let row = N - 1 - rank_idx;
            for col in 0..N {
                let (left, symbol, right) =
                    (chars[2 * col], chars[2 * col + 1], chars[2 * col + 2]);
                if left != '|' || right != '|' {
                    return Err(ChessError::BoardParse {
                        line,
                        reason: format!("cell {} is not framed by '|'", col + 1),
                    });
                }
                board.squares[row][col] = match symbol {
                    ' ' => None,
                    c => Some(Piece::from_symbol(c).ok_or_else(|| ChessError::BoardParse {
                        line,
                        reason: format!("unknown piece symbol {c:?}"),
                    })?),
                };
            }
        }
        Ok(board)
    }
}
