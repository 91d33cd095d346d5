use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chess::board::Board;
use crate::chess::movegen;
use crate::chess::mv::MoveSet;
use crate::core::position::{Direction, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Team {
    White,
    Black,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::White, Team::Black];

    #[inline]
    pub fn other(self) -> Self {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    /// Row a pawn of this team starts on (and may double-step from).
    #[inline]
    pub fn pawn_row(self) -> i8 {
        match self {
            Team::White => 2,
            Team::Black => 7,
        }
    }

    /// The opponent's back rank, where this team's pawns promote.
    #[inline]
    pub fn promotion_row(self) -> i8 {
        match self {
            Team::White => 8,
            Team::Black => 1,
        }
    }

    #[inline]
    pub fn home_row(self) -> i8 {
        self.other().promotion_row()
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::White => f.write_str("white"),
            Team::Black => f.write_str("black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceKind {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

/// What a pawn may become on the far rank.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
        PieceKind::Pawn,
    ];

    /// Ray directions for sliding pieces; empty for the others.
    #[inline]
    pub fn slide_dirs(self) -> &'static [Direction] {
        use PieceKind::*;
        match self {
            Queen => &Direction::ALL,
            Rook => &Direction::ORTHOGONAL,
            Bishop => &Direction::DIAGONAL,
            _ => &[],
        }
    }

    /// Upper-case letter used in board text. The knight is `H` so it doesn't clash with the king.
    pub fn letter(self) -> char {
        use PieceKind::*;
        match self {
            King => 'K',
            Queen => 'Q',
            Bishop => 'B',
            Knight => 'H',
            Rook => 'R',
            Pawn => 'P',
        }
    }

    pub fn from_letter(c: char) -> Option<PieceKind> {
        PieceKind::ALL
            .into_iter()
            .find(|k| k.letter() == c.to_ascii_uppercase())
    }
}

/// A team-coloured piece. Two pieces of the same team and kind are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    team: Team,
    kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(team: Team, kind: PieceKind) -> Self {
        Self { team, kind }
    }

    #[inline]
    pub fn team(self) -> Team {
        self.team
    }

    #[inline]
    pub fn kind(self) -> PieceKind {
        self.kind
    }

    /// Board-text symbol: upper case for White, lower case for Black.
    pub fn symbol(self) -> char {
        let c = self.kind.letter();
        match self.team {
            Team::White => c,
            Team::Black => c.to_ascii_lowercase(),
        }
    }

    pub fn from_symbol(c: char) -> Option<Piece> {
        let kind = PieceKind::from_letter(c)?;
        let team = if c.is_ascii_uppercase() {
            Team::White
        } else {
            Team::Black
        };
        Some(Piece::new(team, kind))
    }

    /// Pseudo-legal moves of this piece standing on `from`.
    ///
    /// Obeys movement geometry and occupancy only; whether the move leaves the mover's own
    /// king attacked is decided by [`crate::chess::rules::legal_moves_from`].
    pub fn piece_moves(self, board: &Board, from: Position) -> MoveSet {
        movegen::piece_moves(self, board, from)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip() {
        for team in Team::ALL {
            for kind in PieceKind::ALL {
                let p = Piece::new(team, kind);
                assert_eq!(Piece::from_symbol(p.symbol()), Some(p));
            }
        }
        assert_eq!(Piece::from_symbol('N'), None);
        assert_eq!(Piece::from_symbol('h'), Some(Piece::new(Team::Black, PieceKind::Knight)));
    }

    #[test]
    fn team_rows() {
        assert_eq!(Team::White.home_row(), 1);
        assert_eq!(Team::Black.home_row(), 8);
        assert_eq!(Team::White.other(), Team::Black);
    }
}
