//! Moves and move sets.

use std::fmt;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::chess::piece::PieceKind;
use crate::core::position::Position;

/// A set of moves with no particular order.
pub type MoveSet = FxHashSet<Move>;

/// A move from `start` to `end`. `promotion` is set only for pawn moves onto the far rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    start: Position,
    end: Position,
    promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Self {
            start,
            end,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(start: Position, end: Position, promotion: PieceKind) -> Self {
        Self {
            start,
            end,
            promotion: Some(promotion),
        }
    }

    #[inline]
    pub fn start(self) -> Position {
        self.start
    }

    #[inline]
    pub fn end(self) -> Position {
        self.end
    }

    #[inline]
    pub fn promotion(self) -> Option<PieceKind> {
        self.promotion
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)?;
        if let Some(kind) = self.promotion {
            write!(f, "={}", kind.letter())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_includes_promotion() {
        let a = Position::new(7, 1);
        let b = Position::new(8, 1);
        assert_ne!(Move::new(a, b), Move::with_promotion(a, b, PieceKind::Queen));
        assert_ne!(
            Move::with_promotion(a, b, PieceKind::Rook),
            Move::with_promotion(a, b, PieceKind::Queen)
        );
        assert_eq!(Move::new(a, b), Move::new(a, b));
    }

    #[test]
    fn display() {
        let m = Move::with_promotion(Position::new(7, 5), Position::new(8, 5), PieceKind::Knight);
        assert_eq!(m.to_string(), "e7-e8=H");
        assert_eq!(Move::new(Position::new(2, 5), Position::new(4, 5)).to_string(), "e2-e4");
    }
}
