use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::offset::{
    Offset, EAST, KING_STEPS, KNIGHT_JUMPS, NORTH, NORTH_EAST, NORTH_WEST, SOUTH, SOUTH_EAST,
    SOUTH_WEST, WEST,
};

/// Side length of the board.
pub const BOARD_SIZE: i8 = 8;

/// A square on the board, 1-indexed: row 1 is White's home rank, column 1 is file `a`.
///
/// Positions are plain geometry. Offsetting one may produce a square off the board;
/// [`Position::is_on_board`] is checked by whoever wants to touch the board with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    row: i8,
    col: i8,
}

impl Position {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn row(self) -> i8 {
        self.row
    }

    #[inline]
    pub fn column(self) -> i8 {
        self.col
    }

    #[inline]
    pub fn is_on_board(self) -> bool {
        (1..=BOARD_SIZE).contains(&self.row) && (1..=BOARD_SIZE).contains(&self.col)
    }

    /// Zero-based `(row, col)` array indices, or `None` off the board.
    #[inline]
    pub fn indices(self) -> Option<(usize, usize)> {
        if self.is_on_board() {
            Some(((self.row - 1) as usize, (self.col - 1) as usize))
        } else {
            None
        }
    }

    /// All 64 squares, row by row from a1.
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=BOARD_SIZE).flat_map(|row| (1..=BOARD_SIZE).map(move |col| Position::new(row, col)))
    }

    /// Saturates at the `i8` range, so a far-off square stays off the board.
    #[inline]
    pub fn shifted(self, delta: Offset) -> Position {
        Position::new(
            self.row.saturating_add(delta.rows),
            self.col.saturating_add(delta.cols),
        )
    }

    #[inline]
    pub fn step(self, dir: Direction) -> Position {
        self.shifted(dir.offset())
    }

    pub fn north(self) -> Position {
        self.shifted(NORTH)
    }

    pub fn north_east(self) -> Position {
        self.shifted(NORTH_EAST)
    }

    pub fn east(self) -> Position {
        self.shifted(EAST)
    }

    pub fn south_east(self) -> Position {
        self.shifted(SOUTH_EAST)
    }

    pub fn south(self) -> Position {
        self.shifted(SOUTH)
    }

    pub fn south_west(self) -> Position {
        self.shifted(SOUTH_WEST)
    }

    pub fn west(self) -> Position {
        self.shifted(WEST)
    }

    pub fn north_west(self) -> Position {
        self.shifted(NORTH_WEST)
    }

    /// Two squares north; only meaningful for a white pawn's opening advance.
    pub fn double_north(self) -> Position {
        self.shifted(NORTH * 2)
    }

    /// Two squares south; only meaningful for a black pawn's opening advance.
    pub fn double_south(self) -> Position {
        self.shifted(SOUTH * 2)
    }

    /// The eight adjacent squares, clockwise from north. Some may be off the board.
    pub fn neighbours(self) -> [Position; 8] {
        KING_STEPS.map(|d| self.shifted(d))
    }

    /// The eight knight-jump squares. Some may be off the board.
    pub fn knight_jumps(self) -> [Position; 8] {
        KNIGHT_JUMPS.map(|d| self.shifted(d))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            let file = (b'a' + (self.col - 1) as u8) as char;
            write!(f, "{file}{}", self.row)
        } else {
            write!(f, "({},{})", self.row, self.col)
        }
    }
}

/// Compass directions for single steps and rays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    #[inline]
    pub fn offset(self) -> Offset {
        use Direction::*;
        match self {
            North => NORTH,
            NorthEast => NORTH_EAST,
            East => EAST,
            SouthEast => SOUTH_EAST,
            South => SOUTH,
            SouthWest => SOUTH_WEST,
            West => WEST,
            NorthWest => NORTH_WEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivations_can_leave_the_board() {
        let a1 = Position::new(1, 1);
        assert_eq!(a1.south_west(), Position::new(0, 0));
        assert!(!a1.south_west().is_on_board());
        assert_eq!(a1.south_west().indices(), None);
        assert_eq!(a1.north_east(), Position::new(2, 2));
        assert_eq!(a1.double_north(), Position::new(3, 1));
    }

    #[test]
    fn step_matches_named_derivations() {
        let d4 = Position::new(4, 4);
        assert_eq!(d4.step(Direction::North), d4.north());
        assert_eq!(d4.step(Direction::SouthEast), d4.south_east());
        assert_eq!(d4.step(Direction::West), d4.west());
        assert_eq!(d4.step(Direction::NorthWest), d4.north_west());
    }

    #[test]
    fn knight_jumps_from_corner() {
        let on_board: Vec<_> = Position::new(1, 1)
            .knight_jumps()
            .into_iter()
            .filter(|p| p.is_on_board())
            .collect();
        assert_eq!(on_board.len(), 2);
        assert!(on_board.contains(&Position::new(3, 2)));
        assert!(on_board.contains(&Position::new(2, 3)));
    }

    #[test]
    fn derivations_at_the_i8_edge_stay_off_board() {
        let far = Position::new(i8::MAX, i8::MIN);
        let derived = [
            far.north(),
            far.north_east(),
            far.east(),
            far.south_east(),
            far.south(),
            far.south_west(),
            far.west(),
            far.north_west(),
            far.double_north(),
            far.double_south(),
        ];
        for p in derived.into_iter().chain(far.neighbours()).chain(far.knight_jumps()) {
            assert!(!p.is_on_board());
        }
        assert_eq!(far.north(), far);
        assert_eq!(far.double_south(), Position::new(i8::MAX - 2, i8::MIN));
        let corner = Position::new(i8::MIN, i8::MAX);
        assert_eq!(corner.south_east(), corner);
    }

    #[test]
    fn display_uses_file_letters() {
        assert_eq!(Position::new(4, 5).to_string(), "e4");
        assert_eq!(Position::new(8, 1).to_string(), "a8");
        assert_eq!(Position::new(9, 1).to_string(), "(9,1)");
    }

    #[test]
    fn all_covers_the_board_once() {
        let all: Vec<_> = Position::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0], Position::new(1, 1));
        assert_eq!(all[63], Position::new(8, 8));
    }
}
