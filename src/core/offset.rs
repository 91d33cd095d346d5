use std::ops::Mul;

/// A displacement between two squares, in rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub rows: i8,
    pub cols: i8,
}

impl Offset {
    #[inline]
    pub const fn new(rows: i8, cols: i8) -> Self {
        Self { rows, cols }
    }
}

impl Mul<i8> for Offset {
    type Output = Offset;

    #[inline]
    fn mul(self, rhs: i8) -> Offset {
        Offset {
            rows: self.rows.saturating_mul(rhs),
            cols: self.cols.saturating_mul(rhs),
        }
    }
}

pub const NORTH: Offset = Offset { rows: 1, cols: 0 };
pub const NORTH_EAST: Offset = Offset { rows: 1, cols: 1 };
pub const EAST: Offset = Offset { rows: 0, cols: 1 };
pub const SOUTH_EAST: Offset = Offset { rows: -1, cols: 1 };
pub const SOUTH: Offset = Offset { rows: -1, cols: 0 };
pub const SOUTH_WEST: Offset = Offset { rows: -1, cols: -1 };
pub const WEST: Offset = Offset { rows: 0, cols: -1 };
pub const NORTH_WEST: Offset = Offset { rows: 1, cols: -1 };

/// The 8 single steps around a square, clockwise from north.
pub const KING_STEPS: [Offset; 8] = [
    NORTH, NORTH_EAST, EAST, SOUTH_EAST, SOUTH, SOUTH_WEST, WEST, NORTH_WEST,
];

/// The 8 knight jumps, clockwise from two-up-one-right.
pub const KNIGHT_JUMPS: [Offset; 8] = [
    Offset { rows: 2, cols: 1 },
    Offset { rows: 1, cols: 2 },
    Offset { rows: -1, cols: 2 },
    Offset { rows: -2, cols: 1 },
    Offset { rows: -2, cols: -1 },
    Offset { rows: -1, cols: -2 },
    Offset { rows: 1, cols: -2 },
    Offset { rows: 2, cols: -1 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn king_steps_are_unit_and_distinct() {
        for (i, a) in KING_STEPS.iter().enumerate() {
            assert_eq!(a.rows.abs().max(a.cols.abs()), 1);
            assert!(KING_STEPS[i + 1..].iter().all(|b| b != a));
        }
    }

    #[test]
    fn knight_jumps_mix_one_and_two() {
        for j in KNIGHT_JUMPS {
            let (r, c) = (j.rows.abs(), j.cols.abs());
            assert!((r == 1 && c == 2) || (r == 2 && c == 1));
            assert!(KNIGHT_JUMPS.contains(&Offset::new(-j.rows, -j.cols)));
        }
    }

    #[test]
    fn scaling_saturates() {
        assert_eq!(NORTH * 2, Offset::new(2, 0));
        assert_eq!(SOUTH_WEST * 2, Offset::new(-2, -2));
        assert_eq!(Offset::new(100, -100) * 2, Offset::new(i8::MAX, i8::MIN));
    }
}
