//! Zig-zag traversal of the rails.
//!
//! The cursor holds a row and a direction. Reaching the top rail forces
//! `Descending`, reaching the bottom rail forces `Ascending`; on any other
//! rail the direction is kept. The row is yielded before it is advanced.
//!
//! ```text
//! rails = 4, start = 2
//!
//! column  0 1 2 3 4 5 6 7 8
//! rail 0  . . . . * . . . .
//! rail 1  . . . * . * . . .
//! rail 2  * . * . . . * . *
//! rail 3  . * . . . . . * .
//! ```

use std::iter::FusedIterator;

use strum::Display;

use super::key::FenceKey;

/// Direction the cursor moves after placing the current character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    /// Moving towards the bottom rail
    Descending,
    /// Moving towards the top rail
    Ascending,
}

/// Unbounded iterator over the rail of each successive column.
///
/// Callers take as many rows as they have characters.
///
/// ```
/// use railfence::fence::{FenceKey, ZigZag};
///
/// let key = FenceKey::new(3, 0).unwrap();
/// let rows: Vec<usize> = ZigZag::new(key).take(6).collect();
/// assert_eq!(rows, [0, 1, 2, 1, 0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct ZigZag {
    last_rail: usize,
    row: usize,
    direction: Direction,
}

impl ZigZag {
    /// Cursor positioned on the key's start rail, heading down
    pub fn new(key: FenceKey) -> Self {
        Self {
            last_rail: key.last_rail(),
            row: key.start(),
            direction: Direction::Descending,
        }
    }

    /// Current direction of travel
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl Iterator for ZigZag {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let row = self.row;
        if row == 0 {
            self.direction = Direction::Descending;
        } else if row == self.last_rail {
            self.direction = Direction::Ascending;
        }

        // last_rail >= 1, so the bottom rail always turns before row + 1
        // leaves the fence and the top rail before row - 1 underflows
        self.row = match self.direction {
            Direction::Descending => row + 1,
            Direction::Ascending => row - 1,
        };
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for ZigZag {}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(rails: usize, start: usize, n: usize) -> Vec<usize> {
        ZigZag::new(FenceKey::new(rails, start).unwrap())
            .take(n)
            .collect()
    }

    #[test]
    fn test_two_rails_alternate() {
        assert_eq!(rows(2, 0, 6), [0, 1, 0, 1, 0, 1]);
        assert_eq!(rows(2, 1, 6), [1, 0, 1, 0, 1, 0]);
    }

    #[test]
    fn test_interior_start_descends_first() {
        assert_eq!(rows(4, 2, 9), [2, 3, 2, 1, 0, 1, 2, 3, 2]);
    }

    #[test]
    fn test_bottom_start_ascends_first() {
        assert_eq!(rows(3, 2, 7), [2, 1, 0, 1, 2, 1, 0]);
    }

    #[test]
    fn test_direction_follows_boundaries() {
        let mut cursor = ZigZag::new(FenceKey::new(3, 1).unwrap());
        assert_eq!(cursor.direction(), Direction::Descending);

        assert_eq!(cursor.next(), Some(1));
        assert_eq!(cursor.direction(), Direction::Descending);
        assert_eq!(cursor.next(), Some(2));
        assert_eq!(cursor.direction(), Direction::Ascending);
        assert_eq!(cursor.next(), Some(1));
        assert_eq!(cursor.direction(), Direction::Ascending);
        assert_eq!(cursor.next(), Some(0));
        assert_eq!(cursor.direction(), Direction::Descending);
    }

    #[test]
    fn test_stays_on_fence() {
        for rails in 2..=10 {
            for start in 0..rails {
                assert!(rows(rails, start, 200).iter().all(|&r| r < rails));
            }
        }
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Descending.to_string(), "descending");
        assert_eq!(Direction::Ascending.to_string(), "ascending");
    }
}
