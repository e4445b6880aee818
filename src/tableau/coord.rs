//! Grid coordinates.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A cell on the unbounded tableau grid.
///
/// Ordering is lexicographic on `(x, y)`; the scorer relies on it for
/// deterministic tie-breaking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// The first card of every tableau goes here.
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    /// Create a coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The orthogonal neighbors, in lexicographic order.
    ///
    /// Cells past the `i32` edge do not exist, so a coordinate on the edge
    /// has fewer than four.
    #[must_use]
    pub fn adjacent(self) -> Neighbors {
        let Coord { x, y } = self;
        [
            x.checked_sub(1).map(|x| Coord::new(x, y)),
            y.checked_sub(1).map(|y| Coord::new(x, y)),
            y.checked_add(1).map(|y| Coord::new(x, y)),
            x.checked_add(1).map(|x| Coord::new(x, y)),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Check 4-adjacency.
    #[must_use]
    pub fn is_adjacent(self, other: Coord) -> bool {
        u64::from(self.x.abs_diff(other.x)) + u64::from(self.y.abs_diff(other.y)) == 1
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Up to four neighbor cells, kept inline.
pub type Neighbors = SmallVec<[Coord; 4]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_is_sorted() {
        let around = Coord::new(2, 3).adjacent();
        assert_eq!(around.len(), 4);
        let mut sorted = around.clone();
        sorted.sort();
        assert_eq!(around, sorted);
        assert!(around.iter().all(|c| c.is_adjacent(Coord::new(2, 3))));
    }

    #[test]
    fn test_is_adjacent() {
        let c = Coord::ORIGIN;
        assert!(c.is_adjacent(Coord::new(0, 1)));
        assert!(c.is_adjacent(Coord::new(-1, 0)));
        assert!(!c.is_adjacent(Coord::new(1, 1)));
        assert!(!c.is_adjacent(c));
    }

    #[test]
    fn test_edges_have_no_outside_neighbors() {
        let right = Coord::new(i32::MAX, 0);
        assert_eq!(
            right.adjacent().into_vec(),
            vec![
                Coord::new(i32::MAX - 1, 0),
                Coord::new(i32::MAX, -1),
                Coord::new(i32::MAX, 1),
            ]
        );

        let corner = Coord::new(i32::MIN, i32::MIN);
        assert_eq!(
            corner.adjacent().into_vec(),
            vec![Coord::new(i32::MIN, i32::MIN + 1), Coord::new(i32::MIN + 1, i32::MIN)]
        );
    }

    #[test]
    fn test_opposite_edges_are_not_adjacent() {
        assert!(!Coord::new(i32::MIN, 0).is_adjacent(Coord::new(i32::MAX, 0)));
        assert!(!Coord::new(0, i32::MIN).is_adjacent(Coord::new(0, i32::MAX)));
        assert!(Coord::new(i32::MAX, 5).is_adjacent(Coord::new(i32::MAX - 1, 5)));
    }

    #[test]
    fn test_from_tuple_and_display() {
        let c: Coord = (-3, 7).into();
        assert_eq!(c, Coord::new(-3, 7));
        assert_eq!(format!("{}", c), "(-3, 7)");
    }
}
