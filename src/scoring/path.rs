//! Scored paths.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::tableau::Coord;

/// The best path found by a scoring call.
///
/// `cards[i]` sits at `positions[i]`. An empty path scores 0.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathScore {
    /// Points earned.
    pub points: u32,

    /// Cards along the path, first to last.
    pub cards: Vec<Card>,

    /// Where each card sits.
    pub positions: Vec<Coord>,
}

impl PathScore {
    /// No scoring path.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if no path scored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Card numbers along the path.
    pub fn numbers(&self) -> impl Iterator<Item = u8> + '_ {
        self.cards.iter().map(|card| card.number)
    }
}

impl std::fmt::Display for PathScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} pts", self.points)?;
        for (i, card) in self.cards.iter().enumerate() {
            let sep = if i == 0 { ": " } else { " -> " };
            write!(f, "{}{}", sep, card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::ColorId;

    #[test]
    fn test_empty() {
        let score = PathScore::empty();
        assert!(score.is_empty());
        assert_eq!(score.points, 0);
        assert_eq!(score.to_string(), "0 pts");
    }

    #[test]
    fn test_display() {
        let c = ColorId::new(2);
        let score = PathScore {
            points: 5,
            cards: vec![Card::new(1, c), Card::new(8, c)],
            positions: vec![Coord::new(0, 0), Coord::new(1, 0)],
        };
        assert_eq!(score.to_string(), "5 pts: 1/c2 -> 8/c2");
        assert_eq!(score.numbers().collect::<Vec<_>>(), vec![1, 8]);
    }
}
