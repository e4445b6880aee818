//! Exhaustive monotonic path search.
//!
//! From every seed except the highest, a depth-first walk follows every
//! occupied orthogonal neighbor whose number is strictly greater than the
//! current card. Each prefix of two or more cards is offered to the
//! valuation, and the best value wins (first found on ties).
//!
//! Because numbers strictly increase, a path can never revisit a cell and
//! never exceeds `max_card - min_card + 1` cards. That bounds the walk with
//! no iteration cap.

use std::time::Instant;

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::path::PathScore;
use super::stats::SearchStats;
use super::valuation::{ArboretumValuation, PathValuation, ScoringContext};
use crate::cards::{Card, ColorId};
use crate::tableau::{Coord, Tableau};

/// Path stacks rarely exceed the default 8-card range.
type Stack<T> = SmallVec<[T; 8]>;

/// Scores tableaus by exhaustive path search.
///
/// ```
/// use arboretum::cards::{Card, ColorId};
/// use arboretum::scoring::PathScorer;
/// use arboretum::tableau::{Coord, Tableau};
///
/// let red = ColorId::new(0);
/// let mut tableau = Tableau::new(1, 8);
/// for (x, n) in [1, 2, 3, 4, 5].into_iter().enumerate() {
///     tableau.place(Coord::new(x as i32, 0), Card::new(n, red)).unwrap();
/// }
///
/// let mut scorer = PathScorer::new();
/// let best = scorer.score(&tableau, red);
/// assert_eq!(best.points, 11);
/// assert_eq!(best.len(), 5);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PathScorer<V: PathValuation = ArboretumValuation> {
    valuation: V,
    stats: SearchStats,
}

impl PathScorer {
    /// Create a scorer with standard valuation.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<V: PathValuation> PathScorer<V> {
    /// Create a scorer with a custom valuation.
    pub fn with_valuation(valuation: V) -> Self {
        Self {
            valuation,
            stats: SearchStats::default(),
        }
    }

    /// Statistics from the last `score` or `score_all` call.
    #[must_use]
    pub fn last_stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Best path and its points for `color`.
    ///
    /// Returns `PathScore::empty()` when fewer than two cards of `color`
    /// are placed or no path qualifies.
    pub fn score(&mut self, tableau: &Tableau, color: ColorId) -> PathScore {
        let start = Instant::now();
        self.stats.reset();

        let best = self.search(tableau, color);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        best
    }

    /// Score every color of a `color_count` palette, in palette order.
    pub fn score_all(&mut self, tableau: &Tableau, color_count: usize) -> Vec<PathScore> {
        let start = Instant::now();
        self.stats.reset();

        let scores = ColorId::all(color_count)
            .map(|color| self.search(tableau, color))
            .collect();

        self.stats.time_us = start.elapsed().as_micros() as u64;
        scores
    }

    fn search(&mut self, tableau: &Tableau, color: ColorId) -> PathScore {
        let mut seeds: Vec<(Coord, Card)> = tableau.cards_of_color(color).collect();
        if seeds.len() < 2 {
            trace!(%color, seeds = seeds.len(), "too few seeds to score");
            return PathScore::empty();
        }
        seeds.sort_by_key(|&(coord, card)| (card.number, coord));

        let mut walk = Walk {
            tableau,
            valuation: &self.valuation,
            ctx: ScoringContext {
                target: color,
                min_card: tableau.min_card(),
                max_card: tableau.max_card(),
            },
            stats: &mut self.stats,
            cards: Stack::new(),
            positions: Stack::new(),
            best: PathScore::empty(),
        };

        // The highest seed has nowhere higher to reach.
        for &(coord, card) in &seeds[..seeds.len() - 1] {
            trace!(%color, %coord, %card, "walking from seed");
            walk.stats.seeds += 1;
            walk.extend(coord, card);
        }

        let best = walk.best;
        debug!(%color, points = best.points, length = best.len(), "scored color");
        best
    }
}

/// Score `color` with the standard valuation.
pub fn score(tableau: &Tableau, color: ColorId) -> PathScore {
    PathScorer::new().score(tableau, color)
}

/// One seed-by-seed depth-first walk.
struct Walk<'a, V> {
    tableau: &'a Tableau,
    valuation: &'a V,
    ctx: ScoringContext,
    stats: &'a mut SearchStats,
    cards: Stack<Card>,
    positions: Stack<Coord>,
    best: PathScore,
}

impl<V: PathValuation> Walk<'_, V> {
    /// Push `card` at `at`, offer the path, recurse into higher neighbors, pop.
    fn extend(&mut self, at: Coord, card: Card) {
        self.cards.push(card);
        self.positions.push(at);
        self.stats.nodes_expanded += 1;
        self.stats.max_depth = self.stats.max_depth.max(self.cards.len() as u16);

        if self.cards.len() >= 2 {
            self.offer();
        }

        for next in self.tableau.neighbors(at) {
            let Some(next_card) = self.tableau.get(next) else {
                continue;
            };
            if next_card.number > card.number {
                debug_assert!(!self.positions.contains(&next), "monotonic path revisited {next}");
                self.extend(next, next_card);
            }
        }

        self.cards.pop();
        self.positions.pop();
    }

    fn offer(&mut self) {
        self.stats.paths_enumerated += 1;

        let Some(points) = self.valuation.value(&self.cards, &self.ctx) else {
            return;
        };
        self.stats.scoreable_paths += 1;

        if points > self.best.points {
            self.best = PathScore {
                points,
                cards: self.cards.to_vec(),
                positions: self.positions.to_vec(),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: ColorId = ColorId::new(0);
    const BLUE: ColorId = ColorId::new(1);

    fn tableau(cells: &[((i32, i32), u8, ColorId)]) -> Tableau {
        let mut t = Tableau::new(1, 8);
        for &(at, number, color) in cells {
            t.place(at.into(), Card::new(number, color)).unwrap();
        }
        t
    }

    #[test]
    fn test_explores_every_branch() {
        // (0, 1) is visited first and is a dead end; the red chain must still be found.
        let t = tableau(&[
            ((0, 0), 1, RED),
            ((0, 1), 5, BLUE),
            ((1, 0), 2, RED),
            ((2, 0), 3, RED),
        ]);

        let best = PathScorer::new().score(&t, RED);
        assert_eq!(best.points, 3 + 1);
        assert_eq!(
            best.positions,
            vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]
        );
    }

    #[test]
    fn test_cycle_in_grid_terminates() {
        let t = tableau(&[
            ((0, 0), 1, RED),
            ((1, 0), 2, RED),
            ((1, 1), 3, RED),
            ((0, 1), 4, RED),
        ]);

        let best = PathScorer::new().score(&t, RED);
        assert_eq!(best.points, 4 + 1);
        assert_eq!(best.numbers().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_ties_keep_first_found() {
        let t = tableau(&[
            ((0, 0), 2, RED),
            ((-1, 0), 3, RED),
            ((1, 0), 3, RED),
        ]);

        let best = PathScorer::new().score(&t, RED);
        assert_eq!(best.points, 2);
        assert_eq!(best.positions, vec![Coord::new(0, 0), Coord::new(-1, 0)]);
    }

    #[test]
    fn test_path_may_pass_through_other_colors() {
        let t = tableau(&[
            ((0, 0), 2, RED),
            ((1, 0), 3, BLUE),
            ((2, 0), 4, BLUE),
            ((3, 0), 7, RED),
        ]);

        let best = PathScorer::new().score(&t, RED);
        assert_eq!(best.points, 4);
        assert_eq!(best.cards.first().map(|c| c.color), Some(RED));
        assert_eq!(best.cards.last().map(|c| c.color), Some(RED));
    }

    #[test]
    fn test_stats_track_walk() {
        let t = tableau(&[
            ((0, 0), 1, RED),
            ((1, 0), 2, RED),
            ((2, 0), 3, RED),
        ]);

        let mut scorer = PathScorer::new();
        scorer.score(&t, RED);
        let stats = scorer.last_stats();

        // Seeds 1 and 2; walks 1-2-3 and 2-3.
        assert_eq!(stats.seeds, 2);
        assert_eq!(stats.nodes_expanded, 5);
        assert_eq!(stats.paths_enumerated, 3);
        assert_eq!(stats.scoreable_paths, 3);
        assert_eq!(stats.max_depth, 3);
    }

    #[test]
    fn test_score_all_covers_palette() {
        let t = tableau(&[
            ((0, 0), 1, RED),
            ((1, 0), 8, RED),
            ((5, 5), 3, BLUE),
            ((6, 5), 4, BLUE),
        ]);

        let scores = PathScorer::new().score_all(&t, 6);
        assert_eq!(scores.len(), 6);
        assert_eq!(scores[0].points, 2 + 1 + 2);
        assert_eq!(scores[1].points, 2);
        assert!(scores[2..].iter().all(PathScore::is_empty));
    }

    #[test]
    fn test_walk_along_grid_edge() {
        let t = tableau(&[
            ((i32::MAX, i32::MIN), 1, RED),
            ((i32::MAX, i32::MIN + 1), 2, RED),
            ((i32::MAX - 1, i32::MIN + 1), 3, RED),
        ]);

        let best = PathScorer::new().score(&t, RED);
        assert_eq!(best.points, 3 + 1);
        assert_eq!(best.positions[0], Coord::new(i32::MAX, i32::MIN));
    }

    #[test]
    fn test_custom_valuation() {
        struct LengthOnly;

        impl PathValuation for LengthOnly {
            fn value(&self, path: &[Card], _ctx: &ScoringContext) -> Option<u32> {
                Some(path.len() as u32)
            }
        }

        let t = tableau(&[
            ((0, 0), 1, RED),
            ((1, 0), 2, RED),
            ((2, 0), 3, BLUE),
        ]);

        let best = PathScorer::with_valuation(LengthOnly).score(&t, RED);
        assert_eq!(best.points, 3);
    }
}
