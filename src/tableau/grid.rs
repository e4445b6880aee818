//! The tableau: a sparse grid of placed cards.
//!
//! The tableau supports:
//! - Placement (append-only, never overwrites)
//! - Discovery of legal placements via `available_positions`
//! - Adjacency and occupancy queries used by the scorer
//!
//! Cards live in an `im::OrdMap`, so iteration is in coordinate order and
//! `snapshot()` is O(1).

use im::OrdMap;
use rustc_hash::FxHashSet;
use tracing::debug;

use super::coord::{Coord, Neighbors};
use crate::cards::{Card, ColorId};
use crate::core::config::RulesConfig;
use crate::error::TableauError;

/// Inclusive bounding box of occupied cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Bounds {
    /// Columns spanned.
    #[must_use]
    pub fn width(&self) -> u64 {
        span(self.min_x, self.max_x)
    }

    /// Rows spanned.
    #[must_use]
    pub fn height(&self) -> u64 {
        span(self.min_y, self.max_y)
    }
}

fn span(min: i32, max: i32) -> u64 {
    u64::from(max.abs_diff(min)) + 1
}

/// A player's tableau.
///
/// ## Usage
///
/// ```
/// use arboretum::cards::{Card, ColorId};
/// use arboretum::tableau::{Coord, Tableau};
///
/// let mut tableau = Tableau::new(1, 8);
/// assert_eq!(tableau.available_positions_sorted(), vec![Coord::ORIGIN]);
///
/// tableau.place(Coord::ORIGIN, Card::new(3, ColorId::new(0))).unwrap();
/// assert_eq!(tableau.available_positions().len(), 4);
/// assert!(tableau.place(Coord::ORIGIN, Card::new(4, ColorId::new(0))).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tableau {
    min_card: u8,
    max_card: u8,
    cells: OrdMap<Coord, Card>,
}

impl Tableau {
    /// Create an empty tableau for cards numbered `min_card..=max_card`.
    #[must_use]
    pub fn new(min_card: u8, max_card: u8) -> Self {
        Self {
            min_card,
            max_card,
            cells: OrdMap::new(),
        }
    }

    /// Create an empty tableau using the configured card range.
    #[must_use]
    pub fn from_config(config: &RulesConfig) -> Self {
        Self::new(config.min_card, config.max_card)
    }

    /// Lowest card number.
    #[must_use]
    pub fn min_card(&self) -> u8 {
        self.min_card
    }

    /// Highest card number.
    #[must_use]
    pub fn max_card(&self) -> u8 {
        self.max_card
    }

    /// Number of placed cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if nothing has been placed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cheap independent copy for scoring while the original keeps changing.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Get the card at `coord`.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Card> {
        self.cells.get(&coord).copied()
    }

    /// Check if `coord` holds a card.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Iterate placed cards in coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Card)> + '_ {
        self.cells.iter().map(|(coord, card)| (*coord, *card))
    }

    /// Placed cards of one color, in coordinate order.
    pub fn cards_of_color(&self, color: ColorId) -> impl Iterator<Item = (Coord, Card)> + '_ {
        self.iter().filter(move |(_, card)| card.is_color(color))
    }

    /// Occupied 4-neighbors of `coord`, in lexicographic order.
    #[must_use]
    pub fn neighbors(&self, coord: Coord) -> Neighbors {
        coord
            .adjacent()
            .into_iter()
            .filter(|c| self.contains(*c))
            .collect()
    }

    /// Every coordinate where a card may legally be placed.
    ///
    /// `{(0, 0)}` for an empty tableau; otherwise every empty cell
    /// 4-adjacent to a placed card, each listed once.
    #[must_use]
    pub fn available_positions(&self) -> FxHashSet<Coord> {
        if self.cells.is_empty() {
            return std::iter::once(Coord::ORIGIN).collect();
        }

        self.cells
            .keys()
            .flat_map(|coord| coord.adjacent())
            .filter(|c| !self.contains(*c))
            .collect()
    }

    /// `available_positions` in coordinate order.
    #[must_use]
    pub fn available_positions_sorted(&self) -> Vec<Coord> {
        let mut positions: Vec<_> = self.available_positions().into_iter().collect();
        positions.sort_unstable();
        positions
    }

    /// Check if a card may legally be placed at `coord`.
    #[must_use]
    pub fn is_available(&self, coord: Coord) -> bool {
        if self.cells.is_empty() {
            return coord == Coord::ORIGIN;
        }
        !self.contains(coord) && coord.adjacent().iter().any(|c| self.contains(*c))
    }

    /// Place a card.
    ///
    /// Fails if `coord` is occupied. Adjacency is the caller's contract:
    /// pick from `available_positions`, or use `place_checked`.
    pub fn place(&mut self, coord: Coord, card: Card) -> Result<(), TableauError> {
        if let Some(occupant) = self.get(coord) {
            return Err(TableauError::OccupiedPosition {
                position: coord,
                occupant,
            });
        }

        self.cells.insert(coord, card);
        debug!(%coord, %card, placed = self.cells.len(), "placed card");
        Ok(())
    }

    /// Place a card, also rejecting coordinates that are not available.
    pub fn place_checked(&mut self, coord: Coord, card: Card) -> Result<(), TableauError> {
        if !self.contains(coord) && !self.is_available(coord) {
            return Err(TableauError::IllegalPlacement { position: coord });
        }
        self.place(coord, card)
    }

    /// Bounding box of placed cards, or `None` when empty.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        let mut coords = self.cells.keys();
        let first = coords.next()?;

        let init = Bounds {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        Some(coords.fold(init, |b, c| Bounds {
            min_x: b.min_x.min(c.x),
            max_x: b.max_x.max(c.x),
            min_y: b.min_y.min(c.y),
            max_y: b.max_y.max(c.y),
        }))
    }

    /// Plain-text grid of the occupied area, for debugging.
    #[must_use]
    pub fn render(&self) -> String {
        super::render::render(self)
    }
}

impl std::fmt::Display for Tableau {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
