//! Path valuation rules.
//!
//! The search enumerates candidate paths; a `PathValuation` decides whether a
//! path counts and what it is worth. `ArboretumValuation` is the standard
//! formula.

use crate::cards::{Card, ColorId};

/// What a valuation needs to know about the scoring call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoringContext {
    /// Color being scored.
    pub target: ColorId,
    /// Lowest card number in play.
    pub min_card: u8,
    /// Highest card number in play.
    pub max_card: u8,
}

/// Decides whether a monotonic path scores, and for how much.
///
/// ## Implementation Notes
///
/// - `path` is ordered first to last and has strictly increasing numbers
/// - Return `None` for paths that do not score at all
/// - Must be deterministic; the scorer relies on it for tie-breaking
pub trait PathValuation {
    /// Points for `path`, or `None` if it does not score.
    fn value(&self, path: &[Card], ctx: &ScoringContext) -> Option<u32>;
}

/// Standard Arboretum path scoring.
///
/// A path of at least two cards scores when its first and last cards share a
/// color. It earns:
/// - 1 point per card
/// - doubled when longer than 4 and every card has the target color
/// - +1 when it starts on the lowest card
/// - +2 when it ends on the highest card
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArboretumValuation;

impl PathValuation for ArboretumValuation {
    fn value(&self, path: &[Card], ctx: &ScoringContext) -> Option<u32> {
        let (first, last) = (path.first()?, path.last()?);
        if path.len() < 2 || first.color != last.color {
            return None;
        }

        let mut points = path.len() as u32;
        if path.len() > 4 && path.iter().all(|card| card.is_color(ctx.target)) {
            points *= 2;
        }
        if first.number == ctx.min_card {
            points += 1;
        }
        if last.number == ctx.max_card {
            points += 2;
        }
        Some(points)
    }
}
