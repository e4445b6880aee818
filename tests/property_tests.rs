//! Property tests over randomly grown tableaus.

use proptest::prelude::*;

use arboretum::cards::{Card, ColorId};
use arboretum::error::TableauError;
use arboretum::scoring::{ArboretumValuation, PathScore, PathScorer, PathValuation, ScoringContext};
use arboretum::tableau::Tableau;

/// Grow a tableau the legal way: each card goes to one of the currently
/// available positions, picked by `slot`.
fn grow(moves: &[(usize, u8, u8)]) -> Tableau {
    let mut tableau = Tableau::new(1, 8);
    for &(slot, number, color) in moves {
        let available = tableau.available_positions_sorted();
        let at = available[slot % available.len()];
        tableau
            .place_checked(at, Card::new(number, ColorId::new(color)))
            .expect("available position should accept a card");
    }
    tableau
}

fn moves() -> impl Strategy<Value = Vec<(usize, u8, u8)>> {
    prop::collection::vec((0usize..64, 1u8..=8, 0u8..3), 0..14)
}

proptest! {
    #[test]
    fn available_positions_are_empty_and_adjacent(moves in moves()) {
        let tableau = grow(&moves);
        let available = tableau.available_positions();

        if tableau.is_empty() {
            prop_assert_eq!(tableau.available_positions_sorted(), vec![arboretum::Coord::ORIGIN]);
        }
        for coord in available {
            prop_assert!(!tableau.contains(coord));
            prop_assert!(tableau.is_empty() || coord.adjacent().iter().any(|c| tableau.contains(*c)));
        }
    }

    #[test]
    fn placing_on_occupied_never_changes_tableau(moves in moves(), pick in 0usize..64) {
        let mut tableau = grow(&moves);
        prop_assume!(!tableau.is_empty());

        let (coord, occupant) = tableau.iter().nth(pick % tableau.len()).unwrap();
        let before = tableau.clone();

        let err = tableau.place(coord, Card::new(1, ColorId::new(0))).unwrap_err();
        prop_assert_eq!(err, TableauError::OccupiedPosition { position: coord, occupant });
        prop_assert_eq!(tableau, before);
    }

    #[test]
    fn best_path_is_valid(moves in moves(), color in 0u8..3) {
        let tableau = grow(&moves);
        let color = ColorId::new(color);
        let best = PathScorer::new().score(&tableau, color);

        if tableau.cards_of_color(color).count() < 2 {
            prop_assert_eq!(&best, &PathScore::empty());
        }
        if best.is_empty() {
            prop_assert_eq!(best.points, 0);
            return Ok(());
        }

        prop_assert_eq!(best.cards.len(), best.positions.len());
        prop_assert_eq!(best.cards[0].color, color);
        prop_assert_eq!(best.cards[best.len() - 1].color, color);
        for pair in best.cards.windows(2) {
            prop_assert!(pair[0].number < pair[1].number);
        }
        for pair in best.positions.windows(2) {
            prop_assert!(pair[0].is_adjacent(pair[1]));
        }
        for (coord, card) in best.positions.iter().zip(&best.cards) {
            prop_assert_eq!(tableau.get(*coord), Some(*card));
        }

        let ctx = ScoringContext { target: color, min_card: 1, max_card: 8 };
        prop_assert_eq!(ArboretumValuation.value(&best.cards, &ctx), Some(best.points));
    }

    #[test]
    fn best_path_beats_every_scoring_pair(moves in moves(), color in 0u8..3) {
        let tableau = grow(&moves);
        let color = ColorId::new(color);
        let best = PathScorer::new().score(&tableau, color);
        let ctx = ScoringContext { target: color, min_card: 1, max_card: 8 };

        for (coord, card) in tableau.cards_of_color(color) {
            for next in tableau.neighbors(coord) {
                let next_card = tableau.get(next).unwrap();
                if next_card.number > card.number {
                    if let Some(points) = ArboretumValuation.value(&[card, next_card], &ctx) {
                        prop_assert!(best.points >= points);
                    }
                }
            }
        }
    }

    #[test]
    fn scoring_is_deterministic(moves in moves(), color in 0u8..3) {
        let tableau = grow(&moves);
        let color = ColorId::new(color);

        let mut scorer = PathScorer::new();
        let first = scorer.score(&tableau, color);
        let second = scorer.score(&tableau.snapshot(), color);
        prop_assert_eq!(first, second);
    }
}
