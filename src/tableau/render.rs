//! Plain-text tableau snapshots for debugging.

use super::coord::Coord;
use super::grid::Tableau;

/// Render the occupied bounding box, one row per y (ascending), one column
/// per x (ascending). Empty cells are blank; every cell has the same width.
#[must_use]
pub fn render(tableau: &Tableau) -> String {
    let Some(bounds) = tableau.bounds() else {
        return String::new();
    };

    let width = tableau
        .iter()
        .map(|(_, card)| card.to_string().len())
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    for y in bounds.min_y..=bounds.max_y {
        let row: Vec<String> = (bounds.min_x..=bounds.max_x)
            .map(|x| match tableau.get(Coord::new(x, y)) {
                Some(card) => format!("{:>width$}", card.to_string()),
                None => " ".repeat(width),
            })
            .collect();
        out.push_str(row.join(" ").trim_end());
        out.push('\n');
    }
    out
}
