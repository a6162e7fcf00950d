// Copyright 2026 the Kosara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waffle glyph generation.
//!
//! The waffle view encodes a spot's composition as a 5x5 grid of squares: each cell
//! type claims `round(ratio * 25)` squares, filled row-major in canonical order.
//! Rounding means a spot can claim slightly more or fewer than 25 squares; the grid
//! is capped at 25 and any remainder is simply left unfilled.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::{Point, Rect};
use peniko::Color;

use crate::cell_type::CellType;
use crate::glyph::Composition;
use crate::palette::Palette;

/// Squares per waffle row and column.
pub const WAFFLE_GRID: usize = 5;

/// One filled waffle square.
#[derive(Clone, Debug, PartialEq)]
pub struct WaffleCell {
    /// The cell type this square counts toward.
    pub category: CellType,
    /// Square rectangle.
    pub rect: Rect,
    /// Square fill.
    pub fill: Color,
}

/// A waffle glyph generator for one spot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaffleSpec {
    /// Grid origin (top-left) in scene coordinates.
    pub origin: Point,
    /// Side length of the full grid in scene coordinates.
    pub grid_size: f64,
}

impl WaffleSpec {
    /// Creates a waffle spec.
    ///
    /// Panics if `grid_size` is not positive.
    pub fn new(origin: Point, grid_size: f64) -> Self {
        assert!(grid_size > 0.0, "waffle grid size must be positive");
        Self { origin, grid_size }
    }

    /// Generates the filled squares for one composition.
    pub fn cells(&self, comp: &Composition, palette: &Palette) -> Vec<WaffleCell> {
        let total = WAFFLE_GRID * WAFFLE_GRID;
        let cell_size = self.grid_size / WAFFLE_GRID as f64;
        let mut out = Vec::with_capacity(total);
        let mut filled = 0_usize;

        for cat in CellType::ALL {
            let claimed = comp.ratio(cat) * total as f64;
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                reason = "ratios are fractions of a 25-square grid"
            )]
            let count = claimed.round().max(0.0) as usize;
            for _ in 0..count {
                if filled == total {
                    return out;
                }
                let row = filled / WAFFLE_GRID;
                let col = filled % WAFFLE_GRID;
                let x0 = self.origin.x + col as f64 * cell_size;
                let y0 = self.origin.y + row as f64 * cell_size;
                out.push(WaffleCell {
                    category: cat,
                    rect: Rect::new(x0, y0, x0 + cell_size, y0 + cell_size),
                    fill: palette.color(cat),
                });
                filled += 1;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn squares_are_claimed_in_canonical_order() {
        let comp = Composition::from_entries([
            (CellType::X3, 0.2, 0.0),
            (CellType::X1, 0.4, 0.0),
        ]);
        let cells = WaffleSpec::new(Point::ORIGIN, 10.0).cells(&comp, &Palette::default());
        // 0.4 * 25 = 10 squares of X1, then 0.2 * 25 = 5 of X3.
        assert_eq!(cells.len(), 15);
        assert!(cells[..10].iter().all(|c| c.category == CellType::X1));
        assert!(cells[10..].iter().all(|c| c.category == CellType::X3));
        // Row-major: the sixth square starts the second row.
        assert_eq!(cells[5].rect.y0, cells[0].rect.y1);
        assert_eq!(cells[5].rect.x0, cells[0].rect.x0);
    }

    #[test]
    fn grid_caps_at_twenty_five_squares() {
        let comp = Composition::from_entries(CellType::ALL.map(|c| (c, 0.2, 0.0)));
        let cells = WaffleSpec::new(Point::ORIGIN, 5.0).cells(&comp, &Palette::default());
        assert_eq!(cells.len(), 25, "9 * round(0.2 * 25) overflows and is capped");
        let last = &cells[24];
        assert_eq!(last.rect.x1, 5.0);
        assert_eq!(last.rect.y1, 5.0);
    }

    #[test]
    #[should_panic(expected = "waffle grid size must be positive")]
    fn zero_grid_size_is_rejected() {
        let _ = WaffleSpec::new(Point::ORIGIN, 0.0);
    }
}
