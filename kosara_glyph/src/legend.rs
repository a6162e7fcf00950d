// Copyright 2026 the Kosara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend geometry: cell-type swatch rows and a gradient bar.
//!
//! Legends are emitted as plain geometry (swatch rects plus label anchor points) so
//! any renderer can draw them. Text shaping is out of scope; bounds estimation goes
//! through a small measuring hook.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;

use crate::cell_type::CellType;
use crate::palette::Palette;
use crate::scale::SequentialScale;

/// Label width estimation used for legend bounds.
///
/// Callers with a real shaping backend can implement this against it; the
/// [`HeuristicLabelMeasurer`] is good enough for layout margins.
pub trait LabelMeasurer {
    /// Estimated width of `text` at `font_size`, in scene units.
    fn width(&self, text: &str, font_size: f64) -> f64;
}

/// Assumes an average glyph width of ~0.6em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicLabelMeasurer;

impl LabelMeasurer for HeuristicLabelMeasurer {
    fn width(&self, text: &str, font_size: f64) -> f64 {
        0.6 * font_size * text.chars().count() as f64
    }
}

/// One legend row: a filled swatch and a label anchored at its left-middle.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendRow {
    /// The cell type this row describes.
    pub category: CellType,
    /// Swatch rectangle.
    pub swatch: Rect,
    /// Swatch fill.
    pub fill: Color,
    /// Label text.
    pub label: String,
    /// Label anchor (left edge, vertical middle of the row).
    pub label_pos: Point,
}

/// A vertical list of cell-type swatches with labels.
#[derive(Clone, Debug, PartialEq)]
pub struct SwatchLegendSpec {
    /// Legend origin (top-left).
    pub x: f64,
    /// Legend origin (top-left).
    pub y: f64,
    /// Swatch square size.
    pub swatch_size: f64,
    /// Vertical gap between rows.
    pub row_gap: f64,
    /// Horizontal gap between swatch and label.
    pub label_dx: f64,
    /// Label font size.
    pub font_size: f64,
}

impl SwatchLegendSpec {
    /// Creates a legend at the given origin with default metrics.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            swatch_size: 10.0,
            row_gap: 6.0,
            label_dx: 6.0,
            font_size: 10.0,
        }
    }

    /// Sets the swatch size.
    pub fn with_swatch_size(mut self, swatch_size: f64) -> Self {
        self.swatch_size = swatch_size;
        self
    }

    /// Sets the label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Generates one row per cell type, in canonical order.
    pub fn rows(&self, palette: &Palette) -> Vec<LegendRow> {
        let row_height = self.swatch_size.max(self.font_size);
        CellType::ALL
            .into_iter()
            .enumerate()
            .map(|(i, cell)| {
                let top = self.y + i as f64 * (row_height + self.row_gap);
                let swatch_top = top + (row_height - self.swatch_size) * 0.5;
                LegendRow {
                    category: cell,
                    swatch: Rect::new(
                        self.x,
                        swatch_top,
                        self.x + self.swatch_size,
                        swatch_top + self.swatch_size,
                    ),
                    fill: palette.color(cell),
                    label: String::from(cell.as_str()),
                    label_pos: Point::new(
                        self.x + self.swatch_size + self.label_dx,
                        top + row_height * 0.5,
                    ),
                }
            })
            .collect()
    }

    /// Estimated bounding box of the legend.
    pub fn bounds(&self, palette: &Palette, measurer: &impl LabelMeasurer) -> Rect {
        let row_height = self.swatch_size.max(self.font_size);
        let rows = self.rows(palette);
        let width = rows
            .iter()
            .map(|r| {
                self.swatch_size + self.label_dx + measurer.width(&r.label, self.font_size)
            })
            .fold(0.0, f64::max);
        let count = rows.len() as f64;
        let height = count * row_height + (count - 1.0) * self.row_gap;
        Rect::new(self.x, self.y, self.x + width, self.y + height)
    }
}

/// One sampled slice of a gradient bar.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientSlice {
    /// Slice rectangle.
    pub rect: Rect,
    /// Slice fill.
    pub fill: Color,
}

/// A horizontal gradient bar for a sequential scale, sampled into slices.
///
/// The left edge maps to the scale's domain minimum, the right edge to its
/// maximum; callers draw min/max tick labels themselves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientBarSpec {
    /// Bar rectangle.
    pub rect: Rect,
    /// Number of sampled slices.
    pub samples: usize,
}

impl GradientBarSpec {
    /// Creates a bar over `rect` with a default sampling density.
    pub fn new(rect: Rect) -> Self {
        Self { rect, samples: 64 }
    }

    /// Sets the number of sampled slices (minimum 1).
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples.max(1);
        self
    }

    /// Samples the scale into colored slices covering the bar left to right.
    pub fn slices(&self, scale: &SequentialScale) -> Vec<GradientSlice> {
        let n = self.samples.max(1);
        let w = self.rect.width() / n as f64;
        let span = scale.domain_max() - scale.domain_min();
        (0..n)
            .map(|i| {
                let x0 = self.rect.x0 + i as f64 * w;
                // Sample at the slice midpoint so both endpoints stay in-domain.
                let t = (i as f64 + 0.5) / n as f64;
                GradientSlice {
                    rect: Rect::new(x0, self.rect.y0, x0 + w, self.rect.y1),
                    fill: scale.map(scale.domain_min() + t * span),
                }
            })
            .collect()
    }
}
