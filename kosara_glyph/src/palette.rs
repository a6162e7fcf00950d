// Copyright 2026 the Kosara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cell-type color schemes.
//!
//! The category-to-color mapping is an explicit value handed to the glyph builders,
//! not a global: views with different schemes (and user-switchable schemes) coexist
//! in one scene.

use peniko::Color;

use crate::cell_type::CellType;

/// A nine-entry cell-type color palette.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: [Color; CellType::COUNT],
}

impl Palette {
    /// Creates a palette from one color per cell type, in canonical order.
    pub const fn new(colors: [Color; CellType::COUNT]) -> Self {
        Self { colors }
    }

    /// The fill color for `cell`.
    pub fn color(&self, cell: CellType) -> Color {
        self.colors[cell.index()]
    }

    /// The house scheme used by the published spot maps.
    pub fn official() -> Self {
        Self::new([
            Color::from_rgb8(0xFF, 0xC4, 0x0C),
            Color::from_rgb8(0xFF, 0x08, 0x00),
            Color::from_rgb8(0xFD, 0xEE, 0x00),
            Color::from_rgb8(0x00, 0x7F, 0xFF),
            Color::from_rgb8(0x32, 0x17, 0x4D),
            Color::from_rgb8(0xE5, 0xE4, 0xE2),
            Color::from_rgb8(0xED, 0x91, 0x21),
            Color::from_rgb8(0x74, 0xC3, 0x65),
            Color::from_rgb8(0x35, 0x5E, 0x3B),
        ])
    }

    /// A ColorBrewer `Set1`-derived qualitative scheme.
    pub fn colorbrewer() -> Self {
        Self::new([
            Color::from_rgb8(0xE4, 0x1A, 0x1C),
            Color::from_rgb8(0x37, 0x7E, 0xB8),
            Color::from_rgb8(0x4D, 0xAF, 0x4A),
            Color::from_rgb8(0x98, 0x4E, 0xA3),
            Color::from_rgb8(0xFF, 0x7F, 0x00),
            Color::from_rgb8(0xFF, 0xFF, 0x33),
            Color::from_rgb8(0xA6, 0x56, 0x28),
            Color::from_rgb8(0xF7, 0x81, 0xBF),
            Color::from_rgb8(0x99, 0x99, 0x99),
        ])
    }

    /// An evenly spaced rainbow scheme.
    pub fn rainbow() -> Self {
        Self::new([
            Color::from_rgb8(0xFF, 0x08, 0x06),
            Color::from_rgb8(0xFF, 0xA7, 0x2C),
            Color::from_rgb8(0xA6, 0xFA, 0x44),
            Color::from_rgb8(0x00, 0xF9, 0x44),
            Color::from_rgb8(0x00, 0xFC, 0xB1),
            Color::from_rgb8(0x00, 0xAD, 0xFB),
            Color::from_rgb8(0x00, 0x3F, 0xF9),
            Color::from_rgb8(0xAC, 0x3F, 0xF9),
            Color::from_rgb8(0xFF, 0x29, 0xA6),
        ])
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::official()
    }
}
