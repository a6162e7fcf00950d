// Copyright 2026 the Kosara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph geometry for spatial spot maps.
//!
//! A tissue section is sampled at fixed **spots**; each spot carries a composition of
//! up to nine cell-type fractions. This crate turns one spot's composition into the
//! geometry a renderer needs:
//! - **Kosara glyphs**: stacked circular-segment wedges emitted as SVG arc-path data,
//!   in a fixed-radius and a radius-weighted ("magnitude") variant.
//! - **Waffle glyphs**: the 5x5 square-grid alternative encoding.
//! - **Palettes and scales**: cell-type color schemes and a sequential scale for
//!   per-spot expression overlays.
//!
//! Everything here is a pure transform of its inputs. Fetching spot tables, brushing,
//! zooming, and widget chrome are the surrounding application's concern; the caller
//! renders each returned path as a filled element plus a separately stroked outline
//! circle where appropriate.

#![no_std]

extern crate alloc;

mod cell_type;
#[cfg(not(feature = "std"))]
mod float;
mod geometry;
mod glyph;
mod legend;
mod palette;
mod path;
mod scale;
#[cfg(feature = "serde")]
mod spot;
mod waffle;

pub use cell_type::{CategoryFilter, CategorySet, CellType, ParseCellTypeError};
pub use geometry::{WedgeBoundary, point_on_circle};
pub use glyph::{Composition, GlyphPath, GlyphSpec, Magnitudes};
pub use legend::{
    GradientBarSpec, GradientSlice, HeuristicLabelMeasurer, LabelMeasurer, LegendRow,
    SwatchLegendSpec,
};
pub use palette::Palette;
pub use path::PathData;
pub use scale::{SequentialScale, infer_domain};
#[cfg(feature = "serde")]
pub use spot::{ScaleFactors, Spot, SpotTable, SpotTableError};
pub use waffle::{WAFFLE_GRID, WaffleCell, WaffleSpec};
