// Copyright 2026 the Kosara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circle geometry shared by both Kosara glyph variants.
//!
//! Wedge boundaries are chords of the spot's base circle, symmetric about a fixed
//! seam axis. Both variants must agree on the axis and direction conventions here;
//! a mismatch between them is the classic source of visually-plausible-but-wrong
//! glyphs, so the conventions are pinned down by unit tests.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::Point;

/// Angular position of the glyph seam, in degrees.
///
/// Every glyph opens its first wedge symmetrically about this axis, so a fully
/// composed circle meets itself at the seam's antipode. The value is a rendering
/// convention shared with previously published spot maps and must not change.
pub(crate) const SEAM_DEG: f64 = 45.0;

/// Chord-to-base-radius ratio (`sqrt(3)`) past which a boundary arc subtends more
/// than a half turn of its own circle and must be emitted as an SVG major arc.
pub(crate) const MAJOR_ARC_RATIO: f64 = 1.732_050_807_568_877_2;

/// Returns the point on the circle of `radius` around `center` at `degrees`.
///
/// The angle is measured from the downward vertical (screen coordinates, y grows
/// down), increasing clockwise on screen: 0 degrees maps to `(cx, cy + r)` and
/// 90 degrees to `(cx - r, cy)`.
pub fn point_on_circle(center: Point, radius: f64, degrees: f64) -> Point {
    let rad = degrees * (core::f64::consts::PI / 180.0);
    Point::new(center.x - radius * rad.sin(), center.y + radius * rad.cos())
}

/// One cumulative wedge boundary: a chord of the base circle plus the arc that is
/// drawn across it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WedgeBoundary {
    /// Chord endpoint on the seam-plus side.
    pub start: Point,
    /// Chord endpoint on the seam-minus side.
    pub end: Point,
    /// Radius of the arc drawn across the chord.
    pub arc_radius: f64,
    /// Whether that arc is the major arc of its circle.
    pub major: bool,
}

/// Computes the boundary after `cumulative_deg` degrees of wedge width have been
/// laid down.
///
/// Wedge widths sum to at most 360 degrees for a full glyph; the chord endpoints sit
/// at `SEAM_DEG` plus/minus half the cumulative width, so a 360-degree total closes
/// the circle at the seam's antipode. `arc_radius` is the radius of the arc drawn
/// across this chord: the base radius for the fixed-radius variant, the category
/// magnitude for the radius-weighted one.
pub(crate) fn boundary_at(
    center: Point,
    base_radius: f64,
    cumulative_deg: f64,
    arc_radius: f64,
) -> WedgeBoundary {
    let offset = cumulative_deg / 2.0;
    WedgeBoundary {
        start: point_on_circle(center, base_radius, SEAM_DEG + offset),
        end: point_on_circle(center, base_radius, SEAM_DEG - offset),
        arc_radius,
        major: arc_radius > MAJOR_ARC_RATIO * base_radius,
    }
}
