// Copyright 2026 the Kosara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sequential color scales for expression overlays.
//!
//! When the map shows a selected gene (or total UMI counts) instead of
//! compositions, each spot is a filled circle colored by a sequential ramp over the
//! observed value range.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use peniko::Color;

/// A piecewise-linear color ramp over a continuous `[min, max]` domain.
#[derive(Clone, Debug, PartialEq)]
pub struct SequentialScale {
    domain: (f64, f64),
    stops: Vec<Color>,
}

impl SequentialScale {
    /// Creates a scale from evenly spaced color stops.
    ///
    /// Panics on fewer than two stops; a ramp needs both ends.
    pub fn new(domain: (f64, f64), stops: Vec<Color>) -> Self {
        assert!(stops.len() >= 2, "a sequential scale needs at least two stops");
        Self { domain, stops }
    }

    /// The ColorBrewer nine-class Blues ramp used for expression overlays.
    pub fn blues(domain: (f64, f64)) -> Self {
        Self::new(
            domain,
            alloc::vec![
                Color::from_rgb8(0xF7, 0xFB, 0xFF),
                Color::from_rgb8(0xDE, 0xEB, 0xF7),
                Color::from_rgb8(0xC6, 0xDB, 0xEF),
                Color::from_rgb8(0x9E, 0xCA, 0xE1),
                Color::from_rgb8(0x6B, 0xAE, 0xD6),
                Color::from_rgb8(0x42, 0x92, 0xC6),
                Color::from_rgb8(0x21, 0x71, 0xB5),
                Color::from_rgb8(0x08, 0x51, 0x9C),
                Color::from_rgb8(0x08, 0x30, 0x6B),
            ],
        )
    }

    /// The minimum of the configured domain.
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// The maximum of the configured domain.
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }

    /// Maps a domain value to a ramp color, clamping outside the domain.
    pub fn map(&self, value: f64) -> Color {
        let (d0, d1) = self.domain;
        let t = if d1 == d0 {
            0.0
        } else {
            ((value - d0) / (d1 - d0)).clamp(0.0, 1.0)
        };

        let segments = self.stops.len() - 1;
        let scaled = t * segments as f64;
        #[allow(
            clippy::cast_possible_truncation,
            reason = "scaled is clamped to the stop index range"
        )]
        let i = (scaled as usize).min(segments - 1);
        lerp_rgb8(self.stops[i], self.stops[i + 1], scaled - i as f64)
    }
}

/// Returns the `(min, max)` of the finite values, or `None` if there are none.
///
/// NaNs are skipped rather than poisoning the domain; a single bad record must not
/// blank an entire overlay.
pub fn infer_domain(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let mut domain: Option<(f64, f64)> = None;
    for v in values {
        if !v.is_finite() {
            continue;
        }
        domain = Some(match domain {
            None => (v, v),
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
        });
    }
    domain
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "interpolating between u8 endpoints stays in 0..=255"
)]
fn lerp_rgb8(a: Color, b: Color, t: f64) -> Color {
    let a = a.to_rgba8();
    let b = b.to_rgba8();
    let channel = |x: u8, y: u8| -> u8 {
        let v = f64::from(x) + (f64::from(y) - f64::from(x)) * t;
        v.round() as u8
    };
    Color::from_rgb8(channel(a.r, b.r), channel(a.g, b.g), channel(a.b, b.b))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn endpoints_map_to_the_outer_stops() {
        let scale = SequentialScale::blues((2.0, 10.0));
        assert_eq!(scale.map(2.0), Color::from_rgb8(0xF7, 0xFB, 0xFF));
        assert_eq!(scale.map(10.0), Color::from_rgb8(0x08, 0x30, 0x6B));
    }

    #[test]
    fn out_of_domain_values_clamp() {
        let scale = SequentialScale::blues((0.0, 1.0));
        assert_eq!(scale.map(-5.0), scale.map(0.0));
        assert_eq!(scale.map(7.0), scale.map(1.0));
    }

    #[test]
    fn midpoints_interpolate_between_stops() {
        let scale = SequentialScale::new(
            (0.0, 1.0),
            alloc::vec![Color::from_rgb8(0, 0, 0), Color::from_rgb8(100, 200, 40)],
        );
        assert_eq!(scale.map(0.5), Color::from_rgb8(50, 100, 20));
    }

    #[test]
    fn degenerate_domain_maps_to_the_first_stop() {
        let scale = SequentialScale::blues((3.0, 3.0));
        assert_eq!(scale.map(3.0), Color::from_rgb8(0xF7, 0xFB, 0xFF));
    }

    #[test]
    fn domain_inference_skips_non_finite_values() {
        assert_eq!(
            infer_domain([3.0, f64::NAN, -1.5, 7.25]),
            Some((-1.5, 7.25))
        );
        assert_eq!(infer_domain([f64::NAN]), None);
        assert_eq!(infer_domain([]), None);
    }
}
