// Copyright 2026 the Kosara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG path-data assembly.
//!
//! Kosara wedges are sequences of elliptical-arc commands, which `kurbo::BezPath`
//! would flatten into cubics. The renderer wants the arcs verbatim (flags included),
//! so paths are assembled directly as `d`-attribute strings.

extern crate alloc;

use alloc::string::String;
use core::fmt::Write as _;

use kurbo::Point;

/// An SVG path-data (`d` attribute) string under construction.
///
/// Commands are absolute and space-separated: `M x y`, `A r r 0 large sweep x y`,
/// `Z`. Coordinates are written with `f64`'s shortest round-trip formatting.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathData {
    d: String,
}

impl PathData {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a move-to command.
    pub fn move_to(&mut self, p: Point) {
        self.sep();
        let _ = write!(self.d, "M {} {}", p.x, p.y);
    }

    /// Appends a circular arc to `p` with the given radius and SVG flags.
    pub fn arc_to(&mut self, radius: f64, large_arc: bool, sweep: bool, p: Point) {
        self.sep();
        let _ = write!(
            self.d,
            "A {radius} {radius} 0 {} {} {} {}",
            u8::from(large_arc),
            u8::from(sweep),
            p.x,
            p.y
        );
    }

    /// Appends a close-path command.
    pub fn close(&mut self) {
        self.sep();
        self.d.push('Z');
    }

    /// Returns the finished path data.
    pub fn finish(self) -> String {
        self.d
    }

    fn sep(&mut self) {
        if !self.d.is_empty() {
            self.d.push(' ');
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn commands_are_space_separated_absolute() {
        let mut p = PathData::new();
        p.move_to(Point::new(1.0, 2.5));
        p.arc_to(4.0, false, true, Point::new(-3.0, 0.0));
        p.close();
        assert_eq!(p.finish(), "M 1 2.5 A 4 4 0 0 1 -3 0 Z");
    }

    #[test]
    fn flags_are_zero_or_one() {
        let mut p = PathData::new();
        p.move_to(Point::ORIGIN);
        p.arc_to(1.0, true, false, Point::new(1.0, 1.0));
        assert_eq!(p.finish(), "M 0 0 A 1 1 0 1 0 1 1");
    }
}
