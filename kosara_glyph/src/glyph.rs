// Copyright 2026 the Kosara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Kosara glyph path generation.
//!
//! A Kosara glyph is a pie-like shape in which each cell type's *angular width*
//! encodes its composition fraction and, in the radius-weighted variant, each
//! wedge's *arc radius* encodes a second magnitude (for example expression
//! strength). Wedges are circular-segment bands: every cumulative boundary is a
//! chord of the spot's base circle with an arc drawn across it, and consecutive
//! boundaries tile the disc without gaps.
//!
//! The builders are pure: one spot's composition in, an ordered list of
//! `(path, fill)` pairs out. The caller draws the filled paths and, where
//! appropriate, a separately stroked outline circle of the base radius.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use peniko::Color;
use peniko::color::palette::css;
use smallvec::SmallVec;

use crate::cell_type::{CategoryFilter, CellType};
use crate::geometry::{SEAM_DEG, WedgeBoundary, boundary_at, point_on_circle};
use crate::palette::Palette;
use crate::path::PathData;

/// Wedge widths of a fully composed glyph sum to this many degrees.
const FULL_TURN_DEG: f64 = 360.0;

/// Span threshold for the radius-weighted closing mask, in degrees.
///
/// When a partial filter leaves less than a quarter turn of real wedges, the
/// closing wedge of the glyph would read as a misleadingly large arc; a white mask
/// is appended to cap it.
const MASK_SPAN_DEG: f64 = 90.0;

/// Most wedges a single glyph will draw.
const MAX_WEDGES: usize = CellType::COUNT;

/// One spot's per-cell-type composition: a fraction and an allocated angular width
/// (degrees) for each cell type.
///
/// Widths are supplied data, precomputed upstream alongside the fractions; shown
/// widths sum to at most 360 degrees. Entries never set stay at zero and are not
/// drawn.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Composition {
    ratios: [f64; CellType::COUNT],
    angles: [f64; CellType::COUNT],
}

impl Composition {
    /// Creates an empty composition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fraction and angular width for `cell`.
    pub fn set(&mut self, cell: CellType, ratio: f64, angle: f64) {
        self.ratios[cell.index()] = ratio;
        self.angles[cell.index()] = angle;
    }

    /// Builds a composition from `(cell, ratio, angle)` entries.
    ///
    /// Entry order does not matter; a later entry for the same cell type overwrites
    /// an earlier one.
    pub fn from_entries(entries: impl IntoIterator<Item = (CellType, f64, f64)>) -> Self {
        let mut comp = Self::new();
        for (cell, ratio, angle) in entries {
            comp.set(cell, ratio, angle);
        }
        comp
    }

    /// The composition fraction for `cell`.
    pub fn ratio(&self, cell: CellType) -> f64 {
        self.ratios[cell.index()]
    }

    /// The angular width for `cell`, in degrees.
    pub fn angle(&self, cell: CellType) -> f64 {
        self.angles[cell.index()]
    }
}

/// Per-cell-type arc radii for the radius-weighted glyph variant.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Magnitudes {
    radii: [f64; CellType::COUNT],
}

impl Magnitudes {
    /// Creates all-zero magnitudes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the arc radius for `cell`.
    pub fn set(&mut self, cell: CellType, radius: f64) {
        self.radii[cell.index()] = radius;
    }

    /// Builds magnitudes from `(cell, radius)` entries, later entries winning.
    pub fn from_entries(entries: impl IntoIterator<Item = (CellType, f64)>) -> Self {
        let mut mags = Self::new();
        for (cell, radius) in entries {
            mags.set(cell, radius);
        }
        mags
    }

    /// The arc radius for `cell`.
    pub fn get(&self, cell: CellType) -> f64 {
        self.radii[cell.index()]
    }
}

/// One renderable glyph fragment: SVG path data plus its fill.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphPath {
    /// The cell type this fragment draws, or `None` for the empty marker and the
    /// closing mask.
    pub category: Option<CellType>,
    /// SVG path data (`d` attribute). Empty for the degenerate marker.
    pub d: String,
    /// Fill color.
    pub fill: Color,
}

/// A Kosara glyph generator for one spot.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphSpec {
    /// Spot center in scene coordinates (already resolution-scaled).
    pub center: Point,
    /// Base circle radius in scene coordinates.
    pub radius: f64,
    /// Which cell types may be drawn.
    pub filter: CategoryFilter,
    /// Cell-type fill colors.
    pub palette: Palette,
}

impl GlyphSpec {
    /// Creates a glyph spec with every cell type shown and the default palette.
    ///
    /// Panics if `radius` is not positive; that is a configuration bug, not bad
    /// spot data.
    pub fn new(center: Point, radius: f64) -> Self {
        assert!(radius > 0.0, "glyph base radius must be positive");
        Self {
            center,
            radius,
            filter: CategoryFilter::default(),
            palette: Palette::default(),
        }
    }

    /// Sets the visibility filter.
    pub fn with_filter(mut self, filter: CategoryFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Generates the fixed-radius glyph: every wedge arc uses the base radius.
    ///
    /// Returns one `(path, fill)` entry per drawn wedge in canonical cell-type
    /// order, or a single empty/transparent entry when nothing passes the filter.
    pub fn paths(&self, comp: &Composition) -> Vec<GlyphPath> {
        let cands = self.candidates(comp, |_| self.radius);
        self.build(&cands, false)
    }

    /// Generates the radius-weighted glyph: each wedge's own boundary arc uses the
    /// cell type's magnitude, while the rim arcs between wedges keep the base
    /// radius.
    ///
    /// When the filter hides any cell type and the drawn wedges span less than
    /// 90 degrees, a closing white mask is appended so the glyph does not read as a
    /// misleadingly large arc.
    pub fn weighted_paths(&self, comp: &Composition, magnitudes: &Magnitudes) -> Vec<GlyphPath> {
        let cands = self.candidates(comp, |cell| magnitudes.get(cell));
        self.build(&cands, self.filter.is_partial())
    }

    /// Selects and orders the wedges to draw.
    ///
    /// Non-zero fraction, non-zero width, and the filter pick the candidates; the
    /// fraction ordering only selects the top subset. Geometry always follows the
    /// canonical `X1..X9` order, otherwise wedges would overlap incorrectly.
    fn candidates(
        &self,
        comp: &Composition,
        arc_radius: impl Fn(CellType) -> f64,
    ) -> SmallVec<[Candidate; MAX_WEDGES]> {
        let mut picked: SmallVec<[Candidate; MAX_WEDGES]> = CellType::ALL
            .into_iter()
            .filter(|&cell| {
                comp.ratio(cell) != 0.0 && comp.angle(cell) != 0.0 && self.filter.admits(cell)
            })
            .map(|cell| Candidate {
                cell,
                ratio: comp.ratio(cell),
                width: comp.angle(cell),
                arc_radius: arc_radius(cell),
            })
            .collect();
        picked.sort_unstable_by(|a, b| b.ratio.total_cmp(&a.ratio));
        picked.truncate(MAX_WEDGES);
        picked.sort_unstable_by_key(|c| c.cell);
        picked
    }

    fn build(&self, cands: &[Candidate], mask: bool) -> Vec<GlyphPath> {
        assert!(self.radius > 0.0, "glyph base radius must be positive");

        if cands.is_empty() {
            // Degenerate marker: the spot still occupies its outline circle, which
            // the caller strokes separately.
            return alloc::vec![GlyphPath {
                category: None,
                d: String::new(),
                fill: Color::TRANSPARENT,
            }];
        }

        let mut out = Vec::with_capacity(cands.len() + 1);
        let mut cursor = 0.0;
        let mut previous: Option<WedgeBoundary> = None;
        let last_index = cands.len() - 1;

        for (i, cand) in cands.iter().enumerate() {
            cursor += cand.width;
            let boundary = boundary_at(self.center, self.radius, cursor, cand.arc_radius);
            let d = match previous {
                None if i == last_index && cursor >= FULL_TURN_DEG => {
                    full_circle_path(self.center, self.radius)
                }
                None => lens_path(self.radius, &boundary),
                Some(prev) if i == last_index => closing_path(self.radius, &prev),
                Some(prev) => band_path(self.radius, &prev, &boundary),
            };
            out.push(GlyphPath {
                category: Some(cand.cell),
                d,
                fill: self.palette.color(cand.cell),
            });
            previous = Some(boundary);
        }

        if mask && cursor < MASK_SPAN_DEG {
            if let Some(last) = previous {
                out.push(GlyphPath {
                    category: None,
                    d: mask_path(self.radius, &last),
                    fill: css::WHITE,
                });
            }
        }

        out
    }
}

#[derive(Clone, Copy, Debug)]
struct Candidate {
    cell: CellType,
    ratio: f64,
    width: f64,
    arc_radius: f64,
}

/// First wedge: a lens between the base-circle arc through the seam and the arc
/// across its own boundary chord.
fn lens_path(base_radius: f64, boundary: &WedgeBoundary) -> String {
    let mut p = PathData::new();
    p.move_to(boundary.start);
    p.arc_to(base_radius, false, false, boundary.end);
    p.arc_to(boundary.arc_radius, boundary.major, false, boundary.start);
    p.close();
    p.finish()
}

/// Middle wedge: the band between the previous boundary and this one, closed by
/// the two base-circle rim arcs.
fn band_path(base_radius: f64, prev: &WedgeBoundary, cur: &WedgeBoundary) -> String {
    let mut p = PathData::new();
    p.move_to(prev.start);
    p.arc_to(prev.arc_radius, prev.major, true, prev.end);
    p.arc_to(base_radius, false, false, cur.end);
    p.arc_to(cur.arc_radius, cur.major, false, cur.start);
    p.arc_to(base_radius, false, false, prev.start);
    p.close();
    p.finish()
}

/// Last wedge: everything beyond the previous boundary, via the major rim arc.
fn closing_path(base_radius: f64, prev: &WedgeBoundary) -> String {
    let mut p = PathData::new();
    p.move_to(prev.start);
    p.arc_to(base_radius, true, true, prev.end);
    p.arc_to(prev.arc_radius, prev.major, false, prev.start);
    p.close();
    p.finish()
}

/// Closing mask for partially filtered radius-weighted glyphs: the complement of
/// the final cumulative boundary, painted over the closing wedge's excess.
fn mask_path(base_radius: f64, last: &WedgeBoundary) -> String {
    let mut p = PathData::new();
    p.move_to(last.start);
    p.arc_to(base_radius, true, true, last.end);
    p.arc_to(last.arc_radius, last.major, false, last.start);
    p.close();
    p.finish()
}

/// A single wedge spanning the full turn: the base circle as two semicircular arcs.
fn full_circle_path(center: Point, radius: f64) -> String {
    let seam = point_on_circle(center, radius, SEAM_DEG);
    let antipode = point_on_circle(center, radius, SEAM_DEG + 180.0);
    let mut p = PathData::new();
    p.move_to(seam);
    p.arc_to(radius, true, false, antipode);
    p.arc_to(radius, true, false, seam);
    p.close();
    p.finish()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::format;
    use alloc::vec::Vec;

    use super::*;
    use crate::cell_type::CategorySet;

    fn spec() -> GlyphSpec {
        GlyphSpec::new(Point::new(0.0, 0.0), 10.0)
    }

    fn arc_count(d: &str) -> usize {
        d.matches("A ").count()
    }

    /// Expected cumulative boundary start point after `cumulative` degrees.
    fn boundary_start(spec: &GlyphSpec, cumulative: f64) -> Point {
        point_on_circle(spec.center, spec.radius, 45.0 + cumulative / 2.0)
    }

    #[test]
    fn single_full_width_category_is_a_full_circle() {
        let comp = Composition::from_entries([(CellType::X5, 1.0, 360.0)]);
        let spec = spec();
        let paths = spec.paths(&comp);

        assert_eq!(paths.len(), 1, "one visible category, one path");
        assert_eq!(paths[0].category, Some(CellType::X5));
        assert_eq!(paths[0].fill, spec.palette.color(CellType::X5));
        assert_eq!(arc_count(&paths[0].d), 2, "two semicircular arcs");
        let seam = point_on_circle(spec.center, spec.radius, 45.0);
        assert!(
            paths[0].d.starts_with(&format!("M {} {}", seam.x, seam.y)),
            "full circle starts at the seam"
        );
    }

    #[test]
    fn two_category_glyph_closes_with_a_large_arc() {
        let comp = Composition::from_entries([
            (CellType::X3, 0.75, 270.0),
            (CellType::X1, 0.25, 90.0),
        ]);
        let spec = spec();
        let paths = spec.paths(&comp);

        assert_eq!(paths.len(), 2, "two visible categories");
        assert_eq!(paths[0].category, Some(CellType::X1), "canonical order first");
        assert_eq!(paths[1].category, Some(CellType::X3));
        assert_eq!(arc_count(&paths[0].d), 2, "first wedge is a lens");
        assert!(
            paths[1].d.contains(" 0 1 1 "),
            "last wedge closes with the major rim arc"
        );
        // The closing wedge is anchored to the first wedge's boundary.
        let b1 = boundary_start(&spec, 90.0);
        assert!(paths[1].d.starts_with(&format!("M {} {}", b1.x, b1.y)));
    }

    #[test]
    fn full_glyph_tiles_the_circle_without_gaps() {
        let widths = [40.0, 30.0, 50.0, 45.0, 35.0, 60.0, 20.0, 48.0, 32.0];
        let entries = CellType::ALL
            .into_iter()
            .zip(widths)
            .map(|(cell, w)| (cell, w / 360.0, w));
        let comp = Composition::from_entries(entries);
        let spec = spec();
        let paths = spec.paths(&comp);

        assert_eq!(paths.len(), 9, "all nine categories drawn");
        assert_eq!(arc_count(&paths[0].d), 2, "lens form");
        for p in &paths[1..8] {
            assert_eq!(arc_count(&p.d), 4, "band form");
        }
        assert_eq!(arc_count(&paths[8].d), 2, "closing form");

        // Every wedge after the first starts exactly where the previous cumulative
        // boundary starts, so consecutive wedges share their bounding arcs.
        let mut cum = 0.0;
        for (i, w) in widths.iter().enumerate().take(8) {
            cum += w;
            let start = boundary_start(&spec, cum);
            assert!(
                paths[i + 1].d.starts_with(&format!("M {} {}", start.x, start.y)),
                "wedge {} must be anchored to the previous boundary",
                i + 1
            );
        }

        // And the final cumulative boundary closes on itself: no gap between the
        // last wedge's end and the seam where the first wedge began.
        let total: f64 = widths.iter().sum();
        let close_start = boundary_start(&spec, total);
        let close_end = point_on_circle(spec.center, spec.radius, 45.0 - total / 2.0);
        assert!(
            close_start.distance(close_end) < 1e-6,
            "360-degree glyph must close the circle"
        );
    }

    #[test]
    fn geometry_ignores_input_entry_order() {
        let entries = [
            (CellType::X2, 0.2, 72.0),
            (CellType::X7, 0.5, 180.0),
            (CellType::X4, 0.3, 108.0),
        ];
        let mut reversed = entries;
        reversed.reverse();

        let spec = spec();
        let a = spec.paths(&Composition::from_entries(entries));
        let b = spec.paths(&Composition::from_entries(reversed));
        assert_eq!(a, b, "paths depend on canonical order, not input order");

        let mags = Magnitudes::from_entries([
            (CellType::X2, 9.0),
            (CellType::X7, 12.0),
            (CellType::X4, 11.0),
        ]);
        let wa = spec.weighted_paths(&Composition::from_entries(entries), &mags);
        let wb = spec.weighted_paths(&Composition::from_entries(reversed), &mags);
        assert_eq!(wa, wb);
    }

    #[test]
    fn zero_ratio_and_zero_width_categories_are_never_drawn() {
        let comp = Composition::from_entries([
            (CellType::X1, 0.0, 45.0),
            (CellType::X2, 0.4, 0.0),
            (CellType::X3, 0.6, 216.0),
        ]);
        let paths = spec().paths(&comp);
        let drawn: Vec<_> = paths.iter().filter_map(|p| p.category).collect();
        assert_eq!(drawn, [CellType::X3]);
    }

    #[test]
    fn fully_filtered_spot_degenerates_to_a_transparent_marker() {
        let comp = Composition::from_entries([(CellType::X1, 0.6, 216.0)]);
        let filter = CategoryFilter::Shown(CategorySet::EMPTY);
        let paths = spec().with_filter(filter).paths(&comp);

        assert_eq!(paths.len(), 1, "exactly one degenerate entry");
        assert_eq!(paths[0].category, None);
        assert!(paths[0].d.is_empty());
        assert_eq!(paths[0].fill, Color::TRANSPARENT);
    }

    #[test]
    fn magnitude_past_threshold_flips_the_arc_flag() {
        let spec = spec();
        let comp = Composition::from_entries([(CellType::X1, 0.5, 60.0)]);
        let threshold = crate::geometry::MAJOR_ARC_RATIO * spec.radius;

        let below = spec.weighted_paths(
            &comp,
            &Magnitudes::from_entries([(CellType::X1, threshold - 0.01)]),
        );
        let above = spec.weighted_paths(
            &comp,
            &Magnitudes::from_entries([(CellType::X1, threshold + 0.01)]),
        );

        assert!(!below[0].d.contains(" 0 1 0 "), "minor arc below the threshold");
        assert!(above[0].d.contains(" 0 1 0 "), "major arc above the threshold");
        assert_ne!(below[0].d, above[0].d);
    }

    #[test]
    fn narrow_partial_glyph_gets_a_white_closing_mask() {
        let shown: CategorySet = [CellType::X1, CellType::X2, CellType::X3]
            .into_iter()
            .collect();
        let spec = spec().with_filter(CategoryFilter::Shown(shown));
        let mags = Magnitudes::from_entries(CellType::ALL.into_iter().map(|c| (c, 10.0)));

        // 20 + 20 + 20 = 60 degrees, under the 90-degree cap.
        let narrow = Composition::from_entries([
            (CellType::X1, 0.2, 20.0),
            (CellType::X2, 0.2, 20.0),
            (CellType::X3, 0.2, 20.0),
            (CellType::X5, 0.4, 300.0),
        ]);
        let paths = spec.weighted_paths(&narrow, &mags);
        assert_eq!(paths.len(), 4, "three wedges plus the mask");
        let mask = paths.last().unwrap();
        assert_eq!(mask.category, None);
        assert_eq!(mask.fill, css::WHITE);
        assert!(!mask.d.is_empty());

        // 30 + 30 + 30 = 90 degrees: at the cap, no mask.
        let wide = Composition::from_entries([
            (CellType::X1, 0.2, 30.0),
            (CellType::X2, 0.2, 30.0),
            (CellType::X3, 0.2, 30.0),
            (CellType::X5, 0.4, 270.0),
        ]);
        let paths = spec.weighted_paths(&wide, &mags);
        assert_eq!(paths.len(), 3, "no mask at or above 90 degrees");
        assert!(paths.iter().all(|p| p.fill != css::WHITE));
    }

    #[test]
    fn mask_requires_a_partial_filter() {
        let comp = Composition::from_entries([(CellType::X1, 1.0, 60.0)]);
        let mags = Magnitudes::from_entries([(CellType::X1, 10.0)]);

        let all_shown = spec().weighted_paths(&comp, &mags);
        assert_eq!(all_shown.len(), 1, "no mask when nothing is hidden");

        let interest = spec()
            .with_filter(CategoryFilter::Interest(CellType::X1))
            .weighted_paths(&comp, &mags);
        assert_eq!(interest.len(), 2, "interest override masks a narrow glyph");
        assert_eq!(interest[1].fill, css::WHITE);
    }

    #[test]
    fn fixed_variant_never_masks() {
        let shown: CategorySet = [CellType::X1].into_iter().collect();
        let comp = Composition::from_entries([(CellType::X1, 0.2, 20.0)]);
        let paths = spec().with_filter(CategoryFilter::Shown(shown)).paths(&comp);
        assert_eq!(paths.len(), 1);
        assert!(paths.iter().all(|p| p.fill != css::WHITE));
    }

    #[test]
    #[should_panic(expected = "glyph base radius must be positive")]
    fn non_positive_radius_is_a_programmer_error() {
        let _ = GlyphSpec::new(Point::new(0.0, 0.0), 0.0);
    }
}
