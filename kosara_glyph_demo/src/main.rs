// Copyright 2026 the Kosara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spot-map demos for `kosara_glyph`.
//!
//! Builds a deterministic synthetic tissue section and renders each view (Kosara
//! fixed, Kosara weighted, filtered, expression overlay, waffle, ingested table)
//! into one HTML report.

mod html;
mod svg;

use kosara_glyph::{
    CategoryFilter, CategorySet, CellType, Composition, GlyphSpec, GradientBarSpec,
    HeuristicLabelMeasurer, Magnitudes, Palette, ScaleFactors, SequentialScale, SpotTable,
    SwatchLegendSpec, WaffleSpec, infer_domain,
};
use kurbo::{Point, Rect};
use peniko::color::palette::css;

const COLS: usize = 10;
const ROWS: usize = 7;
const SPACING: f64 = 26.0;
const SPOT_RADIUS: f64 = 9.0;
const MARGIN: f64 = 20.0;

fn main() {
    let sections = vec![
        fixed_demo(),
        weighted_demo(),
        filtered_demo(),
        expression_demo(),
        waffle_demo(),
        ingest_demo(),
    ];

    let report = html::render_report("Kosara glyph demo", &sections);
    std::fs::write("kosara_glyph_demo.html", report).expect("write kosara_glyph_demo.html");
    println!("wrote kosara_glyph_demo.html");
}

/// One synthetic spot: a grid center plus deterministic composition/magnitudes.
struct DemoSpot {
    center: Point,
    composition: Composition,
    magnitudes: Magnitudes,
    level: f64,
}

/// SplitMix64, folded to `[0, 1)`. Keeps the report reproducible without a rand
/// dependency.
#[allow(
    clippy::cast_precision_loss,
    reason = "53 bits of the hash are exactly representable"
)]
fn pseudo(seed: u64) -> f64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;
    (z >> 11) as f64 / (1_u64 << 53) as f64
}

fn section_spots() -> Vec<DemoSpot> {
    let mut spots = Vec::with_capacity(COLS * ROWS);
    for row in 0..ROWS {
        for col in 0..COLS {
            let seed = (row * COLS + col) as u64;
            let center = Point::new(
                MARGIN + SPACING / 2.0 + col as f64 * SPACING,
                MARGIN + SPACING / 2.0 + row as f64 * SPACING,
            );

            // Skewed weights with a sparsity cutoff, normalized so the shown
            // angles of a fully visible spot sum to a whole turn.
            let mut weights = [0.0_f64; CellType::COUNT];
            for (i, w) in weights.iter_mut().enumerate() {
                let raw = pseudo(seed * 32 + i as u64);
                *w = if raw < 0.35 { 0.0 } else { raw * raw };
            }
            let total: f64 = weights.iter().sum();
            let mut composition = Composition::new();
            let mut magnitudes = Magnitudes::new();
            for (i, cell) in CellType::ALL.into_iter().enumerate() {
                let ratio = if total > 0.0 { weights[i] / total } else { 0.0 };
                composition.set(cell, ratio, ratio * 360.0);
                magnitudes.set(
                    cell,
                    SPOT_RADIUS * (0.6 + 1.6 * pseudo(seed * 32 + 16 + i as u64)),
                );
            }

            spots.push(DemoSpot {
                center,
                composition,
                magnitudes,
                level: pseudo(seed * 32 + 31),
            });
        }
    }
    spots
}

fn section_view() -> Rect {
    Rect::new(
        0.0,
        0.0,
        MARGIN * 2.0 + COLS as f64 * SPACING + 90.0,
        MARGIN * 2.0 + ROWS as f64 * SPACING,
    )
}

fn draw_swatch_legend(doc: &mut svg::SvgDoc, palette: &Palette) {
    let legend = SwatchLegendSpec::new(MARGIN + COLS as f64 * SPACING + 24.0, MARGIN);
    for row in legend.rows(palette) {
        doc.rect(row.swatch, row.fill);
        doc.text(row.label_pos, legend.font_size, &row.label);
    }
    // Bounds keep the legend inside the view; the section view reserves 90px.
    let bounds = legend.bounds(palette, &HeuristicLabelMeasurer);
    assert!(bounds.x1 < section_view().x1, "legend must fit the view");
}

fn draw_glyphs(doc: &mut svg::SvgDoc, spec_for: impl Fn(Point) -> GlyphSpec, weighted: bool) {
    for spot in section_spots() {
        let spec = spec_for(spot.center);
        let paths = if weighted {
            spec.weighted_paths(&spot.composition, &spot.magnitudes)
        } else {
            spec.paths(&spot.composition)
        };
        doc.circle(spot.center, SPOT_RADIUS, None, Some((css::BLACK, 0.3)));
        for p in paths {
            doc.path(&p.d, p.fill);
        }
    }
}

fn fixed_demo() -> html::HtmlSection {
    let palette = Palette::official();
    let mut doc = svg::SvgDoc::new(section_view());
    draw_glyphs(
        &mut doc,
        |center| GlyphSpec::new(center, SPOT_RADIUS).with_palette(Palette::official()),
        false,
    );
    draw_swatch_legend(&mut doc, &palette);

    html::HtmlSection {
        title: "Kosara (fixed radius)",
        description: "Every wedge arc uses the spot's base radius; angular width \
                      encodes the cell-type fraction.",
        svg: doc.finish(),
    }
}

fn weighted_demo() -> html::HtmlSection {
    let palette = Palette::official();
    let mut doc = svg::SvgDoc::new(section_view());
    draw_glyphs(
        &mut doc,
        |center| GlyphSpec::new(center, SPOT_RADIUS).with_palette(Palette::official()),
        true,
    );
    draw_swatch_legend(&mut doc, &palette);

    html::HtmlSection {
        title: "Kosara (radius weighted)",
        description: "Each wedge's boundary arc uses a per-cell-type magnitude, so \
                      petals bulge past or shrink inside the base circle.",
        svg: doc.finish(),
    }
}

fn filtered_demo() -> html::HtmlSection {
    let shown: CategorySet = [CellType::X1, CellType::X4, CellType::X7]
        .into_iter()
        .collect();
    let palette = Palette::official();
    let mut doc = svg::SvgDoc::new(section_view());
    draw_glyphs(
        &mut doc,
        |center| {
            GlyphSpec::new(center, SPOT_RADIUS)
                .with_filter(CategoryFilter::Shown(shown))
                .with_palette(Palette::official())
        },
        true,
    );
    draw_swatch_legend(&mut doc, &palette);

    html::HtmlSection {
        title: "Filtered (X1, X4, X7 shown)",
        description: "Hidden cell types leave their share of the turn unfilled; \
                      spots whose visible wedges span under a quarter turn get a \
                      white closing mask.",
        svg: doc.finish(),
    }
}

fn expression_demo() -> html::HtmlSection {
    let spots = section_spots();
    let domain =
        infer_domain(spots.iter().map(|s| s.level)).expect("synthetic levels are finite");
    let scale = SequentialScale::blues(domain);

    let mut doc = svg::SvgDoc::new(section_view());
    for spot in &spots {
        doc.circle(
            spot.center,
            SPOT_RADIUS,
            Some(scale.map(spot.level)),
            Some((css::BLACK, 0.3)),
        );
    }

    let bar_y = MARGIN + ROWS as f64 * SPACING - 10.0;
    let bar = GradientBarSpec::new(Rect::new(
        MARGIN + COLS as f64 * SPACING + 24.0,
        bar_y,
        MARGIN + COLS as f64 * SPACING + 84.0,
        bar_y + 8.0,
    ));
    for slice in bar.slices(&scale) {
        doc.rect(slice.rect, slice.fill);
    }
    doc.text(
        Point::new(bar.rect.x0, bar_y - 8.0),
        8.0,
        &format!("{:.2} - {:.2}", scale.domain_min(), scale.domain_max()),
    );

    html::HtmlSection {
        title: "Expression overlay",
        description: "Per-spot expression levels on the ColorBrewer Blues ramp, \
                      with the sampled gradient legend.",
        svg: doc.finish(),
    }
}

fn waffle_demo() -> html::HtmlSection {
    let palette = Palette::official();
    let mut doc = svg::SvgDoc::new(section_view());
    for spot in section_spots() {
        let grid = SPOT_RADIUS * 2.0;
        let origin = Point::new(spot.center.x - SPOT_RADIUS, spot.center.y - SPOT_RADIUS);
        let waffle = WaffleSpec::new(origin, grid);
        doc.rect_outline(
            Rect::new(origin.x, origin.y, origin.x + grid, origin.y + grid),
            css::BLACK,
            0.3,
        );
        for cell in waffle.cells(&spot.composition, &palette) {
            doc.rect(cell.rect, cell.fill);
        }
    }
    draw_swatch_legend(&mut doc, &palette);

    html::HtmlSection {
        title: "Waffle",
        description: "The 5x5 square-grid encoding: each cell type claims \
                      round(ratio * 25) squares, row-major in canonical order.",
        svg: doc.finish(),
    }
}

/// A miniature radius-weighted export, as the endpoint would serve it. Exercises
/// string-typed numeric cells and the optional radius columns.
const SAMPLE_TABLE: &str = r#"{
  "barcode": {"0": "AAACAACGAA", "1": "AAACAAGTAT", "2": "AAACACCAAT"},
  "x": {"0": 900.0, "1": "1600.0", "2": 2300.0},
  "y": {"0": 700.0, "1": 700.0, "2": "700.0"},
  "X1": {"0": 0.5, "1": 0.1, "2": 0.0},
  "X1_angle": {"0": 180.0, "1": 36.0, "2": 0.0},
  "X1_radius": {"0": 34.0, "1": 20.0, "2": 0.0},
  "X2": {"0": 0.25, "1": 0.0, "2": 0.6},
  "X2_angle": {"0": 90.0, "1": 0.0, "2": 216.0},
  "X2_radius": {"0": 30.0, "1": 0.0, "2": 38.0},
  "X3": {"0": 0.25, "1": 0.9, "2": 0.4},
  "X3_angle": {"0": 90.0, "1": 324.0, "2": 144.0},
  "X3_radius": {"0": 28.0, "1": 40.0, "2": 30.0},
  "X4": {"0": 0.0, "1": 0.0, "2": 0.0},
  "X4_angle": {"0": 0.0, "1": 0.0, "2": 0.0},
  "X4_radius": {"0": 0.0, "1": 0.0, "2": 0.0},
  "X5": {"0": 0.0, "1": 0.0, "2": 0.0},
  "X5_angle": {"0": 0.0, "1": 0.0, "2": 0.0},
  "X5_radius": {"0": 0.0, "1": 0.0, "2": 0.0},
  "X6": {"0": 0.0, "1": 0.0, "2": 0.0},
  "X6_angle": {"0": 0.0, "1": 0.0, "2": 0.0},
  "X6_radius": {"0": 0.0, "1": 0.0, "2": 0.0},
  "X7": {"0": 0.0, "1": 0.0, "2": 0.0},
  "X7_angle": {"0": 0.0, "1": 0.0, "2": 0.0},
  "X7_radius": {"0": 0.0, "1": 0.0, "2": 0.0},
  "X8": {"0": 0.0, "1": 0.0, "2": 0.0},
  "X8_angle": {"0": 0.0, "1": 0.0, "2": 0.0},
  "X8_radius": {"0": 0.0, "1": 0.0, "2": 0.0},
  "X9": {"0": 0.0, "1": 0.0, "2": 0.0},
  "X9_angle": {"0": 0.0, "1": 0.0, "2": 0.0},
  "X9_radius": {"0": 0.0, "1": 0.0, "2": 0.0}
}"#;

const SAMPLE_SCALE_FACTORS: &str = r#"{
  "spot_diameter_fullres": 160.0,
  "tissue_hires_scalef": 0.05,
  "tissue_lowres_scalef": 0.015
}"#;

fn ingest_demo() -> html::HtmlSection {
    let factors = ScaleFactors::from_json(SAMPLE_SCALE_FACTORS).expect("parse scale factors");
    let table = SpotTable::from_json(SAMPLE_TABLE).expect("parse sample table");
    let scalef = factors.tissue_hires_scalef;
    let spots = table.spots(scalef).expect("assemble sample spots");
    let radius = factors.spot_radius(scalef);

    let mut doc = svg::SvgDoc::new(Rect::new(0.0, 0.0, 160.0, 70.0));
    for spot in &spots {
        let spec = GlyphSpec::new(spot.center, radius)
            .with_filter(CategoryFilter::Interest(CellType::X1));
        let magnitudes = spot.magnitudes.clone().expect("radius columns present");
        doc.circle(spot.center, radius, None, Some((css::BLACK, 0.2)));
        for p in spec.weighted_paths(&spot.composition, &magnitudes) {
            doc.path(&p.d, p.fill);
        }
        doc.text(
            Point::new(spot.center.x - radius, spot.center.y + radius + 8.0),
            5.0,
            &spot.barcode,
        );
    }

    html::HtmlSection {
        title: "Ingested table (interest: X1)",
        description: "Three spots parsed from a column-oriented export (mixed \
                      string/number cells, radius columns), shown with a single \
                      interested cell type: one wide wedge, one narrow wedge with \
                      its closing mask, one empty marker.",
        svg: doc.finish(),
    }
}
