// Copyright 2026 the Kosara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column-oriented spot table ingestion.
//!
//! The composition endpoint serves one JSON object per table, column-major and
//! keyed by row index:
//!
//! ```json
//! {
//!   "barcode": {"0": "AAACAACGAA", "1": "AAACAAGTAT"},
//!   "x": {"0": 4101.0, "1": "2315.5"},
//!   "y": {"0": 1211.0, "1": 980.0},
//!   "X1": {"0": 0.25, "1": 0.0},
//!   "X1_angle": {"0": 90.0, "1": 0.0},
//!   "X1_radius": {"0": 3.1, "1": 0.0}
//! }
//! ```
//!
//! Numeric cells may arrive as JSON numbers or as strings; both are accepted. The
//! `*_radius` columns are only present for radius-weighted exports. Raw pixel
//! coordinates are pre-scaled here by the caller-chosen resolution scale factor, so
//! downstream glyph code works in scene coordinates only.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use kurbo::Point;
use serde::Deserialize;

use crate::cell_type::CellType;
use crate::glyph::{Composition, Magnitudes};

/// The scale-factor sidecar shipped next to each tissue image
/// (`scalefactors_json.json`).
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct ScaleFactors {
    /// Spot diameter in full-resolution pixels.
    pub spot_diameter_fullres: f64,
    /// Full-resolution to high-resolution image scale factor.
    pub tissue_hires_scalef: f64,
    /// Full-resolution to low-resolution image scale factor.
    pub tissue_lowres_scalef: f64,
}

impl ScaleFactors {
    /// Parses the sidecar JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Spot radius in the coordinate space of an image with the given scale factor.
    pub fn spot_radius(&self, scalef: f64) -> f64 {
        self.spot_diameter_fullres * scalef / 2.0
    }
}

/// One ingested spot, in scene coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Spot {
    /// Opaque barcode identifier, unique per spot.
    pub barcode: String,
    /// Spot center, pre-scaled by the resolution scale factor.
    pub center: Point,
    /// Per-cell-type fractions and angular widths.
    pub composition: Composition,
    /// Per-cell-type arc radii, when the table carries `*_radius` columns.
    pub magnitudes: Option<Magnitudes>,
}

/// A raw column-oriented spot table, as deserialized from the endpoint JSON.
#[derive(Clone, Debug, Deserialize)]
#[serde(transparent)]
pub struct SpotTable {
    columns: HashMap<String, HashMap<String, Field>>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
enum Field {
    Number(f64),
    Text(String),
}

impl Field {
    fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Text(s) => s.parse().ok(),
        }
    }
}

/// Errors surfaced while assembling [`Spot`]s from a raw table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpotTableError {
    /// A required column is absent.
    MissingColumn(String),
    /// A column has no cell for a row index present in the barcode column.
    MissingValue {
        /// Column name.
        column: String,
        /// Row index key.
        index: String,
    },
    /// A cell could not be read as a number.
    BadNumber {
        /// Column name.
        column: String,
        /// Row index key.
        index: String,
    },
}

impl fmt::Display for SpotTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColumn(column) => write!(f, "missing column `{column}`"),
            Self::MissingValue { column, index } => {
                write!(f, "column `{column}` has no value at row index `{index}`")
            }
            Self::BadNumber { column, index } => {
                write!(f, "column `{column}` row index `{index}` is not a number")
            }
        }
    }
}

impl core::error::Error for SpotTableError {}

impl SpotTable {
    /// Parses a table from endpoint JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Number of rows (barcodes) in the table.
    pub fn len(&self) -> usize {
        self.columns.get("barcode").map_or(0, |col| col.len())
    }

    /// Returns whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Assembles spots, pre-scaling raw pixel coordinates by `scalef`.
    ///
    /// Rows come out in ascending row-index order. Magnitudes are populated iff the
    /// table carries radius columns.
    pub fn spots(&self, scalef: f64) -> Result<Vec<Spot>, SpotTableError> {
        let barcodes = self
            .columns
            .get("barcode")
            .ok_or_else(|| SpotTableError::MissingColumn(String::from("barcode")))?;
        let has_radii = self.columns.contains_key("X1_radius");

        // Row-index keys are decimal strings; sort them numerically so output
        // order is deterministic and matches the upstream export.
        let mut indices: Vec<&String> = barcodes.keys().collect();
        indices.sort_by_key(|k| k.parse::<u64>().unwrap_or(u64::MAX));

        let mut spots = Vec::with_capacity(indices.len());
        for index in indices {
            let barcode = match &barcodes[index] {
                Field::Text(s) => s.clone(),
                Field::Number(v) => format!("{v}"),
            };
            let x = self.number("x", index)? * scalef;
            let y = self.number("y", index)? * scalef;

            let mut composition = Composition::new();
            let mut magnitudes = Magnitudes::new();
            for cell in CellType::ALL {
                let ratio = self.number(cell.as_str(), index)?;
                let angle = self.number(&format!("{cell}_angle"), index)?;
                composition.set(cell, ratio, angle);
                if has_radii {
                    magnitudes.set(cell, self.number(&format!("{cell}_radius"), index)?);
                }
            }

            spots.push(Spot {
                barcode,
                center: Point::new(x, y),
                composition,
                magnitudes: has_radii.then_some(magnitudes),
            });
        }
        Ok(spots)
    }

    fn number(&self, column: &str, index: &str) -> Result<f64, SpotTableError> {
        let col = self
            .columns
            .get(column)
            .ok_or_else(|| SpotTableError::MissingColumn(String::from(column)))?;
        let field = col.get(index).ok_or_else(|| SpotTableError::MissingValue {
            column: String::from(column),
            index: String::from(index),
        })?;
        field.as_f64().ok_or_else(|| SpotTableError::BadNumber {
            column: String::from(column),
            index: String::from(index),
        })
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn table_json(with_radius: bool) -> String {
        let mut json = String::from(
            r#"{
              "barcode": {"0": "AAACAACGAA", "1": "AAACAAGTAT"},
              "x": {"0": 100.0, "1": "200.0"},
              "y": {"0": 50.0, "1": "75.5"}"#,
        );
        for cell in CellType::ALL {
            json.push_str(&format!(
                r#", "{cell}": {{"0": 0.1, "1": "0.2"}}, "{cell}_angle": {{"0": 40.0, "1": 40.0}}"#
            ));
            if with_radius {
                json.push_str(&format!(r#", "{cell}_radius": {{"0": 3.5, "1": 4.5}}"#));
            }
        }
        json.push('}');
        json
    }

    #[test]
    fn parses_rows_in_index_order_and_scales_coordinates() {
        let table = SpotTable::from_json(&table_json(false)).expect("valid json");
        assert_eq!(table.len(), 2);

        let spots = table.spots(0.5).expect("complete table");
        assert_eq!(spots.len(), 2);
        assert_eq!(spots[0].barcode, "AAACAACGAA");
        assert_eq!(spots[0].center, Point::new(50.0, 25.0));
        // String-typed cells coerce like numeric ones.
        assert_eq!(spots[1].center, Point::new(100.0, 37.75));
        assert_eq!(spots[1].composition.ratio(CellType::X4), 0.2);
        assert_eq!(spots[0].composition.angle(CellType::X9), 40.0);
        assert!(spots[0].magnitudes.is_none());
    }

    #[test]
    fn radius_columns_populate_magnitudes() {
        let table = SpotTable::from_json(&table_json(true)).expect("valid json");
        let spots = table.spots(1.0).expect("complete table");
        let mags = spots[1].magnitudes.as_ref().expect("radius columns present");
        assert_eq!(mags.get(CellType::X6), 4.5);
    }

    #[test]
    fn missing_columns_are_reported_by_name() {
        let table = SpotTable::from_json(r#"{"barcode": {"0": "AAAC"}}"#).expect("valid json");
        assert_eq!(
            table.spots(1.0),
            Err(SpotTableError::MissingColumn(String::from("x")))
        );
    }

    #[test]
    fn non_numeric_cells_are_reported() {
        let json = r#"{
          "barcode": {"0": "AAAC"},
          "x": {"0": "wat"},
          "y": {"0": 1.0}
        }"#;
        let table = SpotTable::from_json(json).expect("valid json");
        assert_eq!(
            table.spots(1.0),
            Err(SpotTableError::BadNumber {
                column: String::from("x"),
                index: String::from("0"),
            })
        );
    }
}
