// Copyright 2026 the Kosara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `kosara_glyph_demo`.

use std::fmt::Write as _;

use kurbo::{Point, Rect};
use peniko::Color;

/// A small append-only SVG document.
#[derive(Debug)]
pub(crate) struct SvgDoc {
    view: Rect,
    body: String,
}

impl SvgDoc {
    pub(crate) fn new(view: Rect) -> Self {
        Self {
            view,
            body: String::new(),
        }
    }

    /// Appends a filled path. Empty path data (degenerate glyph markers) is skipped.
    pub(crate) fn path(&mut self, d: &str, fill: Color) {
        if d.is_empty() {
            return;
        }
        self.body.push_str(&format!(r#"<path d="{d}""#));
        write_paint_attr(&mut self.body, "fill", fill);
        self.body.push_str("/>\n");
    }

    /// Appends a circle, optionally filled and/or stroked.
    pub(crate) fn circle(
        &mut self,
        center: Point,
        radius: f64,
        fill: Option<Color>,
        stroke: Option<(Color, f64)>,
    ) {
        self.body.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="{}""#,
            center.x, center.y, radius
        ));
        match fill {
            Some(color) => write_paint_attr(&mut self.body, "fill", color),
            None => self.body.push_str(r#" fill="none""#),
        }
        if let Some((color, width)) = stroke {
            write_paint_attr(&mut self.body, "stroke", color);
            let _ = write!(self.body, r#" stroke-width="{width}""#);
        }
        self.body.push_str("/>\n");
    }

    /// Appends a filled rectangle.
    pub(crate) fn rect(&mut self, rect: Rect, fill: Color) {
        self.body.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
        ));
        write_paint_attr(&mut self.body, "fill", fill);
        self.body.push_str("/>\n");
    }

    /// Appends an unfilled, stroked rectangle.
    pub(crate) fn rect_outline(&mut self, rect: Rect, stroke: Color, width: f64) {
        self.body.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none""#,
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
        ));
        write_paint_attr(&mut self.body, "stroke", stroke);
        let _ = write!(self.body, r#" stroke-width="{width}""#);
        self.body.push_str("/>\n");
    }

    /// Appends a start-anchored, middle-baseline text label.
    pub(crate) fn text(&mut self, pos: Point, font_size: f64, text: &str) {
        self.body.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="middle" text-anchor="start">"#,
            pos.x, pos.y, font_size
        ));
        self.body.push_str(&escape_xml(text));
        self.body.push_str("</text>\n");
    }

    pub(crate) fn finish(self) -> String {
        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" "#,
                r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
                "\n{}</svg>\n"
            ),
            self.view.x0,
            self.view.y0,
            self.view.width(),
            self.view.height(),
            self.view.width(),
            self.view.height(),
            self.body
        )
    }
}

fn svg_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    if rgba.a == 0 {
        return ("none".to_string(), None);
    }
    let value = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (value, opacity)
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let (value, opacity) = svg_paint(color);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
