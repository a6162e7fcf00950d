// Copyright 2026 the Kosara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tiny HTML report assembly for the demo sections.

use std::fmt::Write as _;

/// One report section: a heading, a short description, and inline SVG markup.
#[derive(Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) svg: String,
}

pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{title}</title>");
    out.push_str(
        "<style>\n\
         body { font-family: sans-serif; margin: 24px; max-width: 960px; }\n\
         section { margin-bottom: 32px; }\n\
         h2 { margin-bottom: 4px; }\n\
         p.desc { color: #555; margin-top: 0; }\n\
         svg { background: #fff; border: 1px solid #ddd; }\n\
         </style>\n</head>\n<body>\n",
    );
    let _ = writeln!(out, "<h1>{title}</h1>");
    for section in sections {
        out.push_str("<section>\n");
        let _ = writeln!(out, "<h2>{}</h2>", section.title);
        let _ = writeln!(out, "<p class=\"desc\">{}</p>", section.description);
        out.push_str(&section.svg);
        out.push_str("</section>\n");
    }
    out.push_str("</body>\n</html>\n");
    out
}
