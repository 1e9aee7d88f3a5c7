// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! SVG output
//!
//! Attribute names and values from [`TextOptions::attributes`] are written
//! verbatim. Escaping is the caller's responsibility.

use crate::conv::to_f64;
use crate::fonts::OutlineFont;
use crate::{Error, TextOptions, TextToSvg};
use std::fmt;

/// Decimal places used in path data
const PRECISION: usize = 2;

const SVG_OPEN: &str =
    r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink""#;

/// Formats a number for an attribute value, writing `-0` as `0`
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0 + 0.0)
    }
}

impl<F: OutlineFont> TextToSvg<F> {
    /// Path data for a single line
    ///
    /// The line is anchored by [`Self::metrics_for_line`].
    pub fn path_data(&self, line: &str, options: &TextOptions) -> Result<String, Error> {
        let metrics = self.metrics_for_line(line, options)?;
        log::trace!(
            "path_data: line at ({}, {}), width {}",
            metrics.x,
            metrics.baseline,
            metrics.width
        );
        let path = self.font.outline(
            line,
            metrics.x,
            metrics.baseline,
            options.font_size(),
            &options.outline_options(),
        )?;
        Ok(path.to_path_data(PRECISION))
    }

    /// A `<path>` element for (possibly multi-line) text
    ///
    /// Line `i` is placed `i * font_size` below the first. Each line is
    /// anchored independently against its own size.
    pub fn path(&self, text: &str, options: &TextOptions) -> Result<String, Error> {
        let font_size = options.font_size();
        let mut ds = Vec::new();
        for (i, line) in text.split('\n').enumerate() {
            let mut line_options = options.clone();
            line_options.y = options.y + font_size * to_f64(i);
            ds.push(self.path_data(line, &line_options)?);
        }
        let d = ds.join(" ");

        let attributes = options
            .attributes
            .iter()
            .map(|(name, value)| format!("{name}=\"{value}\""))
            .collect::<Vec<_>>()
            .join(" ");

        Ok(if attributes.is_empty() {
            format!("<path d=\"{d}\"/>")
        } else {
            format!("<path {attributes} d=\"{d}\"/>")
        })
    }

    /// A standalone `<svg>` element
    ///
    /// The element is sized by [`Self::metrics`].
    pub fn svg(&self, text: &str, options: &TextOptions) -> Result<String, Error> {
        let metrics = self.metrics(text, options)?;
        let path = self.path(text, options)?;
        Ok(format!(
            "{SVG_OPEN} width=\"{}\" height=\"{}\">{path}</svg>",
            Num(metrics.width),
            Num(metrics.height)
        ))
    }

    /// An `<svg>` element with the anchor marked
    ///
    /// The view is enlarged to include both the text and the point `(0, 0)`,
    /// and everything is shifted so that no coordinate is negative. Red lines
    /// through the shifted `(0, 0)` mark the x and y axes; with the default
    /// position this is the anchor point.
    pub fn debug_svg(&self, text: &str, options: &TextOptions) -> Result<String, Error> {
        let mut options = options.clone();
        let metrics = self.metrics(text, &options)?;

        let right = (metrics.x + metrics.width).max(0.0);
        let bottom = (metrics.y + metrics.height).max(0.0);
        let width = right - metrics.x.min(0.0);
        let height = bottom - metrics.y.min(0.0);
        let origin_x = width - right;
        let origin_y = height - bottom;

        options.x += origin_x;
        options.y += origin_y;
        let path = self.path(text, &options)?;

        let (w, h) = (Num(width), Num(height));
        let (ox, oy) = (Num(origin_x), Num(origin_y));
        Ok(format!(
            "{SVG_OPEN} width=\"{w}\" height=\"{h}\">\
            <path fill=\"none\" stroke=\"red\" stroke-width=\"1\" d=\"M0,{oy}L{w},{oy}\"/>\
            <path fill=\"none\" stroke=\"red\" stroke-width=\"1\" d=\"M{ox},0L{ox},{h}\"/>\
            {path}</svg>"
        ))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fonts::testing::TestFont;

    fn engine() -> TextToSvg<TestFont> {
        TextToSvg::new(TestFont)
    }

    /// Font size at which the test font's units equal pixels
    fn unit_options() -> TextOptions {
        TextOptions::new().with_font_size(1000.0)
    }

    #[test]
    fn path_data_single_glyph() {
        let d = engine().path_data("A", &unit_options()).unwrap();
        assert_eq!(d, "M0 0L600 0L600-700L0-700Z");
    }

    #[test]
    fn path_data_anchored() {
        let opts = unit_options().with_anchor("right top").with_position(1000.0, 0.0);
        let d = engine().path_data("H", &opts).unwrap();
        // right edge at x = 1000; baseline 800 below the top
        assert_eq!(d, "M300 800L1000 800L1000 100L300 100Z");
    }

    #[test]
    fn empty_path() {
        assert_eq!(
            engine().path("", &TextOptions::new()).unwrap(),
            "<path d=\"\"/>"
        );
    }

    #[test]
    fn attributes() {
        let opts = TextOptions::new().with_attribute("fill", "red");
        let path = engine().path("Hi", &opts).unwrap();
        assert!(path.starts_with("<path fill=\"red\" d=\""));
        assert_eq!(path.matches("fill=\"red\"").count(), 1);
    }

    #[test]
    fn attributes_not_escaped() {
        let opts = TextOptions::new().with_attribute("data-x", "a\"b");
        let path = engine().path("", &opts).unwrap();
        assert_eq!(path, "<path data-x=\"a\"b\" d=\"\"/>");
    }

    #[test]
    fn multi_line_path() {
        let path = engine().path("A\nA", &unit_options()).unwrap();
        assert_eq!(
            path,
            "<path d=\"M0 0L600 0L600-700L0-700Z \
            M0 1000L600 1000L600 300L0 300Z\"/>"
        );
    }

    #[test]
    fn multi_line_centered() {
        let opts = unit_options().with_anchor("center");
        let path = engine().path("A\nAA", &opts).unwrap();
        assert!(path.starts_with("<path d=\"M-300 0L300 0"));
        assert!(path.contains(" M-600 1000L0 1000"));
    }

    #[test]
    fn svg_document() {
        let svg = engine().svg("Hi", &unit_options()).unwrap();
        assert_eq!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" \
            xmlns:xlink=\"http://www.w3.org/1999/xlink\" width=\"950\" height=\"1000\">\
            <path d=\"M0 0L700 0L700-700L0-700ZM700 0L950 0L950-700L700-700Z\"/></svg>"
        );
    }

    #[test]
    fn debug_svg_default_anchor() {
        let svg = engine().debug_svg("A", &unit_options()).unwrap();
        // box: x in [0, 600], y in [-800, 200]; origin shifts y by 800
        assert!(svg.contains("width=\"600\" height=\"1000\""));
        assert!(svg.contains("d=\"M0,800L600,800\""));
        assert!(svg.contains("d=\"M0,0L0,1000\""));
        assert!(svg.ends_with("<path d=\"M0 800L600 800L600 100L0 100Z\"/></svg>"));
    }

    #[test]
    fn debug_svg_right_bottom() {
        let opts = unit_options().with_anchor("right bottom");
        let svg = engine().debug_svg("A", &opts).unwrap();
        // box spans [-600, 0] × [-1000, 0]
        assert!(svg.contains("width=\"600\" height=\"1000\""));
        assert!(svg.contains("d=\"M0,1000L600,1000\""));
        assert!(svg.contains("d=\"M600,0L600,1000\""));
        assert!(svg.ends_with("<path d=\"M0 800L600 800L600 100L0 100Z\"/></svg>"));
    }

    #[test]
    fn debug_svg_offset_position() {
        let opts = unit_options().with_position(100.0, 50.0);
        let svg = engine().debug_svg("A", &opts).unwrap();
        // box spans [0, 700] × [-750, 250]; (0, 0) lands at (0, 750)
        assert!(svg.contains("width=\"700\" height=\"1000\""));
        assert!(svg.contains("d=\"M0,750L700,750\""));
        assert!(svg.contains("d=\"M0,0L0,1000\""));
        assert!(svg.ends_with("<path d=\"M100 800L700 800L700 100L100 100Z\"/></svg>"));
    }

    #[test]
    fn debug_svg_axes_inside_box() {
        let e = engine();
        for anchor in ["", "center middle", "right top", "left bottom"] {
            let opts = TextOptions::new().with_anchor(anchor);
            let m = e.metrics("Hi\nA", &opts).unwrap();
            let svg = e.debug_svg("Hi\nA", &opts).unwrap();
            let width = (m.x + m.width).max(0.0) - m.x.min(0.0);
            let height = (m.y + m.height).max(0.0) - m.y.min(0.0);
            assert!(width >= 0.0 && height >= 0.0);
            assert!(svg.contains(&format!("width=\"{}\" height=\"{}\"", width, height)));
        }
    }

    #[test]
    fn render_idempotent() {
        let e = engine();
        let opts = TextOptions::new()
            .with_anchor("center middle")
            .with_tracking(25.0)
            .with_attribute("fill", "#000");
        assert_eq!(e.svg("AV\nHi", &opts).unwrap(), e.svg("AV\nHi", &opts).unwrap());
        assert_eq!(
            e.debug_svg("AV\nHi", &opts).unwrap(),
            e.debug_svg("AV\nHi", &opts).unwrap()
        );
    }

    #[test]
    fn render_error_propagates() {
        let e = engine();
        assert!(matches!(
            e.svg("#", &TextOptions::new()),
            Err(Error::GlyphOutline(_))
        ));
    }
}
