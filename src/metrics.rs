// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Text measurement and anchoring

use crate::fonts::OutlineFont;
use crate::{shaper, Anchor, Error, TextOptions, TextToSvg};

/// Measured and anchored text
///
/// All values are in pixels. `x` and `y` give the top-left corner of the
/// anchored box; `baseline` is the y coordinate of the first line's
/// baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineMetrics {
    pub x: f64,
    pub y: f64,
    pub baseline: f64,
    pub width: f64,
    pub height: f64,
    pub ascender: f64,
    pub descender: f64,
}

impl<F: OutlineFont> TextToSvg<F> {
    /// Width of a single line of text
    ///
    /// Includes glyph advances, pair kerning (unless disabled) and letter
    /// spacing or tracking after each glyph.
    pub fn width(&self, text: &str, options: &TextOptions) -> Result<f64, Error> {
        let run = shaper::shape(
            &self.font,
            text,
            options.font_size(),
            &options.outline_options(),
        )?;
        Ok(run.caret)
    }

    /// Height of one line at `font_size`
    ///
    /// This is the distance from ascender to descender and does not depend
    /// on the text.
    pub fn height(&self, font_size: f64) -> f64 {
        let extent = i32::from(self.font.ascender()) - i32::from(self.font.descender());
        self.font.dpu(font_size).i32_to_px(extent)
    }

    /// Metrics of (possibly multi-line) text
    ///
    /// The box width is that of the widest line; the height is the sum of
    /// line heights. The anchor is resolved against this box.
    pub fn metrics(&self, text: &str, options: &TextOptions) -> Result<LineMetrics, Error> {
        let line_height = self.height(options.font_size());
        let mut width: f64 = 0.0;
        let mut height = 0.0;
        for line in text.split('\n') {
            width = width.max(self.width(line, options)?);
            height += line_height;
        }
        self.anchored(width, height, options)
    }

    /// Metrics of a single line
    ///
    /// The anchor is resolved against this line's own width and height.
    pub fn metrics_for_line(&self, text: &str, options: &TextOptions) -> Result<LineMetrics, Error> {
        let width = self.width(text, options)?;
        let height = self.height(options.font_size());
        self.anchored(width, height, options)
    }

    fn anchored(&self, width: f64, height: f64, options: &TextOptions) -> Result<LineMetrics, Error> {
        let anchor = Anchor::parse(&options.anchor)?;
        let dpu = self.font.dpu(options.font_size());
        let ascender = dpu.i16_to_px(self.font.ascender());
        let descender = dpu.i16_to_px(self.font.descender());

        let x = options.x - anchor.h.offset(width);
        let y = options.y - anchor.v.offset(height, ascender);

        Ok(LineMetrics {
            x,
            y,
            baseline: y + ascender,
            width,
            height,
            ascender,
            descender,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fonts::testing::TestFont;

    fn engine() -> TextToSvg<TestFont> {
        TextToSvg::new(TestFont)
    }

    fn approx(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn height_is_linear() {
        let e = engine();
        approx(e.height(100.0), 100.0);
        approx(e.height(50.0), 50.0);
        approx(e.height(72.0) * 2.0, e.height(144.0));
    }

    #[test]
    fn width_sums_advances() {
        let e = engine();
        let opts = TextOptions::new().with_font_size(1000.0);
        approx(e.width("Hi", &opts).unwrap(), 950.0);
        approx(e.width("", &opts).unwrap(), 0.0);
    }

    #[test]
    fn kerning_contribution() {
        let e = engine();
        let opts = TextOptions::new().with_font_size(100.0);
        let kerned = e.width("AV", &opts).unwrap();
        let plain = e.width("AV", &opts.clone().with_kerning(false)).unwrap();
        approx(plain - kerned, 8.0);
        approx(plain, 120.0);
    }

    #[test]
    fn spacing_modes() {
        let e = engine();
        let opts = TextOptions::new().with_font_size(100.0).with_kerning(false);
        let base = e.width("HH", &opts).unwrap();
        let tracked = e.width("HH", &opts.clone().with_tracking(100.0)).unwrap();
        approx(tracked - base, 20.0);
        let spaced = e
            .width("HH", &opts.clone().with_tracking(100.0).with_letter_spacing(0.5))
            .unwrap();
        approx(spaced - base, 100.0);
    }

    #[test]
    fn single_glyph_default_anchor() {
        let e = engine();
        let opts = TextOptions::new().with_font_size(100.0);
        let m = e.metrics("A", &opts).unwrap();
        approx(m.x, 0.0);
        approx(m.y, -80.0);
        approx(m.baseline, 0.0);
        approx(m.width, 60.0);
        approx(m.height, e.height(100.0));
        approx(m.ascender, 80.0);
        approx(m.descender, -20.0);
    }

    #[test]
    fn center_middle() {
        let e = engine();
        let opts = TextOptions::new()
            .with_anchor("center middle")
            .with_position(50.0, 50.0);
        let m = e.metrics("Hi", &opts).unwrap();
        let width = e.width("Hi", &opts).unwrap();
        approx(m.x, 50.0 - width / 2.0);
        approx(m.y, 50.0 - e.height(72.0) / 2.0);
        approx(m.baseline, m.y + m.ascender);
    }

    #[test]
    fn anchor_round_trip() {
        let e = engine();
        let base = TextOptions::new().with_position(10.0, 20.0);
        let width = e.width("Hi", &base).unwrap();
        let height = e.height(72.0);
        let ascender = 800.0 * 72.0 / 1000.0;

        let cases = [
            ("left top", 10.0, 20.0),
            ("center top", 10.0 - width / 2.0, 20.0),
            ("right top", 10.0 - width, 20.0),
            ("left baseline", 10.0, 20.0 - ascender),
            ("left middle", 10.0, 20.0 - height / 2.0),
            ("left bottom", 10.0, 20.0 - height),
        ];
        for (anchor, x, y) in cases {
            let m = e
                .metrics("Hi", &base.clone().with_anchor(anchor))
                .unwrap();
            approx(m.x, x);
            approx(m.y, y);
        }
    }

    #[test]
    fn empty_text() {
        let e = engine();
        let m = e.metrics("", &TextOptions::new()).unwrap();
        approx(m.width, 0.0);
        approx(m.height, e.height(72.0));
    }

    #[test]
    fn multi_line_box() {
        let e = engine();
        let opts = TextOptions::new();
        let m = e.metrics("Hi\nHHH\nA", &opts).unwrap();
        approx(m.height, 3.0 * e.height(72.0));
        approx(m.width, e.width("HHH", &opts).unwrap());
    }

    #[test]
    fn line_anchors_against_own_size() {
        let e = engine();
        let opts = TextOptions::new().with_anchor("right bottom");
        let block = e.metrics("Hi\nHHH", &opts).unwrap();
        let line = e.metrics_for_line("Hi", &opts).unwrap();
        approx(line.x, -e.width("Hi", &opts).unwrap());
        approx(line.y, -e.height(72.0));
        approx(block.y, -2.0 * e.height(72.0));
    }

    #[test]
    fn idempotent() {
        let e = engine();
        let opts = TextOptions::new().with_anchor("center middle");
        assert_eq!(e.metrics("AV\nHi", &opts).unwrap(), e.metrics("AV\nHi", &opts).unwrap());
    }

    #[test]
    fn font_error_propagates() {
        let e = engine();
        assert!(matches!(
            e.metrics("ok\n#", &TextOptions::new()),
            Err(Error::GlyphOutline(_))
        ));
    }
}
