// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Vector paths
//!
//! A [`Path`] is a flat list of drawing commands in output (SVG) space:
//! the y axis points down. Glyph outlines are read in font space (y up) via
//! [`PathBuilder`] which scales, flips and translates each point.

use crate::conv::DPU;
use easy_cast::Conv;
use std::fmt::Write;

/// A path command
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    QuadTo(f64, f64, f64, f64),
    CurveTo(f64, f64, f64, f64, f64, f64),
    Close,
}

/// A sequence of path commands
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub commands: Vec<PathCommand>,
}

impl Path {
    /// Construct an empty path
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the path has no commands
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Serialize as SVG path data
    ///
    /// Integral coordinates are written without a fractional part; other
    /// coordinates are written with exactly `decimals` fractional digits.
    /// Numbers are separated by a space except where a minus sign already
    /// separates them.
    pub fn to_path_data(&self, decimals: usize) -> String {
        let mut d = String::new();
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(x, y) => pack(&mut d, 'M', &[x, y], decimals),
                PathCommand::LineTo(x, y) => pack(&mut d, 'L', &[x, y], decimals),
                PathCommand::QuadTo(x1, y1, x, y) => pack(&mut d, 'Q', &[x1, y1, x, y], decimals),
                PathCommand::CurveTo(x1, y1, x2, y2, x, y) => {
                    pack(&mut d, 'C', &[x1, y1, x2, y2, x, y], decimals)
                }
                PathCommand::Close => d.push('Z'),
            }
        }
        d
    }
}

fn pack(d: &mut String, cmd: char, values: &[f64], decimals: usize) {
    d.push(cmd);
    for (i, v) in values.iter().cloned().enumerate() {
        if i > 0 && v >= 0.0 {
            d.push(' ');
        }
        // Writing to a String cannot fail
        if v.round() == v {
            // normalise -0
            let _ = write!(d, "{}", v + 0.0);
        } else {
            let v = round_tie_away(v, decimals);
            let _ = write!(d, "{v:.decimals$}");
        }
    }
}

/// Round an exact tie at `decimals` away from zero
///
/// Formatting with a precision rounds ties to even; path data rounds them
/// up in magnitude. Other values are left to the formatter.
fn round_tie_away(v: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(i32::conv(decimals));
    let scaled = v * scale;
    if scaled.fract().abs() == 0.5 {
        scaled.round() / scale
    } else {
        v
    }
}

/// Adapter from font outlines to a [`Path`]
///
/// Points arrive in font design units (y up) relative to the glyph origin.
/// They are scaled by `dpu` and placed relative to the pen position
/// `(x, baseline)` in output space (y down).
pub struct PathBuilder<'a> {
    path: &'a mut Path,
    x: f64,
    baseline: f64,
    dpu: DPU,
}

impl<'a> PathBuilder<'a> {
    /// Construct, appending to `path`
    pub fn new(path: &'a mut Path, x: f64, baseline: f64, dpu: DPU) -> Self {
        PathBuilder {
            path,
            x,
            baseline,
            dpu,
        }
    }

    #[inline]
    fn point(&self, x: f32, y: f32) -> (f64, f64) {
        (
            self.x + self.dpu.f32_to_px(x),
            self.baseline - self.dpu.f32_to_px(y),
        )
    }
}

impl<'a> ttf_parser::OutlineBuilder for PathBuilder<'a> {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        self.path.commands.push(PathCommand::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        self.path.commands.push(PathCommand::LineTo(x, y));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.point(x1, y1);
        let (x, y) = self.point(x, y);
        self.path.commands.push(PathCommand::QuadTo(x1, y1, x, y));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.point(x1, y1);
        let (x2, y2) = self.point(x2, y2);
        let (x, y) = self.point(x, y);
        self.path
            .commands
            .push(PathCommand::CurveTo(x1, y1, x2, y2, x, y));
    }

    fn close(&mut self) {
        self.path.commands.push(PathCommand::Close);
    }
}
