// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Type conversion utilities
//!
//! Glyph and line indices are represented as `u32` where a compact index is
//! needed; output coordinates are always `f64`.

use easy_cast::Cast;

/// Convert `usize` → `u32`
///
/// This is a "safer" wrapper around `as` ensuring (on debug builds) that the
/// input value may be represented correctly by `u32`.
#[inline]
pub fn to_u32(x: usize) -> u32 {
    x.cast()
}

/// Convert `usize` → `f64`
///
/// Used for line indices, which never approach the limits of `u32`.
#[inline]
pub fn to_f64(x: usize) -> f64 {
    f64::from(to_u32(x))
}

/// Scale factor: pixels per font unit
///
/// Every quantity read from the font in design units passes through this
/// scale before it is combined with pixel-space values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DPU(pub f64);

impl DPU {
    /// Construct from a font size (pixels per Em) and the font's units per Em
    #[inline]
    pub fn new(font_size: f64, units_per_em: u16) -> Self {
        DPU(1.0 / f64::from(units_per_em) * font_size)
    }

    pub(crate) fn i32_to_px(self, x: i32) -> f64 {
        f64::from(x) * self.0
    }
    pub(crate) fn i16_to_px(self, x: i16) -> f64 {
        f64::from(x) * self.0
    }
    pub(crate) fn u16_to_px(self, x: u16) -> f64 {
        f64::from(x) * self.0
    }
    pub(crate) fn f32_to_px(self, x: f32) -> f64 {
        f64::from(x) * self.0
    }
}
