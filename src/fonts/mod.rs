// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font access
//!
//! Layout talks to fonts only through the [`OutlineFont`] trait. A
//! [`Font`] implementation backed by `ttf-parser` is provided; other sources
//! (e.g. synthetic fonts for tests) may implement the trait directly.
//!
//! ### Units
//!
//! Font files define their own coordinate space, the *font unit*, of which
//! there are [`OutlineFont::units_per_em`] per Em. Output is in pixels, where
//! the font size is given in pixels per Em. The scale between these is
//! [`crate::conv::DPU`]:
//!
//! ```none
//! dpu = font_size / units_per_em
//! ```

use crate::conv::DPU;
use crate::path::{Path, PathBuilder};
use crate::{shaper, Error, GlyphId};

mod face;
mod library;
#[cfg(test)]
pub(crate) mod testing;

pub use face::Font;
pub use library::{FontLoadError, DEFAULT_FONT_PATH};
pub use ttf_parser::OutlineBuilder;

/// A glyph as mapped from a char
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GlyphInfo {
    /// Glyph identifier in font
    pub id: GlyphId,
    /// Horizontal advance in font units
    ///
    /// `None` (or zero) means the glyph does not advance the pen.
    pub advance: Option<u16>,
}

/// Spacing options passed to [`OutlineFont::outline`]
///
/// Fields left unset take the font's defaults: kerning enabled and no extra
/// spacing.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct OutlineOptions {
    pub kerning: Option<bool>,
    pub letter_spacing: Option<f64>,
    pub tracking: Option<f64>,
}

impl OutlineOptions {
    /// Whether pair kerning applies
    #[inline]
    pub fn kerning(&self) -> bool {
        self.kerning.unwrap_or(true)
    }

    /// Extra space added after each glyph, in pixels
    ///
    /// Letter spacing (a fraction of `font_size`) takes priority; tracking
    /// (thousandths of an Em) applies only when letter spacing is unset or
    /// zero.
    pub fn spacing(&self, font_size: f64) -> f64 {
        fn set(v: Option<f64>) -> Option<f64> {
            v.filter(|v| *v != 0.0 && !v.is_nan())
        }

        if let Some(letter_spacing) = set(self.letter_spacing) {
            letter_spacing * font_size
        } else if let Some(tracking) = set(self.tracking) {
            tracking / 1000.0 * font_size
        } else {
            0.0
        }
    }
}

/// An outline font
///
/// Implementations must be immutable: every method is a pure function of its
/// inputs and the font data.
pub trait OutlineFont {
    /// Font units per Em
    fn units_per_em(&self) -> u16;

    /// Ascender, in font units (usually positive)
    fn ascender(&self) -> i16;

    /// Descender, in font units (usually negative)
    fn descender(&self) -> i16;

    /// Map `text` to a sequence of glyphs, one per char
    ///
    /// Fails with [`Error::GlyphOutline`] if the font maps a char to a glyph
    /// it does not contain.
    fn glyphs(&self, text: &str) -> Result<Vec<GlyphInfo>, Error>;

    /// Kerning adjustment between a pair of glyphs, in font units
    fn kerning(&self, left: GlyphId, right: GlyphId) -> i16;

    /// Write the outline of glyph `id` to `builder`
    ///
    /// Points are in font units relative to the glyph origin, with y up.
    /// Glyphs without an outline (e.g. space) write nothing.
    fn outline_glyph(
        &self,
        id: GlyphId,
        builder: &mut dyn OutlineBuilder,
    ) -> Result<(), Error>;

    /// Scale for a given font size
    #[inline]
    fn dpu(&self, font_size: f64) -> DPU {
        DPU::new(font_size, self.units_per_em())
    }

    /// Outline a run of text
    ///
    /// The pen starts at `(x, baseline)` in output space (y down). Each
    /// glyph advances the pen as described by [`shaper::shape`].
    fn outline(
        &self,
        text: &str,
        x: f64,
        baseline: f64,
        font_size: f64,
        options: &OutlineOptions,
    ) -> Result<Path, Error> {
        let run = shaper::shape(self, text, font_size, options)?;
        let dpu = self.dpu(font_size);

        let mut path = Path::new();
        for glyph in &run.glyphs {
            let mut builder = PathBuilder::new(&mut path, x + glyph.position, baseline, dpu);
            self.outline_glyph(glyph.id, &mut builder)?;
        }
        Ok(path)
    }
}

impl<F: OutlineFont + ?Sized> OutlineFont for &F {
    fn units_per_em(&self) -> u16 {
        (**self).units_per_em()
    }
    fn ascender(&self) -> i16 {
        (**self).ascender()
    }
    fn descender(&self) -> i16 {
        (**self).descender()
    }
    fn glyphs(&self, text: &str) -> Result<Vec<GlyphInfo>, Error> {
        (**self).glyphs(text)
    }
    fn kerning(&self, left: GlyphId, right: GlyphId) -> i16 {
        (**self).kerning(left, right)
    }
    fn outline_glyph(
        &self,
        id: GlyphId,
        builder: &mut dyn OutlineBuilder,
    ) -> Result<(), Error> {
        (**self).outline_glyph(id, builder)
    }
}

impl<F: OutlineFont + ?Sized> OutlineFont for std::sync::Arc<F> {
    fn units_per_em(&self) -> u16 {
        (**self).units_per_em()
    }
    fn ascender(&self) -> i16 {
        (**self).ascender()
    }
    fn descender(&self) -> i16 {
        (**self).descender()
    }
    fn glyphs(&self, text: &str) -> Result<Vec<GlyphInfo>, Error> {
        (**self).glyphs(text)
    }
    fn kerning(&self, left: GlyphId, right: GlyphId) -> i16 {
        (**self).kerning(left, right)
    }
    fn outline_glyph(
        &self,
        id: GlyphId,
        builder: &mut dyn OutlineBuilder,
    ) -> Result<(), Error> {
        (**self).outline_glyph(id, builder)
    }
}

impl From<GlyphId> for ttf_parser::GlyphId {
    fn from(id: GlyphId) -> Self {
        ttf_parser::GlyphId(id.0)
    }
}
