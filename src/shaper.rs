// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Glyph positioning
//!
//! This module provides the [`shape`] function, which maps a single line of
//! text to a sequence of glyphs with horizontal pen positions.
//!
//! This is *not* shaping in the HarfBuzz sense: there is no substitution,
//! no mark positioning and no bidi. Each char maps to one glyph; the pen
//! advances by the glyph advance, then by the pair kerning (if enabled and
//! there is a next glyph), then by letter spacing or tracking.

use crate::fonts::{OutlineFont, OutlineOptions};
use crate::{Error, GlyphId};

/// A positioned glyph
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glyph {
    /// Glyph identifier in font
    pub id: GlyphId,
    /// Horizontal pen position relative to the start of the run, in pixels
    pub position: f64,
}

/// A positioned run of glyphs
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlyphRun {
    /// Sequence of all glyphs
    pub glyphs: Vec<Glyph>,
    /// Position of the pen after the last glyph
    ///
    /// This is the width of the run, inclusive of spacing after the last
    /// glyph.
    pub caret: f64,
}

/// Position the glyphs of a single line of `text`
pub fn shape<F: OutlineFont + ?Sized>(
    font: &F,
    text: &str,
    font_size: f64,
    options: &OutlineOptions,
) -> Result<GlyphRun, Error> {
    let dpu = font.dpu(font_size);
    let kerning = options.kerning();
    let spacing = options.spacing(font_size);

    let infos = font.glyphs(text)?;
    let mut glyphs = Vec::with_capacity(infos.len());
    let mut caret = 0.0;

    for (i, info) in infos.iter().enumerate() {
        glyphs.push(Glyph {
            id: info.id,
            position: caret,
        });

        if let Some(advance) = info.advance {
            caret += dpu.u16_to_px(advance);
        }

        if kerning {
            if let Some(next) = infos.get(i + 1) {
                caret += dpu.i16_to_px(font.kerning(info.id, next.id));
            }
        }

        caret += spacing;
    }

    Ok(GlyphRun { glyphs, caret })
}
