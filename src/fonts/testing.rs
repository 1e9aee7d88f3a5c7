// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! A synthetic font for tests
//!
//! Metrics: 1000 units per Em, ascender 800, descender -200. Each glyph id
//! equals its char's code point. Outlines are rectangles `advance × 700`.
//! The pair `AV` kerns by -80. `#` maps to a glyph the font does not have.

use super::{GlyphInfo, OutlineBuilder, OutlineFont};
use crate::{Error, GlyphId};

pub(crate) struct TestFont;

impl TestFont {
    fn advance(c: char) -> Option<u16> {
        match c {
            'A' | 'V' => Some(600),
            'H' => Some(700),
            'i' | ' ' => Some(250),
            '\u{301}' => None,
            _ => Some(500),
        }
    }
}

impl OutlineFont for TestFont {
    fn units_per_em(&self) -> u16 {
        1000
    }

    fn ascender(&self) -> i16 {
        800
    }

    fn descender(&self) -> i16 {
        -200
    }

    fn glyphs(&self, text: &str) -> Result<Vec<GlyphInfo>, Error> {
        text.chars()
            .map(|c| {
                let id = GlyphId(u16::try_from(u32::from(c)).unwrap_or(0));
                if c == '#' {
                    return Err(Error::GlyphOutline(id));
                }
                Ok(GlyphInfo {
                    id,
                    advance: Self::advance(c),
                })
            })
            .collect()
    }

    fn kerning(&self, left: GlyphId, right: GlyphId) -> i16 {
        match (left.0, right.0) {
            (0x41, 0x56) => -80,
            _ => 0,
        }
    }

    fn outline_glyph(
        &self,
        id: GlyphId,
        builder: &mut dyn OutlineBuilder,
    ) -> Result<(), Error> {
        let c = char::from_u32(u32::from(id.0)).ok_or(Error::GlyphOutline(id))?;
        if c.is_whitespace() {
            return Ok(());
        }
        let w = f32::from(Self::advance(c).unwrap_or(0));
        builder.move_to(0.0, 0.0);
        builder.line_to(w, 0.0);
        builder.line_to(w, 700.0);
        builder.line_to(0.0, 700.0);
        builder.close();
        Ok(())
    }
}
