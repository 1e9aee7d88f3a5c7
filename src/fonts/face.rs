// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font face types

use super::library::{extend_lifetime, FontLoadError};
use super::{GlyphInfo, OutlineFont};
use crate::{Error, GlyphId};
use std::fmt;
use std::sync::Arc;
use ttf_parser::gpos::{PairAdjustment, PositioningSubtable};
use ttf_parser::opentype_layout::LayoutTable;
use ttf_parser::{Face, Tag};

/// A loaded font face
///
/// Owns the font data. Cloning is cheap: the data is shared.
#[derive(Clone)]
pub struct Font {
    // Safety: `face` borrows from `data`. The data is heap-allocated, never
    // modified and outlives `face` (fields drop in declaration order).
    face: Face<'static>,
    data: Arc<[u8]>,
    index: u32,
}

impl Font {
    /// Parse font data
    ///
    /// `index` selects a face within a font collection; use 0 otherwise.
    pub fn from_bytes(data: impl Into<Arc<[u8]>>, index: u32) -> Result<Self, FontLoadError> {
        let data: Arc<[u8]> = data.into();
        // Safety: see field comment. The `'static` lifetime never escapes:
        // methods only hand out data borrowed for the lifetime of `&self`.
        let slice = unsafe { extend_lifetime(&*data) };
        let face = Face::parse(slice, index)?;
        if face.units_per_em() == 0 {
            return Err(FontLoadError::Invalid("units per em is zero"));
        }

        log::debug!(
            "loaded font face {index}: {} glyphs, {} units/em",
            face.number_of_glyphs(),
            face.units_per_em()
        );
        Ok(Font { face, data, index })
    }

    /// Get glyph identifier for a char
    ///
    /// If the char is not found, `GlyphId(0)` is returned (the 'missing glyph'
    /// representation).
    #[inline]
    pub fn glyph_index(&self, c: char) -> GlyphId {
        // GlyphId 0 is required to be a special glyph representing a missing
        // character (see cmap table / TrueType specification).
        match self.face.glyph_index(c) {
            Some(id) => GlyphId(id.0),
            None => {
                log::warn!("no glyph for {c:?}; using missing glyph");
                GlyphId(0)
            }
        }
    }

    /// The GPOS table, if it has a `kern` feature
    fn gpos_kern(&self) -> Option<&LayoutTable<'_>> {
        let gpos = self.face.tables().gpos.as_ref()?;
        let tag = Tag::from_bytes(b"kern");
        gpos.features
            .into_iter()
            .any(|f| f.tag == tag)
            .then_some(gpos)
    }

    /// Kerning from the GPOS `kern` feature
    fn gpos_kerning(
        gpos: &LayoutTable<'_>,
        left: ttf_parser::GlyphId,
        right: ttf_parser::GlyphId,
    ) -> Option<i16> {
        let tag = Tag::from_bytes(b"kern");

        for feature in gpos.features.into_iter().filter(|f| f.tag == tag) {
            for index in feature.lookup_indices {
                let Some(lookup) = gpos.lookups.get(index) else {
                    continue;
                };
                for subtable in lookup.subtables.into_iter::<PositioningSubtable>() {
                    if let PositioningSubtable::Pair(pair) = subtable {
                        if let Some(value) = pair_kerning(&pair, left, right) {
                            return Some(value);
                        }
                    }
                }
            }
        }
        None
    }

    /// Kerning from the legacy `kern` table
    fn kern_table_kerning(
        &self,
        left: ttf_parser::GlyphId,
        right: ttf_parser::GlyphId,
    ) -> Option<i16> {
        self.face.tables().kern.and_then(|kern| {
            kern.subtables
                .into_iter()
                .filter(|st| st.horizontal && !st.variable)
                .find_map(|st| st.glyphs_kerning(left, right))
        })
    }
}

fn pair_kerning(
    pair: &PairAdjustment,
    left: ttf_parser::GlyphId,
    right: ttf_parser::GlyphId,
) -> Option<i16> {
    match pair {
        PairAdjustment::Format1 { coverage, sets } => {
            let index = coverage.get(left)?;
            let (record, _) = sets.get(index)?.get(right)?;
            Some(record.x_advance)
        }
        PairAdjustment::Format2 {
            coverage,
            classes,
            matrix,
        } => {
            coverage.get(left)?;
            let (record, _) = matrix.get((classes.0.get(left), classes.1.get(right)))?;
            Some(record.x_advance)
        }
    }
}

impl OutlineFont for Font {
    #[inline]
    fn units_per_em(&self) -> u16 {
        self.face.units_per_em()
    }

    /// The `hhea` ascender, ignoring OS/2 typographic metrics
    #[inline]
    fn ascender(&self) -> i16 {
        self.face.tables().hhea.ascender
    }

    #[inline]
    fn descender(&self) -> i16 {
        self.face.tables().hhea.descender
    }

    fn glyphs(&self, text: &str) -> Result<Vec<GlyphInfo>, Error> {
        let num_glyphs = self.face.number_of_glyphs();
        text.chars()
            .map(|c| {
                let id = self.glyph_index(c);
                if id.0 >= num_glyphs {
                    return Err(Error::GlyphOutline(id));
                }
                let advance = self.face.glyph_hor_advance(id.into());
                Ok(GlyphInfo { id, advance })
            })
            .collect()
    }

    fn kerning(&self, left: GlyphId, right: GlyphId) -> i16 {
        let (left, right) = (left.into(), right.into());
        // A GPOS kern feature replaces the legacy table entirely
        match self.gpos_kern() {
            Some(gpos) => Self::gpos_kerning(gpos, left, right),
            None => self.kern_table_kerning(left, right),
        }
        .unwrap_or(0)
    }

    fn outline_glyph(
        &self,
        id: GlyphId,
        builder: &mut dyn ttf_parser::OutlineBuilder,
    ) -> Result<(), Error> {
        if id.0 >= self.face.number_of_glyphs() {
            return Err(Error::GlyphOutline(id));
        }
        // `None` means the glyph has no outline, which is not an error
        let _ = self.face.outline_glyph(id.into(), builder);
        Ok(())
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font")
            .field("index", &self.index)
            .field("units_per_em", &self.face.units_per_em())
            .field("ascender", &self.ascender())
            .field("descender", &self.descender())
            .field("bytes_len", &self.data.len())
            .finish()
    }
}
