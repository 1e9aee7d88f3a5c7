// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font loading

use super::Font;
use fontdb::{Database, Family, Query};
use std::path::Path;
use thiserror::Error;

/// Path of the font used by [`crate::TextToSvg::load_default`]
///
/// Relative paths resolve against the process working directory.
pub const DEFAULT_FONT_PATH: &str = "./fonts/ipag.ttf";

/// Font loading errors
#[derive(Error, Debug)]
pub enum FontLoadError {
    #[error("failed to read font file")]
    Io(#[from] std::io::Error),
    #[error("font parse error")]
    Parse(#[from] ttf_parser::FaceParsingError),
    #[error("invalid font: {0}")]
    Invalid(&'static str),
    #[error("no system font matching family '{0}'")]
    NoSystemFont(String),
}

impl Font {
    /// Load a font file
    ///
    /// This reads the whole file and blocks until done.
    pub fn load(path: impl AsRef<Path>, index: u32) -> Result<Self, FontLoadError> {
        let path = path.as_ref();
        log::debug!("loading font from {}", path.display());
        let data = std::fs::read(path)?;
        Font::from_bytes(data, index)
    }

    /// Load an installed system font by family name
    ///
    /// The generic names `serif`, `sans-serif`, `monospace`, `cursive` and
    /// `fantasy` select the system's default family of that kind.
    pub fn from_system(family: &str) -> Result<Self, FontLoadError> {
        let mut db = Database::new();
        db.load_system_fonts();

        let families = [generic_family(family).unwrap_or(Family::Name(family))];
        let query = Query {
            families: &families,
            ..Default::default()
        };

        let no_match = || FontLoadError::NoSystemFont(family.to_string());
        let id = db.query(&query).ok_or_else(no_match)?;
        if let Some(face) = db.face(id) {
            if let Some((name, _)) = face.families.first() {
                log::debug!("match: {name}");
            }
        }

        let (data, index) = db
            .with_face_data(id, |data, index| (data.to_vec(), index))
            .ok_or_else(no_match)?;
        Font::from_bytes(data, index)
    }
}

fn generic_family(name: &str) -> Option<Family<'static>> {
    Some(match name.to_ascii_lowercase().as_str() {
        "serif" => Family::Serif,
        "sans-serif" => Family::SansSerif,
        "monospace" => Family::Monospace,
        "cursive" => Family::Cursive,
        "fantasy" => Family::Fantasy,
        _ => return None,
    })
}

pub(crate) unsafe fn extend_lifetime<'b, T: ?Sized>(r: &'b T) -> &'static T {
    std::mem::transmute::<&'b T, &'static T>(r)
}
