// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Text to SVG path conversion
//!
//! Lays out text with an outline font and emits the glyph outlines as SVG
//! path data. No rasterization is involved.
//!
//! ```no_run
//! use text_svg::{TextOptions, TextToSvg};
//!
//! let engine = TextToSvg::load_sync("fonts/DejaVuSans.ttf")?;
//! let options = TextOptions::new()
//!     .with_font_size(48.0)
//!     .with_anchor("center middle")
//!     .with_position(100.0, 50.0)
//!     .with_attribute("fill", "black");
//! let svg = engine.svg("Hello\nworld", &options)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

mod anchor;
pub use anchor::{Anchor, HAnchor, VAnchor};

pub mod conv;

mod engine;
pub use engine::TextToSvg;

pub mod fonts;
pub use fonts::{Font, FontLoadError, OutlineFont};

mod metrics;
pub use metrics::LineMetrics;

mod options;
pub use options::{TextOptions, DEFAULT_FONT_SIZE};

pub mod path;

pub mod shaper;

mod svg;

/// Glyph identifier within a font
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GlyphId(pub u16);

/// Layout and rendering errors
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Failed to load a font
    #[error(transparent)]
    Font(#[from] FontLoadError),
    /// An anchor keyword did not resolve
    ///
    /// Anchor parsing falls back to defaults, so this indicates a keyword
    /// table out of sync with the anchor types.
    #[error("unknown anchor option: {0}")]
    UnknownAnchor(String),
    /// The font has no usable outline data for a glyph
    #[error("bad glyph data for {0:?}")]
    GlyphOutline(GlyphId),
}
