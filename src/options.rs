// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Text options

use crate::fonts::OutlineOptions;

/// Font size used when [`TextOptions::font_size`] is unset, in pixels per Em
pub const DEFAULT_FONT_SIZE: f64 = 72.0;

/// Per-call configuration for measuring and rendering text
///
/// All fields are optional in the sense that `TextOptions::default()` yields
/// usable values. Defaults are resolved by the accessor methods, not by
/// mutating the struct.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TextOptions {
    /// Font size in pixels per Em
    ///
    /// Unset, zero and NaN values all resolve to
    /// [`DEFAULT_FONT_SIZE`].
    pub font_size: Option<f64>,
    /// Apply pair kerning (default: enabled)
    pub kerning: Option<bool>,
    /// Extra space after each glyph, as a fraction of the font size
    ///
    /// Takes priority over [`Self::tracking`] when both are non-zero.
    pub letter_spacing: Option<f64>,
    /// Extra space after each glyph, in thousandths of an Em
    pub tracking: Option<f64>,
    /// Anchor text, for example `"center middle"`
    ///
    /// See [`crate::Anchor::parse`].
    pub anchor: String,
    /// Horizontal position of the anchor
    pub x: f64,
    /// Vertical position of the anchor
    pub y: f64,
    /// Attributes added to the emitted `<path>` element, in order
    ///
    /// Names and values are written verbatim: no escaping is performed. Do
    /// not pass untrusted input here when the output is embedded in a
    /// document.
    pub attributes: Vec<(String, String)>,
}

impl TextOptions {
    /// Construct with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolved font size
    #[inline]
    pub fn font_size(&self) -> f64 {
        match self.font_size {
            Some(size) if size != 0.0 && !size.is_nan() => size,
            _ => DEFAULT_FONT_SIZE,
        }
    }

    /// Spacing options forwarded to the font
    ///
    /// Unset values stay unset.
    #[inline]
    pub fn outline_options(&self) -> OutlineOptions {
        OutlineOptions {
            kerning: self.kerning,
            letter_spacing: self.letter_spacing,
            tracking: self.tracking,
        }
    }

    /// Set the font size
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = Some(font_size);
        self
    }

    /// Enable or disable kerning
    pub fn with_kerning(mut self, kerning: bool) -> Self {
        self.kerning = Some(kerning);
        self
    }

    /// Set letter spacing
    pub fn with_letter_spacing(mut self, letter_spacing: f64) -> Self {
        self.letter_spacing = Some(letter_spacing);
        self
    }

    /// Set tracking
    pub fn with_tracking(mut self, tracking: f64) -> Self {
        self.tracking = Some(tracking);
        self
    }

    /// Set the anchor text
    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = anchor.into();
        self
    }

    /// Set the anchor position
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Append an attribute for the `<path>` element
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.attributes.push((name.into(), value.to_string()));
        self
    }
}
