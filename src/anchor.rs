// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Anchor parsing
//!
//! An anchor is given as free-form text such as `"center middle"` or
//! `"Right-Top"`. The text is searched (case-insensitively) for one
//! horizontal keyword and one vertical keyword; where a class has several
//! matches the left-most wins, and where it has none the default applies.

use crate::Error;
use std::fmt;
use std::str::FromStr;

/// Horizontal anchor
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HAnchor {
    /// The origin marks the left edge of the text
    #[default]
    Left,
    /// The origin marks the horizontal centre of the text
    Center,
    /// The origin marks the right edge of the text
    Right,
}

impl HAnchor {
    const KEYWORDS: [&'static str; 3] = ["left", "center", "right"];

    /// Distance to subtract from the origin for text of the given `width`
    #[inline]
    pub fn offset(self, width: f64) -> f64 {
        match self {
            HAnchor::Left => 0.0,
            HAnchor::Center => width / 2.0,
            HAnchor::Right => width,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            HAnchor::Left => "left",
            HAnchor::Center => "center",
            HAnchor::Right => "right",
        }
    }
}

impl FromStr for HAnchor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(HAnchor::Left),
            "center" => Ok(HAnchor::Center),
            "right" => Ok(HAnchor::Right),
            _ => Err(Error::UnknownAnchor(s.to_string())),
        }
    }
}

/// Vertical anchor
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum VAnchor {
    /// The origin marks the baseline of the first line
    #[default]
    Baseline,
    /// The origin marks the top of the text
    Top,
    /// The origin marks the bottom of the text
    Bottom,
    /// The origin marks the vertical middle of the text
    Middle,
}

impl VAnchor {
    const KEYWORDS: [&'static str; 4] = ["baseline", "top", "bottom", "middle"];

    /// Distance to subtract from the origin
    ///
    /// `height` is the height of the anchored box and `ascender` the
    /// (scaled) font ascender.
    #[inline]
    pub fn offset(self, height: f64, ascender: f64) -> f64 {
        match self {
            VAnchor::Baseline => ascender,
            VAnchor::Top => 0.0,
            VAnchor::Middle => height / 2.0,
            VAnchor::Bottom => height,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            VAnchor::Baseline => "baseline",
            VAnchor::Top => "top",
            VAnchor::Bottom => "bottom",
            VAnchor::Middle => "middle",
        }
    }
}

impl FromStr for VAnchor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "baseline" => Ok(VAnchor::Baseline),
            "top" => Ok(VAnchor::Top),
            "bottom" => Ok(VAnchor::Bottom),
            "middle" => Ok(VAnchor::Middle),
            _ => Err(Error::UnknownAnchor(s.to_string())),
        }
    }
}

/// A resolved `(horizontal, vertical)` anchor
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Anchor {
    pub h: HAnchor,
    pub v: VAnchor,
}

impl Anchor {
    /// Resolve an anchor from free-form text
    ///
    /// Never fails for any input: unmatched classes resolve to
    /// [`HAnchor::Left`] and [`VAnchor::Baseline`]. The `Result` exists only
    /// to report a keyword table which disagrees with the [`FromStr`]
    /// implementations.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let lower = text.to_ascii_lowercase();

        let h = match first_match(&lower, &HAnchor::KEYWORDS) {
            Some(range) => text[range].parse()?,
            None => HAnchor::default(),
        };
        let v = match first_match(&lower, &VAnchor::KEYWORDS) {
            Some(range) => text[range].parse()?,
            None => VAnchor::default(),
        };

        Ok(Anchor { h, v })
    }
}

impl FromStr for Anchor {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Error> {
        Anchor::parse(s)
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.h.as_str(), self.v.as_str())
    }
}

/// Find the left-most occurrence of any keyword in `haystack`
///
/// `haystack` must already be lower-case. ASCII lowering preserves byte
/// offsets, so the returned range is valid for the original text too.
fn first_match(haystack: &str, keywords: &[&str]) -> Option<std::ops::Range<usize>> {
    keywords
        .iter()
        .filter_map(|kw| haystack.find(kw).map(|start| start..start + kw.len()))
        .min_by_key(|range| range.start)
}
