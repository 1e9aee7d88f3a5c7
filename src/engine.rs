// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Engine construction

use crate::fonts::{Font, FontLoadError, OutlineFont, DEFAULT_FONT_PATH};
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

/// Text layout and SVG rendering engine
///
/// Wraps a font which is never mutated; all methods take `&self` and are
/// pure functions of their arguments. An engine may be shared between threads
/// whenever its font is `Sync`.
#[derive(Clone, Debug)]
pub struct TextToSvg<F = Font> {
    pub(crate) font: F,
}

impl<F: OutlineFont> TextToSvg<F> {
    /// Construct over a loaded font
    pub fn new(font: F) -> Self {
        TextToSvg { font }
    }

    /// Access the font
    #[inline]
    pub fn font(&self) -> &F {
        &self.font
    }

    /// Take the font
    pub fn into_font(self) -> F {
        self.font
    }
}

impl TextToSvg<Font> {
    /// Load a font file, blocking until done
    pub fn load_sync(path: impl AsRef<Path>) -> Result<Self, FontLoadError> {
        Font::load(path, 0).map(TextToSvg::new)
    }

    /// Load the font at [`DEFAULT_FONT_PATH`], blocking until done
    pub fn load_default() -> Result<Self, FontLoadError> {
        Self::load_sync(DEFAULT_FONT_PATH)
    }

    /// Load a font file on a background thread
    ///
    /// `callback` is called exactly once, on the background thread, with the
    /// loaded engine or the load error. The returned handle may be joined to
    /// wait for completion.
    pub fn load_async<C>(path: impl Into<PathBuf>, callback: C) -> JoinHandle<()>
    where
        C: FnOnce(Result<Self, FontLoadError>) + Send + 'static,
    {
        let path = path.into();
        thread::spawn(move || {
            let result = Self::load_sync(&path);
            if let Err(ref err) = result {
                log::error!("failed to load font {}: {err}", path.display());
            }
            callback(result)
        })
    }
}
