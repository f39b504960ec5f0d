/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Limits and leniency shared by the container scanner and the bitmap reader
//!
//! One [`DecoderOptions`] value is built from the command line and handed
//! to both, so a limit set once applies everywhere.

/// Decoding limits
///
/// # Example
/// ```
/// use splash_core::options::DecoderOptions;
///
/// let options = DecoderOptions::default()
///     .set_max_width(1080)
///     .set_max_height(1920);
/// assert_eq!(options.max_width(), 1080);
/// assert!(!options.strict_mode());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DecoderOptions {
    /// Widest image accepted, unlimited by default
    max_width:   usize,
    /// Tallest image accepted, unlimited by default
    max_height:  usize,
    /// Reject instead of warn
    ///
    /// The scanner skips records with an unknown format tag, the bitmap
    /// reader refuses files whose pixel data is cut short.
    strict_mode: bool
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:   usize::MAX,
            max_height:  usize::MAX,
            strict_mode: false
        }
    }
}

impl DecoderOptions {
    pub const fn max_width(&self) -> usize {
        self.max_width
    }
    pub const fn max_height(&self) -> usize {
        self.max_height
    }
    pub const fn strict_mode(&self) -> bool {
        self.strict_mode
    }
    /// Images (or records) wider than `width` are refused
    pub const fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }
    /// Images (or records) taller than `height` are refused
    pub const fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }
    pub const fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }
}
