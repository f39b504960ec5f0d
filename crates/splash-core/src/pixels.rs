/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! 24-bit pixel storage
//!
//! A [`PixelBuffer`] is a flat, row-major, top-to-bottom run of [`Rgb`]
//! triples whose length always equals `width * height`.
//! Bitmap row inversion is the concern of the bitmap crate, not of this type.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{Debug, Display, Formatter};

/// A single 24-bit color sample
#[derive(Copy, Clone, Default, Debug, Eq, PartialEq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }
    /// Build a pixel from a sample stored in blue, green, red order
    #[inline(always)]
    pub const fn from_bgr(bgr: [u8; 3]) -> Rgb {
        Rgb::new(bgr[2], bgr[1], bgr[0])
    }
    /// Return the sample in blue, green, red order
    #[inline(always)]
    pub const fn to_bgr(self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }
}

/// Errors raised when constructing a [`PixelBuffer`]
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum PixelBufferErrors {
    /// Number of pixels (or bytes) does not match the dimensions
    ///
    /// expected, found
    LengthMismatch(usize, usize),
    /// `width * height` does not fit in a usize
    Overflow(usize, usize)
}

impl Debug for PixelBufferErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PixelBufferErrors::LengthMismatch(expected, found) => {
                writeln!(f, "Expected {expected} pixels but found {found}")
            }
            PixelBufferErrors::Overflow(width, height) => {
                writeln!(f, "Dimensions {width}x{height} overflow")
            }
        }
    }
}

impl Display for PixelBufferErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PixelBufferErrors {}

/// Pad `pixels` with black or truncate it so that it holds exactly
/// `width * height` entries.
pub fn finalize_pixels(pixels: &mut Vec<Rgb>, width: usize, height: usize) {
    let expected = width.saturating_mul(height);
    pixels.resize(expected, Rgb::BLACK);
}

/// An image of 24-bit pixels with its dimensions
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PixelBuffer {
    width:  usize,
    height: usize,
    pixels: Vec<Rgb>
}

impl PixelBuffer {
    /// Create an all black image
    ///
    /// # Panics
    /// If `width * height` overflows a usize
    pub fn new(width: usize, height: usize) -> PixelBuffer {
        let size = width
            .checked_mul(height)
            .expect("image dimensions overflow");

        PixelBuffer {
            width,
            height,
            pixels: vec![Rgb::BLACK; size]
        }
    }
    /// Wrap already decoded pixels
    ///
    /// # Example
    /// ```
    /// use splash_core::pixels::{PixelBuffer, Rgb};
    /// let image = PixelBuffer::from_pixels(2, 1, vec![Rgb::new(1, 2, 3); 2]).unwrap();
    /// assert_eq!(image.dimensions(), (2, 1));
    /// assert!(PixelBuffer::from_pixels(2, 2, vec![Rgb::BLACK; 3]).is_err());
    /// ```
    pub fn from_pixels(
        width: usize, height: usize, pixels: Vec<Rgb>
    ) -> Result<PixelBuffer, PixelBufferErrors> {
        let expected = width
            .checked_mul(height)
            .ok_or(PixelBufferErrors::Overflow(width, height))?;

        if pixels.len() != expected {
            return Err(PixelBufferErrors::LengthMismatch(expected, pixels.len()));
        }
        Ok(PixelBuffer {
            width,
            height,
            pixels
        })
    }
    /// Wrap a possibly incomplete run of decoded pixels, padding it with
    /// black or truncating it to exactly `width * height` entries
    ///
    /// # Panics
    /// If `width * height` overflows a usize
    pub fn from_partial(width: usize, height: usize, mut pixels: Vec<Rgb>) -> PixelBuffer {
        assert!(width.checked_mul(height).is_some(), "image dimensions overflow");
        finalize_pixels(&mut pixels, width, height);

        PixelBuffer {
            width,
            height,
            pixels
        }
    }
    /// Build an image from packed `r, g, b` bytes
    pub fn from_rgb_bytes(
        width: usize, height: usize, bytes: &[u8]
    ) -> Result<PixelBuffer, PixelBufferErrors> {
        let expected = width
            .checked_mul(height)
            .and_then(|x| x.checked_mul(3))
            .ok_or(PixelBufferErrors::Overflow(width, height))?;

        if bytes.len() != expected {
            return Err(PixelBufferErrors::LengthMismatch(expected, bytes.len()));
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|x| Rgb::new(x[0], x[1], x[2]))
            .collect();

        Ok(PixelBuffer {
            width,
            height,
            pixels
        })
    }
    pub const fn width(&self) -> usize {
        self.width
    }
    pub const fn height(&self) -> usize {
        self.height
    }
    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }
    /// Iterate over rows from top to bottom
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Rgb]> + '_ {
        // chunks_exact panics on zero, an empty image has no rows anyway
        self.pixels.chunks_exact(self.width.max(1))
    }
    /// Return packed `r, g, b` bytes
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|x| [x.r, x.g, x.b]).collect()
    }
}
