/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use splash_core::bytestream::ZByteIoError;

/// BMP errors that can occur during decoding
#[non_exhaustive]
pub enum BmpDecoderErrors {
    /// The file/bytes do not start with `BM`
    InvalidMagicBytes,
    /// The information header size matches no known BMP version
    UnknownHeaderSize(u32),
    /// A header field holds an impossible value
    InvalidHeader(&'static str),
    /// Bits per pixel other than 24 or 32
    UnsupportedDepth(u16),
    /// Anything but uncompressed pixels
    UnsupportedCompression(u32),
    /// Width or height is zero
    ZeroDimensions,
    /// Too large dimensions for a given width or
    /// height
    TooLargeDimensions(&'static str, usize, usize),
    /// The pixel data is shorter than the header implies
    ///
    /// expected, found
    TruncatedPixels(usize, usize),
    /// A calculation overflowed
    OverFlowOccurred,
    IoErrors(ZByteIoError)
}

impl Debug for BmpDecoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidMagicBytes => {
                writeln!(f, "Invalid magic bytes, file does not start with BM")
            }
            Self::UnknownHeaderSize(size) => {
                writeln!(f, "Unknown information header size {size}")
            }
            Self::InvalidHeader(reason) => {
                writeln!(f, "Invalid BMP header: {reason}")
            }
            Self::UnsupportedDepth(depth) => {
                writeln!(
                    f,
                    "Depth {depth} unsupported, only 24 and 32 bit images can be read"
                )
            }
            Self::UnsupportedCompression(compression) => {
                writeln!(
                    f,
                    "Compression {compression} unsupported, only uncompressed images can be read"
                )
            }
            Self::ZeroDimensions => {
                writeln!(f, "Width or height is zero, invalid image")
            }
            Self::TooLargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension} , {found} exceeds {expected}"
                )
            }
            Self::TruncatedPixels(expected, found) => {
                writeln!(
                    f,
                    "Pixel data truncated, expected {expected} bytes but found {found}"
                )
            }
            Self::OverFlowOccurred => {
                writeln!(f, "Overflow occurred")
            }
            Self::IoErrors(err) => {
                writeln!(f, "{:?}", err)
            }
        }
    }
}

impl Display for BmpDecoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BmpDecoderErrors {}

impl From<ZByteIoError> for BmpDecoderErrors {
    fn from(value: ZByteIoError) -> Self {
        BmpDecoderErrors::IoErrors(value)
    }
}

/// BMP errors that can occur during encoding
pub enum BmpEncoderErrors {
    /// A dimension does not fit the signed 32 bit header field
    TooLargeDimensions(usize),
    /// The file size does not fit the 32 bit header field
    TooLargeFile(usize),
    IoErrors(ZByteIoError)
}

impl Debug for BmpEncoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TooLargeDimensions(found) => {
                writeln!(
                    f,
                    "Too large image dimensions {found}, BMP can only store dimensions up to {}",
                    i32::MAX
                )
            }
            Self::TooLargeFile(size) => {
                writeln!(f, "Image needs {size} bytes, larger than a BMP file can be")
            }
            Self::IoErrors(err) => {
                writeln!(f, "I/O error {:?}", err)
            }
        }
    }
}

impl Display for BmpEncoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BmpEncoderErrors {}

impl From<ZByteIoError> for BmpEncoderErrors {
    fn from(value: ZByteIoError) -> Self {
        BmpEncoderErrors::IoErrors(value)
    }
}
