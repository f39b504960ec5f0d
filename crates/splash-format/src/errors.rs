/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during container building.
//!
//! Scanning and RLE24 decoding have no error type, they always
//! produce a result.
use core::fmt::{Debug, Display, Formatter};

use splash_core::bytestream::ZByteIoError;

/// Errors encountered during encoding
pub enum SplashEncodeErrors {
    /// An image does not share the dimensions of the first image
    ///
    /// All records of a container must have the same size.
    DimensionMismatch {
        /// Position of the offending image
        index:    usize,
        /// `(width, height)` of the first image
        expected: (usize, usize),
        /// `(width, height)` of the offending image
        found:    (usize, usize)
    },
    /// Too large dimensions
    /// The dimension cannot be stored in the 32 bit header field
    TooLargeDimensions(usize),
    /// The sector count of a record cannot be stored in the 32 bit header field
    TooLargePayload(usize),
    IoErrors(ZByteIoError)
}

impl Debug for SplashEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            SplashEncodeErrors::DimensionMismatch {
                index,
                expected,
                found
            } => {
                writeln!(
                    f,
                    "Image {index} is {}x{}, but the container images are {}x{}",
                    found.0, found.1, expected.0, expected.1
                )
            }
            SplashEncodeErrors::TooLargeDimensions(found) => {
                writeln!(
                    f,
                    "Too large image dimensions {found}, splash records can only store dimensions up to {}",
                    u32::MAX
                )
            }
            SplashEncodeErrors::TooLargePayload(sectors) => {
                writeln!(
                    f,
                    "Encoded payload needs {sectors} sectors, more than a record can describe"
                )
            }
            SplashEncodeErrors::IoErrors(err) => {
                writeln!(f, "I/O error {:?}", err)
            }
        }
    }
}

impl Display for SplashEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SplashEncodeErrors {}

impl From<ZByteIoError> for SplashEncodeErrors {
    fn from(value: ZByteIoError) -> Self {
        SplashEncodeErrors::IoErrors(value)
    }
}
