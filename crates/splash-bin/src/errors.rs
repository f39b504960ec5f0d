/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::path::PathBuf;

use splash_bmp::{BmpDecoderErrors, BmpEncoderErrors};
use splash_format::SplashEncodeErrors;

/// Errors reported by the command line workflows
pub enum SplashToolErrors {
    /// Reading or writing a file failed
    Io {
        path:  PathBuf,
        error: std::io::Error
    },
    /// A BMP file could not be decoded
    Bmp {
        path:  PathBuf,
        error: BmpDecoderErrors
    },
    /// A BMP file could not be encoded
    BmpEncode {
        path:  PathBuf,
        error: BmpEncoderErrors
    },
    Encode(SplashEncodeErrors),
    /// A BMP file does not have the size of the first one
    SizeMismatch {
        path:     PathBuf,
        expected: (usize, usize),
        found:    (usize, usize)
    },
    /// The BMP files do not form the sequence `0..n`
    MisnumberedInputs {
        found:    Vec<String>,
        expected: Vec<String>
    },
    /// No BMP file with the expected prefix exists in the directory
    NoInputFiles(PathBuf),
    /// A path is used as both input and output
    SamePath(PathBuf),
    /// The user refused to overwrite an existing file
    Declined(PathBuf)
}

impl Debug for SplashToolErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, error } => {
                writeln!(f, "{:?}: {}", path, error)
            }
            Self::Bmp { path, error } => {
                writeln!(f, "Could not decode {:?}: {:?}", path, error)
            }
            Self::BmpEncode { path, error } => {
                writeln!(f, "Could not encode {:?}: {:?}", path, error)
            }
            Self::Encode(error) => {
                writeln!(f, "Could not build container: {:?}", error)
            }
            Self::SizeMismatch {
                path,
                expected,
                found
            } => {
                writeln!(
                    f,
                    "{:?}: must be {}x{}, got {}x{}",
                    path, expected.0, expected.1, found.0, found.1
                )
            }
            Self::MisnumberedInputs { found, expected } => {
                writeln!(
                    f,
                    "Missing or misnumbered BMPs. Found: {:?}, expected: {:?}",
                    found, expected
                )
            }
            Self::NoInputFiles(dir) => {
                writeln!(f, "No numbered BMP files found in {:?}", dir)
            }
            Self::SamePath(path) => {
                writeln!(f, "Cannot use {:?} as both input and output", path)
            }
            Self::Declined(path) => {
                writeln!(f, "Not overwriting file {:?}", path)
            }
        }
    }
}

impl Display for SplashToolErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for SplashToolErrors {}

impl From<SplashEncodeErrors> for SplashToolErrors {
    fn from(value: SplashEncodeErrors) -> Self {
        SplashToolErrors::Encode(value)
    }
}
