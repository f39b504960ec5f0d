/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use splash_bmp::{BmpDecoder, BmpEncoder};
use splash_core::options::DecoderOptions;
use splash_core::pixels::PixelBuffer;

use crate::errors::SplashToolErrors;

pub fn read_file(path: &Path) -> Result<Vec<u8>, SplashToolErrors> {
    fs::read(path).map_err(|error| SplashToolErrors::Io {
        path: path.to_path_buf(),
        error
    })
}

pub fn write_file(path: &Path, data: &[u8]) -> Result<(), SplashToolErrors> {
    fs::write(path, data).map_err(|error| SplashToolErrors::Io {
        path: path.to_path_buf(),
        error
    })
}

/// Read a BMP file, optionally requiring it to be `expected` sized
pub fn read_bmp(
    path: &Path, options: DecoderOptions, expected: Option<(usize, usize)>
) -> Result<PixelBuffer, SplashToolErrors> {
    let data = read_file(path)?;

    let image = BmpDecoder::new_with_options(&data, options)
        .decode()
        .map_err(|error| SplashToolErrors::Bmp {
            path: path.to_path_buf(),
            error
        })?;

    if let Some(expected) = expected {
        if image.dimensions() != expected {
            return Err(SplashToolErrors::SizeMismatch {
                path: path.to_path_buf(),
                expected,
                found: image.dimensions()
            });
        }
    }
    debug!(
        "Read {:?} ({}x{})",
        path,
        image.width(),
        image.height()
    );
    Ok(image)
}

pub fn write_bmp(path: &Path, image: &PixelBuffer) -> Result<(), SplashToolErrors> {
    let bytes = BmpEncoder::new(image)
        .encode_to_vec()
        .map_err(|error| SplashToolErrors::BmpEncode {
            path: path.to_path_buf(),
            error
        })?;
    write_file(path, &bytes)
}

/// Whether `a` and `b` name the same existing file
///
/// Both are resolved first, so `./index0.bmp` matches `index0.bmp`.
/// A path that does not exist yet matches nothing.
pub fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false
    }
}

/// Name of the `index`-th BMP file
pub fn numbered_name(prefix: &str, index: usize) -> String {
    format!("{prefix}{index}.bmp")
}

/// Sort key of a candidate file name, the number between prefix and extension
///
/// Names without a number sort last so they show up in a misnumbering report.
fn sequence_number(name: &str, prefix: &str) -> usize {
    name.strip_prefix(prefix)
        .and_then(|rest| rest.strip_suffix(".bmp"))
        .and_then(|number| number.parse().ok())
        .unwrap_or(usize::MAX)
}

/// Collect the `{prefix}N.bmp` files of `dir` in numeric order
///
/// The files must be exactly `{prefix}0.bmp` to `{prefix}(n-1).bmp`.
pub fn collect_inputs(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>, SplashToolErrors> {
    let entries = fs::read_dir(dir).map_err(|error| SplashToolErrors::Io {
        path: dir.to_path_buf(),
        error
    })?;

    let mut found = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|error| SplashToolErrors::Io {
            path: dir.to_path_buf(),
            error
        })?;
        let name = entry.file_name().to_string_lossy().into_owned();

        if name.starts_with(prefix) && name.ends_with(".bmp") && entry.path().is_file() {
            found.push(name);
        }
    }
    if found.is_empty() {
        return Err(SplashToolErrors::NoInputFiles(dir.to_path_buf()));
    }

    found.sort_by(|a, b| {
        sequence_number(a, prefix)
            .cmp(&sequence_number(b, prefix))
            .then_with(|| a.cmp(b))
    });

    let expected: Vec<String> = (0..found.len())
        .map(|index| numbered_name(prefix, index))
        .collect();

    if found != expected {
        return Err(SplashToolErrors::MisnumberedInputs { found, expected });
    }
    info!("Found {} input files in {:?}", found.len(), dir);

    Ok(found.iter().map(|name| dir.join(name)).collect())
}
