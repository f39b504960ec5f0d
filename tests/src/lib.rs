/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::fs::read;
use std::path::{Path, PathBuf};

use nanorand::{Rng, WyRand};
use serde::Deserialize;
use splash_core::pixels::{PixelBuffer, Rgb};
use xxhash_rust::xxh3::xxh3_128;

mod bmp;
mod container;
mod pipeline;

/// Pixel content of a synthetic test image
#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonPattern {
    /// Every pixel black
    Black,
    /// Horizontal bands, long runs
    Bands,
    /// Random pixels from a small palette, mixes runs and literals
    Palette,
    /// Random pixels, mostly literals
    Noise
}

#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub name:    String,
    pub width:   usize,
    pub height:  usize,
    pub frames:  usize,
    pub pattern: JsonPattern,
    pub seed:    u64,
    pub comment: Option<String>
}

impl TestEntry {
    pub fn images(&self) -> Vec<PixelBuffer> {
        (0..self.frames)
            .map(|frame| {
                synthetic_image(
                    self.width,
                    self.height,
                    self.pattern,
                    self.seed.wrapping_add(frame as u64)
                )
            })
            .collect()
    }
}

pub fn synthetic_image(width: usize, height: usize, pattern: JsonPattern, seed: u64) -> PixelBuffer {
    let mut rng = WyRand::new_seed(seed);
    let palette: Vec<Rgb> = (0..4)
        .map(|_| Rgb::new(rng.generate(), rng.generate(), rng.generate()))
        .collect();

    let pixels = (0..width * height)
        .map(|i| match pattern {
            JsonPattern::Black => Rgb::BLACK,
            JsonPattern::Bands => palette[(i / width.max(1) / 3) % palette.len()],
            JsonPattern::Palette => palette[rng.generate_range(0..palette.len())],
            JsonPattern::Noise => Rgb::new(rng.generate(), rng.generate(), rng.generate())
        })
        .collect();

    PixelBuffer::from_pixels(width, height, pixels).unwrap()
}

pub fn test_entries() -> Vec<TestEntry> {
    let file = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/containers.json");
    let json_file = read(file).unwrap();

    serde_json::from_slice(&json_file).unwrap()
}

fn hash(contents: &[u8]) -> u128 {
    xxh3_128(contents)
}

fn hash_image(image: &PixelBuffer) -> u128 {
    hash(&image.to_rgb_bytes())
}
