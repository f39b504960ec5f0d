/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::{Rng, WyRand};
use splash_core::pixels::{PixelBuffer, Rgb};

/// A splash screen like image, a flat background with a noisy logo in the middle
pub fn splash_image(width: usize, height: usize) -> PixelBuffer {
    let mut rng = WyRand::new_seed(0x5_91A5);
    let background = Rgb::new(16, 24, 32);

    let pixels = (0..width * height)
        .map(|i| {
            let (x, y) = (i % width, i / width);

            if x > width / 3 && x < 2 * width / 3 && y > height / 3 && y < 2 * height / 3 {
                Rgb::new(rng.generate(), rng.generate(), 255)
            } else {
                background
            }
        })
        .collect();

    PixelBuffer::from_pixels(width, height, pixels).unwrap()
}
