/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The RLE24 pixel codec
//!
//! Both directions are pure functions, the container scanner and builder
//! call them once per record.

use alloc::vec::Vec;

use splash_core::bytestream::ZReader;
use splash_core::log::{trace, warn};
use splash_core::pixels::{PixelBuffer, Rgb};

use crate::constants::{LENGTH_MASK, MAX_SEGMENT_LENGTH, RUN_FLAG};

/// Decode an RLE24 stream into exactly `width * height` pixels
///
/// This never fails. Decoding stops once the image is full or when a
/// control byte promises more bytes than `block` still holds; any pixel
/// not produced by then is black. Samples of a truncated literal that are
/// fully present are kept.
///
/// Dimensions whose product overflows a usize cannot be represented, an
/// empty `0 x 0` image is returned for them.
///
/// # Example
/// ```
/// use splash_core::pixels::Rgb;
/// use splash_format::decode_rle24;
///
/// let image = decode_rle24(&[0x80, 30, 20, 10], 2, 1);
/// assert_eq!(image.pixels(), &[Rgb::new(10, 20, 30); 2]);
/// ```
pub fn decode_rle24(block: &[u8], width: usize, height: usize) -> PixelBuffer {
    let expected = match width.checked_mul(height) {
        Some(expected) => expected,
        None => {
            warn!("Image dimensions {}x{} overflow, returning an empty image", width, height);
            return PixelBuffer::new(0, 0);
        }
    };
    // a four byte run yields at most 128 pixels
    let mut pixels = Vec::with_capacity(expected.min(block.len().saturating_mul(32)));

    let mut stream = ZReader::new(block);

    while !stream.eof() && pixels.len() < expected {
        let control = stream.read_u8();
        let length = usize::from(control & LENGTH_MASK) + 1;

        if (control & RUN_FLAG) != 0 {
            let sample = match stream.read_fixed_bytes_or_error::<3>() {
                Ok(sample) => sample,
                Err(_) => {
                    trace!("Run truncated at offset {}", stream.position());
                    break;
                }
            };
            let count = length.min(expected - pixels.len());

            pixels.resize(pixels.len() + count, Rgb::from_bgr(sample));
        } else {
            let available = stream.remaining() / 3;
            let count = length.min(available);

            for _ in 0..count {
                pixels.push(Rgb::from_bgr(stream.read_fixed_bytes_or_zero::<3>()));
            }
            if count < length {
                trace!(
                    "Literal truncated at offset {}, {} of {} samples present",
                    stream.position(),
                    count,
                    length
                );
                break;
            }
        }
    }
    if pixels.len() < expected {
        trace!(
            "Decoded {} of {} pixels, filling the rest with black",
            pixels.len(),
            expected
        );
    }
    PixelBuffer::from_partial(width, height, pixels)
}

/// Worst case size of the RLE24 stream for `num_pixels` pixels
///
/// That is every pixel stored in a literal, with one control byte per
/// 128 samples.
pub const fn max_encoded_size(num_pixels: usize) -> usize {
    num_pixels * 3 + num_pixels.div_ceil(MAX_SEGMENT_LENGTH)
}

/// Encode pixels into an RLE24 stream
///
/// The encoder is greedy: two or more equal neighbours always become a run,
/// everything else is gathered into literals which stop right before a
/// repeated pixel. Segments never exceed 128 pixels.
///
/// # Example
/// ```
/// use splash_core::pixels::Rgb;
/// use splash_format::encode_rle24;
///
/// let pixels = [Rgb::new(1, 2, 3), Rgb::new(4, 5, 6), Rgb::new(7, 8, 9)];
/// assert_eq!(encode_rle24(&pixels), [0x02, 3, 2, 1, 6, 5, 4, 9, 8, 7]);
/// ```
pub fn encode_rle24(pixels: &[Rgb]) -> Vec<u8> {
    let mut out = Vec::with_capacity(max_encoded_size(pixels.len()));

    let n = pixels.len();
    let mut i = 0;

    while i < n {
        let px = pixels[i];
        let run = pixels[i..]
            .iter()
            .take(MAX_SEGMENT_LENGTH)
            .take_while(|x| **x == px)
            .count();

        if run > 1 {
            out.push(RUN_FLAG | (run - 1) as u8);
            out.extend_from_slice(&px.to_bgr());
            i += run;
            continue;
        }
        // literal, extend while the next pixel differs from its predecessor
        let start = i;
        i += 1;

        while i < n
            && (pixels[i] != pixels[i - 1] || i - start == 1)
            && (i - start) < MAX_SEGMENT_LENGTH
        {
            i += 1;
        }
        out.push((i - start - 1) as u8);

        for sample in &pixels[start..i] {
            out.extend_from_slice(&sample.to_bgr());
        }
    }
    out
}
