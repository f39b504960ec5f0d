/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Cross checks against the `image` crate BMP codec

use image::codecs::bmp::BmpEncoder as ReferenceEncoder;
use image::{ColorType, ImageFormat};
use splash_bmp::{probe_bmp, BmpDecoder, BmpEncoder};

use crate::{hash, hash_image, test_entries};

#[test]
fn written_bmp_opens_in_image() {
    for entry in test_entries() {
        for image in entry.images() {
            let bytes = BmpEncoder::new(&image).encode_to_vec().unwrap();
            assert!(probe_bmp(&bytes));

            let reference = image::load_from_memory_with_format(&bytes, ImageFormat::Bmp)
                .unwrap()
                .to_rgb8();

            assert_eq!(reference.width() as usize, image.width());
            assert_eq!(reference.height() as usize, image.height());
            assert_eq!(
                hash(reference.as_raw()),
                hash_image(&image),
                "{}",
                entry.name
            );
        }
    }
}

#[test]
fn image_bmp_opens_here() {
    for entry in test_entries() {
        for image in entry.images() {
            let mut bytes = Vec::new();
            ReferenceEncoder::new(&mut bytes)
                .encode(
                    &image.to_rgb_bytes(),
                    image.width() as u32,
                    image.height() as u32,
                    ColorType::Rgb8
                )
                .unwrap();

            let decoded = BmpDecoder::new(&bytes).decode().unwrap();
            assert_eq!(hash_image(&decoded), hash_image(&image), "{}", entry.name);
        }
    }
}
