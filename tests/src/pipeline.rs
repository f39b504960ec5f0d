/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! BMP files to container and back, the way the command line tool chains them

use splash_bmp::{BmpDecoder, BmpEncoder};
use splash_core::pixels::{PixelBuffer, Rgb};
use splash_format::{SplashDecoder, SplashEncodeErrors, SplashEncoder};

use crate::{hash, test_entries};

fn pack(bmp_files: &[Vec<u8>]) -> Result<Vec<u8>, SplashEncodeErrors> {
    let images: Vec<PixelBuffer> = bmp_files
        .iter()
        .map(|file| BmpDecoder::new(file).decode().unwrap())
        .collect();

    SplashEncoder::new(&images).encode_to_vec()
}

fn unpack(container: &[u8]) -> Vec<Vec<u8>> {
    SplashDecoder::new(container)
        .decode()
        .iter()
        .map(|image| BmpEncoder::new(&image.pixels).encode_to_vec().unwrap())
        .collect()
}

#[test]
fn test_pipeline() {
    for entry in test_entries() {
        let bmp_files: Vec<Vec<u8>> = entry
            .images()
            .iter()
            .map(|image| BmpEncoder::new(image).encode_to_vec().unwrap())
            .collect();

        let container = pack(&bmp_files).unwrap();
        let unpacked = unpack(&container);

        assert_eq!(unpacked.len(), bmp_files.len(), "{}", entry.name);

        for (original, extracted) in bmp_files.iter().zip(&unpacked) {
            assert_eq!(hash(original), hash(extracted), "{}", entry.name);
        }
        // and once more, the container itself is stable
        assert_eq!(hash(&pack(&unpacked).unwrap()), hash(&container));
    }
}

#[test]
fn two_black_images() {
    let black = BmpEncoder::new(&PixelBuffer::new(4, 4))
        .encode_to_vec()
        .unwrap();
    let container = pack(&[black.clone(), black]).unwrap();

    let images = SplashDecoder::new(&container).decode();
    assert_eq!(images.len(), 2);

    for image in images {
        assert_eq!(image.pixels.pixels(), &[Rgb::BLACK; 16]);
    }
}

#[test]
fn mismatched_sizes_abort() {
    let small = BmpEncoder::new(&PixelBuffer::new(4, 4))
        .encode_to_vec()
        .unwrap();
    let large = BmpEncoder::new(&PixelBuffer::new(8, 8))
        .encode_to_vec()
        .unwrap();

    assert!(matches!(
        pack(&[small, large]),
        Err(SplashEncodeErrors::DimensionMismatch { index: 1, .. })
    ));
}
