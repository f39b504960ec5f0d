/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use splash_core::pixels::{PixelBuffer, Rgb};
use splash_format::{encode_rle24, sectors_for, SplashDecoder, SplashEncoder, SplashHeader};

use crate::{hash_image, test_entries};

#[test]
fn test_containers() {
    let mut failed = Vec::new();

    for entry in test_entries() {
        let images = entry.images();
        let blob = SplashEncoder::new(&images).encode_to_vec().unwrap();
        let decoded = SplashDecoder::new(&blob).decode();

        if decoded.len() != images.len() {
            failed.push(format!(
                "{}: expected {} records, found {}",
                entry.name,
                images.len(),
                decoded.len()
            ));
            continue;
        }
        for (image, found) in images.iter().zip(&decoded) {
            let header = found.record.header;
            let stream = encode_rle24(image.pixels());

            assert_eq!(header.width as usize, entry.width);
            assert_eq!(header.height as usize, entry.height);
            assert_eq!(header.format, 1);
            assert_eq!(header.sectors as usize, sectors_for(stream.len()));

            if hash_image(image) != hash_image(&found.pixels) {
                failed.push(format!("{}: record {} differs", entry.name, found.record.index));
            }
        }
    }
    if !failed.is_empty() {
        panic!("Containers that failed {:#?}", failed);
    }
}

#[test]
fn known_container_bytes() {
    let image = PixelBuffer::from_pixels(2, 1, vec![Rgb::new(1, 2, 3); 2]).unwrap();
    let blob = SplashEncoder::new(&[image]).encode_to_vec().unwrap();

    let mut expected = vec![0_u8; 768];
    expected[..8].copy_from_slice(b"SPLASH!!");
    expected[8..12].copy_from_slice(&2_u32.to_le_bytes());
    expected[12..16].copy_from_slice(&1_u32.to_le_bytes());
    expected[16..20].copy_from_slice(&1_u32.to_le_bytes());
    expected[20..24].copy_from_slice(&1_u32.to_le_bytes());
    expected[512..516].copy_from_slice(&[0x81, 3, 2, 1]);

    assert_eq!(blob, expected);
}

#[test]
fn records_inside_firmware_image() {
    let images = [PixelBuffer::new(8, 2), PixelBuffer::new(8, 2)];
    let blob = SplashEncoder::new(&images).encode_to_vec().unwrap();

    let mut firmware = vec![0xFF_u8; 4096];
    firmware.extend_from_slice(&blob);
    firmware.extend_from_slice(&[0xEE; 100]);

    let records = SplashDecoder::new(&firmware).decode_headers();
    let offsets: Vec<usize> = records.iter().map(|r| r.offset).collect();

    assert_eq!(offsets, [4096, 4096 + 768]);
    assert_eq!(records[1].index, 1);
    assert_eq!(
        SplashHeader::parse(&firmware[4096..]),
        Some(records[0].header)
    );
}

#[test]
fn scanning_twice_gives_the_same_result() {
    for entry in test_entries() {
        let blob = SplashEncoder::new(&entry.images()).encode_to_vec().unwrap();
        let decoder = SplashDecoder::new(&blob);

        assert_eq!(decoder.decode(), decoder.decode(), "{}", entry.name);
    }
}
