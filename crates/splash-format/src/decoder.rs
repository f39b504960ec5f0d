/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Locating and decoding records inside a container blob
//!
//! The blob has no record table. Every byte offset is tested for the magic
//! value, matches are not skipped over, so a magic value appearing inside
//! an encoded payload yields a spurious record.
use alloc::vec::Vec;

use splash_core::log::{trace, warn};
use splash_core::options::DecoderOptions;
use splash_core::pixels::PixelBuffer;

use crate::constants::{MIN_SCAN_WINDOW, SPLASH_MAGIC};
use crate::header::{SplashHeader, SplashRecord};
use crate::rle::decode_rle24;

/// Quick check whether `data` holds at least one record signature
///
/// Only the window the scanner looks at is tested, so this agrees with
/// [`SplashDecoder::decode_headers`] returning something, limits aside.
///
/// ```
/// use splash_format::probe_splash;
///
/// let mut data = vec![0; 40];
/// assert!(!probe_splash(&data));
/// data[4..12].copy_from_slice(b"SPLASH!!");
/// assert!(probe_splash(&data));
/// ```
pub fn probe_splash(data: &[u8]) -> bool {
    let end = data.len().saturating_sub(MIN_SCAN_WINDOW);

    data.windows(SPLASH_MAGIC.len())
        .take(end)
        .any(|window| window == SPLASH_MAGIC)
}

/// A decoded record
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplashImage {
    pub record: SplashRecord,
    pub pixels: PixelBuffer
}

/// A container scanner and decoder
///
/// # Example
/// ```no_run
/// use splash_format::SplashDecoder;
///
/// let data = std::fs::read("splash.img").unwrap();
/// for image in SplashDecoder::new(&data).decode() {
///     println!("{}: {}x{}", image.record.index, image.pixels.width(), image.pixels.height());
/// }
/// ```
pub struct SplashDecoder<'a> {
    data:    &'a [u8],
    options: DecoderOptions
}

impl<'a> SplashDecoder<'a> {
    /// Create a decoder with default options
    pub fn new(data: &'a [u8]) -> SplashDecoder<'a> {
        SplashDecoder::new_with_options(data, DecoderOptions::default())
    }

    pub fn new_with_options(data: &'a [u8], options: DecoderOptions) -> SplashDecoder<'a> {
        SplashDecoder { data, options }
    }

    /// Locate every record in the blob, in offset order
    ///
    /// Positions `0..len - 32` are tested, so a blob of 32 bytes or less
    /// holds no record. Headers that the options reject are skipped and do
    /// not consume an index.
    pub fn decode_headers(&self) -> Vec<SplashRecord> {
        let mut records = Vec::new();
        let end = self.data.len().saturating_sub(MIN_SCAN_WINDOW);

        for offset in 0..end {
            let header = match SplashHeader::parse(&self.data[offset..]) {
                Some(header) => header,
                None => continue
            };
            if !self.accept(offset, &header) {
                continue;
            }
            let record = SplashRecord {
                index: records.len(),
                offset,
                header
            };
            trace!(
                "Record {} at offset {offset}: {}x{}, {} sectors",
                record.index,
                header.width,
                header.height,
                header.sectors
            );
            if !record.is_complete(self.data.len()) {
                warn!(
                    "Record {} at offset {offset} runs past the end of the data",
                    record.index
                );
            }
            records.push(record);
        }
        records
    }

    /// Locate and decode every record
    pub fn decode(&self) -> Vec<SplashImage> {
        self.decode_headers()
            .into_iter()
            .map(|record| self.decode_record(&record))
            .collect()
    }

    /// Decode the payload of a single record
    pub fn decode_record(&self, record: &SplashRecord) -> SplashImage {
        let pixels = decode_rle24(
            record.encoded_block(self.data),
            record.header.width as usize,
            record.header.height as usize
        );
        SplashImage {
            record: *record,
            pixels
        }
    }

    fn accept(&self, offset: usize, header: &SplashHeader) -> bool {
        let (width, height) = (header.width as usize, header.height as usize);

        if width > self.options.max_width() || height > self.options.max_height() {
            warn!(
                "Skipping record at offset {offset}, dimensions {width}x{height} exceed limits {}x{}",
                self.options.max_width(),
                self.options.max_height()
            );
            return false;
        }
        if header.pixel_count().is_none() {
            warn!("Skipping record at offset {offset}, pixel count overflows");
            return false;
        }
        if !header.is_rle24() {
            if self.options.strict_mode() {
                warn!(
                    "Skipping record at offset {offset}, unknown format {}",
                    header.format
                );
                return false;
            }
            warn!(
                "Record at offset {offset} declares format {}, decoding as RLE24",
                header.format
            );
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use splash_core::options::DecoderOptions;
    use splash_core::pixels::Rgb;

    use crate::decoder::SplashDecoder;

    fn record(width: u32, height: u32, format: u32, sectors: u32, stream: &[u8]) -> Vec<u8> {
        let mut out = vec![0_u8; 256 + sectors as usize * 512];
        out[..8].copy_from_slice(b"SPLASH!!");
        out[8..12].copy_from_slice(&width.to_le_bytes());
        out[12..16].copy_from_slice(&height.to_le_bytes());
        out[16..20].copy_from_slice(&format.to_le_bytes());
        out[20..24].copy_from_slice(&sectors.to_le_bytes());
        out[512..512 + stream.len()].copy_from_slice(stream);
        out
    }

    #[test]
    fn two_records_separated_by_garbage() {
        let mut blob = vec![0xAB_u8; 100];
        blob.extend(record(2, 1, 1, 1, &[0x81, 3, 2, 1]));
        blob.extend([0x11; 40]);
        blob.extend(record(1, 1, 1, 1, &[0x00, 9, 8, 7]));

        let images = SplashDecoder::new(&blob).decode();

        assert_eq!(images.len(), 2);
        assert_eq!(images[0].record.index, 0);
        assert_eq!(images[0].record.offset, 100);
        assert_eq!(images[0].pixels.pixels(), &[Rgb::new(1, 2, 3); 2]);
        assert_eq!(images[1].record.index, 1);
        assert_eq!(images[1].record.offset, 100 + 768 + 40);
        assert_eq!(images[1].pixels.pixels(), &[Rgb::new(7, 8, 9)]);
    }

    #[test]
    fn scanning_is_deterministic() {
        let mut blob = record(3, 3, 1, 1, &[0x88, 1, 1, 1]);
        blob.extend(record(3, 3, 1, 1, &[0x02, 1, 2, 3, 4, 5, 6, 7, 8, 9]));

        let decoder = SplashDecoder::new(&blob);
        assert_eq!(decoder.decode(), decoder.decode());
    }

    #[test]
    fn short_blobs_hold_no_records() {
        let mut blob = b"SPLASH!!".to_vec();
        blob.resize(32, 0);
        assert!(SplashDecoder::new(&blob).decode_headers().is_empty());

        blob.push(0);
        assert_eq!(SplashDecoder::new(&blob).decode_headers().len(), 1);

        assert!(SplashDecoder::new(&[]).decode().is_empty());
    }

    #[test]
    fn truncated_record_decodes_what_is_present() {
        let mut blob = record(4, 1, 1, 1, &[0x01, 1, 2, 3, 4, 5, 6, 0x81, 7, 7, 7]);
        blob.truncate(512 + 9);

        let images = SplashDecoder::new(&blob).decode();
        assert_eq!(images.len(), 1);
        assert_eq!(
            images[0].pixels.pixels(),
            &[Rgb::new(3, 2, 1), Rgb::new(6, 5, 4), Rgb::BLACK, Rgb::BLACK]
        );
    }

    #[test]
    fn magic_inside_a_payload_is_reported() {
        let mut stream = vec![0x00, 1, 2, 3];
        stream.extend(b"SPLASH!!");
        let blob = record(1, 1, 1, 1, &stream);

        let records = SplashDecoder::new(&blob).decode_headers();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].offset, 516);
        assert_eq!(records[1].header.width, 0);
    }

    #[test]
    fn unknown_format_depends_on_strict_mode() {
        let blob = record(1, 1, 2, 1, &[0x80, 1, 2, 3]);

        let lenient = SplashDecoder::new(&blob).decode();
        assert_eq!(lenient.len(), 1);
        assert_eq!(lenient[0].pixels.pixels(), &[Rgb::new(3, 2, 1)]);

        let options = DecoderOptions::default().set_strict_mode(true);
        assert!(SplashDecoder::new_with_options(&blob, options)
            .decode()
            .is_empty());
    }

    #[test]
    fn oversized_records_do_not_consume_an_index() {
        let mut blob = record(100, 1, 1, 1, &[]);
        blob.extend(record(1, 1, 1, 1, &[0x80, 1, 2, 3]));

        let options = DecoderOptions::default().set_max_width(10);
        let records = SplashDecoder::new_with_options(&blob, options).decode_headers();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].index, 0);
        assert_eq!(records[0].offset, 768);
    }
}
