/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

use splash_core::bytestream::{ZByteWriterTrait, ZWriter};
use splash_core::log::trace;
use splash_core::pixels::PixelBuffer;

use crate::constants::{FORMAT_RLE24, HEADER_SIZE, PAYLOAD_PREFIX_SIZE, SECTOR_SIZE};
use crate::errors::SplashEncodeErrors;
use crate::header::{sectors_for, SplashHeader};
use crate::rle::{encode_rle24, max_encoded_size};

/// A container builder
///
/// Every image becomes one record, in the order given. All images must
/// share the dimensions of the first one.
///
/// # Example
/// ```
/// use splash_core::pixels::PixelBuffer;
/// use splash_format::SplashEncoder;
///
/// let images = [PixelBuffer::new(4, 4), PixelBuffer::new(4, 4)];
/// let blob = SplashEncoder::new(&images).encode_to_vec().unwrap();
/// assert_eq!(blob.len(), 2 * (256 + 512));
/// ```
pub struct SplashEncoder<'a> {
    images: &'a [PixelBuffer]
}

impl<'a> SplashEncoder<'a> {
    pub fn new(images: &'a [PixelBuffer]) -> SplashEncoder<'a> {
        SplashEncoder { images }
    }

    /// Upper bound on the number of bytes [`encode`](Self::encode) writes
    pub fn max_size(&self) -> usize {
        self.images
            .iter()
            .map(|image| {
                let stream = max_encoded_size(image.pixels().len());
                HEADER_SIZE + sectors_for(stream) * SECTOR_SIZE
            })
            .sum()
    }

    /// Check that all images agree on their dimensions and that those fit in a header
    fn check_images(&self) -> Result<(), SplashEncodeErrors> {
        let first = match self.images.first() {
            Some(image) => image.dimensions(),
            None => return Ok(())
        };
        for (index, image) in self.images.iter().enumerate() {
            if image.dimensions() != first {
                return Err(SplashEncodeErrors::DimensionMismatch {
                    index,
                    expected: first,
                    found: image.dimensions()
                });
            }
        }
        for dimension in [first.0, first.1] {
            if u32::try_from(dimension).is_err() {
                return Err(SplashEncodeErrors::TooLargeDimensions(dimension));
            }
        }
        Ok(())
    }

    /// Encode all images into `sink`, returning the number of bytes written
    ///
    /// Nothing is written if the images are rejected.
    pub fn encode<T: ZByteWriterTrait>(&self, sink: T) -> Result<usize, SplashEncodeErrors> {
        self.check_images()?;

        let mut writer = ZWriter::new(sink);

        for (index, image) in self.images.iter().enumerate() {
            let stream = encode_rle24(image.pixels());
            let sectors = sectors_for(stream.len());

            let header = SplashHeader {
                width:   image.width() as u32,
                height:  image.height() as u32,
                format:  FORMAT_RLE24,
                sectors: u32::try_from(sectors)
                    .map_err(|_| SplashEncodeErrors::TooLargePayload(sectors))?
            };
            trace!(
                "Record {index}: {} stream bytes in {sectors} sectors",
                stream.len()
            );
            writer.reserve(header.record_size())?;
            header.write(&mut writer)?;
            writer.write_zeros(PAYLOAD_PREFIX_SIZE)?;
            writer.write_all(&stream)?;
            writer.write_zeros(header.encoded_capacity() - stream.len())?;
        }
        writer.flush()?;

        Ok(writer.bytes_written())
    }

    /// Encode all images into a new vector
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, SplashEncodeErrors> {
        let mut sink = Vec::new();
        self.encode(&mut sink)?;
        Ok(sink)
    }
}
