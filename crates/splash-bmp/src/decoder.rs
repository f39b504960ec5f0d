/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

// Layout of the files this decoder accepts
//
// - 14 byte file header: the magic number ("BM"), file size, two reserved
//   fields and the offset to the pixel data.
// - An information header whose first four bytes give its size.
//   - OS/2 1.x headers are 12 bytes, width and height are unsigned 16 bit
//     values and there is no compression field.
//   - Windows headers are 40 bytes or larger, width and height are signed
//     32 bit values. A negative height means rows are stored top-down.
// - Rows of blue, green, red (and for 32 bit, an ignored fourth byte)
//   samples, each row padded to a multiple of four bytes.

use alloc::vec;

use splash_core::bytestream::ZReader;
use splash_core::log::{trace, warn};
use splash_core::options::DecoderOptions;
use splash_core::pixels::{PixelBuffer, Rgb};

use crate::common::{row_stride, BI_RGB, FILE_HEADER_SIZE, INFO_HEADER_SIZES};
use crate::errors::BmpDecoderErrors;

/// Probe some bytes to see
/// if they consist of a BMP image
pub fn probe_bmp(bytes: &[u8]) -> bool {
    let mut stream = ZReader::new(bytes);

    if stream.read_fixed_bytes_or_zero::<2>() != *b"BM" {
        return false;
    }
    // skip file_size   -> 4
    // skip reserved    -> 4
    // skip data offset -> 4
    stream.skip(12);

    match stream.get_u32_le_err() {
        Ok(size) => INFO_HEADER_SIZES.contains(&size),
        Err(_) => false
    }
}

/// A BMP decoder.
///
/// # Usage
/// ```no_run
/// use splash_bmp::BmpDecoder;
///
/// fn main() -> Result<(), splash_bmp::BmpDecoderErrors> {
///     let data = std::fs::read("index0.bmp").unwrap();
///     let mut decoder = BmpDecoder::new(&data);
///     decoder.decode_headers()?;
///     // after decoding headers, we can safely access the image metadata
///     let (w, h) = decoder.dimensions().unwrap();
///     println!("Image width: {}\t Image height: {}", w, h);
///
///     let pixels = decoder.decode()?;
///     println!("Pixels length:{}", pixels.pixels().len());
///     Ok(())
/// }
/// ```
pub struct BmpDecoder<'a> {
    bytes:           ZReader<'a>,
    options:         DecoderOptions,
    width:           usize,
    height:          usize,
    /// Rows are stored bottom-up
    flip_vertically: bool,
    depth:           u16,
    data_offset:     usize,
    decoded_headers: bool
}

impl<'a> BmpDecoder<'a> {
    /// Create a new bmp decoder that reads data from
    /// `data`
    pub fn new(data: &'a [u8]) -> BmpDecoder<'a> {
        BmpDecoder::new_with_options(data, DecoderOptions::default())
    }

    /// Create a new decoder instance with specified options
    pub fn new_with_options(data: &'a [u8], options: DecoderOptions) -> BmpDecoder<'a> {
        BmpDecoder {
            bytes: ZReader::new(data),
            options,
            width: 0,
            height: 0,
            flip_vertically: false,
            depth: 0,
            data_offset: 0,
            decoded_headers: false
        }
    }

    /// Decode headers stored in the bmp file and store
    /// information in the decode context
    ///
    /// After calling this, [`dimensions`](Self::dimensions) returns a value.
    pub fn decode_headers(&mut self) -> Result<(), BmpDecoderErrors> {
        if self.decoded_headers {
            return Ok(());
        }

        if self.bytes.read_u8_err()? != b'B' || self.bytes.read_u8_err()? != b'M' {
            return Err(BmpDecoderErrors::InvalidMagicBytes);
        }
        // 4 bytes file size
        // skip 4 reserved bytes
        self.bytes.skip(8);

        let data_offset = self.bytes.get_u32_le_err()?;
        let ihsize = self.bytes.get_u32_le_err()?;

        if !INFO_HEADER_SIZES.contains(&ihsize) {
            return Err(BmpDecoderErrors::UnknownHeaderSize(ihsize));
        }
        if ihsize.saturating_add(FILE_HEADER_SIZE as u32) > data_offset {
            return Err(BmpDecoderErrors::InvalidHeader(
                "pixel data overlaps the headers"
            ));
        }

        let (width, height);
        if ihsize == 12 {
            // os-v1 images
            width = i64::from(self.bytes.get_u16_le_err()?);
            height = i64::from(self.bytes.get_u16_le_err()?);
        } else {
            width = i64::from(self.bytes.get_i32_le_err()?);
            height = i64::from(self.bytes.get_i32_le_err()?);
        }
        if width < 0 {
            return Err(BmpDecoderErrors::InvalidHeader("negative width"));
        }

        self.flip_vertically = height > 0;

        self.height = usize::try_from(height.unsigned_abs())
            .map_err(|_| BmpDecoderErrors::OverFlowOccurred)?;
        self.width = width as usize;

        if self.height > self.options.max_height() {
            return Err(BmpDecoderErrors::TooLargeDimensions(
                "height",
                self.options.max_height(),
                self.height
            ));
        }

        if self.width > self.options.max_width() {
            return Err(BmpDecoderErrors::TooLargeDimensions(
                "width",
                self.options.max_width(),
                self.width
            ));
        }
        if self.width == 0 || self.height == 0 {
            return Err(BmpDecoderErrors::ZeroDimensions);
        }

        trace!("Width: {}", self.width);
        trace!("Height: {}", self.height);

        // planes
        if self.bytes.get_u16_le_err()? != 1 {
            return Err(BmpDecoderErrors::InvalidHeader("planes must be 1"));
        }

        let depth = self.bytes.get_u16_le_err()?;

        if depth != 24 && depth != 32 {
            return Err(BmpDecoderErrors::UnsupportedDepth(depth));
        }

        if ihsize >= 40 {
            let compression = self.bytes.get_u32_le_err()?;

            if compression != BI_RGB {
                return Err(BmpDecoderErrors::UnsupportedCompression(compression));
            }
        }

        trace!("Bit depth: {:?}", depth);
        trace!("Top down: {}", !self.flip_vertically);

        self.depth = depth;
        self.data_offset = data_offset as usize;
        self.decoded_headers = true;

        Ok(())
    }

    /// Image dimensions as `(width, height)`
    ///
    /// Returns `None` if headers haven't been decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if !self.decoded_headers {
            return None;
        }
        Some((self.width, self.height))
    }

    /// Decode the image into a pixel buffer, top row first
    ///
    /// Pixel data shorter than the header implies is an error in strict
    /// mode; otherwise the missing rows are left black.
    pub fn decode(&mut self) -> Result<PixelBuffer, BmpDecoderErrors> {
        self.decode_headers()?;

        let bytes_per_pixel = usize::from(self.depth / 8);
        let stride =
            row_stride(self.width, bytes_per_pixel).ok_or(BmpDecoderErrors::OverFlowOccurred)?;
        let expected = stride
            .checked_mul(self.height)
            .ok_or(BmpDecoderErrors::OverFlowOccurred)?;
        let count = self
            .width
            .checked_mul(self.height)
            .ok_or(BmpDecoderErrors::OverFlowOccurred)?;

        self.bytes.set_position(self.data_offset);
        let data = self.bytes.remaining_bytes();

        if data.len() < expected {
            if self.options.strict_mode() {
                return Err(BmpDecoderErrors::TruncatedPixels(expected, data.len()));
            }
            warn!(
                "Pixel data truncated, expected {} bytes but found {}",
                expected,
                data.len()
            );
        }

        let mut pixels = vec![Rgb::BLACK; count];

        for (index, row) in data.chunks(stride).take(self.height).enumerate() {
            let out_row = if self.flip_vertically {
                self.height - 1 - index
            } else {
                index
            };
            let start = out_row * self.width;

            pixels[start..start + self.width]
                .iter_mut()
                .zip(row.chunks_exact(bytes_per_pixel))
                .for_each(|(pix, sample)| *pix = Rgb::from_bgr([sample[0], sample[1], sample[2]]));
        }

        Ok(PixelBuffer::from_partial(self.width, self.height, pixels))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use splash_core::options::DecoderOptions;
    use splash_core::pixels::Rgb;

    use crate::decoder::{probe_bmp, BmpDecoder};
    use crate::errors::BmpDecoderErrors;

    /// A 2x2, 24 bit image, rows padded to 8 bytes
    fn small_bmp(height: i32) -> Vec<u8> {
        let mut out = vec![];
        out.extend(b"BM");
        out.extend(70_u32.to_le_bytes());
        out.extend([0; 4]);
        out.extend(54_u32.to_le_bytes());
        out.extend(40_u32.to_le_bytes());
        out.extend(2_i32.to_le_bytes());
        out.extend(height.to_le_bytes());
        out.extend(1_u16.to_le_bytes());
        out.extend(24_u16.to_le_bytes());
        out.extend([0; 24]);
        // first stored row
        out.extend([3, 2, 1, 6, 5, 4, 0, 0]);
        // second stored row
        out.extend([9, 8, 7, 12, 11, 10, 0, 0]);
        out
    }

    #[test]
    fn bottom_up_rows_are_flipped() {
        let data = small_bmp(2);
        assert!(probe_bmp(&data));

        let image = BmpDecoder::new(&data).decode().unwrap();
        assert_eq!(
            image.pixels(),
            &[
                Rgb::new(7, 8, 9),
                Rgb::new(10, 11, 12),
                Rgb::new(1, 2, 3),
                Rgb::new(4, 5, 6)
            ]
        );
    }

    #[test]
    fn top_down_rows_are_kept() {
        let data = small_bmp(-2);
        let image = BmpDecoder::new(&data).decode().unwrap();
        assert_eq!(image.pixels()[0], Rgb::new(1, 2, 3));
        assert_eq!(image.dimensions(), (2, 2));
    }

    #[test]
    fn os2_header() {
        let mut data = vec![];
        data.extend(b"BM");
        data.extend([0; 8]);
        data.extend(26_u32.to_le_bytes());
        data.extend(12_u32.to_le_bytes());
        data.extend(1_u16.to_le_bytes());
        data.extend(1_u16.to_le_bytes());
        data.extend(1_u16.to_le_bytes());
        data.extend(24_u16.to_le_bytes());
        data.extend([30, 20, 10, 0]);

        let image = BmpDecoder::new(&data).decode().unwrap();
        assert_eq!(image.pixels(), &[Rgb::new(10, 20, 30)]);
    }

    #[test]
    fn truncated_pixels_depend_on_strict_mode() {
        let mut data = small_bmp(2);
        data.truncate(62);

        let image = BmpDecoder::new(&data).decode().unwrap();
        assert_eq!(image.pixels()[2], Rgb::new(1, 2, 3));
        assert_eq!(image.pixels()[0], Rgb::BLACK);

        let options = DecoderOptions::default().set_strict_mode(true);
        assert!(matches!(
            BmpDecoder::new_with_options(&data, options).decode(),
            Err(BmpDecoderErrors::TruncatedPixels(16, 8))
        ));
    }

    #[test]
    fn limits_and_bad_input() {
        let data = small_bmp(2);
        let options = DecoderOptions::default().set_max_width(1);
        assert!(matches!(
            BmpDecoder::new_with_options(&data, options).decode(),
            Err(BmpDecoderErrors::TooLargeDimensions("width", 1, 2))
        ));

        assert!(matches!(
            BmpDecoder::new(b"PNG").decode(),
            Err(BmpDecoderErrors::InvalidMagicBytes)
        ));

        let mut paletted = small_bmp(2);
        paletted[28] = 8;
        assert!(matches!(
            BmpDecoder::new(&paletted).decode(),
            Err(BmpDecoderErrors::UnsupportedDepth(8))
        ));
        assert!(!probe_bmp(b"BM"));
    }
}
