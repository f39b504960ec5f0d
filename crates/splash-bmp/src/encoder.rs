/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

use splash_core::bytestream::{ZByteWriterTrait, ZWriter};
use splash_core::pixels::PixelBuffer;

use crate::common::{row_stride, BI_RGB, INFO_HEADER_SIZE, PIXEL_DATA_OFFSET};
use crate::errors::BmpEncoderErrors;

/// A 24 bit BMP encoder
///
/// Rows are written bottom-up, so any reader that understands the
/// 40 byte Windows header can open the output.
///
/// # Example
/// ```
/// use splash_bmp::{BmpDecoder, BmpEncoder};
/// use splash_core::pixels::PixelBuffer;
///
/// let image = PixelBuffer::new(3, 2);
/// let bytes = BmpEncoder::new(&image).encode_to_vec().unwrap();
/// assert_eq!(bytes.len(), 54 + 2 * 12);
/// assert_eq!(BmpDecoder::new(&bytes).decode().unwrap(), image);
/// ```
pub struct BmpEncoder<'a> {
    image: &'a PixelBuffer
}

impl<'a> BmpEncoder<'a> {
    pub fn new(image: &'a PixelBuffer) -> BmpEncoder<'a> {
        BmpEncoder { image }
    }

    /// Number of bytes [`encode`](Self::encode) writes, `None` on overflow
    pub fn file_size(&self) -> Option<usize> {
        row_stride(self.image.width(), 3)?
            .checked_mul(self.image.height())?
            .checked_add(PIXEL_DATA_OFFSET)
    }

    /// Encode the image into `sink`, returning the number of bytes written
    pub fn encode<T: ZByteWriterTrait>(&self, sink: T) -> Result<usize, BmpEncoderErrors> {
        let (width, height) = self.image.dimensions();

        let header_width =
            i32::try_from(width).map_err(|_| BmpEncoderErrors::TooLargeDimensions(width))?;
        let header_height =
            i32::try_from(height).map_err(|_| BmpEncoderErrors::TooLargeDimensions(height))?;

        let file_size = self
            .file_size()
            .ok_or(BmpEncoderErrors::TooLargeDimensions(width.max(height)))?;
        let header_file_size =
            u32::try_from(file_size).map_err(|_| BmpEncoderErrors::TooLargeFile(file_size))?;
        let image_size = header_file_size - PIXEL_DATA_OFFSET as u32;

        let stride = row_stride(width, 3).unwrap_or(0);
        let padding = stride - width * 3;

        let mut writer = ZWriter::new(sink);
        writer.reserve(file_size)?;

        // file header
        writer.write_const_bytes(b"BM")?;
        writer.write_u32_le_err(header_file_size)?;
        writer.write_u32_le_err(0)?;
        writer.write_u32_le_err(PIXEL_DATA_OFFSET as u32)?;
        // information header
        writer.write_u32_le_err(INFO_HEADER_SIZE as u32)?;
        writer.write_i32_le_err(header_width)?;
        writer.write_i32_le_err(header_height)?;
        writer.write_u16_le_err(1)?;
        writer.write_u16_le_err(24)?;
        writer.write_u32_le_err(BI_RGB)?;
        writer.write_u32_le_err(image_size)?;
        // resolution, palette size and important colors
        writer.write_zeros(16)?;

        for row in self.image.rows().rev() {
            for pixel in row {
                writer.write_const_bytes(&pixel.to_bgr())?;
            }
            writer.write_zeros(padding)?;
        }
        writer.flush()?;

        Ok(writer.bytes_written())
    }

    pub fn encode_to_vec(&self) -> Result<Vec<u8>, BmpEncoderErrors> {
        let mut sink = Vec::new();
        self.encode(&mut sink)?;
        Ok(sink)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use nanorand::Rng;
    use splash_core::pixels::{PixelBuffer, Rgb};

    use crate::decoder::BmpDecoder;
    use crate::encoder::BmpEncoder;

    #[test]
    fn header_layout() {
        let image = PixelBuffer::new(5, 3);
        let bytes = BmpEncoder::new(&image).encode_to_vec().unwrap();

        assert_eq!(&bytes[0..2], b"BM");
        assert_eq!(&bytes[2..6], &(54_u32 + 16 * 3).to_le_bytes());
        assert_eq!(&bytes[10..14], &54_u32.to_le_bytes());
        assert_eq!(&bytes[14..18], &40_u32.to_le_bytes());
        assert_eq!(&bytes[18..22], &5_i32.to_le_bytes());
        assert_eq!(&bytes[22..26], &3_i32.to_le_bytes());
        assert_eq!(&bytes[28..30], &24_u16.to_le_bytes());
        assert_eq!(&bytes[34..38], &48_u32.to_le_bytes());
        assert_eq!(bytes.len(), 54 + 48);
    }

    #[test]
    fn last_row_is_stored_first() {
        let pixels = [Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)];
        let image = PixelBuffer::from_pixels(1, 2, pixels.to_vec()).unwrap();
        let bytes = BmpEncoder::new(&image).encode_to_vec().unwrap();

        assert_eq!(&bytes[54..58], &[6, 5, 4, 0]);
        assert_eq!(&bytes[58..62], &[3, 2, 1, 0]);
    }

    #[test]
    fn random_images_read_back() {
        let mut rng = nanorand::WyRand::new_seed(0xB3B);

        for _ in 0..20 {
            let width = rng.generate_range(1_usize..40);
            let height = rng.generate_range(1_usize..40);
            let pixels: Vec<Rgb> = (0..width * height)
                .map(|_| Rgb::new(rng.generate(), rng.generate(), rng.generate()))
                .collect();
            let image = PixelBuffer::from_pixels(width, height, pixels).unwrap();

            let bytes = BmpEncoder::new(&image).encode_to_vec().unwrap();
            assert_eq!(BmpDecoder::new(&bytes).decode().unwrap(), image);
        }
    }
}
