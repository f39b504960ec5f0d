/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The fixed layout record header and its payload arithmetic

use splash_core::bytestream::{ZByteIoError, ZByteWriterTrait, ZReader, ZWriter};

use crate::constants::{
    FORMAT_OFFSET, FORMAT_RLE24, HEADER_FIELDS_SIZE, HEADER_SIZE, HEIGHT_OFFSET,
    PAYLOAD_PREFIX_SIZE, SECTORS_OFFSET, SECTOR_SIZE, SPLASH_MAGIC, WIDTH_OFFSET
};

/// Number of sectors needed to hold the payload prefix and
/// `encoded_len` bytes of RLE24 data
///
/// This is the smallest count satisfying
/// `sectors * 512 >= 256 + encoded_len`
///
/// ```
/// use splash_format::sectors_for;
/// assert_eq!(sectors_for(0), 1);
/// assert_eq!(sectors_for(256), 1);
/// assert_eq!(sectors_for(257), 2);
/// ```
pub const fn sectors_for(encoded_len: usize) -> usize {
    (PAYLOAD_PREFIX_SIZE + encoded_len).div_ceil(SECTOR_SIZE)
}

/// Header fields of one embedded image
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SplashHeader {
    pub width:   u32,
    pub height:  u32,
    /// Pixel encoding, only [`FORMAT_RLE24`] is defined
    pub format:  u32,
    /// Size of the payload in 512 byte sectors
    pub sectors: u32
}

impl SplashHeader {
    /// Parse a header from the start of `bytes`
    ///
    /// Returns `None` if `bytes` does not start with the signature or is too short
    /// to hold the header fields. The padding is not inspected.
    pub fn parse(bytes: &[u8]) -> Option<SplashHeader> {
        let mut stream = ZReader::new(bytes);

        if stream.read_fixed_bytes_or_error::<8>().ok()? != SPLASH_MAGIC {
            return None;
        }
        if !ZReader::new(bytes).has(HEADER_FIELDS_SIZE) {
            return None;
        }
        stream.set_position(WIDTH_OFFSET);
        let width = stream.get_u32_le();
        stream.set_position(HEIGHT_OFFSET);
        let height = stream.get_u32_le();
        stream.set_position(FORMAT_OFFSET);
        let format = stream.get_u32_le();
        stream.set_position(SECTORS_OFFSET);
        let sectors = stream.get_u32_le();

        Some(SplashHeader {
            width,
            height,
            format,
            sectors
        })
    }

    /// Emit the 256 byte header
    pub fn write<T: ZByteWriterTrait>(&self, writer: &mut ZWriter<T>) -> Result<(), ZByteIoError> {
        writer.write_const_bytes(&SPLASH_MAGIC)?;
        writer.write_u32_le_err(self.width)?;
        writer.write_u32_le_err(self.height)?;
        writer.write_u32_le_err(self.format)?;
        writer.write_u32_le_err(self.sectors)?;
        writer.write_zeros(HEADER_SIZE - HEADER_FIELDS_SIZE)?;
        Ok(())
    }

    /// Whether the payload is RLE24 encoded
    pub const fn is_rle24(&self) -> bool {
        self.format == FORMAT_RLE24
    }

    /// Payload size in bytes, prefix and padding included
    pub const fn payload_size(&self) -> usize {
        (self.sectors as usize).saturating_mul(SECTOR_SIZE)
    }

    /// Room for the encoded stream, the payload minus its zero prefix
    pub const fn encoded_capacity(&self) -> usize {
        self.payload_size().saturating_sub(PAYLOAD_PREFIX_SIZE)
    }

    /// Size of the whole record, header included
    pub const fn record_size(&self) -> usize {
        HEADER_SIZE.saturating_add(self.payload_size())
    }

    /// `width * height` or `None` if it overflows
    pub const fn pixel_count(&self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }
}

/// A header located inside a container blob
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SplashRecord {
    /// Discovery index, `0` is the record at the lowest offset
    pub index:  usize,
    /// Offset of the signature inside the blob
    pub offset: usize,
    pub header: SplashHeader
}

impl SplashRecord {
    /// Offset of the encoded stream, past the header and the payload prefix
    pub const fn encoded_offset(&self) -> usize {
        self.offset
            .saturating_add(HEADER_SIZE)
            .saturating_add(PAYLOAD_PREFIX_SIZE)
    }

    /// The encoded stream of this record
    ///
    /// The slice is clipped to `data`, a record running past the end of the
    /// blob yields whatever bytes are present, possibly none.
    pub fn encoded_block<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        let start = self.encoded_offset().min(data.len());
        let end = self
            .encoded_offset()
            .saturating_add(self.header.encoded_capacity())
            .min(data.len());

        &data[start..end]
    }

    /// Whether the blob holds the whole payload of this record
    pub const fn is_complete(&self, data_len: usize) -> bool {
        self.offset.saturating_add(self.header.record_size()) <= data_len
    }
}
