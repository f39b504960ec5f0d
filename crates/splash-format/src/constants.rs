/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Fixed layout values of the splash container
//!
//! These come from the firmware that reads the container and must not change.

/// Signature opening every record header
pub const SPLASH_MAGIC: [u8; 8] = *b"SPLASH!!";
/// Size of a record header, including its zero padding
pub const HEADER_SIZE: usize = 256;
/// Allocation unit of a record payload
pub const SECTOR_SIZE: usize = 512;
/// Zero bytes opening every payload, before the encoded stream
pub const PAYLOAD_PREFIX_SIZE: usize = 256;
/// Format tag of the RLE24 encoding
pub const FORMAT_RLE24: u32 = 1;
/// The last 32 bytes of a blob are never tested for a signature
pub const MIN_SCAN_WINDOW: usize = 32;

pub(crate) const WIDTH_OFFSET: usize = 8;
pub(crate) const HEIGHT_OFFSET: usize = 12;
pub(crate) const FORMAT_OFFSET: usize = 16;
pub(crate) const SECTORS_OFFSET: usize = 20;
/// Bytes of the header actually carrying fields
pub(crate) const HEADER_FIELDS_SIZE: usize = 24;

/// Control byte bit marking a run
pub const RUN_FLAG: u8 = 0x80;
/// Control byte bits holding `length - 1`
pub const LENGTH_MASK: u8 = 0x7F;
/// Longest run or literal a single control byte can describe
pub const MAX_SEGMENT_LENGTH: usize = 128;
