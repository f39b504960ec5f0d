/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub(crate) const FILE_HEADER_SIZE: usize = 14;
pub(crate) const INFO_HEADER_SIZE: usize = 40;
/// Offset of the pixels in files written by the encoder
pub(crate) const PIXEL_DATA_OFFSET: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

/// Compression value of uncompressed images
pub(crate) const BI_RGB: u32 = 0;

/// Information header sizes the decoder understands
pub(crate) const INFO_HEADER_SIZES: [u32; 8] = [12, 16, 40, 52, 56, 64, 108, 124];

/// Bytes in one row of pixels, rows are padded to a multiple of four
pub(crate) const fn row_stride(width: usize, bytes_per_pixel: usize) -> Option<usize> {
    match width.checked_mul(bytes_per_pixel) {
        Some(bytes) => match bytes.checked_add(3) {
            Some(padded) => Some(padded & !3),
            None => None
        },
        None => None
    }
}

#[test]
fn stride_is_padded() {
    assert_eq!(row_stride(1, 3), Some(4));
    assert_eq!(row_stride(4, 3), Some(12));
    assert_eq!(row_stride(5, 3), Some(16));
    assert_eq!(row_stride(3, 4), Some(12));
    assert_eq!(row_stride(usize::MAX, 3), None);
}
