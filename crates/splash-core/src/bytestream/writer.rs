/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::{ZByteIoError, ZByteWriterTrait};

const ZEROES: [u8; 512] = [0; 512];

/// Encapsulates a simple Byte writer with
/// support for Endian aware writes
pub struct ZWriter<T: ZByteWriterTrait> {
    buffer:        T,
    bytes_written: usize
}

impl<T: ZByteWriterTrait> ZWriter<T> {
    /// Create a new writer for the sink
    pub fn new(data: T) -> ZWriter<T> {
        ZWriter {
            buffer:        data,
            bytes_written: 0
        }
    }
    /// Return the number of bytes the writer has written
    ///
    /// ```
    /// use splash_core::bytestream::ZWriter;
    /// let mut sink = vec![];
    /// let mut stream = ZWriter::new(&mut sink);
    /// stream.write_u32_le_err(7).unwrap();
    /// assert_eq!(stream.bytes_written(), 4);
    /// ```
    pub const fn bytes_written(&self) -> usize {
        self.bytes_written
    }
    pub fn reserve(&mut self, additional: usize) -> Result<(), ZByteIoError> {
        self.buffer.reserve_capacity(additional)
    }
    pub fn flush(&mut self) -> Result<(), ZByteIoError> {
        self.buffer.flush_bytes()
    }
    /// Write all of `buf` or error out
    pub fn write_all(&mut self, buf: &[u8]) -> Result<(), ZByteIoError> {
        self.buffer.write_all_bytes(buf)?;
        self.bytes_written += buf.len();
        Ok(())
    }
    pub fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ZByteIoError> {
        self.buffer.write_const_bytes(buf)?;
        self.bytes_written += N;
        Ok(())
    }
    /// Write `count` zero bytes
    pub fn write_zeros(&mut self, mut count: usize) -> Result<(), ZByteIoError> {
        while count > 0 {
            let chunk = count.min(ZEROES.len());
            self.write_all(&ZEROES[..chunk])?;
            count -= chunk;
        }
        Ok(())
    }
}

macro_rules! write_single_type {
    ($name:tt,$int_type:tt) => {
        impl<T: ZByteWriterTrait> ZWriter<T> {
            #[doc=concat!("Write ",stringify!($int_type)," as a little endian integer")]
            #[doc=concat!("Returning an error if the underlying sink cannot support a ",stringify!($int_type)," write.")]
            #[inline]
            pub fn $name(&mut self, value: $int_type) -> Result<(), ZByteIoError> {
                self.write_const_bytes(&value.to_le_bytes())
            }
        }
    };
}

write_single_type!(write_u16_le_err, u16);
write_single_type!(write_u32_le_err, u32);
write_single_type!(write_i32_le_err, i32);

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::bytestream::ZWriter;

    #[test]
    fn writes_little_endian_and_zeroes() {
        let mut sink: Vec<u8> = vec![];
        let mut writer = ZWriter::new(&mut sink);

        writer.write_const_bytes(b"AB").unwrap();
        writer.write_u16_le_err(0x0102).unwrap();
        writer.write_u32_le_err(0x0304_0506).unwrap();
        writer.write_i32_le_err(-2).unwrap();
        writer.write_zeros(1000).unwrap();

        assert_eq!(writer.bytes_written(), 2 + 2 + 4 + 4 + 1000);
        assert_eq!(&sink[..12], &[b'A', b'B', 2, 1, 6, 5, 4, 3, 0xfe, 0xff, 0xff, 0xff]);
        assert!(sink[12..].iter().all(|x| *x == 0));
    }

    #[test]
    fn slice_sink_reports_short_buffer() {
        let mut storage = [0_u8; 3];
        let mut writer = ZWriter::new(&mut storage[..]);

        assert!(writer.write_u16_le_err(1).is_ok());
        assert!(writer.write_u16_le_err(1).is_err());
        assert_eq!(writer.bytes_written(), 2);
    }
}
