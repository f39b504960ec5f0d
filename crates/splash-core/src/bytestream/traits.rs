/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Traits for writing encoded containers and bitmaps
//!
//! Anything that implements [`ZByteWriterTrait`] can be used as a sink
//! by the encoders in the splash family.

use crate::bytestream::reader::ZByteIoError;

/// The writer trait implemented for the splash encoders
pub trait ZByteWriterTrait {
    /// Write all bytes to the sink or return an error if something occurred
    ///
    /// This will always write all bytes, if it can't fully write all bytes, it will
    /// error out
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ZByteIoError>;
    /// Write a fixed number of bytes and error out if we can't write the bytes
    ///
    /// This is provided to allow for optimized writes where possible. (when the compiler can const fold them)
    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ZByteIoError>;
    /// Ensure bytes are written to the sink.
    fn flush_bytes(&mut self) -> Result<(), ZByteIoError>;
    /// A hint to tell the implementation how big of a size we expect the output to be
    ///
    /// This is just a hint, akin to calling `Vec::reserve` and should be treated as such.
    fn reserve_capacity(&mut self, size: usize) -> Result<(), ZByteIoError>;
}

impl ZByteWriterTrait for &mut alloc::vec::Vec<u8> {
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ZByteIoError> {
        self.extend_from_slice(buf);
        Ok(())
    }

    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ZByteIoError> {
        self.extend_from_slice(buf);
        Ok(())
    }
    fn flush_bytes(&mut self) -> Result<(), ZByteIoError> {
        Ok(())
    }
    fn reserve_capacity(&mut self, size: usize) -> Result<(), ZByteIoError> {
        self.reserve(size);
        Ok(())
    }
}

impl ZByteWriterTrait for &mut [u8] {
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ZByteIoError> {
        if buf.len() > self.len() {
            return Err(ZByteIoError::NotEnoughBuffer(buf.len(), self.len()));
        }
        let (a, b) = core::mem::take(self).split_at_mut(buf.len());
        a.copy_from_slice(buf);
        *self = b;

        Ok(())
    }

    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ZByteIoError> {
        self.write_all_bytes(buf)
    }

    fn flush_bytes(&mut self) -> Result<(), ZByteIoError> {
        Ok(())
    }
    fn reserve_capacity(&mut self, _: usize) -> Result<(), ZByteIoError> {
        // can't really pre-allocate anything here
        Ok(())
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> ZByteWriterTrait for &mut std::io::BufWriter<W> {
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ZByteIoError> {
        use std::io::Write;
        self.write_all(buf).map_err(ZByteIoError::StdIoError)
    }

    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ZByteIoError> {
        self.write_all_bytes(buf)
    }
    fn flush_bytes(&mut self) -> Result<(), ZByteIoError> {
        use std::io::Write;
        self.flush().map_err(ZByteIoError::StdIoError)
    }
    fn reserve_capacity(&mut self, _: usize) -> Result<(), ZByteIoError> {
        Ok(())
    }
}
