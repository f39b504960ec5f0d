/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

/// Errors raised by the byte reader and writer
pub enum ZByteIoError {
    #[cfg(feature = "std")]
    StdIoError(std::io::Error),
    /// requested, available
    NotEnoughBytes(usize, usize),
    /// requested, available
    NotEnoughBuffer(usize, usize)
}

impl Debug for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            ZByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {}", err)
            }
            ZByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ZByteIoError::NotEnoughBuffer(expected, found) => {
                writeln!(
                    f,
                    "Not enough buffer to write {expected} bytes, buffer size is {found}"
                )
            }
        }
    }
}

impl Display for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ZByteIoError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for ZByteIoError {
    fn from(value: std::io::Error) -> Self {
        ZByteIoError::StdIoError(value)
    }
}

/// An endian aware reader over an in-memory byte slice
///
/// Reads past the end never panic, they either return an error
/// (`*_err` variants) or zeroes.
pub struct ZReader<'a> {
    stream:   &'a [u8],
    position: usize
}

impl<'a> ZReader<'a> {
    /// Create a new reader positioned at the start of `stream`
    pub const fn new(stream: &'a [u8]) -> ZReader<'a> {
        ZReader {
            stream,
            position: 0
        }
    }
    /// Current offset into the stream
    #[inline(always)]
    pub const fn position(&self) -> usize {
        self.position
    }
    /// Total length of the underlying stream
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.stream.len()
    }
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.stream.is_empty()
    }
    /// Number of bytes left to read
    #[inline(always)]
    pub const fn remaining(&self) -> usize {
        self.stream.len().saturating_sub(self.position)
    }
    /// Whether the stream can satisfy a read of `num` bytes
    ///
    /// # Example
    /// ```
    /// use splash_core::bytestream::ZReader;
    /// let reader = ZReader::new(&[1, 2, 3]);
    /// assert!(reader.has(3));
    /// assert!(!reader.has(4));
    /// ```
    #[inline(always)]
    pub const fn has(&self, num: usize) -> bool {
        self.remaining() >= num
    }
    #[inline(always)]
    pub const fn eof(&self) -> bool {
        self.position >= self.stream.len()
    }
    #[inline(always)]
    pub fn skip(&mut self, num: usize) {
        self.position = self.position.saturating_add(num);
    }
    #[inline]
    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }
    /// Return all bytes from the current position to the end of the stream
    pub fn remaining_bytes(&self) -> &'a [u8] {
        self.stream.get(self.position..).unwrap_or(&[])
    }

    /// Read a single byte returning `0` if the stream is exhausted
    #[inline(always)]
    pub fn read_u8(&mut self) -> u8 {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                *byte
            }
            None => 0
        }
    }
    #[inline(always)]
    pub fn read_u8_err(&mut self) -> Result<u8, ZByteIoError> {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                Ok(*byte)
            }
            None => Err(ZByteIoError::NotEnoughBytes(1, 0))
        }
    }
    /// Read exactly `N` bytes or error out without advancing
    #[inline(always)]
    pub fn read_fixed_bytes_or_error<const N: usize>(&mut self) -> Result<[u8; N], ZByteIoError> {
        let mut byte_store: [u8; N] = [0; N];

        match self.stream.get(self.position..self.position.saturating_add(N)) {
            Some(bytes) => {
                byte_store.copy_from_slice(bytes);
                self.position += N;
                Ok(byte_store)
            }
            None => Err(ZByteIoError::NotEnoughBytes(N, self.remaining()))
        }
    }
    /// Read exactly `N` bytes or return zeroes without advancing
    #[inline(always)]
    pub fn read_fixed_bytes_or_zero<const N: usize>(&mut self) -> [u8; N] {
        self.read_fixed_bytes_or_error::<N>().unwrap_or([0; N])
    }
}

macro_rules! get_single_type {
    ($name:tt,$name2:tt,$int_type:tt) => {
        impl<'a> ZReader<'a> {
            #[doc=concat!("Read ",stringify!($int_type)," as a little endian integer")]
            #[doc=concat!("Returning an error if the underlying buffer cannot support a ",stringify!($int_type)," read.")]
            #[inline]
            pub fn $name(&mut self) -> Result<$int_type, ZByteIoError> {
                const SIZE_OF_VAL: usize = core::mem::size_of::<$int_type>();

                let space = self.read_fixed_bytes_or_error::<SIZE_OF_VAL>()?;

                Ok($int_type::from_le_bytes(space))
            }

            #[doc=concat!("Read ",stringify!($int_type)," as a little endian integer")]
            #[doc=concat!("Returning 0 if the underlying buffer does not have enough bytes for a ",stringify!($int_type)," read.")]
            #[inline(always)]
            pub fn $name2(&mut self) -> $int_type {
                const SIZE_OF_VAL: usize = core::mem::size_of::<$int_type>();

                $int_type::from_le_bytes(self.read_fixed_bytes_or_zero::<SIZE_OF_VAL>())
            }
        }
    };
}

get_single_type!(get_u16_le_err, get_u16_le, u16);
get_single_type!(get_u32_le_err, get_u32_le, u32);
get_single_type!(get_i32_le_err, get_i32_le, i32);
