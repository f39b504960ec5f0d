/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A small BMP reader and writer
//!
//! Splash records hold 24 bit pixels, so this crate only deals with
//! uncompressed true color bitmaps.
//!
//! # Supported formats
//! - 24 and 32 bit `BI_RGB` images with a Windows (40 bytes and larger)
//!   or OS/2 (12 bytes) information header
//! - bottom-up and top-down row order
//!
//! # Unsupported formats
//! - Paletted, masked and RLE compressed images
//! - Embedded PNG and JPEGs
//!
//! The encoder always writes a 54 byte header followed by bottom-up
//! 24 bit rows padded to four bytes.
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub use crate::decoder::{probe_bmp, BmpDecoder};
pub use crate::encoder::BmpEncoder;
pub use crate::errors::{BmpDecoderErrors, BmpEncoderErrors};

mod common;
mod decoder;
mod encoder;
mod errors;
