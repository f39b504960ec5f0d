/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Decoding and encoding firmware splash image containers
//!
//! A container is a bare concatenation of records, each one a 256 byte
//! header followed by a payload measured in 512 byte sectors:
//!
//! ```text
//! ╔════════╤══════════════════════════════════════════════════════╗
//! ║ Bytes  │ Description                                          ║
//! ╠════════╪══════════════════════════════════════════════════════╣
//! ║ 8      │ "SPLASH!!" magic value                               ║
//! ╟────────┼──────────────────────────────────────────────────────╢
//! ║ 4      │ 32-Bit LE unsigned integer (width)                   ║
//! ╟────────┼──────────────────────────────────────────────────────╢
//! ║ 4      │ 32-Bit LE unsigned integer (height)                  ║
//! ╟────────┼──────────────────────────────────────────────────────╢
//! ║ 4      │ 32-Bit LE unsigned integer (format, 1 = RLE24)       ║
//! ╟────────┼──────────────────────────────────────────────────────╢
//! ║ 4      │ 32-Bit LE unsigned integer (payload sectors)         ║
//! ╟────────┼──────────────────────────────────────────────────────╢
//! ║ 232    │ zero padding                                         ║
//! ╟────────┼──────────────────────────────────────────────────────╢
//! ║ 256    │ zero prefix, first bytes of the payload              ║
//! ╟────────┼──────────────────────────────────────────────────────╢
//! ║ [..]   │ RLE24 stream, zero padded to sectors * 512 payload   ║
//! ╚════════╧══════════════════════════════════════════════════════╝
//! ```
//!
//! There is no record count, records are found again by scanning for the
//! magic value.
//!
//! # RLE24
//! Every segment starts with a control byte. Bit 7 set means a run, the
//! next three bytes (blue, green, red) are repeated `(control & 0x7f) + 1`
//! times. Bit 7 clear means a literal of `(control & 0x7f) + 1` samples, each
//! stored as blue, green, red.
//!
//! Decoding is lenient on purpose: truncated or malformed streams decode
//! to the pixels that could be recovered, the rest of the image is black.
//!
//! # Features
//! - `no_std` with `alloc`
//! - `log`: trace located records and warn on suspicious headers
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub use decoder::*;
pub use encoder::*;
pub use errors::*;
pub use header::*;
pub use rle::{decode_rle24, encode_rle24, max_encoded_size};
pub use splash_core;

pub mod constants;
mod decoder;
mod encoder;
mod errors;
mod header;
mod rle;
