/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Core routines shared by all splash crates
//!
//! This crate provides a set of core routines shared
//! by the container codec, the bitmap reader/writer and the command line tool.
//!
//! It currently contains
//!
//! - A bytestream reader and writer with endian aware reads and writes
//! - The [`PixelBuffer`](pixels::PixelBuffer), the common currency between codecs
//! - Decoder options
//! - A logging facade which compiles to nothing unless the `log` feature is on
//!
//! This library is `#[no_std]` with `alloc` needed for defining `Vec`
//! which we need for storing decoded pixels.
//!
//! # Features
//!  - `std`: Enables writers for `std::io` sinks
//!
//!  - `log`: Routes the logging macros to the [log](https://docs.rs/log) crate
//!
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod bytestream;
pub mod log;
pub mod options;
pub mod pixels;
