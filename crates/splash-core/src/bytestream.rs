/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//! and writer.
//!
//! The reader works over an in-memory slice and offers two flavours
//! of every read, one that errors out when the stream is too short and
//! one that silently returns zeroes, which decoders can use in hot loops
//! where truncated input is tolerated.
//!
//! The writer works over anything implementing [`ZByteWriterTrait`].
pub use reader::{ZByteIoError, ZReader};
pub use traits::ZByteWriterTrait;
pub use writer::ZWriter;

mod reader;
mod traits;
mod writer;
