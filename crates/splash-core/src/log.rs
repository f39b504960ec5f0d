/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Logging macros
//!
//! With the `log` feature these are the `log` crate macros. Without it
//! they type check their arguments and emit nothing.
//!
//! ```
//! use splash_core::log::trace;
//!
//! let offset = 512;
//! trace!("Record at offset {offset}");
//! ```

#[cfg(feature = "log")]
pub use ::log::{debug, error, info, trace, warn};

// Macros exported with #[macro_export] land in the crate root,
// re-export them here under their usual names.
#[cfg(not(feature = "log"))]
pub use crate::{
    __splash_discard as debug, __splash_discard as error, __splash_discard as info,
    __splash_discard as trace, __splash_discard as warn
};

#[cfg(not(feature = "log"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __splash_discard {
    ($($arg:tt)+) => {{
        if false {
            let _ = ::core::format_args!($($arg)+);
        }
    }};
}
