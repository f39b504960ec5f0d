/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use log::warn;
use splash_format::SplashDecoder;

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::SplashToolErrors;
use crate::file_io::read_file;
use crate::serde::Metadata;

/// Locate the records of a container and describe them as pretty printed JSON
pub fn probe_container(file: &Path, options: &CmdOptions) -> Result<String, SplashToolErrors> {
    let data = read_file(file)?;

    let records = SplashDecoder::new_with_options(&data, options.decoder_options()).decode_headers();

    if records.is_empty() {
        warn!("No splash headers found in {:?}", file);
    }
    let metadata = Metadata::new(file, data.len(), &records);

    serde_json::to_string_pretty(&metadata).map_err(|error| SplashToolErrors::Io {
        path:  file.to_path_buf(),
        error: error.into()
    })
}
