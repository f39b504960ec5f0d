/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};
use splash_core::options::DecoderOptions;

#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub max_width:      usize,
    pub max_height:     usize,
    pub strict_mode:    bool,
    pub override_files: bool,
    /// Name of the n-th BMP file is `{prefix}{n}.bmp`
    pub prefix:         String
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        let defaults = DecoderOptions::default();

        CmdOptions {
            max_width:      defaults.max_width(),
            max_height:     defaults.max_height(),
            strict_mode:    false,
            override_files: false,
            prefix:         String::from("index")
        }
    }

    pub fn decoder_options(&self) -> DecoderOptions {
        DecoderOptions::default()
            .set_max_width(self.max_width)
            .set_max_height(self.max_height)
            .set_strict_mode(self.strict_mode)
    }
}

/// Global arguments are propagated into the subcommand, read them from there
fn active_matches(options: &ArgMatches) -> &ArgMatches {
    match options.subcommand() {
        Some((_, sub)) => sub,
        None => options
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let options = active_matches(options);
    let mut cmd_options = CmdOptions::new();

    if let Some(width) = options.get_one::<usize>("max-width") {
        cmd_options.max_width = *width;
    }
    if let Some(height) = options.get_one::<usize>("max-height") {
        cmd_options.max_height = *height;
    }
    if let Some(prefix) = options.get_one::<String>("prefix") {
        cmd_options.prefix.clone_from(prefix);
    }

    if options.get_flag("strict") {
        info!("Strict mode enabled");
        cmd_options.strict_mode = true;
    }
    if options.get_flag("all-yes") {
        info!("Setting all commands to yes");
        cmd_options.override_files = true;
    }
    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let options = active_matches(options);
    let log_level;

    if options.get_flag("debug") {
        log_level = Level::Debug;
    } else if options.get_flag("trace") {
        log_level = Level::Trace;
    } else if options.get_flag("warn") {
        log_level = Level::Warn
    } else if options.get_flag("info") {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
