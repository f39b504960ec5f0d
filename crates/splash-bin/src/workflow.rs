/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs;
use std::io::{stdin, BufRead};
use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::{info, trace, warn};
use splash_format::{SplashDecoder, SplashEncoder};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::SplashToolErrors;
use crate::file_io::{
    collect_inputs, numbered_name, read_bmp, read_file, same_file, write_bmp, write_file
};
use crate::probe_files::probe_container;

fn path_arg<'a>(args: &'a ArgMatches, name: &str) -> &'a Path {
    args.get_one::<PathBuf>(name)
        .map(PathBuf::as_path)
        .unwrap_or(Path::new("."))
}

pub fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), SplashToolErrors> {
    match args.subcommand() {
        Some(("unpack", sub)) => {
            let written = unpack(
                path_arg(sub, "container"),
                path_arg(sub, "out"),
                cmd_opts
            )?;
            trace!("Unpacked {} files", written.len());
        }
        Some(("pack", sub)) => {
            pack(path_arg(sub, "output"), path_arg(sub, "in"), cmd_opts)?;
        }
        Some(("probe", sub)) => {
            println!("{}", probe_container(path_arg(sub, "container"), cmd_opts)?);
        }
        _ => unreachable!("clap requires a known subcommand")
    }
    Ok(())
}

/// Write every record of `container` as `{prefix}N.bmp` inside `out_dir`
///
/// Finding no record is not an error, an empty list is returned.
pub fn unpack(
    container: &Path, out_dir: &Path, options: &CmdOptions
) -> Result<Vec<PathBuf>, SplashToolErrors> {
    let data = read_file(container)?;
    let images = SplashDecoder::new_with_options(&data, options.decoder_options()).decode();

    if images.is_empty() {
        warn!("No splash headers found in {:?}", container);
        return Ok(Vec::new());
    }
    fs::create_dir_all(out_dir).map_err(|error| SplashToolErrors::Io {
        path: out_dir.to_path_buf(),
        error
    })?;

    let mut written = Vec::with_capacity(images.len());

    for image in images {
        let path = out_dir.join(numbered_name(&options.prefix, image.record.index));

        if same_file(&path, container) {
            return Err(SplashToolErrors::SamePath(path));
        }
        verify_output(&path, options)?;
        write_bmp(&path, &image.pixels)?;

        println!(
            "Extracted {} ({}x{})",
            path.display(),
            image.pixels.width(),
            image.pixels.height()
        );
        written.push(path);
    }
    Ok(written)
}

/// Build `output` from the numbered BMP files of `in_dir`
///
/// Every input is read and checked before the output is touched.
/// Returns the number of records written.
pub fn pack(output: &Path, in_dir: &Path, options: &CmdOptions) -> Result<usize, SplashToolErrors> {
    let inputs = collect_inputs(in_dir, &options.prefix)?;

    if let Some(path) = inputs.iter().find(|path| same_file(path, output)) {
        return Err(SplashToolErrors::SamePath(path.clone()));
    }

    let decoder_options = options.decoder_options();
    let mut images = Vec::with_capacity(inputs.len());
    let mut expected = None;

    for path in &inputs {
        let image = read_bmp(path, decoder_options, expected)?;
        expected = Some(image.dimensions());
        images.push(image);
    }

    let blob = SplashEncoder::new(&images).encode_to_vec()?;

    verify_output(output, options)?;
    write_file(output, &blob)?;

    let (width, height) = expected.unwrap_or((0, 0));
    println!(
        "Built {} with {} entries ({}x{})",
        output.display(),
        images.len(),
        width,
        height
    );
    Ok(images.len())
}

/// Ask before replacing an existing file unless overwriting was allowed
fn verify_output(path: &Path, options: &CmdOptions) -> Result<(), SplashToolErrors> {
    if !path.exists() {
        return Ok(());
    }
    if options.override_files {
        info!("Overwriting path {:?} ", path);
        return Ok(());
    }
    println!("File {:?} exists, overwrite [y/N]", path);
    let mut result = String::new();

    stdin()
        .lock()
        .read_line(&mut result)
        .map_err(|error| SplashToolErrors::Io {
            path: path.to_path_buf(),
            error
        })?;

    if result.trim() != "y" {
        return Err(SplashToolErrors::Declined(path.to_path_buf()));
    }
    Ok(())
}
