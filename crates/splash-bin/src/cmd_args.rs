/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

fn unpack() -> Command {
    Command::new("unpack")
        .about("Extract every image of a container into BMP files")
        .arg(Arg::new("container")
            .help("Container file to scan")
            .value_parser(value_parser!(PathBuf))
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("out")
            .help("Directory to write the BMP files to")
            .value_parser(value_parser!(PathBuf))
            .default_value("."))
}

fn pack() -> Command {
    Command::new("pack")
        .about("Build a container from a numbered set of BMP files")
        .arg(Arg::new("output")
            .help("Container file to write")
            .value_parser(value_parser!(PathBuf))
            .required(true))
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Directory holding the BMP files")
            .value_parser(value_parser!(PathBuf))
            .default_value("."))
}

fn probe() -> Command {
    Command::new("probe")
        .about("Print the record headers of a container as JSON")
        .arg(Arg::new("container")
            .help("Container file to scan")
            .value_parser(value_parser!(PathBuf))
            .required(true))
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("splashtool")
        .about("Unpack and repack firmware splash image containers")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(unpack())
        .subcommand(pack())
        .subcommand(probe())
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display information about located records and written files"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .global(true)
            .help_heading("ADVANCED")
            .help("Largest image width accepted, no limit unless given")
            .long_help("Records or BMP files wider than this are skipped (containers) or rejected (BMP files).\nStray signatures inside payloads often carry absurd dimensions.\nNo limit applies unless this is given.")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("max-height")
            .long("max-height")
            .global(true)
            .help_heading("ADVANCED")
            .help("Largest image height accepted, no limit unless given")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("ADVANCED")
            .help("Skip records with an unknown format and reject truncated BMP files"))
        .arg(Arg::new("prefix")
            .long("prefix")
            .global(true)
            .help("File name prefix of the numbered BMP files")
            .default_value("index"))
        .arg(Arg::new("all-yes")
            .short('y')
            .long("yes")
            .action(ArgAction::SetTrue)
            .global(true)
            .help("Overwrite existing files without asking"))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::cmd_args::create_cmd_args;

    #[test]
    fn verify_cmd() {
        create_cmd_args().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let matches = create_cmd_args()
            .try_get_matches_from(["splashtool", "unpack", "splash.img", "--strict", "-o", "out"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "unpack");
        assert!(sub.get_flag("strict"));
        assert_eq!(sub.get_one::<String>("prefix").unwrap(), "index");
        assert_eq!(
            sub.get_one::<PathBuf>("out"),
            Some(&PathBuf::from("out"))
        );
    }
}
