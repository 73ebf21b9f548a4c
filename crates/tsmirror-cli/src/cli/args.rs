//! Argument builders for the CLI.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Java source tree (-i/--input).
pub fn input_arg() -> Arg {
    Arg::new("input")
        .short('i')
        .long("input")
        .value_name("DIR")
        .default_value("java_src")
        .value_parser(value_parser!(PathBuf))
        .help("Directory of .java files to mirror")
}

/// TypeScript output tree (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("DIR")
        .default_value("ts_src")
        .value_parser(value_parser!(PathBuf))
        .help("Directory receiving the .ts files")
}

/// Disable the built-in source corrections (--no-patches).
pub fn no_patches_arg() -> Arg {
    Arg::new("no_patches")
        .long("no-patches")
        .action(ArgAction::SetTrue)
        .help("Read sources without the built-in text patches")
}

/// Member indentation (--indent).
pub fn indent_arg() -> Arg {
    Arg::new("indent")
        .long("indent")
        .value_name("N")
        .value_parser(value_parser!(usize))
        .help("Indent members with N spaces instead of a tab")
}

/// Verbosity (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .conflicts_with("quiet")
        .help("Verbosity level (-v for debug, -vv for trace)")
}

/// Only report warnings and errors (-q/--quiet).
pub fn quiet_arg() -> Arg {
    Arg::new("quiet")
        .short('q')
        .long("quiet")
        .action(ArgAction::SetTrue)
        .help("Only print warnings and errors")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize log output")
}
