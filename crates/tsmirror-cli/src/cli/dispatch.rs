//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;
use tracing::Level;

use super::ColorChoice;
use crate::commands::convert::ConvertArgs;

pub struct ConvertParams {
    pub input: PathBuf,
    pub output: PathBuf,
    pub patches: bool,
    pub indent: Option<usize>,
    pub level: Level,
    pub color: ColorChoice,
}

impl ConvertParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: m
                .get_one::<PathBuf>("input")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("java_src")),
            output: m
                .get_one::<PathBuf>("output")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("ts_src")),
            patches: !m.get_flag("no_patches"),
            indent: m.get_one::<usize>("indent").copied(),
            level: parse_level(m),
            color: parse_color(m),
        }
    }
}

impl From<ConvertParams> for ConvertArgs {
    fn from(p: ConvertParams) -> Self {
        Self {
            input: p.input,
            output: p.output,
            patches: p.patches,
            indent: p.indent,
        }
    }
}

fn parse_level(m: &ArgMatches) -> Level {
    if m.get_flag("quiet") {
        return Level::WARN;
    }
    match m.get_count("verbose") {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
