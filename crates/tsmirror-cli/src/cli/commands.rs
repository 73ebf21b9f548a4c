//! Command builder for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI.
pub fn build_cli() -> Command {
    Command::new("tsmirror")
        .about("Mirror a Java API source tree as TypeScript declarations")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(input_arg())
        .arg(output_arg())
        .arg(no_patches_arg())
        .arg(indent_arg())
        .arg(verbose_arg())
        .arg(quiet_arg())
        .arg(color_arg())
}
