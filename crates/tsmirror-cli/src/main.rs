mod cli;
mod commands;

use cli::{ConvertParams, build_cli};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = build_cli().get_matches();
    let params = ConvertParams::from_matches(&matches);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(params.level.as_str().to_lowercase()))
        .with_target(false)
        .with_ansi(params.color.should_colorize())
        .with_writer(std::io::stderr)
        .init();

    commands::convert::run(params.into());
}
