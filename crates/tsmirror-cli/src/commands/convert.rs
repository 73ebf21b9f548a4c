use std::path::PathBuf;

use tracing::{info, warn};
use tsmirror_compiler::{Config, RunReport};
use tsmirror_core::FsSink;
use tsmirror_java::JavaSource;

pub struct ConvertArgs {
    pub input: PathBuf,
    pub output: PathBuf,
    pub patches: bool,
    pub indent: Option<usize>,
}

pub fn run(args: ConvertArgs) {
    let report = execute(&args).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });
    summarize(&report);
}

pub fn execute(args: &ConvertArgs) -> tsmirror_compiler::Result<RunReport> {
    let mut sink = FsSink::new(&args.output);
    tsmirror_compiler::run(&source(args), &mut sink, &config(args))
}

fn source(args: &ConvertArgs) -> JavaSource {
    let source = JavaSource::new(&args.input);
    if args.patches {
        source
    } else {
        source.patches(Vec::new())
    }
}

fn config(args: &ConvertArgs) -> Config {
    match args.indent {
        Some(n) => Config::default().indent(" ".repeat(n)),
        None => Config::default(),
    }
}

fn summarize(report: &RunReport) {
    if !report.failed.is_empty() {
        warn!("{} files failed to convert", report.failed.len());
    }
    if !report.shadowed.is_empty() {
        warn!(
            "{} files not written over shared modules",
            report.shadowed.len()
        );
    }
    info!(
        "wrote {} files ({} types, {} skipped)",
        report.written.len(),
        report.types,
        report.skipped
    );
}
