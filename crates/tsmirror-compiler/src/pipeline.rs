//! Whole-tree translation driver.
//!
//! Resolve every declared type, translate and write each file, then write
//! the shared root and placeholder modules. A file that fails is logged and
//! left out; only enumeration and shared-module writes end the run.

use std::path::{Path, PathBuf};

use tracing::{error, info, warn};
use tsmirror_core::{DeclarationSource, OutputSink};

use crate::placeholders::{placeholder_module, root_module};
use crate::{Config, Error, Result, SymbolTable, UnknownTypes, translate_file};

/// Outcome of a completed run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Entries in the symbol table, the common root included.
    pub types: usize,
    /// Output paths of translated files, in input order.
    pub written: Vec<PathBuf>,
    /// Input paths that produced no output because of an error.
    pub failed: Vec<PathBuf>,
    /// Input files without declarations.
    pub skipped: usize,
    /// Input paths whose output would land on a shared module; not written.
    pub shadowed: Vec<PathBuf>,
    /// Names written to the placeholder module, sorted.
    pub unknowns: Vec<String>,
}

/// Translate every file of `source` into `sink`.
pub fn run(
    source: &dyn DeclarationSource,
    sink: &mut dyn OutputSink,
    config: &Config,
) -> Result<RunReport> {
    let files = source.files().map_err(Error::Enumerate)?;
    let symbols = SymbolTable::build(source, &files, config);

    let mut unknowns = UnknownTypes::new();
    let mut report = RunReport {
        types: symbols.len(),
        ..RunReport::default()
    };

    let reserved = [
        config.output_path(config.root_location()),
        config.output_path(config.placeholder_location()),
    ];

    for path in &files {
        match convert(source, sink, path, &symbols, &mut unknowns, config, &reserved) {
            Ok(Outcome::Written(output)) => {
                info!("converted {} -> {}", path.display(), output.display());
                report.written.push(output);
            }
            Ok(Outcome::Shadowed(output)) => {
                warn!(
                    "{} maps to shared module {}; not written",
                    path.display(),
                    output.display()
                );
                report.shadowed.push(path.clone());
            }
            Ok(Outcome::Skipped) => report.skipped += 1,
            Err(e) => {
                error!("failed to convert {}: {e}", path.display());
                report.failed.push(path.clone());
            }
        }
    }

    write(
        sink,
        &config.output_path(config.root_location()),
        &root_module(config),
    )?;
    if let Some(text) = placeholder_module(&unknowns) {
        write(
            sink,
            &config.output_path(config.placeholder_location()),
            &text,
        )?;
    }

    info!("{} unknown types", unknowns.len());
    report.unknowns = unknowns.iter().map(str::to_string).collect();
    Ok(report)
}

enum Outcome {
    Written(PathBuf),
    Shadowed(PathBuf),
    Skipped,
}

fn convert(
    source: &dyn DeclarationSource,
    sink: &mut dyn OutputSink,
    path: &Path,
    symbols: &SymbolTable,
    unknowns: &mut UnknownTypes,
    config: &Config,
    reserved: &[PathBuf],
) -> Result<Outcome> {
    let unit = source.read(path)?;
    let Some(file) = translate_file(&unit, symbols, unknowns, config)? else {
        return Ok(Outcome::Skipped);
    };
    if reserved.contains(&file.path) {
        return Ok(Outcome::Shadowed(file.path));
    }
    write(sink, &file.path, &file.contents)?;
    Ok(Outcome::Written(file.path))
}

fn write(sink: &mut dyn OutputSink, path: &Path, contents: &str) -> Result<()> {
    sink.write(path, contents).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
