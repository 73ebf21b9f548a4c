//! Type name to output module resolution.
//!
//! Built in one pass over every input file before anything is emitted, so
//! the translator can resolve a reference to a type declared in a file it
//! has not visited yet.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::{error, info, warn};
use tsmirror_core::DeclarationSource;

use crate::Config;

/// Bare type name to module location (relative to the output root, no extension).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolTable {
    entries: IndexMap<String, PathBuf>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve every declaration of `files`, then add the common root entry.
    ///
    /// A file that fails to parse contributes nothing; the failure is logged
    /// and the remaining files are still read.
    pub fn build(source: &dyn DeclarationSource, files: &[PathBuf], config: &Config) -> Self {
        let mut table = Self::new();

        for path in files {
            let unit = match source.read(path) {
                Ok(unit) => unit,
                Err(e) => {
                    error!("{e}");
                    continue;
                }
            };
            if let Some(package_dir) = unit.package_dir()
                && package_dir != unit.dir()
            {
                warn!(
                    "{}: package {} does not match its directory; output follows the directory",
                    path.display(),
                    unit.package.as_deref().unwrap_or_default()
                );
            }
            for decl in &unit.declarations {
                table.declare(&decl.name, unit.dir().join(&decl.name));
            }
        }

        table.declare(config.root(), config.root_location().to_path_buf());
        info!("resolved {} types", table.len());
        table
    }

    /// Record `name` at `location`. A later declaration of the same name wins.
    pub fn declare(&mut self, name: &str, location: PathBuf) {
        if let Some(previous) = self.entries.insert(name.to_string(), location) {
            let current = &self.entries[name];
            if previous != *current {
                warn!(
                    "type {name} declared at both {} and {}; using the latter",
                    previous.display(),
                    current.display()
                );
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Path> {
        self.entries.get(name).map(PathBuf::as_path)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries
            .iter()
            .map(|(name, location)| (name.as_str(), location.as_path()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
