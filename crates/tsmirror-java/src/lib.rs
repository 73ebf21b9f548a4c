#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Java declaration source for tsmirror.
//!
//! Walks an input tree for `.java` files, applies the configured text
//! patches in memory and extracts top-level class and interface
//! declarations with tree-sitter.

use std::fs;
use std::path::{Path, PathBuf};

use tsmirror_core::{DeclarationSource, SourceError, SourceUnit};
use walkdir::WalkDir;

mod extract;
pub mod javadoc;
pub mod patches;

#[cfg(test)]
mod javadoc_tests;
#[cfg(test)]
mod patches_tests;

pub use extract::parse_source;
pub use patches::{SourcePatch, default_patches};

/// File extension of source files picked up by [`JavaSource`].
pub const EXTENSION: &str = "java";

/// Reads and parses `.java` files below a root directory.
#[derive(Clone, Debug)]
pub struct JavaSource {
    root: PathBuf,
    patches: Vec<SourcePatch>,
}

impl JavaSource {
    /// Create a source over `root` with the default patch table.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            patches: default_patches(),
        }
    }

    /// Replace the patch table.
    pub fn patches(mut self, patches: Vec<SourcePatch>) -> Self {
        self.patches = patches;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DeclarationSource for JavaSource {
    fn files(&self) -> Result<Vec<PathBuf>, SourceError> {
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(&self.root).to_path_buf();
                SourceError::Io {
                    path,
                    source: e.into(),
                }
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != EXTENSION) {
                continue;
            }
            // WalkDir yields paths prefixed by the root it was given
            if let Ok(relative) = path.strip_prefix(&self.root) {
                files.push(relative.to_path_buf());
            }
        }
        Ok(files)
    }

    fn read(&self, path: &Path) -> Result<SourceUnit, SourceError> {
        let text = fs::read_to_string(self.root.join(path)).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = patches::apply(&self.patches, path, text);
        parse_source(path, &text)
    }
}
