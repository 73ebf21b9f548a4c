//! The two I/O seams of the pipeline: reading declarations and writing text.
//!
//! The pipeline never touches the file system directly. Production runs plug
//! in a parser-backed [`DeclarationSource`] and an [`FsSink`]; tests use
//! [`MemorySource`] and [`MemorySink`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::model::TypeDeclaration;

/// Declarations parsed from one source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceUnit {
    /// Path relative to the input root, e.g. `noppes/npcs/api/IPos.java`.
    pub path: PathBuf,
    /// Declared package, if the file has one.
    pub package: Option<String>,
    pub declarations: Vec<TypeDeclaration>,
}

impl SourceUnit {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            package: None,
            declarations: Vec::new(),
        }
    }

    /// Set the declared package.
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Append a declaration.
    pub fn declaration(mut self, decl: TypeDeclaration) -> Self {
        self.declarations.push(decl);
        self
    }

    /// Directory of the file relative to the input root (empty at top level).
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new(""))
    }

    /// Directory implied by the declared package, e.g. `noppes/npcs/api`.
    pub fn package_dir(&self) -> Option<PathBuf> {
        self.package
            .as_deref()
            .map(|package| package.split('.').collect())
    }

    /// File name without its extension.
    pub fn stem(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("syntax error in {} at {line}:{column}", path.display())]
    Syntax {
        path: PathBuf,
        line: usize,
        column: usize,
    },

    #[error("invalid source {}: {message}", path.display())]
    Invalid { path: PathBuf, message: String },

    #[error("no such source file: {}", .0.display())]
    NotFound(PathBuf),
}

/// Yields parsed declarations for every file of an input tree.
pub trait DeclarationSource {
    /// Paths of all source files relative to the input root, in a stable order.
    fn files(&self) -> Result<Vec<PathBuf>, SourceError>;

    /// Parse one file returned by [`files`](Self::files).
    fn read(&self, path: &Path) -> Result<SourceUnit, SourceError>;
}

/// Destination for emitted text units, addressed by path relative to the output root.
pub trait OutputSink {
    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()>;
}

#[derive(Clone, Debug)]
enum MemoryEntry {
    Unit(SourceUnit),
    Broken(String),
}

/// In-memory declaration source, keyed by relative path in insertion order.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    entries: IndexMap<PathBuf, MemoryEntry>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parsed file.
    pub fn unit(mut self, unit: SourceUnit) -> Self {
        self.entries
            .insert(unit.path.clone(), MemoryEntry::Unit(unit));
        self
    }

    /// Add a file that fails to parse with `message`.
    pub fn broken(mut self, path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        self.entries
            .insert(path.into(), MemoryEntry::Broken(message.into()));
        self
    }
}

impl DeclarationSource for MemorySource {
    fn files(&self) -> Result<Vec<PathBuf>, SourceError> {
        Ok(self.entries.keys().cloned().collect())
    }

    fn read(&self, path: &Path) -> Result<SourceUnit, SourceError> {
        match self.entries.get(path) {
            Some(MemoryEntry::Unit(unit)) => Ok(unit.clone()),
            Some(MemoryEntry::Broken(message)) => Err(SourceError::Invalid {
                path: path.to_path_buf(),
                message: message.clone(),
            }),
            None => Err(SourceError::NotFound(path.to_path_buf())),
        }
    }
}

/// In-memory sink recording every write in order.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    files: IndexMap<PathBuf, String>,
    rejected: Vec<PathBuf>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make writes to `path` fail with `PermissionDenied`.
    pub fn reject(mut self, path: impl Into<PathBuf>) -> Self {
        self.rejected.push(path.into());
        self
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.keys().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl OutputSink for MemorySink {
    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        if self.rejected.iter().any(|p| p == path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("write rejected: {}", path.display()),
            ));
        }
        self.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

/// Writes text units under a root directory, creating parent directories.
#[derive(Clone, Debug)]
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl OutputSink for FsSink {
    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        let full = self.root.join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(full, contents)
    }
}
