//! Configuration types for TypeScript emission.

use std::path::{Path, PathBuf};

use crate::SingletonRegistry;

/// Configuration for TypeScript emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Member indentation
    pub(crate) indent: String,
    /// Common supertype injected into declarations without one
    pub(crate) root_name: String,
    /// Module holding one placeholder per unresolved name
    pub(crate) placeholder_module: String,
    /// Extension of emitted modules, without the dot
    pub(crate) extension: String,
    /// Types exported as named global instances
    pub(crate) singletons: SingletonRegistry,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
            root_name: "IObject".to_string(),
            placeholder_module: "missingTypes".to_string(),
            extension: "ts".to_string(),
            singletons: SingletonRegistry::default(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the member indentation.
    pub fn indent(mut self, value: impl Into<String>) -> Self {
        self.indent = value.into();
        self
    }

    /// Set the name of the common root type.
    pub fn root_name(mut self, value: impl Into<String>) -> Self {
        self.root_name = value.into();
        self
    }

    /// Set the placeholder module name.
    pub fn placeholder_module(mut self, value: impl Into<String>) -> Self {
        self.placeholder_module = value.into();
        self
    }

    /// Set the extension of emitted modules.
    pub fn extension(mut self, value: impl Into<String>) -> Self {
        self.extension = value.into();
        self
    }

    /// Set the singleton registry.
    pub fn singletons(mut self, value: SingletonRegistry) -> Self {
        self.singletons = value;
        self
    }

    pub fn root(&self) -> &str {
        &self.root_name
    }

    /// Module location of the common root type.
    pub fn root_location(&self) -> &Path {
        Path::new(&self.root_name)
    }

    /// Module location of the placeholder module.
    pub fn placeholder_location(&self) -> &Path {
        Path::new(&self.placeholder_module)
    }

    /// File written for the module at `location`.
    pub fn output_path(&self, location: &Path) -> PathBuf {
        location.with_extension(&self.extension)
    }
}
