//! tsmirror compiler: symbol resolution, type mapping and TypeScript emission.
//!
//! This crate provides the translation pipeline:
//! - `symbols` - type name to output module table, built before any emission
//! - `mapper` - source type expressions to TypeScript types
//! - `unknowns` - run-wide and per-file sets of unresolved names
//! - `singletons` - types exported as named global constants
//! - `translate` - one source file to one TypeScript module
//! - `placeholders` - the common root module and the placeholder module
//! - `pipeline` - the whole-tree driver
//! - `typescript` - rendering configuration and the output emitter

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::io;
use std::path::PathBuf;

use tsmirror_core::{SourceError, TypeExprError};

pub mod mapper;
pub mod pipeline;
pub mod placeholders;
pub mod singletons;
pub mod symbols;
pub mod translate;
pub mod typescript;
pub mod unknowns;

#[cfg(test)]
mod pipeline_tests;
#[cfg(test)]
mod singletons_tests;
#[cfg(test)]
mod symbols_tests;

pub use mapper::{TsType, map_type};
pub use pipeline::{RunReport, run};
pub use singletons::SingletonRegistry;
pub use symbols::SymbolTable;
pub use translate::{TranslatedFile, translate_file};
pub use typescript::Config;
pub use unknowns::{FileUnknowns, UnknownTypes};

/// Errors raised while translating a tree.
///
/// `Source` and `TypeExpr` are contained to the file that produced them.
/// `Enumerate` and a failed write of a shared module end the run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    TypeExpr(#[from] TypeExprError),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot enumerate input: {0}")]
    Enumerate(#[source] SourceError),
}

/// Result type for translation operations.
pub type Result<T> = std::result::Result<T, Error>;
