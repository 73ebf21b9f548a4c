#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for tsmirror.
//!
//! Three layers:
//! - **Declarations** (`model`): the parsed shape of a source type, as handed
//!   over by a declaration source
//! - **Type expressions** (`type_expr`): closed classification of source type text
//! - **I/O seams** (`source`): the `DeclarationSource` and `OutputSink` traits
//!   plus in-memory and file-system implementations

pub mod model;
pub mod source;
pub mod type_expr;
pub mod utils;


pub use model::{DeclarationKind, FieldSignature, MethodSignature, Parameter, TypeDeclaration};
pub use source::{
    DeclarationSource, FsSink, MemorySink, MemorySource, OutputSink, SourceError, SourceUnit,
};
pub use type_expr::{Boxed, Primitive, TypeExpr, TypeExprError};
