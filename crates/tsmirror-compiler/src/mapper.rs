//! Source type expressions to TypeScript types.

use std::fmt;

use tracing::info;
use tsmirror_core::{Boxed, Primitive, TypeExpr};

use crate::{FileUnknowns, SymbolTable, UnknownTypes};

/// A TypeScript type as it appears in a member signature.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TsType {
    Number,
    String,
    Boolean,
    Void,
    Any,
    /// Opaque generic parameter, emitted as written.
    Generic(char),
    /// A declared or placeholder interface.
    Named(String),
    Array(Box<TsType>),
}

impl TsType {
    /// The interface name this type refers to once arrays are removed.
    pub fn named(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            Self::Array(inner) => inner.named(),
            _ => None,
        }
    }
}

impl fmt::Display for TsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number => f.write_str("number"),
            Self::String => f.write_str("string"),
            Self::Boolean => f.write_str("boolean"),
            Self::Void => f.write_str("void"),
            Self::Any => f.write_str("any"),
            Self::Generic(c) => write!(f, "{c}"),
            Self::Named(name) => f.write_str(name),
            Self::Array(inner) => write!(f, "{inner}[]"),
        }
    }
}

/// Map `expr` to its TypeScript counterpart.
///
/// A custom name missing from `symbols` is recorded in both unknown sets and
/// still maps to its bare name, to be satisfied by a placeholder.
pub fn map_type(
    expr: &TypeExpr,
    symbols: &SymbolTable,
    file: &mut FileUnknowns,
    global: &mut UnknownTypes,
) -> TsType {
    match expr {
        TypeExpr::GenericParam(c) => TsType::Generic(*c),
        TypeExpr::Primitive(p) => map_primitive(*p),
        TypeExpr::Boxed(b) => map_boxed(*b),
        TypeExpr::Array(inner) => {
            TsType::Array(Box::new(map_type(inner, symbols, file, global)))
        }
        TypeExpr::Custom(name) => {
            if !symbols.contains(name) {
                global.insert(name);
                if file.insert(name) {
                    info!("Unknown Type: {name}");
                }
            }
            TsType::Named(name.clone())
        }
    }
}

fn map_primitive(p: Primitive) -> TsType {
    match p {
        Primitive::Byte
        | Primitive::Short
        | Primitive::Int
        | Primitive::Long
        | Primitive::Float
        | Primitive::Double => TsType::Number,
        Primitive::Char => TsType::String,
        Primitive::Boolean => TsType::Boolean,
        Primitive::Void => TsType::Void,
    }
}

fn map_boxed(b: Boxed) -> TsType {
    match b {
        Boxed::Byte
        | Boxed::Short
        | Boxed::Integer
        | Boxed::Long
        | Boxed::Float
        | Boxed::Double => TsType::Number,
        Boxed::Character | Boxed::String => TsType::String,
        Boxed::Boolean => TsType::Boolean,
        Boxed::Object => TsType::Any,
    }
}
