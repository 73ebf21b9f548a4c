//! Classification of source type text.
//!
//! Generic arguments and package qualification are discarded: the target
//! never re-introduces them, so only the bare base name and the array depth
//! survive parsing.

use std::fmt;

/// Built-in value types of the source language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Char,
    Boolean,
    Void,
}

impl Primitive {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "byte" => Self::Byte,
            "short" => Self::Short,
            "int" => Self::Int,
            "long" => Self::Long,
            "float" => Self::Float,
            "double" => Self::Double,
            "char" => Self::Char,
            "boolean" => Self::Boolean,
            "void" => Self::Void,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Char => "char",
            Self::Boolean => "boolean",
            Self::Void => "void",
        }
    }
}

/// Library reference types that wrap a primitive, plus `String` and `Object`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Boxed {
    Byte,
    Short,
    Integer,
    Long,
    Float,
    Double,
    Character,
    Boolean,
    String,
    Object,
}

impl Boxed {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "Byte" => Self::Byte,
            "Short" => Self::Short,
            "Integer" => Self::Integer,
            "Long" => Self::Long,
            "Float" => Self::Float,
            "Double" => Self::Double,
            "Character" => Self::Character,
            "Boolean" => Self::Boolean,
            "String" => Self::String,
            "Object" => Self::Object,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Byte => "Byte",
            Self::Short => "Short",
            Self::Integer => "Integer",
            Self::Long => "Long",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::Character => "Character",
            Self::Boolean => "Boolean",
            Self::String => "String",
            Self::Object => "Object",
        }
    }
}

/// A source type expression with generic arguments stripped.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    Primitive(Primitive),
    Boxed(Boxed),
    /// A bare single uppercase letter such as `T`.
    GenericParam(char),
    Array(Box<TypeExpr>),
    /// Any other name, unqualified.
    Custom(String),
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TypeExprError {
    #[error("empty type expression")]
    Empty,

    #[error("unbalanced generic brackets in `{0}`")]
    UnbalancedGenerics(String),

    #[error("malformed type expression `{0}`")]
    Malformed(String),
}

impl TypeExpr {
    /// Parse source type text such as `java.util.List<String>[]` or `int...`.
    pub fn parse(text: &str) -> Result<Self, TypeExprError> {
        let compact: String = text.split_whitespace().collect();
        if compact.is_empty() {
            return Err(TypeExprError::Empty);
        }

        let (compact, varargs) = match compact.strip_suffix("...") {
            Some(rest) => (rest.to_string(), true),
            None => (compact, false),
        };

        let mut rest = strip_generic_args(&compact)?;
        let mut depth = usize::from(varargs);
        while let Some(inner) = rest.strip_suffix("[]") {
            rest = inner.to_string();
            depth += 1;
        }

        let base = rest.rsplit('.').next().unwrap_or_default();
        if !is_identifier(base) {
            return Err(TypeExprError::Malformed(text.trim().to_string()));
        }

        let mut expr = Self::classify(base);
        for _ in 0..depth {
            expr = Self::Array(Box::new(expr));
        }
        Ok(expr)
    }

    fn classify(base: &str) -> Self {
        let mut chars = base.chars();
        if let (Some(c @ 'A'..='Z'), None) = (chars.next(), chars.next()) {
            return Self::GenericParam(c);
        }
        if let Some(p) = Primitive::from_name(base) {
            return Self::Primitive(p);
        }
        if let Some(b) = Boxed::from_name(base) {
            return Self::Boxed(b);
        }
        Self::Custom(base.to_string())
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => f.write_str(p.name()),
            Self::Boxed(b) => f.write_str(b.name()),
            Self::GenericParam(c) => write!(f, "{c}"),
            Self::Array(inner) => write!(f, "{inner}[]"),
            Self::Custom(name) => f.write_str(name),
        }
    }
}

/// Remove every balanced `<...>` segment, keeping the text around it.
fn strip_generic_args(text: &str) -> Result<String, TypeExprError> {
    let mut out = String::with_capacity(text.len());
    let mut depth = 0usize;
    for c in text.chars() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| TypeExprError::UnbalancedGenerics(text.to_string()))?;
            }
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    if depth != 0 {
        return Err(TypeExprError::UnbalancedGenerics(text.to_string()));
    }
    Ok(out)
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
