//! Parsed declaration shapes.
//!
//! Type expressions are kept as the source text the parser saw. Classifying
//! them is the translator's job (see [`crate::TypeExpr::parse`]), so a
//! malformed type fails the file that uses it instead of the whole parse.

/// Whether a declaration was written as a class or an interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Class,
    Interface,
}

impl DeclarationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
        }
    }
}

/// A named top-level type with its API surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDeclaration {
    pub name: String,
    pub kind: DeclarationKind,
    /// Documentation lines with comment delimiters removed.
    pub docs: Option<Vec<String>>,
    /// Supertype names in declaration order.
    pub supertypes: Vec<String>,
    pub fields: Vec<FieldSignature>,
    pub methods: Vec<MethodSignature>,
}

impl TypeDeclaration {
    pub fn new(name: impl Into<String>, kind: DeclarationKind) -> Self {
        Self {
            name: name.into(),
            kind,
            docs: None,
            supertypes: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, DeclarationKind::Class)
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(name, DeclarationKind::Interface)
    }

    /// Set the documentation lines.
    pub fn docs<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.docs = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    /// Append a supertype.
    pub fn extends(mut self, name: impl Into<String>) -> Self {
        self.supertypes.push(name.into());
        self
    }

    /// Append a field.
    pub fn field(mut self, field: FieldSignature) -> Self {
        self.fields.push(field);
        self
    }

    /// Append a method.
    pub fn method(mut self, method: MethodSignature) -> Self {
        self.methods.push(method);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSignature {
    pub name: String,
    pub ty: String,
}

impl FieldSignature {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub ty: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodSignature {
    pub name: String,
    pub docs: Option<Vec<String>>,
    pub params: Vec<Parameter>,
    pub return_type: String,
}

impl MethodSignature {
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            docs: None,
            params: Vec::new(),
            return_type: return_type.into(),
        }
    }

    /// Append a parameter.
    pub fn param(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.params.push(Parameter::new(name, ty));
        self
    }

    /// Set the documentation lines.
    pub fn docs<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.docs = Some(lines.into_iter().map(Into::into).collect());
        self
    }
}
