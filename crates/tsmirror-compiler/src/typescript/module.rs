//! Resolved shape of one emitted TypeScript module.

use crate::TsType;

/// `import { name } from "path";`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Import {
    pub name: String,
    pub path: String,
}

/// A fully mapped interface declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interface {
    pub name: String,
    /// Documentation with surrounding blank lines already trimmed.
    pub docs: Vec<String>,
    /// Exported global name when the interface is a singleton.
    pub singleton: Option<String>,
    pub extends: Vec<String>,
    pub fields: Vec<Field>,
    pub methods: Vec<Method>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: TsType,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    pub docs: Vec<String>,
    pub params: Vec<Field>,
    pub returns: TsType,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Module {
    pub imports: Vec<Import>,
    pub interfaces: Vec<Interface>,
}
