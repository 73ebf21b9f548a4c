//! One source file to one TypeScript module.
//!
//! Every declaration of the file is mapped against the symbol table, then
//! the imports are synthesized from what the mapped declarations reference:
//! declared types are imported from their own module, unresolved ones from
//! the placeholder module.

use std::collections::HashSet;
use std::path::PathBuf;

use indexmap::IndexSet;
use tracing::{debug, info, trace};
use tsmirror_core::utils::{relative_import_path, trim_blank_lines};
use tsmirror_core::{SourceUnit, TypeDeclaration, TypeExpr};

use crate::typescript::{Emitter, Field, Import, Interface, Method, Module};
use crate::{Config, FileUnknowns, Result, SymbolTable, TsType, UnknownTypes, map_type};

/// An emitted module, ready to be written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslatedFile {
    /// Output path relative to the output root.
    pub path: PathBuf,
    pub contents: String,
    /// Unresolved names this file imports from the placeholder module.
    pub unknowns: Vec<String>,
}

/// Translate `unit` into a TypeScript module.
///
/// Returns `None` when the file has no declarations. On error nothing is
/// produced; names already added to `global` stay there.
pub fn translate_file(
    unit: &SourceUnit,
    symbols: &SymbolTable,
    global: &mut UnknownTypes,
    config: &Config,
) -> Result<Option<TranslatedFile>> {
    if unit.declarations.is_empty() {
        debug!("{}: no declarations, skipped", unit.path.display());
        return Ok(None);
    }

    let mut translator = FileTranslator {
        symbols,
        config,
        global,
        file: FileUnknowns::new(),
        referenced: IndexSet::new(),
    };

    let interfaces = unit
        .declarations
        .iter()
        .map(|decl| translator.interface(decl))
        .collect::<Result<Vec<_>>>()?;

    let module = Module {
        imports: translator.imports(unit),
        interfaces,
    };
    let location = unit.dir().join(unit.stem());

    Ok(Some(TranslatedFile {
        path: config.output_path(&location),
        contents: Emitter::new(config).emit(&module),
        unknowns: translator.file.iter().map(str::to_string).collect(),
    }))
}

struct FileTranslator<'a> {
    symbols: &'a SymbolTable,
    config: &'a Config,
    global: &'a mut UnknownTypes,
    file: FileUnknowns,
    /// Named types in first-reference order.
    referenced: IndexSet<String>,
}

impl FileTranslator<'_> {
    fn interface(&mut self, decl: &TypeDeclaration) -> Result<Interface> {
        debug!("translating {} {}", decl.kind.as_str(), decl.name);
        let extends = self.supertypes(decl)?;

        let fields = decl
            .fields
            .iter()
            .map(|f| self.field(&f.name, &f.ty, &decl.name))
            .collect::<Result<Vec<_>>>()?;

        let mut methods = Vec::with_capacity(decl.methods.len());
        for m in &decl.methods {
            let params = m
                .params
                .iter()
                .map(|p| self.field(&p.name, &p.ty, &decl.name))
                .collect::<Result<Vec<_>>>()?;
            let returns = self.map(&m.return_type, &decl.name)?;
            methods.push(Method {
                name: m.name.clone(),
                docs: docs(m.docs.as_deref()),
                params,
                returns,
            });
        }

        let singleton = self.config.singletons.get(&decl.name).map(str::to_string);
        if let Some(global) = &singleton {
            info!("exporting {} as singleton {global}", decl.name);
        }

        Ok(Interface {
            name: decl.name.clone(),
            docs: docs(decl.docs.as_deref()),
            singleton,
            extends,
            fields,
            methods,
        })
    }

    /// Mapped supertypes, or the common root when none survive mapping.
    fn supertypes(&mut self, decl: &TypeDeclaration) -> Result<Vec<String>> {
        let mut extends = Vec::with_capacity(decl.supertypes.len().max(1));
        for text in &decl.supertypes {
            match self.map(text, &decl.name)? {
                TsType::Named(name) => extends.push(name),
                other => debug!("{}: dropped supertype {text} ({other})", decl.name),
            }
        }

        let config = self.config;
        let root = config.root();
        if extends.is_empty() && decl.name != root {
            self.reference(root, &decl.name);
            extends.push(root.to_string());
        }
        Ok(extends)
    }

    fn field(&mut self, name: &str, ty: &str, owner: &str) -> Result<Field> {
        Ok(Field {
            name: name.to_string(),
            ty: self.map(ty, owner)?,
        })
    }

    fn map(&mut self, text: &str, owner: &str) -> Result<TsType> {
        let expr = TypeExpr::parse(text)?;
        let ty = map_type(&expr, self.symbols, &mut self.file, &mut *self.global);
        trace!("{owner}: {expr} -> {ty}");
        if let Some(name) = ty.named() {
            self.reference(name, owner);
        }
        Ok(ty)
    }

    fn reference(&mut self, name: &str, owner: &str) {
        if name != owner && !self.referenced.contains(name) {
            self.referenced.insert(name.to_string());
        }
    }

    fn imports(&self, unit: &SourceUnit) -> Vec<Import> {
        let dir = unit.dir();
        let current = dir.join(unit.stem());
        let declared: HashSet<&str> = unit
            .declarations
            .iter()
            .map(|d| d.name.as_str())
            .collect();

        let mut imports = Vec::new();
        for name in &self.referenced {
            if declared.contains(name.as_str()) {
                continue;
            }
            // Unresolved names come from the placeholder module below
            let Some(location) = self.symbols.get(name) else {
                continue;
            };
            if location == current {
                continue;
            }
            imports.push(Import {
                name: name.clone(),
                path: relative_import_path(dir, location),
            });
        }

        let placeholders = relative_import_path(dir, self.config.placeholder_location());
        for name in self.file.iter() {
            imports.push(Import {
                name: name.to_string(),
                path: placeholders.clone(),
            });
        }
        imports
    }
}

fn docs(lines: Option<&[String]>) -> Vec<String> {
    lines.map(trim_blank_lines).unwrap_or_default().to_vec()
}
