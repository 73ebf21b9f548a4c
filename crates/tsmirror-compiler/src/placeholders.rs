//! Modules shared by every emitted file: the common root and the placeholders.

use crate::{Config, UnknownTypes};

/// The common root interface every otherwise parentless declaration extends.
pub fn root_module(config: &Config) -> String {
    let root = config.root();
    let indent = &config.indent;
    format!(
        "export interface {root} {{\n\
         {indent}getClass(): string;\n\
         {indent}toString(): string;\n\
         {indent}equals(other: {root}): boolean;\n\
         }}\n"
    )
}

/// One empty interface per unresolved name, in sorted order.
///
/// Returns `None` when nothing is unresolved.
pub fn placeholder_module(unknowns: &UnknownTypes) -> Option<String> {
    if unknowns.is_empty() {
        return None;
    }
    let mut output = String::new();
    for name in unknowns.iter() {
        output.push_str(&format!("export interface {name} {{}}\n"));
    }
    Some(output)
}
