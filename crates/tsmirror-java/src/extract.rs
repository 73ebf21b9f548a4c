//! Declaration extraction from a tree-sitter Java syntax tree.

use std::path::Path;

use arborium_tree_sitter as tree_sitter;
use tree_sitter::{Language, Node, Parser, Tree};
use tracing::debug;

use tsmirror_core::{
    DeclarationKind, FieldSignature, MethodSignature, SourceError, SourceUnit, TypeDeclaration,
};

use crate::javadoc;

/// Parse Java source text into a [`SourceUnit`].
///
/// Any `ERROR` or missing node makes the whole file a syntax error, so a
/// half-parsed file never contributes partial declarations.
pub fn parse_source(path: &Path, text: &str) -> Result<SourceUnit, SourceError> {
    let tree = parse_tree(path, text)?;
    let root = tree.root_node();

    if root.has_error() {
        let (line, column) = first_error(root)
            .map(|n| {
                let pos = n.start_position();
                (pos.row + 1, pos.column + 1)
            })
            .unwrap_or((1, 1));
        return Err(SourceError::Syntax {
            path: path.to_path_buf(),
            line,
            column,
        });
    }

    let src = text.as_bytes();
    let mut unit = SourceUnit::new(path);
    let mut cursor = root.walk();
    for child in root.named_children(&mut cursor) {
        match child.kind() {
            "package_declaration" => unit.package = package_name(child, src),
            "class_declaration" | "interface_declaration" => {
                unit.declarations.push(extract_declaration(path, child, src)?);
            }
            "enum_declaration" | "record_declaration" | "annotation_type_declaration" => {
                debug!(
                    "skipping {} in {}",
                    child.kind().trim_end_matches("_declaration"),
                    path.display()
                );
            }
            _ => {}
        }
    }
    Ok(unit)
}

fn parse_tree(path: &Path, text: &str) -> Result<Tree, SourceError> {
    let language: Language = arborium_java::language().into();
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| invalid(path, format!("failed to load Java grammar: {e}")))?;
    parser
        .parse(text, None)
        .ok_or_else(|| invalid(path, "parser produced no tree"))
}

fn invalid(path: &Path, message: impl Into<String>) -> SourceError {
    SourceError::Invalid {
        path: path.to_path_buf(),
        message: message.into(),
    }
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    node.children(&mut cursor).find_map(first_error)
}

fn text<'a>(node: Node<'_>, src: &'a [u8]) -> &'a str {
    node.utf8_text(src).unwrap_or("")
}

fn package_name(node: Node<'_>, src: &[u8]) -> Option<String> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .find(|c| matches!(c.kind(), "scoped_identifier" | "identifier"))
        .map(|c| text(c, src).to_string())
}

fn extract_declaration(
    path: &Path,
    node: Node<'_>,
    src: &[u8],
) -> Result<TypeDeclaration, SourceError> {
    let name = node
        .child_by_field_name("name")
        .map(|n| text(n, src))
        .ok_or_else(|| invalid(path, format!("{} without a name", node.kind())))?;

    let (kind, supertypes) = match node.kind() {
        "class_declaration" => (DeclarationKind::Class, superclass(node, src)),
        _ => (DeclarationKind::Interface, extended_interfaces(node, src)),
    };

    let mut decl = TypeDeclaration::new(name, kind);
    decl.supertypes = supertypes;
    decl.docs = javadoc::preceding(node, src);

    let Some(body) = node.child_by_field_name("body") else {
        return Ok(decl);
    };

    let mut cursor = body.walk();
    for member in body.named_children(&mut cursor) {
        match member.kind() {
            // interface bodies hold `constant_declaration`s
            "field_declaration" | "constant_declaration" => {
                decl.fields.extend(fields(member, src));
            }
            "method_declaration" => decl.methods.push(method(path, member, src)?),
            _ => {}
        }
    }
    Ok(decl)
}

/// Supertype name with generic arguments removed.
fn supertype_name(node: Node<'_>, src: &[u8]) -> String {
    let raw = type_text(node, src);
    raw.split('<').next().unwrap_or_default().trim().to_string()
}

fn superclass(node: Node<'_>, src: &[u8]) -> Vec<String> {
    let Some(superclass) = node.child_by_field_name("superclass") else {
        return Vec::new();
    };
    let mut cursor = superclass.walk();
    superclass
        .named_children(&mut cursor)
        .filter(|c| is_type_kind(c.kind()))
        .map(|c| supertype_name(c, src))
        .take(1)
        .collect()
}

fn extended_interfaces(node: Node<'_>, src: &[u8]) -> Vec<String> {
    let mut names = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() != "extends_interfaces" {
            continue;
        }
        let mut list_cursor = child.walk();
        for list in child.named_children(&mut list_cursor) {
            if list.kind() != "type_list" {
                continue;
            }
            let mut type_cursor = list.walk();
            names.extend(
                list.named_children(&mut type_cursor)
                    .filter(|t| is_type_kind(t.kind()))
                    .map(|t| supertype_name(t, src)),
            );
        }
    }
    names
}

fn fields(node: Node<'_>, src: &[u8]) -> Vec<FieldSignature> {
    let Some(ty) = node.child_by_field_name("type") else {
        return Vec::new();
    };
    let ty = type_text(ty, src);

    let mut cursor = node.walk();
    node.children_by_field_name("declarator", &mut cursor)
        .filter_map(|declarator| {
            let name = text(declarator.child_by_field_name("name")?, src);
            Some(FieldSignature::new(
                name,
                with_dimensions(&ty, declarator, src),
            ))
        })
        .collect()
}

fn method(path: &Path, node: Node<'_>, src: &[u8]) -> Result<MethodSignature, SourceError> {
    let name = node
        .child_by_field_name("name")
        .map(|n| text(n, src))
        .ok_or_else(|| invalid(path, "method without a name"))?;
    let return_type = node
        .child_by_field_name("type")
        .map(|t| type_text(t, src))
        .ok_or_else(|| invalid(path, format!("method `{name}` without a return type")))?;

    // `int values()[]` puts dimensions on the method itself
    let mut method = MethodSignature::new(name, with_dimensions(&return_type, node, src));
    method.docs = javadoc::preceding(node, src);

    let Some(params) = node.child_by_field_name("parameters") else {
        return Ok(method);
    };

    let mut cursor = params.walk();
    for param in params.named_children(&mut cursor) {
        match param.kind() {
            "formal_parameter" => {
                let (Some(ty), Some(param_name)) = (
                    param.child_by_field_name("type"),
                    param.child_by_field_name("name"),
                ) else {
                    continue;
                };
                let ty = with_dimensions(&type_text(ty, src), param, src);
                method = method.param(text(param_name, src), ty);
            }
            "spread_parameter" => {
                if let Some((param_name, ty)) = spread_parameter(param, src) {
                    method = method.param(param_name, format!("{ty}..."));
                }
            }
            // receiver parameters (`Foo this`) are not part of the API
            _ => {}
        }
    }
    Ok(method)
}

fn spread_parameter(node: Node<'_>, src: &[u8]) -> Option<(String, String)> {
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.named_children(&mut cursor).collect();

    let ty = children.iter().find(|c| is_type_kind(c.kind()))?;
    let (name, declarator) = children.iter().find_map(|c| match c.kind() {
        "variable_declarator" => Some((c.child_by_field_name("name")?, *c)),
        "identifier" => Some((*c, *c)),
        _ => None,
    })?;

    Some((
        text(name, src).to_string(),
        with_dimensions(&type_text(*ty, src), declarator, src),
    ))
}

fn is_type_kind(kind: &str) -> bool {
    matches!(
        kind,
        "void_type"
            | "integral_type"
            | "floating_point_type"
            | "boolean_type"
            | "type_identifier"
            | "scoped_type_identifier"
            | "generic_type"
            | "array_type"
            | "annotated_type"
    )
}

/// Source text of a type node with every type-use annotation removed,
/// including ones inside qualified names (`java.util.@Nullable List`).
fn type_text(node: Node<'_>, src: &[u8]) -> String {
    let mut annotations = Vec::new();
    collect_annotations(node, &mut annotations);

    let mut out = String::new();
    let mut pos = node.start_byte();
    for (start, end) in annotations {
        out.push_str(slice(src, pos, start));
        pos = end;
        while src.get(pos).is_some_and(u8::is_ascii_whitespace) {
            pos += 1;
        }
    }
    out.push_str(slice(src, pos, node.end_byte()));
    out
}

fn collect_annotations(node: Node<'_>, out: &mut Vec<(usize, usize)>) {
    if matches!(node.kind(), "annotation" | "marker_annotation") {
        out.push((node.start_byte(), node.end_byte()));
        return;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_annotations(child, out);
    }
}

fn slice(src: &[u8], start: usize, end: usize) -> &str {
    src.get(start..end)
        .and_then(|bytes| std::str::from_utf8(bytes).ok())
        .unwrap_or("")
}

/// Append the `dimensions` of a declarator (`int x[]`) to its type.
fn with_dimensions(ty: &str, node: Node<'_>, src: &[u8]) -> String {
    let depth = node
        .child_by_field_name("dimensions")
        .map_or(0, |d| text(d, src).matches('[').count());
    format!("{ty}{}", "[]".repeat(depth))
}
