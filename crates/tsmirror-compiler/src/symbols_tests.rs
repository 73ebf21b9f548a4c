use std::path::{Path, PathBuf};

use tsmirror_core::{DeclarationSource, MemorySource, SourceUnit, TypeDeclaration};

use crate::{Config, SymbolTable};

fn build(source: &MemorySource) -> SymbolTable {
    let files = source.files().unwrap();
    SymbolTable::build(source, &files, &Config::default())
}

#[test]
fn locations_mirror_directories() {
    let source = MemorySource::new()
        .unit(
            SourceUnit::new("noppes/npcs/api/IPos.java")
                .declaration(TypeDeclaration::interface("IPos")),
        )
        .unit(
            SourceUnit::new("noppes/npcs/api/entity/IEntity.java")
                .declaration(TypeDeclaration::interface("IEntity")),
        )
        .unit(SourceUnit::new("Top.java").declaration(TypeDeclaration::class("Top")));

    let table = build(&source);
    assert_eq!(table.get("IPos"), Some(Path::new("noppes/npcs/api/IPos")));
    assert_eq!(
        table.get("IEntity"),
        Some(Path::new("noppes/npcs/api/entity/IEntity"))
    );
    assert_eq!(table.get("Top"), Some(Path::new("Top")));
}

#[test]
fn directory_wins_over_mismatched_package() {
    let source = MemorySource::new().unit(
        SourceUnit::new("moved/IPos.java")
            .package("noppes.npcs.api")
            .declaration(TypeDeclaration::interface("IPos")),
    );

    assert_eq!(build(&source).get("IPos"), Some(Path::new("moved/IPos")));
}

#[test]
fn root_entry_is_always_present() {
    let table = build(&MemorySource::new());
    assert_eq!(table.len(), 1);
    assert_eq!(table.get("IObject"), Some(Path::new("IObject")));
}

#[test]
fn every_declaration_of_a_file_is_recorded() {
    let source = MemorySource::new().unit(
        SourceUnit::new("api/Shapes.java")
            .declaration(TypeDeclaration::class("Shapes"))
            .declaration(TypeDeclaration::interface("IShape")),
    );

    let table = build(&source);
    assert_eq!(table.get("Shapes"), Some(Path::new("api/Shapes")));
    assert_eq!(table.get("IShape"), Some(Path::new("api/IShape")));
}

#[test]
fn broken_file_is_skipped() {
    let source = MemorySource::new()
        .broken("api/Broken.java", "unexpected token")
        .unit(SourceUnit::new("api/IPos.java").declaration(TypeDeclaration::interface("IPos")));

    let table = build(&source);
    assert!(table.contains("IPos"));
    assert!(!table.contains("Broken"));
    assert_eq!(table.len(), 2);
}

#[test]
fn duplicate_name_keeps_last_location() {
    let source = MemorySource::new()
        .unit(SourceUnit::new("a/IData.java").declaration(TypeDeclaration::interface("IData")))
        .unit(SourceUnit::new("b/IData.java").declaration(TypeDeclaration::interface("IData")));

    let table = build(&source);
    assert_eq!(table.get("IData"), Some(Path::new("b/IData")));
}

#[test]
fn configured_root_name() {
    let config = Config::default().root_name("Base");
    let table = SymbolTable::build(&MemorySource::new(), &[], &config);
    assert_eq!(table.get("Base"), Some(Path::new("Base")));
    assert!(!table.contains("IObject"));
}

#[test]
fn declare_by_hand() {
    let mut table = SymbolTable::new();
    table.declare("IPos", PathBuf::from("api/IPos"));
    assert_eq!(
        table.iter().collect::<Vec<_>>(),
        [("IPos", Path::new("api/IPos"))]
    );
}
