use std::path::Path;

use crate::patches::{SourcePatch, apply, default_patches};

#[test]
fn applies_only_to_matching_path() {
    let patches = vec![SourcePatch::new("a/IRole.java", "INpc", "ICustomNpc")];

    let patched = apply(&patches, Path::new("a/IRole.java"), "INpc getNpc();".into());
    assert_eq!(patched, "ICustomNpc getNpc();");

    let untouched = apply(&patches, Path::new("b/IRole.java"), "INpc getNpc();".into());
    assert_eq!(untouched, "INpc getNpc();");
}

#[test]
fn patches_apply_in_order() {
    let patches = vec![
        SourcePatch::new("A.java", "Foo", "Bar"),
        SourcePatch::new("A.java", "Bar", "Baz"),
    ];
    assert_eq!(apply(&patches, Path::new("A.java"), "Foo".into()), "Baz");
}

#[test]
fn unmatched_patch_leaves_text() {
    let patches = vec![SourcePatch::new("A.java", "missing", "x")];
    assert_eq!(apply(&patches, Path::new("A.java"), "abc".into()), "abc");
}

#[test]
fn default_table_rewrites_entity_generic() {
    let text = "public interface IEntity<T> { T getMCEntity(); }".to_string();
    let patched = apply(
        &default_patches(),
        Path::new("noppes/npcs/api/entity/IEntity.java"),
        text,
    );
    assert_eq!(patched, "public interface IEntity<T> { Entity getMCEntity(); }");
}

#[test]
fn default_table_covers_four_files() {
    assert_eq!(default_patches().len(), 4);
}
