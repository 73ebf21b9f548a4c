use std::fs;
use std::path::{Path, PathBuf};

use indoc::indoc;
use tsmirror_core::{
    DeclarationSource, FieldSignature, FsSink, MemorySink, MemorySource, MethodSignature,
    SourceError, SourceUnit, TypeDeclaration,
};
use tsmirror_java::JavaSource;

use crate::{Config, Error, RunReport, run};

fn run_memory(source: &MemorySource) -> (MemorySink, RunReport) {
    let mut sink = MemorySink::new();
    let report = run(source, &mut sink, &Config::default()).unwrap();
    (sink, report)
}

fn sample() -> MemorySource {
    MemorySource::new()
        .unit(
            SourceUnit::new("noppes/npcs/api/IPos.java").declaration(
                TypeDeclaration::interface("IPos")
                    .method(MethodSignature::new("getX", "int"))
                    .method(MethodSignature::new("getMCBlockPos", "BlockPos")),
            ),
        )
        .unit(
            SourceUnit::new("noppes/npcs/api/IWorld.java").declaration(
                TypeDeclaration::interface("IWorld")
                    .method(MethodSignature::new("getBlock", "IBlock").param("pos", "BlockPos"))
                    .method(MethodSignature::new("getMCWorld", "WorldServer")),
            ),
        )
        .unit(
            SourceUnit::new("noppes/npcs/api/block/IBlock.java").declaration(
                TypeDeclaration::interface("IBlock").method(MethodSignature::new("getPos", "IPos")),
            ),
        )
        .unit(
            SourceUnit::new("noppes/npcs/api/constants/IColorCode.java").declaration(
                TypeDeclaration::interface("IColorCode").field(FieldSignature::new("BLACK", "int")),
            ),
        )
}

#[test]
fn foo_scenario() {
    let source = MemorySource::new().unit(
        SourceUnit::new("Foo.java").declaration(
            TypeDeclaration::interface("Foo").method(MethodSignature::new("bar", "int")),
        ),
    );
    let (sink, report) = run_memory(&source);

    assert_eq!(
        sink.get("Foo.ts"),
        Some(
            "import { IObject } from \"./IObject\";\n\
             \n\
             export interface Foo extends IObject {\n\
             \tbar(): number;\n\
             }\n"
        )
    );
    assert_eq!(report.written, [PathBuf::from("Foo.ts")]);
    assert_eq!(report.types, 2);
    assert!(report.unknowns.is_empty());
    assert!(sink.get("missingTypes.ts").is_none());
    assert!(sink.get("IObject.ts").is_some());
}

#[test]
fn mirrors_tree_and_writes_shared_modules() {
    let (sink, report) = run_memory(&sample());

    let paths: Vec<_> = sink.paths().collect();
    assert_eq!(
        paths,
        [
            Path::new("noppes/npcs/api/IPos.ts"),
            Path::new("noppes/npcs/api/IWorld.ts"),
            Path::new("noppes/npcs/api/block/IBlock.ts"),
            Path::new("noppes/npcs/api/constants/IColorCode.ts"),
            Path::new("IObject.ts"),
            Path::new("missingTypes.ts"),
        ]
    );
    assert_eq!(report.written.len(), 4);
    assert!(report.failed.is_empty());
    assert_eq!(report.unknowns, ["BlockPos", "WorldServer"]);
}

#[test]
fn unknown_type_gets_one_placeholder_and_an_import_per_file() {
    let (sink, _) = run_memory(&sample());

    assert_eq!(
        sink.get("missingTypes.ts"),
        Some("export interface BlockPos {}\nexport interface WorldServer {}\n")
    );

    let pos = sink.get("noppes/npcs/api/IPos.ts").unwrap();
    let world = sink.get("noppes/npcs/api/IWorld.ts").unwrap();
    for contents in [pos, world] {
        assert_eq!(
            contents
                .matches("import { BlockPos } from \"../../../missingTypes\";")
                .count(),
            1
        );
    }
}

#[test]
fn forward_references_resolve() {
    let mut sink = MemorySink::new();
    run(&sample(), &mut sink, &Config::default().indent("    ")).unwrap();

    // IWorld is translated before IBlock's file is visited
    insta::assert_snapshot!(sink.get("noppes/npcs/api/IWorld.ts").unwrap(), @r#"
    import { IObject } from "../../../IObject";
    import { IBlock } from "./block/IBlock";
    import { BlockPos } from "../../../missingTypes";
    import { WorldServer } from "../../../missingTypes";

    export interface IWorld extends IObject {
        getBlock(pos: BlockPos): IBlock;

        getMCWorld(): WorldServer;
    }
    "#);
}

#[test]
fn singleton_export() {
    let (sink, _) = run_memory(&sample());
    let color = sink.get("noppes/npcs/api/constants/IColorCode.ts").unwrap();

    assert!(color.contains("\ninterface IColorCode extends IObject {\n"));
    assert!(!color.contains("export interface IColorCode"));
    assert!(color.ends_with("\n\nexport const Color: IColorCode = {} as IColorCode;\n"));
}

#[test]
fn root_module_contents() {
    let (sink, _) = run_memory(&MemorySource::new());
    assert_eq!(sink.len(), 1);
    assert_eq!(
        sink.get("IObject.ts"),
        Some(
            "export interface IObject {\n\
             \tgetClass(): string;\n\
             \ttoString(): string;\n\
             \tequals(other: IObject): boolean;\n\
             }\n"
        )
    );
}

#[test]
fn failures_are_contained() {
    let source = sample()
        .broken("noppes/npcs/api/IBroken.java", "unexpected token")
        .unit(
            SourceUnit::new("noppes/npcs/api/IBad.java").declaration(
                TypeDeclaration::interface("IBad")
                    .extends("Ghost")
                    .method(MethodSignature::new("get", "Map<String")),
            ),
        );
    let (sink, report) = run_memory(&source);

    assert_eq!(
        report.failed,
        [
            PathBuf::from("noppes/npcs/api/IBroken.java"),
            PathBuf::from("noppes/npcs/api/IBad.java"),
        ]
    );
    assert_eq!(report.written.len(), 4);
    assert!(sink.get("noppes/npcs/api/IBad.ts").is_none());
    // names seen before the failure still get a placeholder
    assert_eq!(report.unknowns, ["BlockPos", "Ghost", "WorldServer"]);
    assert!(
        sink.get("missingTypes.ts")
            .unwrap()
            .contains("export interface Ghost {}")
    );
}

#[test]
fn failed_file_write_is_contained() {
    let mut sink = MemorySink::new().reject("noppes/npcs/api/IPos.ts");
    let report = run(&sample(), &mut sink, &Config::default()).unwrap();

    assert_eq!(report.failed, [PathBuf::from("noppes/npcs/api/IPos.java")]);
    assert!(sink.get("IObject.ts").is_some());
}

#[test]
fn root_write_failure_is_fatal() {
    let mut sink = MemorySink::new().reject("IObject.ts");
    let err = run(&sample(), &mut sink, &Config::default()).unwrap_err();

    let Error::Write { path, .. } = err else {
        panic!("expected write error, got {err:?}");
    };
    assert_eq!(path, Path::new("IObject.ts"));
}

#[test]
fn placeholder_write_failure_is_fatal() {
    let mut sink = MemorySink::new().reject("missingTypes.ts");
    let err = run(&sample(), &mut sink, &Config::default()).unwrap_err();
    assert!(matches!(err, Error::Write { .. }));
}

#[test]
fn files_landing_on_shared_modules_are_not_written() {
    let source = sample()
        .unit(SourceUnit::new("IObject.java").declaration(
            TypeDeclaration::interface("IObject").method(MethodSignature::new("id", "int")),
        ))
        .unit(SourceUnit::new("missingTypes.java").declaration(TypeDeclaration::class("Holder")));
    let (sink, report) = run_memory(&source);

    assert_eq!(
        report.shadowed,
        [PathBuf::from("IObject.java"), PathBuf::from("missingTypes.java")]
    );
    assert_eq!(report.written.len(), 4);
    assert!(!report.written.contains(&PathBuf::from("IObject.ts")));
    assert!(sink.get("IObject.ts").unwrap().contains("getClass(): string;"));
    assert!(
        sink.get("missingTypes.ts")
            .unwrap()
            .starts_with("export interface BlockPos {}\n")
    );
}

struct Unreadable;

impl DeclarationSource for Unreadable {
    fn files(&self) -> Result<Vec<PathBuf>, SourceError> {
        Err(SourceError::NotFound(PathBuf::from("java_src")))
    }

    fn read(&self, path: &Path) -> Result<SourceUnit, SourceError> {
        Err(SourceError::NotFound(path.to_path_buf()))
    }
}

#[test]
fn enumeration_failure_is_fatal() {
    let mut sink = MemorySink::new();
    let err = run(&Unreadable, &mut sink, &Config::default()).unwrap_err();

    assert!(matches!(err, Error::Enumerate(_)));
    assert!(sink.is_empty());
}

#[test]
fn rerun_is_byte_identical() {
    let (first, _) = run_memory(&sample());
    let (second, _) = run_memory(&sample());

    assert_eq!(first.len(), second.len());
    for path in first.paths() {
        assert_eq!(first.get(path), second.get(path), "{}", path.display());
    }
}

#[test]
fn java_tree_to_files() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    let api = input.path().join("noppes/npcs/api");
    fs::create_dir_all(api.join("entity")).unwrap();
    fs::write(
        api.join("IPos.java"),
        indoc! {r#"
            package noppes.npcs.api;

            import net.minecraft.util.math.BlockPos;

            public interface IPos {
                /**
                 * @return The x coordinate.
                 */
                int getX();

                BlockPos getMCBlockPos();
            }
        "#},
    )
    .unwrap();
    fs::write(
        api.join("entity/IEntity.java"),
        indoc! {r#"
            package noppes.npcs.api.entity;

            import noppes.npcs.api.IPos;

            public interface IEntity<T extends Entity> {
                IPos getPos();

                T getMCEntity();
            }
        "#},
    )
    .unwrap();

    let source = JavaSource::new(input.path());
    let mut sink = FsSink::new(output.path());
    let config = Config::default().indent("    ");
    let report = run(&source, &mut sink, &config).unwrap();
    assert_eq!(report.written.len(), 2);

    let read = |rel: &str| fs::read_to_string(output.path().join(rel)).unwrap();

    insta::assert_snapshot!(read("noppes/npcs/api/entity/IEntity.ts"), @r#"
    import { IObject } from "../../../../IObject";
    import { IPos } from "../IPos";
    import { Entity } from "../../../../missingTypes";

    export interface IEntity extends IObject {
        getPos(): IPos;

        getMCEntity(): Entity;
    }
    "#);
    assert!(read("noppes/npcs/api/IPos.ts").contains(
        "    /**\n     * @return The x coordinate.\n     */\n    getX(): number;\n"
    ));
    assert_eq!(
        read("missingTypes.ts"),
        "export interface BlockPos {}\nexport interface Entity {}\n"
    );
    assert!(output.path().join("IObject.ts").is_file());
}
