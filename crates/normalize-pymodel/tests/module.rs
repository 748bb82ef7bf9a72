//! Whole-module generation from parser fixtures.

use normalize_pymodel::{
    ConfigError, Entity, Error, GenerationConfig, OutputFlavor, PythonVersion, assemble, generate_root_models,
    generate_with_references,
};
use std::io::Write;

fn load_fixture(name: &str) -> Vec<Entity> {
    let path = format!("tests/fixtures/{}.json", name);
    let content =
        std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("fixture {} not found", name));
    serde_json::from_str(&content).expect("invalid fixture")
}

#[test]
fn pydantic_v2_py312_type_statements() {
    let entities = load_fixture("type_alias");
    let set = assemble(OutputFlavor::PydanticV2BaseModel, PythonVersion::Py312, true);
    let module = generate_root_models(&set, &entities);

    insta::assert_snapshot!(module.to_source(), @r#"
    from __future__ import annotations

    from typing import Union, Annotated
    from pydantic import Field


    type SimpleString = str


    type UnionType = Union[str, int]


    # An annotated union type
    type MyAnnotatedType = Annotated[Union[str, bool], Field(..., title='MyAnnotatedType')]
    "#);
}

#[test]
fn pydantic_v2_py310_alias_type() {
    let entities = load_fixture("type_alias");
    let set = assemble(OutputFlavor::PydanticV2BaseModel, PythonVersion::Py310, true);
    let module = generate_root_models(&set, &entities);

    insta::assert_snapshot!(module.to_source(), @r#"
    from __future__ import annotations

    from typing_extensions import TypeAliasType
    from typing import Union, Annotated
    from pydantic import Field


    SimpleString = TypeAliasType("SimpleString", str)


    UnionType = TypeAliasType("UnionType", Union[str, int])


    # An annotated union type
    MyAnnotatedType = TypeAliasType("MyAnnotatedType", Annotated[Union[str, bool], Field(..., title='MyAnnotatedType')])
    "#);
}

#[test]
fn pydantic_v1_py39_wrapped_roots() {
    let entities = load_fixture("type_alias");
    let set = assemble(OutputFlavor::PydanticBaseModel, PythonVersion::Py39, false);
    let module = generate_with_references(&set, &entities);

    insta::assert_snapshot!(module.to_source(), @r#"
    from __future__ import annotations

    from pydantic import BaseModel, Field
    from typing import Union, Annotated


    class SimpleString(BaseModel):
        __root__: str


    class UnionType(BaseModel):
        __root__: Union[str, int]


    class MyAnnotatedType(BaseModel):
        """An annotated union type"""

        __root__: Annotated[Union[str, bool], Field(..., title='MyAnnotatedType')]


    SimpleString.update_forward_refs()
    UnionType.update_forward_refs()
    MyAnnotatedType.update_forward_refs()
    "#);
}

#[test]
fn alias_mode_never_emits_root_models() {
    let entities = load_fixture("type_alias");
    for flavor in OutputFlavor::ALL {
        for version in PythonVersion::ALL {
            let source = generate_root_models(&assemble(flavor, version, true), &entities).to_source();
            assert!(!source.contains("RootModel"), "{flavor} {version}");
            assert!(!source.contains("__root__"), "{flavor} {version}");
            assert!(!source.contains("class "), "{flavor} {version}");
        }
    }
}

#[test]
fn dataclass_py39_uses_backported_type_alias() {
    let entities = load_fixture("type_alias");
    let set = assemble(OutputFlavor::Dataclass, PythonVersion::Py39, true);
    let source = generate_root_models(&set, &entities).to_source();
    assert!(source.contains("from typing_extensions import TypeAlias\n"));
    assert!(source.contains("SimpleString: TypeAlias = str"));
    assert!(source.contains("UnionType: TypeAlias = Union[str, int]"));
    assert!(!source.contains("TypeAliasType"));
    assert!(!source.contains("type SimpleString"));
}

#[test]
fn config_file_drives_assembly() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("pymodel.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        r#"
output_model_type = "typing.TypedDict"
target_python_version = "3.10"
use_type_alias = true
"#
    )
    .unwrap();

    let config = GenerationConfig::load(&path).unwrap();
    let set = config.assemble();
    let source = generate_root_models(&set, &load_fixture("type_alias")).to_source();
    assert!(source.contains("from typing import TypeAlias, Union, Annotated\n"));
    assert!(source.contains("SimpleString: TypeAlias = str"));
}

#[test]
fn config_file_with_unknown_flavor() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("pymodel.toml");
    std::fs::write(&path, "output_model_type = \"attrs.define\"\n").unwrap();

    match GenerationConfig::load(&path) {
        Err(ConfigError::Model(Error::UnsupportedFlavor(name))) => assert_eq!(name, "attrs.define"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = GenerationConfig::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().starts_with("failed to read"));
}
