//! Whole-module output for the root entities of a run.

use crate::imports::ImportSet;
use crate::ir::Entity;
use crate::model_set::ModelSet;
use crate::render::RenderedEntity;
use serde::Serialize;

/// Rendered root declarations plus the merged imports they need.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneratedModule {
    pub imports: ImportSet,
    pub declarations: Vec<RenderedEntity>,
    /// Forward-reference fix-ups appended after the declarations.
    pub trailer: Option<String>,
}

impl GeneratedModule {
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Emit the module source.
    pub fn to_source(&self) -> String {
        let mut out = String::from("from __future__ import annotations\n");
        if !self.imports.is_empty() {
            out.push('\n');
            out.push_str(&self.imports.render());
        }
        for decl in &self.declarations {
            out.push_str("\n\n");
            out.push_str(&decl.source);
            out.push('\n');
        }
        if let Some(trailer) = &self.trailer {
            out.push_str("\n\n");
            out.push_str(trailer);
            out.push('\n');
        }
        out
    }
}

/// Render every root entity with the model set's root renderer.
///
/// Entities render in order; empty renders are dropped.
pub fn generate_root_models(model_set: &ModelSet, entities: &[Entity]) -> GeneratedModule {
    let mut module = GeneratedModule::default();
    for entity in entities {
        let rendered = model_set.root_model.render_entity(entity);
        if rendered.is_empty() {
            continue;
        }
        module.imports.merge(&rendered.imports);
        module.declarations.push(rendered);
    }
    module
}

/// Like [`generate_root_models`], followed by the model set's
/// forward-reference action for class-shaped declarations.
pub fn generate_with_references(model_set: &ModelSet, entities: &[Entity]) -> GeneratedModule {
    let mut module = generate_root_models(model_set, entities);
    if model_set.uses_type_alias() || module.is_empty() {
        return module;
    }
    if let Some(action) = model_set.dump_resolve_reference_action {
        module.trailer = Some(action.dump(module.declarations.iter().map(|d| d.name.as_str())));
    }
    module
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flavor::OutputFlavor;
    use crate::ir::Field;
    use crate::model_set::assemble;
    use crate::version::PythonVersion;

    fn entities() -> Vec<Entity> {
        vec![
            Entity::new("SimpleString", vec![Field::primitive("root", "str")]),
            Entity::new("Pending", Vec::new()),
            Entity::new("UnionType", vec![Field::primitive("root", "str | int")]),
        ]
    }

    #[test]
    fn skips_empty_entities() {
        let set = assemble(OutputFlavor::Dataclass, PythonVersion::Py312, true);
        let module = generate_root_models(&set, &entities());
        let names: Vec<_> = module.declarations.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["SimpleString", "UnionType"]);
        assert!(module.imports.is_empty());
    }

    #[test]
    fn imports_are_merged_once() {
        let set = assemble(OutputFlavor::Dataclass, PythonVersion::Py39, true);
        let module = generate_root_models(&set, &entities());
        assert_eq!(module.imports.render(), "from typing_extensions import TypeAlias\n");
    }

    #[test]
    fn reference_trailer_only_for_wrapped_pydantic() {
        let wrapped = assemble(OutputFlavor::PydanticV2BaseModel, PythonVersion::Py311, false);
        let module = generate_with_references(&wrapped, &entities());
        assert_eq!(
            module.trailer.as_deref(),
            Some("SimpleString.model_rebuild()\nUnionType.model_rebuild()")
        );

        let aliased = assemble(OutputFlavor::PydanticV2BaseModel, PythonVersion::Py311, true);
        assert_eq!(generate_with_references(&aliased, &entities()).trailer, None);
    }
}
