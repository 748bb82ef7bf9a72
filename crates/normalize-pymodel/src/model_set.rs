//! Model-set assembly: the collaborating types a generation run uses.

use crate::error::Result;
use crate::flavor::OutputFlavor;
use crate::registry::StrategyRegistry;
use crate::render::ConfiguredRenderer;
use crate::version::PythonVersion;
use serde::Serialize;

/// Record type emitted for object-shaped entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DataModelKind {
    PydanticBaseModel,
    PydanticV2BaseModel,
    Dataclass,
    TypedDict,
    MsgspecStruct,
}

/// Field-descriptor type for record members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldModelKind {
    Pydantic,
    PydanticV2,
    Dataclass,
    /// TypedDict keys marked with `typing.NotRequired`.
    TypedDict,
    /// TypedDict keys marked with `typing_extensions.NotRequired`.
    TypedDictBackport,
    Msgspec,
}

/// Type-inference manager that maps schema types to Python type hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DataTypeManagerKind {
    Pydantic,
    PydanticV2,
    Dataclass,
    /// Plain `typing` types, shared by flavors without a validation library.
    Standard,
    Msgspec,
}

/// Statement emitted after the models so forward references resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ReferenceAction {
    /// pydantic 1.x `Name.update_forward_refs()`
    UpdateForwardRefs,
    /// pydantic 2.x `Name.model_rebuild()`
    ModelRebuild,
}

impl ReferenceAction {
    pub fn dump<'a>(self, class_names: impl IntoIterator<Item = &'a str>) -> String {
        let method = match self {
            ReferenceAction::UpdateForwardRefs => "update_forward_refs",
            ReferenceAction::ModelRebuild => "model_rebuild",
        };
        class_names
            .into_iter()
            .map(|name| format!("{name}.{method}()"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The types a generation run uses uniformly for every entity.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSet {
    pub flavor: OutputFlavor,
    pub version: PythonVersion,
    pub data_model: DataModelKind,
    /// Renderer for single-valued entities: an alias when alias mode is on,
    /// the flavor's wrapped root otherwise.
    pub root_model: ConfiguredRenderer,
    pub field_model: FieldModelKind,
    pub data_type_manager: DataTypeManagerKind,
    pub dump_resolve_reference_action: Option<ReferenceAction>,
    pub known_third_party: &'static [&'static str],
}

impl ModelSet {
    pub fn uses_type_alias(&self) -> bool {
        self.root_model.strategy().is_some()
    }
}

const NO_THIRD_PARTY: &[&str] = &[];
const MSGSPEC: &[&str] = &["msgspec"];

/// Assemble the model set for `flavor` at `version` with the built-in templates.
pub fn assemble(flavor: OutputFlavor, version: PythonVersion, use_alias_mode: bool) -> ModelSet {
    assemble_with(&StrategyRegistry::new(), flavor, version, use_alias_mode)
}

/// Assemble with renderers bound through `registry`.
pub fn assemble_with(
    registry: &StrategyRegistry,
    flavor: OutputFlavor,
    version: PythonVersion,
    use_alias_mode: bool,
) -> ModelSet {
    let root_model = if use_alias_mode {
        registry.bind(version, flavor)
    } else {
        registry.bind_wrapped(version, flavor)
    };

    let (data_model, field_model, data_type_manager, reference_action, third_party) = match flavor
    {
        OutputFlavor::PydanticBaseModel => (
            DataModelKind::PydanticBaseModel,
            FieldModelKind::Pydantic,
            DataTypeManagerKind::Pydantic,
            Some(ReferenceAction::UpdateForwardRefs),
            NO_THIRD_PARTY,
        ),
        OutputFlavor::PydanticV2BaseModel => (
            DataModelKind::PydanticV2BaseModel,
            FieldModelKind::PydanticV2,
            DataTypeManagerKind::PydanticV2,
            Some(ReferenceAction::ModelRebuild),
            NO_THIRD_PARTY,
        ),
        OutputFlavor::Dataclass => (
            DataModelKind::Dataclass,
            FieldModelKind::Dataclass,
            DataTypeManagerKind::Dataclass,
            None,
            NO_THIRD_PARTY,
        ),
        OutputFlavor::TypedDict => (
            DataModelKind::TypedDict,
            if version.has_typed_dict_non_required() {
                FieldModelKind::TypedDict
            } else {
                FieldModelKind::TypedDictBackport
            },
            DataTypeManagerKind::Standard,
            None,
            NO_THIRD_PARTY,
        ),
        OutputFlavor::MsgspecStruct => (
            DataModelKind::MsgspecStruct,
            FieldModelKind::Msgspec,
            DataTypeManagerKind::Msgspec,
            None,
            MSGSPEC,
        ),
    };

    tracing::debug!(
        %flavor,
        %version,
        use_alias_mode,
        root = ?root_model.form(),
        "assembled model set"
    );

    ModelSet {
        flavor,
        version,
        data_model,
        root_model,
        field_model,
        data_type_manager,
        dump_resolve_reference_action: reference_action,
        known_third_party: third_party,
    }
}

/// Assemble from user-facing identifiers; unknown values abort the run.
pub fn assemble_by_name(flavor: &str, version: &str, use_alias_mode: bool) -> Result<ModelSet> {
    Ok(assemble(flavor.parse()?, version.parse()?, use_alias_mode))
}
