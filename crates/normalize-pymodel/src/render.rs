//! Root-entity rendering.
//!
//! A [`ConfiguredRenderer`] is bound once per generation run to a Python
//! version, an output flavor and a [`RootForm`]. It is immutable afterwards,
//! so one renderer serves every entity of the run.

use crate::flavor::OutputFlavor;
use crate::imports::{
    IMPORT_ANNOTATED, IMPORT_PYDANTIC_BASE_MODEL, IMPORT_PYDANTIC_CONFIG_DICT,
    IMPORT_PYDANTIC_ROOT_MODEL, Import, ImportSet,
};
use crate::ir::{Entity, Field};
use crate::resolver::resolve_imports;
use crate::strategy::RenderingStrategy;
use crate::template::{RenderRequest, TemplateEngine, TemplateId, python_literal};
use crate::version::PythonVersion;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// How a single-valued entity is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RootForm {
    /// A bare type alias.
    Alias(RenderingStrategy),
    /// The flavor's class (or assignment) wrapping one value.
    Wrapped(WrappedRoot),
}

/// Wrapped-root declarations used when alias mode is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WrappedRoot {
    /// pydantic 1.x: `class Name(BaseModel): __root__: T`
    CustomRootType,
    /// pydantic 2.x: `class Name(RootModel[T]): root: T`
    RootModel,
    /// dataclass, TypedDict and msgspec: `Name = T`
    Assignment,
}

impl WrappedRoot {
    pub fn for_flavor(flavor: OutputFlavor) -> Self {
        match flavor {
            OutputFlavor::PydanticBaseModel => WrappedRoot::CustomRootType,
            OutputFlavor::PydanticV2BaseModel => WrappedRoot::RootModel,
            OutputFlavor::Dataclass | OutputFlavor::TypedDict | OutputFlavor::MsgspecStruct => {
                WrappedRoot::Assignment
            }
        }
    }

    pub fn template_id(self) -> TemplateId {
        match self {
            WrappedRoot::CustomRootType => TemplateId::CustomRootType,
            WrappedRoot::RootModel => TemplateId::RootModel,
            WrappedRoot::Assignment => TemplateId::RootAssignment,
        }
    }

    fn base_import(self) -> Option<Import> {
        match self {
            WrappedRoot::CustomRootType => Some(IMPORT_PYDANTIC_BASE_MODEL),
            WrappedRoot::RootModel => Some(IMPORT_PYDANTIC_ROOT_MODEL),
            WrappedRoot::Assignment => None,
        }
    }
}

/// An alias declaration prepared from a generic entity.
///
/// Aliases take no part in inheritance: whatever base classes, decorators or
/// methods the generic constructor attached are dropped here.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasModel {
    entity: Entity,
    strategy: RenderingStrategy,
}

impl AliasModel {
    pub fn new(mut entity: Entity, strategy: RenderingStrategy) -> Self {
        entity.base_classes.clear();
        entity.custom_base_class = None;
        entity.decorators.clear();
        entity.methods.clear();
        Self { entity, strategy }
    }

    pub fn name(&self) -> &str {
        &self.entity.name
    }

    pub fn strategy(&self) -> RenderingStrategy {
        self.strategy
    }

    pub fn base_class(&self) -> &'static str {
        self.strategy.base_class()
    }

    pub fn base_classes(&self) -> &[String] {
        &self.entity.base_classes
    }

    pub fn custom_base_class(&self) -> Option<&str> {
        self.entity.custom_base_class.as_deref()
    }

    pub fn decorators(&self) -> &[String] {
        &self.entity.decorators
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }
}

/// Source text and the imports it needs, produced from the same inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedEntity {
    pub name: String,
    pub source: String,
    pub imports: ImportSet,
}

impl RenderedEntity {
    fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}

/// A renderer bound to one (version, flavor, form) for a whole run.
#[derive(Clone)]
pub struct ConfiguredRenderer {
    version: PythonVersion,
    flavor: OutputFlavor,
    form: RootForm,
    engine: Arc<dyn TemplateEngine>,
}

impl ConfiguredRenderer {
    pub fn new(
        form: RootForm,
        version: PythonVersion,
        flavor: OutputFlavor,
        engine: Arc<dyn TemplateEngine>,
    ) -> Self {
        Self {
            version,
            flavor,
            form,
            engine,
        }
    }

    pub fn version(&self) -> PythonVersion {
        self.version
    }

    pub fn flavor(&self) -> OutputFlavor {
        self.flavor
    }

    pub fn form(&self) -> RootForm {
        self.form
    }

    /// The alias strategy, if this renderer emits aliases.
    pub fn strategy(&self) -> Option<RenderingStrategy> {
        match self.form {
            RootForm::Alias(strategy) => Some(strategy),
            RootForm::Wrapped(_) => None,
        }
    }

    /// Imports needed to declare a root over `fields`.
    pub fn imports(&self, fields: &[Field]) -> ImportSet {
        match self.form {
            RootForm::Alias(strategy) => resolve_imports(strategy, self.version, fields),
            RootForm::Wrapped(wrapped) => {
                let mut imports = ImportSet::new();
                imports.extend(wrapped.base_import());
                if fields.iter().any(|f| f.annotated_hint().is_some()) {
                    imports.insert(IMPORT_ANNOTATED);
                }
                imports.extend(fields.iter().flat_map(|f| f.imports.iter().cloned()));
                imports
            }
        }
    }

    /// Render `entity` to source text. An entity without fields renders as `""`.
    pub fn render(&self, entity: &Entity) -> String {
        self.render_entity(entity).source
    }

    /// Render `entity` together with exactly the imports its text uses.
    pub fn render_entity(&self, entity: &Entity) -> RenderedEntity {
        match self.form {
            RootForm::Alias(strategy) => {
                self.render_alias(&AliasModel::new(entity.clone(), strategy))
            }
            RootForm::Wrapped(wrapped) => self.render_wrapped(entity, wrapped),
        }
    }

    /// Render a prepared alias model with its own strategy.
    pub fn render_alias(&self, model: &AliasModel) -> RenderedEntity {
        let entity = model.entity();
        let Some(root) = root_field(entity) else {
            return RenderedEntity::empty(&entity.name);
        };
        let strategy = model.strategy();
        let request = RenderRequest {
            class_name: model.name(),
            description: entity.description.as_deref(),
            type_hint: root.effective_type_hint(),
            base_class: model.base_class(),
            default: None,
            frozen: entity.frozen,
        };
        let imports = resolve_imports(strategy, self.version, std::slice::from_ref(root));
        self.expand(strategy.template_id(), &request, imports)
    }

    fn render_wrapped(&self, entity: &Entity, wrapped: WrappedRoot) -> RenderedEntity {
        let Some(root) = root_field(entity) else {
            return RenderedEntity::empty(&entity.name);
        };

        let custom_base = match (wrapped, entity.custom_base_class.as_deref()) {
            (WrappedRoot::CustomRootType, Some(path)) => Some(Import::from_dotted(path)),
            _ => None,
        };

        let mut imports = self.imports(std::slice::from_ref(root));
        let mut request = RenderRequest {
            class_name: &entity.name,
            description: entity.description.as_deref(),
            type_hint: root.effective_type_hint(),
            base_class: "",
            default: root
                .default
                .as_ref()
                .or(entity.default.as_ref())
                .map(python_literal),
            frozen: entity.frozen,
        };

        match wrapped {
            WrappedRoot::CustomRootType => match &custom_base {
                Some(base) => {
                    imports = replace_base_import(&imports, base);
                    request.base_class = base.name();
                }
                None => request.base_class = "BaseModel",
            },
            WrappedRoot::RootModel => {
                if entity.frozen {
                    imports = insert_after_first(&imports, IMPORT_PYDANTIC_CONFIG_DICT);
                }
                request.base_class = "RootModel";
            }
            WrappedRoot::Assignment => {}
        }

        self.expand(wrapped.template_id(), &request, imports)
    }

    fn expand(
        &self,
        template: TemplateId,
        request: &RenderRequest<'_>,
        imports: ImportSet,
    ) -> RenderedEntity {
        tracing::trace!(entity = %request.class_name, template = template.as_str(), "render");
        RenderedEntity {
            name: request.class_name.to_string(),
            source: self.engine.expand(template, request),
            imports,
        }
    }

    /// Prepare an alias model for `entity`, or `None` if this renderer wraps roots.
    pub fn alias_model(&self, entity: Entity) -> Option<AliasModel> {
        self.strategy().map(|strategy| AliasModel::new(entity, strategy))
    }
}

/// The field a root declaration is built from, if any.
fn root_field(entity: &Entity) -> Option<&Field> {
    match entity.fields.len() {
        0 => tracing::trace!(entity = %entity.name, "no fields, nothing to render"),
        1 => {}
        n => tracing::debug!(
            entity = %entity.name,
            fields = n,
            "root entity has more than one field, rendering the first"
        ),
    }
    entity.root_field()
}

fn replace_base_import(imports: &ImportSet, base: &Import) -> ImportSet {
    let mut replaced = ImportSet::new();
    replaced.insert(base.clone());
    replaced.extend(
        imports
            .iter()
            .filter(|i| **i != IMPORT_PYDANTIC_BASE_MODEL)
            .cloned(),
    );
    replaced
}

fn insert_after_first(imports: &ImportSet, import: Import) -> ImportSet {
    let mut iter = imports.iter().cloned();
    let mut out = ImportSet::new();
    out.extend(iter.next());
    out.insert(import);
    out.extend(iter);
    out
}

impl PartialEq for ConfiguredRenderer {
    /// Template engines are not compared.
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version && self.flavor == other.flavor && self.form == other.form
    }
}

impl fmt::Debug for ConfiguredRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfiguredRenderer")
            .field("version", &self.version)
            .field("flavor", &self.flavor)
            .field("form", &self.form)
            .finish_non_exhaustive()
    }
}
