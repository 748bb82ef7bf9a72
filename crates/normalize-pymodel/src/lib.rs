//! Python data-model selection and rendering.
//!
//! `normalize-pymodel` decides how a schema entity is declared in generated
//! Python and renders it, together with exactly the imports that text uses.
//! Entities arrive fully resolved from a schema parser; this crate only
//! chooses syntax and emits it.
//!
//! # Architecture
//!
//! ```text
//!   OutputFlavor ─┐
//!                 ├─> matrix ──> RenderingStrategy
//!  PythonVersion ─┘                    │
//!                                      v
//!   GenerationConfig ──> model_set ──> registry ──> ConfiguredRenderer
//!                                                        │
//!                      Entity ──> render ─┬─> resolver (imports)
//!                                         └─> template (text)
//! ```
//!
//! The three alias forms, by target version and flavor:
//!
//! | version | flavor                  | output                             |
//! |---------|-------------------------|------------------------------------|
//! | ≥ 3.12  | any                     | `type UserId = str`                |
//! | < 3.12  | `pydantic_v2.BaseModel` | `UserId = TypeAliasType("UserId", str)` |
//! | < 3.12  | any other               | `UserId: TypeAlias = str`          |
//!
//! # Example
//!
//! ```
//! use normalize_pymodel::{Entity, Field, OutputFlavor, PythonVersion, assemble};
//!
//! let models = assemble(OutputFlavor::PydanticV2BaseModel, PythonVersion::Py310, true);
//! let entity = Entity::new("UserId", vec![Field::primitive("root", "str")]);
//!
//! let rendered = models.root_model.render_entity(&entity);
//! assert_eq!(rendered.source, r#"UserId = TypeAliasType("UserId", str)"#);
//! assert_eq!(rendered.imports.render(), "from typing_extensions import TypeAliasType\n");
//! ```

pub mod config;
pub mod error;
pub mod flavor;
pub mod generate;
pub mod imports;
pub mod ir;
pub mod matrix;
pub mod model_set;
pub mod registry;
pub mod render;
pub mod resolver;
pub mod strategy;
pub mod template;
pub mod version;

pub use config::{ConfigError, GenerationConfig};
pub use error::{Error, Result};
pub use flavor::OutputFlavor;
pub use generate::{GeneratedModule, generate_root_models, generate_with_references};
pub use imports::{Import, ImportSet};
pub use ir::{CompositeKind, DataType, Entity, Field};
pub use matrix::{Capability, capability_table, select_strategy, select_strategy_by_name};
pub use model_set::{
    DataModelKind, DataTypeManagerKind, FieldModelKind, ModelSet, ReferenceAction, assemble,
    assemble_by_name, assemble_with,
};
pub use registry::StrategyRegistry;
pub use render::{AliasModel, ConfiguredRenderer, RenderedEntity, RootForm, WrappedRoot};
pub use resolver::resolve_imports;
pub use strategy::RenderingStrategy;
pub use template::{BuiltinTemplates, RenderRequest, TemplateEngine, TemplateId};
pub use version::PythonVersion;
