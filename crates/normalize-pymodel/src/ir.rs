//! Entities and fields handed over by the schema parser.
//!
//! The parser resolves references and precomputes each field's Python type
//! hint before anything in this crate runs; these types only carry that
//! result. Nothing here re-derives type text.

use crate::imports::Import;
use serde::{Deserialize, Serialize};

/// A named declaration to be rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entity {
    /// Output identifier (e.g., "UserId").
    pub name: String,
    /// Fields in declaration order. Root models use only the first.
    pub fields: Vec<Field>,
    /// Human-readable description from the schema.
    pub description: Option<String>,
    /// Schema-level default value.
    pub default: Option<serde_json::Value>,
    pub nullable: bool,
    pub keyword_only: bool,
    pub frozen: bool,
    /// Base classes inherited from the generic entity constructor.
    pub base_classes: Vec<String>,
    /// Dotted path of a user-supplied base class (e.g., "my.models.Base").
    pub custom_base_class: Option<String>,
    pub decorators: Vec<String>,
    pub methods: Vec<String>,
}

/// One member of an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub data_type: DataType,
    pub required: bool,
    /// Prefer the `Annotated[...]` form over a bare type plus default.
    #[serde(default)]
    pub use_annotated: bool,
    /// Bare Python type hint, e.g. `str` or `list[Pet]`.
    pub type_hint: String,
    /// `Annotated[...]` form, e.g. `Annotated[int, Field(ge=0)]`.
    #[serde(default)]
    pub annotated: Option<String>,
    /// Symbols `type_hint`/`annotated` refer to.
    #[serde(default)]
    pub imports: Vec<Import>,
    #[serde(default)]
    pub default: Option<serde_json::Value>,
}

/// Semantic type of a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    /// Builtin such as `str`, `int` or `bool`.
    Primitive(String),
    /// Another entity by name.
    Reference(String),
    /// Container or union built from other types.
    Composite {
        kind: CompositeKind,
        items: Vec<DataType>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompositeKind {
    List,
    Dict,
    Union,
    Optional,
}

impl Entity {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_base_classes(mut self, base_classes: Vec<String>) -> Self {
        self.base_classes = base_classes;
        self
    }

    pub fn with_custom_base_class(mut self, path: impl Into<String>) -> Self {
        self.custom_base_class = Some(path.into());
        self
    }

    pub fn frozen(mut self) -> Self {
        self.frozen = true;
        self
    }

    /// The field whose type becomes the right-hand side of a root model.
    pub fn root_field(&self) -> Option<&Field> {
        self.fields.first()
    }
}

impl Field {
    /// A required field whose type hint is the primitive's name.
    pub fn primitive(name: impl Into<String>, ty: impl Into<String>) -> Self {
        let ty = ty.into();
        Self {
            name: name.into(),
            type_hint: ty.clone(),
            data_type: DataType::Primitive(ty),
            required: true,
            use_annotated: false,
            annotated: None,
            imports: Vec::new(),
            default: None,
        }
    }

    /// A required field referring to another entity.
    pub fn reference(name: impl Into<String>, target: impl Into<String>) -> Self {
        let target = target.into();
        Self {
            type_hint: target.clone(),
            data_type: DataType::Reference(target),
            ..Self::primitive(name, String::new())
        }
    }

    /// A required field with an explicit type and precomputed hint.
    pub fn with_type(name: impl Into<String>, data_type: DataType, hint: impl Into<String>) -> Self {
        Self {
            data_type,
            type_hint: hint.into(),
            ..Self::primitive(name, String::new())
        }
    }

    /// Attach an `Annotated[...]` form and opt the field into using it.
    pub fn with_annotated(mut self, annotated: impl Into<String>) -> Self {
        self.use_annotated = true;
        self.annotated = Some(annotated.into());
        self
    }

    pub fn with_import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    pub fn with_default(mut self, default: serde_json::Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// The annotated form, if this field should render with it.
    ///
    /// Ignored unless `use_annotated` is set, and empty text counts as absent.
    pub fn annotated_hint(&self) -> Option<&str> {
        if !self.use_annotated {
            return None;
        }
        self.annotated.as_deref().filter(|a| !a.is_empty())
    }

    /// Type text to emit: the annotated form when active, else the bare hint.
    pub fn effective_type_hint(&self) -> &str {
        self.annotated_hint().unwrap_or(&self.type_hint)
    }
}
