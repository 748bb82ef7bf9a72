//! Surface-syntax strategies for type aliases.

use crate::imports::{IMPORT_TYPE_ALIAS, IMPORT_TYPE_ALIAS_BACKPORT, IMPORT_TYPE_ALIAS_TYPE, Import};
use crate::template::TemplateId;
use crate::version::PythonVersion;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a `Name -> type` alias is spelled in the generated source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenderingStrategy {
    /// `type Name = T`
    TypeStatement,
    /// `Name = TypeAliasType("Name", T)`
    TypeAliasType,
    /// `Name: TypeAlias = T`
    TypeAliasAnnotation,
}

impl RenderingStrategy {
    pub const ALL: [RenderingStrategy; 3] = [
        RenderingStrategy::TypeStatement,
        RenderingStrategy::TypeAliasType,
        RenderingStrategy::TypeAliasAnnotation,
    ];

    pub fn template_id(self) -> TemplateId {
        match self {
            RenderingStrategy::TypeStatement => TemplateId::TypeStatement,
            RenderingStrategy::TypeAliasType => TemplateId::TypeAliasType,
            RenderingStrategy::TypeAliasAnnotation => TemplateId::TypeAliasAnnotation,
        }
    }

    /// Aliases never inherit from anything.
    pub fn base_class(self) -> &'static str {
        ""
    }

    /// Imports the alias syntax itself needs at `version`.
    ///
    /// Depends only on the strategy and version, never on entity content.
    pub fn default_imports(self, version: PythonVersion) -> Option<Import> {
        match self {
            RenderingStrategy::TypeStatement => None,
            RenderingStrategy::TypeAliasType => Some(IMPORT_TYPE_ALIAS_TYPE),
            RenderingStrategy::TypeAliasAnnotation if version.has_typing_type_alias() => {
                Some(IMPORT_TYPE_ALIAS)
            }
            RenderingStrategy::TypeAliasAnnotation => Some(IMPORT_TYPE_ALIAS_BACKPORT),
        }
    }
}

impl fmt::Display for RenderingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RenderingStrategy::TypeStatement => "type-statement",
            RenderingStrategy::TypeAliasType => "type-alias-type",
            RenderingStrategy::TypeAliasAnnotation => "type-alias-annotation",
        })
    }
}
