//! Python import symbols and ordered import sets.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt::Write;

/// A single imported symbol, e.g. `from typing import Annotated`.
///
/// Two imports are the same symbol when both the source module and the
/// imported name match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Import {
    /// Source module. `None` renders as a bare `import <name>`.
    pub from: Option<Cow<'static, str>>,
    /// Imported name.
    pub import: Cow<'static, str>,
}

impl Import {
    pub const fn from_static(from: &'static str, import: &'static str) -> Self {
        Self {
            from: Some(Cow::Borrowed(from)),
            import: Cow::Borrowed(import),
        }
    }

    pub fn new(from: impl Into<String>, import: impl Into<String>) -> Self {
        Self {
            from: Some(Cow::Owned(from.into())),
            import: Cow::Owned(import.into()),
        }
    }

    pub fn module(name: impl Into<String>) -> Self {
        Self {
            from: None,
            import: Cow::Owned(name.into()),
        }
    }

    /// Split a dotted path such as `my.models.Base` into
    /// `from my.models import Base`. A path without dots is a bare module import.
    pub fn from_dotted(path: &str) -> Self {
        match path.rsplit_once('.') {
            Some((from, import)) => Self::new(from, import),
            None => Self::module(path),
        }
    }

    /// The name the imported symbol is referred to by in generated code.
    pub fn name(&self) -> &str {
        &self.import
    }
}

pub const IMPORT_ANNOTATED: Import = Import::from_static("typing", "Annotated");
pub const IMPORT_TYPE_ALIAS: Import = Import::from_static("typing", "TypeAlias");
pub const IMPORT_TYPE_ALIAS_BACKPORT: Import =
    Import::from_static("typing_extensions", "TypeAlias");
pub const IMPORT_TYPE_ALIAS_TYPE: Import =
    Import::from_static("typing_extensions", "TypeAliasType");
pub const IMPORT_PYDANTIC_BASE_MODEL: Import = Import::from_static("pydantic", "BaseModel");
pub const IMPORT_PYDANTIC_ROOT_MODEL: Import = Import::from_static("pydantic", "RootModel");
pub const IMPORT_PYDANTIC_CONFIG_DICT: Import = Import::from_static("pydantic", "ConfigDict");

/// An insertion-ordered, deduplicated set of imports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSet {
    imports: Vec<Import>,
    #[serde(skip)]
    seen: HashSet<Import>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import. Returns `false` if the symbol was already present.
    pub fn insert(&mut self, import: Import) -> bool {
        if self.seen.contains(&import) {
            return false;
        }
        self.seen.insert(import.clone());
        self.imports.push(import);
        true
    }

    pub fn extend<I: IntoIterator<Item = Import>>(&mut self, imports: I) {
        for import in imports {
            self.insert(import);
        }
    }

    pub fn merge(&mut self, other: &ImportSet) {
        self.extend(other.iter().cloned());
    }

    pub fn contains(&self, import: &Import) -> bool {
        self.seen.contains(import)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Import> {
        self.imports.iter()
    }

    pub fn len(&self) -> usize {
        self.imports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    pub fn as_slice(&self) -> &[Import] {
        &self.imports
    }

    /// Render as Python import statements.
    ///
    /// Names from the same module share one `from ... import` line; modules
    /// appear in the order their first symbol was inserted.
    pub fn render(&self) -> String {
        let mut groups: Vec<(Option<&str>, Vec<&str>)> = Vec::new();
        for import in &self.imports {
            let from = import.from.as_deref();
            match from {
                Some(_) => match groups.iter_mut().find(|(f, _)| *f == from) {
                    Some((_, names)) => names.push(import.name()),
                    None => groups.push((from, vec![import.name()])),
                },
                None => groups.push((None, vec![import.name()])),
            }
        }

        let mut out = String::new();
        for (from, names) in groups {
            match from {
                Some(module) => {
                    let _ = writeln!(out, "from {} import {}", module, names.join(", "));
                }
                None => {
                    let _ = writeln!(out, "import {}", names.join(", "));
                }
            }
        }
        out
    }
}

impl<'a> IntoIterator for &'a ImportSet {
    type Item = &'a Import;
    type IntoIter = std::slice::Iter<'a, Import>;

    fn into_iter(self) -> Self::IntoIter {
        self.imports.iter()
    }
}

impl FromIterator<Import> for ImportSet {
    fn from_iter<I: IntoIterator<Item = Import>>(iter: I) -> Self {
        let mut set = ImportSet::new();
        set.extend(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deduplicates_by_source_and_name() {
        let mut set = ImportSet::new();
        assert!(set.insert(IMPORT_TYPE_ALIAS));
        assert!(!set.insert(Import::new("typing", "TypeAlias")));
        assert!(set.insert(IMPORT_TYPE_ALIAS_BACKPORT));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn keeps_insertion_order() {
        let set: ImportSet = [
            IMPORT_TYPE_ALIAS_TYPE,
            IMPORT_ANNOTATED,
            Import::new("datetime", "date"),
            IMPORT_ANNOTATED,
        ]
        .into_iter()
        .collect();
        let names: Vec<_> = set.iter().map(Import::name).collect();
        assert_eq!(names, ["TypeAliasType", "Annotated", "date"]);
    }

    #[test]
    fn renders_grouped_statements() {
        let set: ImportSet = [
            IMPORT_ANNOTATED,
            IMPORT_PYDANTIC_ROOT_MODEL,
            IMPORT_TYPE_ALIAS,
            Import::module("decimal"),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            set.render(),
            "from typing import Annotated, TypeAlias\nfrom pydantic import RootModel\nimport decimal\n"
        );
    }

    #[test]
    fn dotted_paths() {
        assert_eq!(
            Import::from_dotted("my.models.Base"),
            Import::new("my.models", "Base")
        );
        assert_eq!(Import::from_dotted("decimal"), Import::module("decimal"));
    }
}
