//! Import resolution for alias declarations.

use crate::imports::{IMPORT_ANNOTATED, ImportSet};
use crate::ir::Field;
use crate::strategy::RenderingStrategy;
use crate::version::PythonVersion;

/// Imports a rendered alias needs, in a fixed order:
///
/// 1. the strategy's own import (at most one),
/// 2. `Annotated`, if any field renders in its annotated form,
/// 3. symbols the fields' type hints declare,
///
/// with repeats dropped. Same inputs always give the same set.
pub fn resolve_imports(
    strategy: RenderingStrategy,
    version: PythonVersion,
    fields: &[Field],
) -> ImportSet {
    let mut imports = ImportSet::new();
    imports.extend(strategy.default_imports(version));
    if fields.iter().any(|f| f.annotated_hint().is_some()) {
        imports.insert(IMPORT_ANNOTATED);
    }
    imports.extend(fields.iter().flat_map(|f| f.imports.iter().cloned()));
    imports
}
