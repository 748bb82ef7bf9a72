//! Capability matrix: which alias strategy a flavor gets at a Python version.
//!
//! This is the only place the decision is made. Everything else asks here
//! instead of comparing versions itself, so adding a version tier means
//! touching [`PythonVersion`] and nothing else.

use crate::error::Result;
use crate::flavor::OutputFlavor;
use crate::strategy::RenderingStrategy;
use crate::version::PythonVersion;

/// Select the alias strategy for `flavor` at `version`.
///
/// | version | flavor                  | strategy              |
/// |---------|-------------------------|-----------------------|
/// | ≥ 3.12  | any                     | `TypeStatement`       |
/// | < 3.12  | `pydantic_v2.BaseModel` | `TypeAliasType`       |
/// | < 3.12  | any other               | `TypeAliasAnnotation` |
pub fn select_strategy(flavor: OutputFlavor, version: PythonVersion) -> RenderingStrategy {
    match (version.supports_type_statement(), flavor) {
        (true, _) => RenderingStrategy::TypeStatement,
        (false, OutputFlavor::PydanticV2BaseModel) => RenderingStrategy::TypeAliasType,
        (false, _) => RenderingStrategy::TypeAliasAnnotation,
    }
}

/// Select a strategy from user-facing identifiers (e.g. `"pydantic_v2.BaseModel"`, `"3.11"`).
pub fn select_strategy_by_name(flavor: &str, version: &str) -> Result<RenderingStrategy> {
    Ok(select_strategy(flavor.parse()?, version.parse()?))
}

/// One resolved cell of the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    pub flavor: OutputFlavor,
    pub version: PythonVersion,
    pub strategy: RenderingStrategy,
}

/// Every (flavor, version) cell, flavors outermost.
pub fn capability_table() -> Vec<Capability> {
    OutputFlavor::ALL
        .into_iter()
        .flat_map(|flavor| {
            PythonVersion::ALL.into_iter().map(move |version| Capability {
                flavor,
                version,
                strategy: select_strategy(flavor, version),
            })
        })
        .collect()
}
