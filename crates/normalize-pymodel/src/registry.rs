//! Registry that binds renderers for a generation run.
//!
//! The registry owns the template engine so every renderer it hands out
//! shares one. Binding consults the capability matrix once; the resulting
//! [`ConfiguredRenderer`] is reused for every entity of the run.

use crate::flavor::OutputFlavor;
use crate::matrix::select_strategy;
use crate::render::{ConfiguredRenderer, RootForm, WrappedRoot};
use crate::template::{BuiltinTemplates, TemplateEngine};
use crate::version::PythonVersion;
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
pub struct StrategyRegistry {
    engine: Arc<dyn TemplateEngine>,
}

impl StrategyRegistry {
    /// A registry using the built-in templates.
    pub fn new() -> Self {
        Self::with_engine(Arc::new(BuiltinTemplates))
    }

    /// A registry whose renderers expand through `engine`.
    pub fn with_engine(engine: Arc<dyn TemplateEngine>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &Arc<dyn TemplateEngine> {
        &self.engine
    }

    /// Bind an alias renderer for `flavor` at `version`.
    ///
    /// Binding the same pair twice gives equal renderers.
    pub fn bind(&self, version: PythonVersion, flavor: OutputFlavor) -> ConfiguredRenderer {
        let strategy = select_strategy(flavor, version);
        tracing::debug!(%version, %flavor, %strategy, "bound alias renderer");
        ConfiguredRenderer::new(
            RootForm::Alias(strategy),
            version,
            flavor,
            Arc::clone(&self.engine),
        )
    }

    /// Bind the flavor's wrapped-root renderer (alias mode off).
    pub fn bind_wrapped(&self, version: PythonVersion, flavor: OutputFlavor) -> ConfiguredRenderer {
        let wrapped = WrappedRoot::for_flavor(flavor);
        tracing::debug!(%version, %flavor, ?wrapped, "bound wrapped-root renderer");
        ConfiguredRenderer::new(
            RootForm::Wrapped(wrapped),
            version,
            flavor,
            Arc::clone(&self.engine),
        )
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyRegistry").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Entity, Field};
    use crate::strategy::RenderingStrategy;
    use crate::template::{RenderRequest, TemplateId};

    #[test]
    fn binding_is_idempotent() {
        let registry = StrategyRegistry::new();
        for version in PythonVersion::ALL {
            for flavor in OutputFlavor::ALL {
                let a = registry.bind(version, flavor);
                let b = registry.bind(version, flavor);
                assert_eq!(a, b);

                let entity = Entity::new("UserId", vec![Field::primitive("root", "str")]);
                assert_eq!(a.render_entity(&entity), b.render_entity(&entity));
            }
        }
    }

    #[test]
    fn bound_strategy_follows_matrix() {
        let registry = StrategyRegistry::new();
        let renderer = registry.bind(PythonVersion::Py311, OutputFlavor::PydanticV2BaseModel);
        assert_eq!(renderer.strategy(), Some(RenderingStrategy::TypeAliasType));
        assert_eq!(renderer.version(), PythonVersion::Py311);
    }

    #[test]
    fn wrapped_binding_per_flavor() {
        let registry = StrategyRegistry::new();
        let form = |flavor| registry.bind_wrapped(PythonVersion::Py310, flavor).form();
        assert_eq!(
            form(OutputFlavor::PydanticBaseModel),
            RootForm::Wrapped(WrappedRoot::CustomRootType)
        );
        assert_eq!(
            form(OutputFlavor::PydanticV2BaseModel),
            RootForm::Wrapped(WrappedRoot::RootModel)
        );
        assert_eq!(
            form(OutputFlavor::MsgspecStruct),
            RootForm::Wrapped(WrappedRoot::Assignment)
        );
    }

    struct Shouting;

    impl TemplateEngine for Shouting {
        fn expand(&self, template: TemplateId, request: &RenderRequest<'_>) -> String {
            format!("{} {}", template.as_str(), request.class_name.to_uppercase())
        }
    }

    #[test]
    fn renderers_share_the_registry_engine() {
        let registry = StrategyRegistry::with_engine(Arc::new(Shouting));
        let renderer = registry.bind(PythonVersion::Py313, OutputFlavor::Dataclass);
        let entity = Entity::new("UserId", vec![Field::primitive("root", "str")]);
        assert_eq!(renderer.render(&entity), "type_alias/statement USERID");
    }
}
