//! Error types for model selection.

/// Fatal errors raised while selecting a model set or rendering strategy.
///
/// Every variant aborts the generation run: a substituted "closest" choice
/// would produce Python that only fails once the generated code is imported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{0} is an unsupported output model type")]
    UnsupportedFlavor(String),

    #[error("{0} is an unsupported target python version")]
    UnsupportedFeatureLevel(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
