use std::path::PathBuf;

/// The one error a generation request can produce: the component it names
/// is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("component not found: {identifier}")]
    NotFound { identifier: String },
}

/// Errors raised while loading a catalog or constructing a registry.
///
/// These happen once, before any generation request is served.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("could not read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog JSON does not match the catalog shape.
    #[error("could not parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// The catalog parsed but breaks a registry invariant.
    #[error("{scope}: {message}")]
    Invalid { scope: String, message: String },
}

impl CatalogError {
    pub(crate) fn invalid(scope: impl Into<String>, message: impl Into<String>) -> Self {
        CatalogError::Invalid {
            scope: scope.into(),
            message: message.into(),
        }
    }
}
