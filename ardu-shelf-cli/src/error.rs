use thiserror::Error;

use ardu_shelf_frontend::FrontendError;
use ardu_shelf_lib::FetchError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// HTTP client setup or fetch error
    #[error("{0}")]
    Fetch(#[from] FetchError),

    /// Page output error
    #[error("{0}")]
    Frontend(#[from] FrontendError),

    /// Catalog could not be loaded (details are logged)
    #[error("Could not load catalog from {0}")]
    LoadFailed(String),

    /// No rendered item matches the selection
    #[error("No item matches '{0}'")]
    ItemNotFound(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn load_failed(target: impl Into<String>) -> Self {
        Self::LoadFailed(target.into())
    }

    pub(crate) fn item_not_found(selection: impl Into<String>) -> Self {
        Self::ItemNotFound(selection.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
