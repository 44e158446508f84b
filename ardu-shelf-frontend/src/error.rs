/// Errors that can occur while writing rendered pages.
#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
