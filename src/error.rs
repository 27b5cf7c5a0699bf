use thiserror::Error;

/// Process-boundary errors. Nothing in the request path raises these; the
/// scrap pipeline reports failure as an outcome value instead.
#[derive(Debug, Error)]
pub enum ScrapError {
    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
