use thiserror::Error;

/// Fatal errors that abort a whole render or save.
///
/// Per-shape and per-connection problems are deliberately NOT represented
/// here; those are recorded as [`crate::diagnostics::Diagnostic`] entries
/// and rendering continues.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The root of the specification is structurally unusable (e.g. no
    /// slide list). Nothing can be rendered.
    #[error("Invalid specification: {0}")]
    InvalidSpec(String),

    /// Error occurred while deserializing the specification or serializing
    /// the rendered document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error on the input specification or the output path.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A type alias for `Result<T, EngineError>` for convenience within the crate.
pub type Result<T> = std::result::Result<T, EngineError>;
