//! Error types for sq-codegen

use thiserror::Error;

/// Code generation errors
#[derive(Error, Debug)]
pub enum CodegenError {
    /// Template render error (G001)
    #[error("[G001] Template render error in {template}: {message}")]
    Render { template: String, message: String },

    /// Failed to write a generated file (G002)
    #[error("[G002] Failed to write '{path}': {source}")]
    FileWrite {
        path: String,
        source: std::io::Error,
    },

    /// Failed to create the output directory (G003)
    #[error("[G003] Failed to create output directory '{path}': {source}")]
    OutputDir {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for CodegenError
pub type CodegenResult<T> = Result<T, CodegenError>;

impl CodegenError {
    pub(crate) fn render(template: &str, err: minijinja::Error) -> Self {
        CodegenError::Render {
            template: template.to_string(),
            message: err.to_string(),
        }
    }
}
