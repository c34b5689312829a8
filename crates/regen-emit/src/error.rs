//! Error types for tree emission.

use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while writing the output tree.
#[derive(Error, Diagnostic, Debug)]
pub enum EmitError {
    #[error("Error while {action}: {source}")]
    #[diagnostic(
        code(regen_emit::io),
        help("Check permissions and free space under the output directory")
    )]
    IoError {
        action: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(code(regen_emit::json))]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    #[diagnostic(code(regen_emit::fs))]
    FileSystem(#[from] regen_utils::error::FileSystemError),
}

/// A specialized Result type for emission.
pub type Result<T> = std::result::Result<T, EmitError>;

/// Extension trait for adding context to I/O errors.
///
/// Converts `std::io::Result` into [`Result`] with a description of the
/// action that failed, including the path attempted.
pub trait ErrorContext<T> {
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: FnOnce() -> String;
}

impl<T> ErrorContext<T> for std::io::Result<T> {
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: FnOnce() -> String,
    {
        self.map_err(|err| EmitError::IoError {
            action: context(),
            source: err,
        })
    }
}
