use macros::loggable;
use std::path::PathBuf;

loggable! {
    ComparisonError {
        /// One or both folders have not been chosen yet.
        #[error("Both folders must be selected before comparing")]
        MissingSelection => tracing::Level::WARN,

        #[error("Path does not exist: {path}")]
        PathNotFound { path: PathBuf } => tracing::Level::WARN,

        #[error("Path is not a directory: {path}")]
        NotADirectory { path: PathBuf } => tracing::Level::WARN,

        #[error("Permission denied while reading directory: {path}")]
        PermissionDenied { path: PathBuf } => tracing::Level::WARN,

        #[error("Failed to read directory: {path}")]
        ReadDirectoryFailed { path: PathBuf } => tracing::Level::ERROR,
    }
}
