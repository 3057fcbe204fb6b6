//! Error types for platform resolution.

use std::path::PathBuf;

/// Errors that can occur while resolving a platform configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
    /// Derivation was requested for an identifier this package does not own.
    #[error("platform '{platform}' is not an stm32f1 platform identifier")]
    PreconditionViolation {
        /// The rejected identifier.
        platform: String,
    },

    /// The package folder cannot be passed to the linker verbatim.
    #[error("package folder {} is not valid UTF-8", path.display())]
    NonUtf8PackageRoot {
        /// The rejected folder.
        path: PathBuf,
    },
}

/// Result type for platform operations.
pub type Result<T> = std::result::Result<T, PlatformError>;
