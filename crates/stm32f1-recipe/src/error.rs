//! Recipe error types.

use std::path::PathBuf;

use stm32f1_platform::PlatformError;

/// Errors that can occur while evaluating the recipe.
#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    /// Profile file not found.
    #[error("profile not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// A package reference is not of the form `name/version` or `name/[range]`.
    #[error("invalid package reference: '{reference}'")]
    InvalidReference { reference: String },

    /// The version part of a package reference did not parse.
    #[error("invalid version in '{reference}': {source}")]
    Requirement {
        reference: String,
        #[source]
        source: semver::Error,
    },

    /// `compiler.cppstd` is not a recognised C++ standard.
    #[error("invalid compiler.cppstd '{value}'")]
    InvalidCppStd { value: String },

    /// `compiler.cppstd` is below the minimum the library is written against.
    #[error("current compiler.cppstd is {found}, at least {minimum} is required")]
    UnsupportedCppStd { found: String, minimum: String },

    /// Platform resolution failure.
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for recipe operations.
pub type Result<T> = std::result::Result<T, RecipeError>;
