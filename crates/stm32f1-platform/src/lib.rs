//! Platform configuration resolution for the libhal-stm32f1 package.
//!
//! Decides whether a requested build configuration belongs to this package
//! and, if it does, derives the linker artifacts and build environment
//! definitions for it:
//! - **Ownership:** a platform identifier names an stm32f1 variant
//! - **Environment:** the target is bare-metal
//! - **Derivation:** linker search path, linker script and exported definitions
//!
//! Every operation is a pure function over explicit inputs.

pub mod environment;
pub mod error;
pub mod exports;
pub mod identifier;
pub mod linker;
pub mod resolution;

pub use environment::{OperatingSystem, TargetEnvironment};
pub use error::{PlatformError, Result};
pub use exports::build_environment_exports;
pub use identifier::{owns, PlatformIdentifier};
pub use linker::{derive_linker_config, LinkerConfiguration};
pub use resolution::{resolve, Resolution};

/// Name of the package, used as the library name and as the linker script
/// subdirectory.
pub const PACKAGE_NAME: &str = "libhal-stm32f1";

/// Library family tag advertised to downstream consumers.
pub const LIBRARY_FAMILY: &str = "stm32f1";
