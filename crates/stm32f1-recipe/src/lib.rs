//! The libhal-stm32f1 recipe as data, and the host-facing surface around the
//! platform resolver.
//!
//! - **Metadata:** name, version, license, declared settings and options
//! - **Requirements:** host, tool and test dependencies with version ranges
//! - **Profiles:** settings and options supplied by the host, loaded from TOML
//! - **Validation:** settings checks performed before a build
//! - **Identity:** package-id computation, independent of the exact MCU variant
//! - **Package info:** libraries, link flags and build environment for consumers

pub mod error;
pub mod identity;
pub mod metadata;
pub mod options;
pub mod package_info;
pub mod profile;
pub mod requirements;
pub mod settings;
pub mod validate;

pub use error::{RecipeError, Result};
pub use identity::{normalize_package_identity, PackageId};
pub use metadata::RecipeMetadata;
pub use options::OptionValues;
pub use package_info::{package_info, PackageInfo};
pub use profile::BuildProfile;
pub use requirements::{PackageReference, Requirement, RequirementKind, VersionSpec};
pub use settings::{CompilerSettings, Settings};
pub use validate::validate;
