//! Package identity.
//!
//! The compiled library is not specialized per MCU variant; the variant only
//! matters at link time. The platform option is therefore dropped before the
//! package id is computed, so every stm32f1 variant shares one binary.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::metadata::RecipeMetadata;
use crate::options::{OptionValues, PLATFORM_OPTION};
use crate::settings::Settings;

/// Remove the platform option from the identity input. A no-op when absent.
pub fn normalize_package_identity(mut options: OptionValues) -> OptionValues {
    if options.remove(PLATFORM_OPTION).is_some() {
        tracing::debug!("platform option excluded from package identity");
    }
    options
}

/// Everything that determines which binary a configuration gets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PackageIdentity {
    pub reference: String,
    pub settings: Settings,
    pub options: OptionValues,
}

impl PackageIdentity {
    pub fn new(metadata: &RecipeMetadata, settings: &Settings, options: &OptionValues) -> Self {
        Self {
            reference: metadata.reference(),
            settings: settings.clone(),
            options: normalize_package_identity(options.clone()),
        }
    }
}

/// A package id (SHA-256 hex digest of the canonical identity).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageId(pub String);

impl PackageId {
    /// Compute the package id for a configuration.
    pub fn compute(
        metadata: &RecipeMetadata,
        settings: &Settings,
        options: &OptionValues,
    ) -> Result<Self> {
        Self::of(&PackageIdentity::new(metadata, settings, options))
    }

    /// Digest an already normalized identity.
    pub fn of(identity: &PackageIdentity) -> Result<Self> {
        let canonical = serde_json::to_vec(identity)?;
        let mut hasher = Sha256::new();
        hasher.update(&canonical);
        Ok(PackageId(hex_encode(&hasher.finalize())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
