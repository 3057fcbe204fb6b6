//! Composition of the ownership and bare-metal guards.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::environment::TargetEnvironment;
use crate::error::Result;
use crate::exports::build_environment_exports;
use crate::identifier::PlatformIdentifier;
use crate::linker::LinkerConfiguration;

/// Everything derived for an owned, bare-metal configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Resolution {
    pub platform: PlatformIdentifier,
    pub linker: LinkerConfiguration,
    pub exports: BTreeMap<String, String>,
}

/// Resolve `env` against a package installed at `package_root`.
///
/// Returns `Ok(None)` for every configuration this package does not serve,
/// which is the common case in a multi-platform build matrix.
pub fn resolve(env: &TargetEnvironment, package_root: &Path) -> Result<Option<Resolution>> {
    let Some(platform) = env.owned_platform() else {
        return Ok(None);
    };
    let linker = LinkerConfiguration::for_platform(&platform, package_root)?;
    let exports = build_environment_exports(&platform);
    Ok(Some(Resolution {
        platform,
        linker,
        exports,
    }))
}
