//! Target environment supplied by the host.
//!
//! The host's settings arrive as explicit values; nothing here reads ambient
//! state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::identifier::{owns, PlatformIdentifier};

/// Host tag for a bare-metal target.
pub const BARE_METAL_TAG: &str = "baremetal";

/// The operating system a build targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OperatingSystem {
    /// No operating system; firmware runs directly on the hardware.
    BareMetal,
    Linux,
    Windows,
    Macos,
    /// Any other host tag, kept verbatim.
    Other(String),
}

impl OperatingSystem {
    /// Map a host settings tag to an operating system.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            BARE_METAL_TAG => OperatingSystem::BareMetal,
            "Linux" => OperatingSystem::Linux,
            "Windows" => OperatingSystem::Windows,
            "Macos" => OperatingSystem::Macos,
            other => OperatingSystem::Other(other.to_string()),
        }
    }

    /// The host settings tag for this operating system.
    pub fn tag(&self) -> &str {
        match self {
            OperatingSystem::BareMetal => BARE_METAL_TAG,
            OperatingSystem::Linux => "Linux",
            OperatingSystem::Windows => "Windows",
            OperatingSystem::Macos => "Macos",
            OperatingSystem::Other(tag) => tag,
        }
    }

    pub fn is_bare_metal(&self) -> bool {
        matches!(self, OperatingSystem::BareMetal)
    }
}

impl From<&str> for OperatingSystem {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

impl From<String> for OperatingSystem {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<OperatingSystem> for String {
    fn from(os: OperatingSystem) -> Self {
        os.tag().to_string()
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Operating system and platform option for one build invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetEnvironment {
    /// Target operating system.
    pub os: OperatingSystem,
    /// Raw platform option; any string is accepted.
    pub platform: String,
}

impl TargetEnvironment {
    pub fn new(os: impl Into<OperatingSystem>, platform: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            platform: platform.into(),
        }
    }

    pub fn is_bare_metal(&self) -> bool {
        self.os.is_bare_metal()
    }

    /// Whether the platform option names an stm32f1 variant.
    pub fn owns_platform(&self) -> bool {
        owns(&self.platform)
    }

    /// The platform identifier, if this environment is bare-metal and the
    /// platform is owned by this package.
    pub fn owned_platform(&self) -> Option<PlatformIdentifier> {
        if !self.is_bare_metal() {
            tracing::debug!(os = %self.os, "not a bare-metal target, skipping linker configuration");
            return None;
        }
        if !self.owns_platform() {
            tracing::debug!(platform = %self.platform, "platform not owned by this package");
            return None;
        }
        PlatformIdentifier::parse(&self.platform).ok()
    }
}
