//! Host settings for one build configuration.

use serde::{Deserialize, Serialize};

use stm32f1_platform::TargetEnvironment;

use crate::options::OptionValues;

/// Compiler sub-settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CompilerSettings {
    /// Compiler family (e.g., "gcc", "clang", "apple-clang"); empty when unset.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// C++ standard (e.g., "20", "gnu20").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cppstd: Option<String>,
}

/// The settings the package binary depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    /// Operating system tag; `baremetal` for firmware targets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compiler: Option<CompilerSettings>,
}

impl Settings {
    pub fn cppstd(&self) -> Option<&str> {
        self.compiler.as_ref().and_then(|c| c.cppstd.as_deref())
    }

    /// The resolver's view of these settings together with `options`.
    pub fn target_environment(&self, options: &OptionValues) -> TargetEnvironment {
        TargetEnvironment::new(self.os.as_deref().unwrap_or_default(), options.platform())
    }

    /// Overlay the values set in `other`.
    pub fn merge(&mut self, other: &Settings) {
        if other.os.is_some() {
            self.os.clone_from(&other.os);
        }
        if other.arch.is_some() {
            self.arch.clone_from(&other.arch);
        }
        if other.build_type.is_some() {
            self.build_type.clone_from(&other.build_type);
        }
        if let Some(compiler) = &other.compiler {
            match &mut self.compiler {
                Some(current) => {
                    if !compiler.name.is_empty() {
                        current.name.clone_from(&compiler.name);
                    }
                    if compiler.version.is_some() {
                        current.version.clone_from(&compiler.version);
                    }
                    if compiler.cppstd.is_some() {
                        current.cppstd.clone_from(&compiler.cppstd);
                    }
                }
                None => self.compiler = Some(compiler.clone()),
            }
        }
    }
}
