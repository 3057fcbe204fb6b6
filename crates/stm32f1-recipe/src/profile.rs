//! Build profiles: the settings and options a host supplies, stored as TOML.
//!
//! ```toml
//! package-folder = "/pkg"
//!
//! [settings]
//! os = "baremetal"
//!
//! [options]
//! platform = "stm32f103c8"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use stm32f1_platform::TargetEnvironment;

use crate::error::{RecipeError, Result};
use crate::options::OptionValues;
use crate::settings::Settings;

/// One build configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BuildProfile {
    /// Folder the package is installed in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_folder: Option<PathBuf>,
    pub settings: Settings,
    pub options: OptionValues,
}

impl BuildProfile {
    /// Load a profile from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RecipeError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let profile = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "loaded build profile");
        Ok(profile)
    }

    /// Parse a profile from a TOML string.
    pub fn parse(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize the profile to pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn target_environment(&self) -> TargetEnvironment {
        self.settings.target_environment(&self.options)
    }

    /// Overlay every value set in `other`.
    pub fn merge(&mut self, other: &BuildProfile) {
        if other.package_folder.is_some() {
            self.package_folder.clone_from(&other.package_folder);
        }
        self.settings.merge(&other.settings);
        self.options.merge(&other.options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
package-folder = "/pkg"

[settings]
os = "baremetal"
arch = "cortex-m3"
build-type = "MinSizeRel"

[settings.compiler]
name = "gcc"
version = "12.3"
cppstd = "20"

[options]
platform = "stm32f103c8"
"#;

    #[test]
    fn parse_full_profile() {
        let profile = BuildProfile::parse(FULL).unwrap();
        assert_eq!(profile.package_folder.as_deref(), Some(Path::new("/pkg")));
        assert_eq!(profile.settings.os.as_deref(), Some("baremetal"));
        assert_eq!(profile.settings.build_type.as_deref(), Some("MinSizeRel"));
        assert_eq!(profile.settings.cppstd(), Some("20"));
        assert_eq!(profile.options.platform(), "stm32f103c8");
        assert!(profile.target_environment().owned_platform().is_some());
    }

    #[test]
    fn parse_empty_profile() {
        let profile = BuildProfile::parse("").unwrap();
        assert_eq!(profile, BuildProfile::default());
        assert!(profile.target_environment().owned_platform().is_none());
    }

    #[test]
    fn parse_compiler_with_only_cppstd() {
        let profile = BuildProfile::parse("[settings.compiler]\ncppstd = \"17\"\n").unwrap();
        let compiler = profile.settings.compiler.as_ref().unwrap();
        assert!(compiler.name.is_empty());
        assert_eq!(profile.settings.cppstd(), Some("17"));

        let text = profile.to_toml().unwrap();
        assert!(!text.contains("name"));
        assert_eq!(BuildProfile::parse(&text).unwrap(), profile);
    }

    #[test]
    fn reject_invalid_toml() {
        assert!(matches!(
            BuildProfile::parse("this is not valid toml [[["),
            Err(RecipeError::Toml(_))
        ));
    }

    #[test]
    fn toml_round_trip() {
        let profile = BuildProfile::parse(FULL).unwrap();
        let text = profile.to_toml().unwrap();
        assert_eq!(BuildProfile::parse(&text).unwrap(), profile);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stm32f103c8.toml");
        std::fs::write(&path, FULL).unwrap();
        let profile = BuildProfile::load(&path).unwrap();
        assert_eq!(profile.options.platform(), "stm32f103c8");
    }

    #[test]
    fn load_not_found() {
        let result = BuildProfile::load(Path::new("/nonexistent/profile.toml"));
        assert!(matches!(result, Err(RecipeError::NotFound { .. })));
    }

    #[test]
    fn merge_overrides_platform() {
        let mut profile = BuildProfile::parse(FULL).unwrap();
        let overlay = BuildProfile {
            options: [("platform", "stm32f100rb")].into_iter().collect(),
            ..Default::default()
        };
        profile.merge(&overlay);
        assert_eq!(profile.options.platform(), "stm32f100rb");
        assert_eq!(profile.package_folder.as_deref(), Some(Path::new("/pkg")));
    }
}
