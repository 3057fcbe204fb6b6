//! Information handed to consumers of the installed package.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use stm32f1_platform::{resolve, TargetEnvironment};

use crate::error::Result;
use crate::metadata::RecipeMetadata;

/// Libraries, link flags and build environment for consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PackageInfo {
    pub name: String,
    pub cmake_target_name: String,
    pub libs: Vec<String>,
    /// Linker flags for executables; search path first, then script.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exelinkflags: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub build_env: BTreeMap<String, String>,
}

impl PackageInfo {
    /// Whether a linker configuration was derived for this build.
    pub fn has_linker_configuration(&self) -> bool {
        !self.exelinkflags.is_empty()
    }

    /// Render as Cargo build-script directives.
    pub fn cargo_directives(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for lib in &self.libs {
            lines.push(format!("cargo:rustc-link-lib={lib}"));
        }
        for flag in &self.exelinkflags {
            lines.push(format!("cargo:rustc-link-arg={flag}"));
        }
        for (key, value) in &self.build_env {
            lines.push(format!("cargo:rustc-env={key}={value}"));
        }
        lines
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Compute the package info for `env` with the package installed at
/// `package_folder`.
///
/// Link flags and build environment are only present for bare-metal builds
/// of an owned platform.
pub fn package_info(
    metadata: &RecipeMetadata,
    env: &TargetEnvironment,
    package_folder: &Path,
) -> Result<PackageInfo> {
    let mut info = PackageInfo {
        name: metadata.name.clone(),
        cmake_target_name: metadata.cmake_target_name.clone(),
        libs: metadata.libs.clone(),
        exelinkflags: Vec::new(),
        build_env: BTreeMap::new(),
    };

    if let Some(resolution) = resolve(env, package_folder)? {
        tracing::info!(
            platform = %resolution.platform,
            script = %resolution.linker.script,
            "resolved bare-metal platform"
        );
        info.exelinkflags = resolution.linker.into_flags();
        info.build_env = resolution.exports;
    }

    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecipeError;
    use stm32f1_platform::PlatformError;

    fn info_for(os: &str, platform: &str) -> PackageInfo {
        package_info(
            &RecipeMetadata::libhal_stm32f1(),
            &TargetEnvironment::new(os, platform),
            Path::new("/pkg"),
        )
        .unwrap()
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_folder_fails_only_when_linking() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let meta = RecipeMetadata::libhal_stm32f1();
        let folder = Path::new(OsStr::from_bytes(b"/pkg\xff"));

        let err = package_info(&meta, &TargetEnvironment::new("baremetal", "stm32f103c8"), folder)
            .unwrap_err();
        assert!(matches!(
            err,
            RecipeError::Platform(PlatformError::NonUtf8PackageRoot { .. })
        ));

        let hosted =
            package_info(&meta, &TargetEnvironment::new("Linux", "stm32f103c8"), folder).unwrap();
        assert!(hosted.exelinkflags.is_empty());
    }

    #[test]
    fn bare_metal_owned_platform() {
        let info = info_for("baremetal", "stm32f103c8");
        assert_eq!(info.libs, vec!["libhal-stm32f1".to_string()]);
        assert_eq!(info.cmake_target_name, "libhal::stm32f1");
        assert_eq!(
            info.exelinkflags,
            vec![
                "-L/pkg/linker_scripts".to_string(),
                "-Tlibhal-stm32f1/stm32f10xx8.ld".to_string()
            ]
        );
        assert_eq!(info.build_env["LIBHAL_PLATFORM"], "stm32f103c8");
        assert_eq!(info.build_env["LIBHAL_PLATFORM_LIBRARY"], "stm32f1");
        assert!(info.has_linker_configuration());
    }

    #[test]
    fn hosted_build_has_no_link_flags() {
        let info = info_for("Linux", "stm32f103c8");
        assert_eq!(info.libs, vec!["libhal-stm32f1".to_string()]);
        assert!(info.exelinkflags.is_empty());
        assert!(info.build_env.is_empty());
    }

    #[test]
    fn foreign_platform_has_no_link_flags() {
        let info = info_for("baremetal", "lpc4078");
        assert!(!info.has_linker_configuration());
        assert!(info.build_env.is_empty());
    }

    #[test]
    fn cargo_directives_order() {
        let info = info_for("baremetal", "stm32f103c8");
        assert_eq!(
            info.cargo_directives(),
            vec![
                "cargo:rustc-link-lib=libhal-stm32f1",
                "cargo:rustc-link-arg=-L/pkg/linker_scripts",
                "cargo:rustc-link-arg=-Tlibhal-stm32f1/stm32f10xx8.ld",
                "cargo:rustc-env=LIBHAL_PLATFORM=stm32f103c8",
                "cargo:rustc-env=LIBHAL_PLATFORM_LIBRARY=stm32f1",
            ]
        );
    }

    #[test]
    fn json_omits_empty_sections() {
        let json = info_for("Linux", "ANY").to_json().unwrap();
        assert!(!json.contains("exelinkflags"));
        assert!(!json.contains("build-env"));

        let json = info_for("baremetal", "stm32f103c8").to_json().unwrap();
        let parsed: PackageInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.exelinkflags.len(), 2);
    }

    #[test]
    fn toml_output() {
        let text = info_for("baremetal", "stm32f103c8").to_toml().unwrap();
        assert!(text.contains("LIBHAL_PLATFORM"));
        assert!(text.contains("cmake-target-name"));
    }
}
