//! Linker configuration derivation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlatformError, Result};
use crate::identifier::PlatformIdentifier;
use crate::PACKAGE_NAME;

/// Directory under the package folder holding the installed linker scripts.
pub const LINKER_SCRIPTS_DIR: &str = "linker_scripts";

/// Linker flags selecting the memory layout for one platform.
///
/// The search path must reach the linker before the script reference, which
/// is resolved relative to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LinkerConfiguration {
    /// `-L<package_root>/linker_scripts`
    pub search_path: String,
    /// `-T<package_name>/<script>.ld`
    pub script: String,
}

impl LinkerConfiguration {
    /// Build the configuration for an owned identifier.
    ///
    /// Fails if `package_root` is not valid UTF-8, since a lossy flag would
    /// point the linker at a different folder.
    pub fn for_platform(platform: &PlatformIdentifier, package_root: &Path) -> Result<Self> {
        let search_dir = package_root.join(LINKER_SCRIPTS_DIR);
        let search_dir = search_dir
            .to_str()
            .ok_or_else(|| PlatformError::NonUtf8PackageRoot {
                path: package_root.to_path_buf(),
            })?;
        Ok(Self {
            search_path: format!("-L{search_dir}"),
            script: format!("-T{}/{}.ld", PACKAGE_NAME, platform.linker_script_name()),
        })
    }

    /// Both flags, search path first.
    pub fn flags(&self) -> [&str; 2] {
        [self.search_path.as_str(), self.script.as_str()]
    }

    pub fn into_flags(self) -> Vec<String> {
        vec![self.search_path, self.script]
    }
}

/// Derive the linker configuration for `platform` installed under
/// `package_root`.
///
/// Fails with [`PlatformError::PreconditionViolation`] if the identifier is
/// not owned by this package, and with [`PlatformError::NonUtf8PackageRoot`]
/// if the folder cannot be written into a flag. Paths are only formatted,
/// never checked against the filesystem.
pub fn derive_linker_config(platform: &str, package_root: &Path) -> Result<LinkerConfiguration> {
    let platform = PlatformIdentifier::parse(platform).map_err(|e| {
        tracing::debug!(error = %e, "refusing to derive linker configuration");
        e
    })?;
    let config = LinkerConfiguration::for_platform(&platform, package_root)?;
    tracing::debug!(
        platform = %platform,
        search_path = %config.search_path,
        script = %config.script,
        "derived linker configuration"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_stm32f103c8() {
        let config = derive_linker_config("stm32f103c8", Path::new("/pkg")).unwrap();
        assert_eq!(config.search_path, "-L/pkg/linker_scripts");
        assert_eq!(config.script, "-Tlibhal-stm32f1/stm32f10xx8.ld");
        assert_eq!(
            config.into_flags(),
            vec![
                "-L/pkg/linker_scripts".to_string(),
                "-Tlibhal-stm32f1/stm32f10xx8.ld".to_string()
            ]
        );
    }

    #[test]
    fn flags_keep_search_path_first() {
        let config = derive_linker_config("stm32f100rb", Path::new("/opt/p")).unwrap();
        let [first, second] = config.flags();
        assert!(first.starts_with("-L"));
        assert!(second.starts_with("-T"));
        assert_eq!(second, "-Tlibhal-stm32f1/stm32f10xxb.ld");
    }

    #[test]
    fn derivation_is_idempotent() {
        let a = derive_linker_config("stm32f103c8", Path::new("/pkg")).unwrap();
        let b = derive_linker_config("stm32f103c8", Path::new("/pkg")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn unowned_platform_is_precondition_violation() {
        for platform in ["", "ANY", "stm32f4", "stm32f103c8t6", "lpc4078"] {
            let err = derive_linker_config(platform, Path::new("/pkg")).unwrap_err();
            assert!(matches!(err, PlatformError::PreconditionViolation { .. }));
        }
    }

    #[test]
    fn does_not_touch_filesystem() {
        let config =
            derive_linker_config("stm32f103c8", Path::new("/does/not/exist")).unwrap();
        assert_eq!(config.search_path, "-L/does/not/exist/linker_scripts");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_package_root_is_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let root = Path::new(OsStr::from_bytes(b"/pkg\xff"));
        let err = derive_linker_config("stm32f103c8", root).unwrap_err();
        assert_eq!(
            err,
            PlatformError::NonUtf8PackageRoot {
                path: root.to_path_buf()
            }
        );
    }
}
