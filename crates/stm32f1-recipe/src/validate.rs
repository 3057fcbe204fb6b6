//! Settings validation performed before a build.

use semver::Version;

use crate::error::{RecipeError, Result};
use crate::settings::Settings;

/// Oldest C++ standard the library is written against.
pub const MIN_CPPSTD: &str = "20";

/// Oldest compiler releases with usable C++20 support.
pub const COMPILER_MINIMUM_VERSIONS: &[(&str, &str)] =
    &[("gcc", "11"), ("clang", "14"), ("apple-clang", "14.0.0")];

/// Publication year of a `compiler.cppstd` value (`"98"` → 1998,
/// `"gnu20"` → 2020).
pub fn cppstd_year(cppstd: &str) -> Option<u32> {
    let digits = cppstd.strip_prefix("gnu").unwrap_or(cppstd);
    if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n: u32 = digits.parse().ok()?;
    Some(if n >= 90 { 1900 + n } else { 2000 + n })
}

/// Check `cppstd` against [`MIN_CPPSTD`].
pub fn check_min_cppstd(cppstd: &str) -> Result<()> {
    let year = cppstd_year(cppstd).ok_or_else(|| RecipeError::InvalidCppStd {
        value: cppstd.to_string(),
    })?;
    // MIN_CPPSTD is a valid two digit standard.
    let minimum = cppstd_year(MIN_CPPSTD).unwrap_or(2020);
    if year < minimum {
        return Err(RecipeError::UnsupportedCppStd {
            found: cppstd.to_string(),
            minimum: MIN_CPPSTD.to_string(),
        });
    }
    Ok(())
}

/// Parse `"11"`, `"12.3"` or `"14.0.0"` as a version, padding missing parts
/// with zero.
pub fn lenient_version(version: &str) -> Option<Version> {
    let mut parts = [0u64; 3];
    let mut count = 0;
    for (slot, part) in parts.iter_mut().zip(version.trim().split('.')) {
        *slot = part.parse().ok()?;
        count += 1;
    }
    if count == 0 || version.trim().split('.').count() > 3 {
        return None;
    }
    Some(Version::new(parts[0], parts[1], parts[2]))
}

/// Minimum version of `compiler`, if the recipe names one.
pub fn minimum_compiler_version(compiler: &str) -> Option<Version> {
    COMPILER_MINIMUM_VERSIONS
        .iter()
        .find(|(name, _)| *name == compiler)
        .and_then(|(_, version)| lenient_version(version))
}

/// Validate host settings.
///
/// A `compiler.cppstd` older than C++20 is rejected. Compiler versions below
/// the known minimums are only reported, since the host may carry a patched
/// toolchain.
pub fn validate(settings: &Settings) -> Result<()> {
    if let Some(cppstd) = settings.cppstd() {
        check_min_cppstd(cppstd)?;
    }

    if let Some(compiler) = &settings.compiler {
        let found = compiler.version.as_deref().and_then(lenient_version);
        if let (Some(found), Some(minimum)) = (found, minimum_compiler_version(&compiler.name)) {
            if found < minimum {
                tracing::warn!(
                    compiler = %compiler.name,
                    %found,
                    %minimum,
                    "compiler is older than the oldest tested release"
                );
            }
        }
    }

    Ok(())
}
