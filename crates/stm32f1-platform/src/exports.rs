//! Build-environment definitions advertised to downstream consumers.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::identifier::PlatformIdentifier;
use crate::LIBRARY_FAMILY;

/// Key exporting the raw platform identifier.
pub const LIBHAL_PLATFORM: &str = "LIBHAL_PLATFORM";

/// Key exporting the library family tag.
pub const LIBHAL_PLATFORM_LIBRARY: &str = "LIBHAL_PLATFORM_LIBRARY";

/// The build-environment exports for an owned platform.
pub fn build_environment_exports(platform: &PlatformIdentifier) -> BTreeMap<String, String> {
    BTreeMap::from([
        (LIBHAL_PLATFORM.to_string(), platform.as_str().to_string()),
        (LIBHAL_PLATFORM_LIBRARY.to_string(), LIBRARY_FAMILY.to_string()),
    ])
}

/// Like [`build_environment_exports`], for a raw option string.
pub fn exports_for(platform: &str) -> Result<BTreeMap<String, String>> {
    let platform = PlatformIdentifier::parse(platform)?;
    Ok(build_environment_exports(&platform))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exports_exactly_two_keys() {
        let exports = exports_for("stm32f103c8").unwrap();
        let expected = BTreeMap::from([
            ("LIBHAL_PLATFORM".to_string(), "stm32f103c8".to_string()),
            ("LIBHAL_PLATFORM_LIBRARY".to_string(), "stm32f1".to_string()),
        ]);
        assert_eq!(exports, expected);
    }

    #[test]
    fn unowned_platform_exports_nothing() {
        assert!(exports_for("lpc4078").is_err());
    }
}
