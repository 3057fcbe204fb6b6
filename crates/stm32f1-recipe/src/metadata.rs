//! Recipe metadata.

use semver::{Comparator, Op, Prerelease, Version, VersionReq};
use serde::{Deserialize, Serialize};

use stm32f1_platform::PACKAGE_NAME;

use crate::options::{OptionValues, PLATFORM_DEFAULT, PLATFORM_OPTION};

/// A package option the recipe declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OptionDeclaration {
    pub name: String,
    /// Accepted values; `None` means any string.
    pub allowed: Option<Vec<String>>,
    pub default: String,
}

impl OptionDeclaration {
    pub fn accepts(&self, value: &str) -> bool {
        match &self.allowed {
            None => true,
            Some(values) => values.iter().any(|v| v == value),
        }
    }
}

/// Static description of the package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RecipeMetadata {
    pub name: String,
    pub version: Version,
    pub license: String,
    pub url: String,
    pub homepage: String,
    pub description: String,
    pub topics: Vec<String>,
    /// Host settings the binary depends on.
    pub settings: Vec<String>,
    pub options: Vec<OptionDeclaration>,
    /// Oldest package-manager host able to evaluate the recipe.
    pub required_host_version: VersionReq,
    /// Logical target alias for CMake consumers.
    pub cmake_target_name: String,
    pub libs: Vec<String>,
}

impl RecipeMetadata {
    /// Metadata of the libhal-stm32f1 package.
    pub fn libhal_stm32f1() -> Self {
        Self {
            name: PACKAGE_NAME.into(),
            version: Version::new(2, 0, 5),
            license: "Apache-2.0".into(),
            url: "https://github.com/conan-io/conan-center-index".into(),
            homepage: "https://libhal.github.io/libhal-stm32f1".into(),
            description: "A collection of drivers and libraries for the stm32f1 \
                          series microcontrollers from NXP"
                .into(),
            topics: [
                "arm",
                "microcontroller",
                "lpc",
                "stm32f1",
                "stm32f1xx",
                "stm32f172",
                "stm32f174",
                "stm32f178",
                "stm32f188",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            settings: ["compiler", "build_type", "os", "arch"]
                .into_iter()
                .map(String::from)
                .collect(),
            options: vec![OptionDeclaration {
                name: PLATFORM_OPTION.into(),
                allowed: None,
                default: PLATFORM_DEFAULT.into(),
            }],
            required_host_version: VersionReq {
                comparators: vec![Comparator {
                    op: Op::GreaterEq,
                    major: 2,
                    minor: Some(0),
                    patch: Some(6),
                    pre: Prerelease::EMPTY,
                }],
            },
            cmake_target_name: "libhal::stm32f1".into(),
            libs: vec![PACKAGE_NAME.into()],
        }
    }

    /// `name/version` reference of this package.
    pub fn reference(&self) -> String {
        format!("{}/{}", self.name, self.version)
    }

    /// The declared options at their default values.
    pub fn default_options(&self) -> OptionValues {
        self.options
            .iter()
            .map(|o| (o.name.clone(), o.default.clone()))
            .collect()
    }

    pub fn option(&self, name: &str) -> Option<&OptionDeclaration> {
        self.options.iter().find(|o| o.name == name)
    }

    /// Whether a package-manager host of `version` can evaluate the recipe.
    pub fn supports_host(&self, version: &Version) -> bool {
        self.required_host_version.matches(version)
    }
}
