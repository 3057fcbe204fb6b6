//! Dependency declarations of the recipe.
//!
//! References follow the host's `name/version` form. A version in brackets is
//! a range (`libhal/[^2.0.3]`); a bare version is an exact pin
//! (`cmake/3.27.1`). Choosing concrete versions is left to the host.

use std::fmt;
use std::str::FromStr;

use semver::{Version, VersionReq};
use serde::{Deserialize, Serialize};

use crate::error::{RecipeError, Result};

/// Where a requirement is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequirementKind {
    /// Linked into the library.
    Host,
    /// Runs on the build machine.
    Tool,
    /// Only needed to build and run the unit tests.
    Test,
}

/// Version part of a package reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSpec {
    Exact(Version),
    Range(VersionReq),
}

impl VersionSpec {
    pub fn matches(&self, version: &Version) -> bool {
        match self {
            VersionSpec::Exact(v) => v == version,
            VersionSpec::Range(req) => req.matches(version),
        }
    }
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionSpec::Exact(v) => write!(f, "{v}"),
            VersionSpec::Range(req) => write!(f, "[{req}]"),
        }
    }
}

/// A `name/version` package reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReference {
    pub name: String,
    pub version: VersionSpec,
}

impl FromStr for PackageReference {
    type Err = RecipeError;

    fn from_str(reference: &str) -> Result<Self> {
        let invalid = || RecipeError::InvalidReference {
            reference: reference.to_string(),
        };
        let (name, version) = reference.split_once('/').ok_or_else(invalid)?;
        let (name, version) = (name.trim(), version.trim());
        if name.is_empty() || version.is_empty() {
            return Err(invalid());
        }

        let semver_err = |source| RecipeError::Requirement {
            reference: reference.to_string(),
            source,
        };
        let version = match version.strip_prefix('[') {
            Some(range) => {
                let range = range.strip_suffix(']').ok_or_else(invalid)?;
                // Host ranges separate comparators by whitespace.
                let range = range.split_whitespace().collect::<Vec<_>>().join(", ");
                VersionSpec::Range(VersionReq::parse(&range).map_err(semver_err)?)
            }
            None => VersionSpec::Exact(Version::parse(version).map_err(semver_err)?),
        };

        Ok(Self {
            name: name.to_string(),
            version,
        })
    }
}

impl fmt::Display for PackageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.version)
    }
}

impl Serialize for PackageReference {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A declared dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Requirement {
    pub reference: PackageReference,
    pub kind: RequirementKind,
    /// Whether consumers also see this dependency's headers.
    pub transitive_headers: bool,
}

impl Requirement {
    pub fn new(reference: &str, kind: RequirementKind) -> Result<Self> {
        Ok(Self {
            reference: reference.parse()?,
            kind,
            transitive_headers: false,
        })
    }

    pub fn with_transitive_headers(mut self) -> Self {
        self.transitive_headers = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.reference.name
    }

    /// Whether `version` of the dependency satisfies this requirement.
    pub fn accepts(&self, version: &Version) -> bool {
        self.reference.version.matches(version)
    }
}

/// Libraries the package links against.
pub fn requirements() -> Result<Vec<Requirement>> {
    Ok(vec![
        Requirement::new("libhal/[^2.0.3]", RequirementKind::Host)?.with_transitive_headers(),
        Requirement::new("libhal-util/[^3.0.1]", RequirementKind::Host)?,
        Requirement::new("libhal-armcortex/[^2.2.1]", RequirementKind::Host)?,
    ])
}

/// Tools and test frameworks needed to build the package.
pub fn build_requirements() -> Result<Vec<Requirement>> {
    Ok(vec![
        Requirement::new("cmake/3.27.1", RequirementKind::Tool)?,
        Requirement::new("libhal-cmake-util/3.0.1", RequirementKind::Tool)?,
        Requirement::new("boost-ext-ut/1.1.9", RequirementKind::Test)?,
    ])
}

/// All declared dependencies, host requirements first.
pub fn all_requirements() -> Result<Vec<Requirement>> {
    let mut all = requirements()?;
    all.extend(build_requirements()?);
    Ok(all)
}
