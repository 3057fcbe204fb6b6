//! Platform identifiers and the ownership predicate.
//!
//! An identifier such as `stm32f103c8` names one microcontroller variant:
//! the family prefix `stm32f1`, a line/variant digit pair, a pin count code
//! and a flash size code. Linker scripts are shared across variants, so the
//! characters at offsets 8 and 9 are wildcarded when naming the script.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PlatformError, Result};

/// Family prefix every owned identifier starts with.
pub const FAMILY_PREFIX: &str = "stm32f1";

/// Exact length, in characters, of an owned identifier.
pub const IDENTIFIER_LENGTH: usize = 11;

/// Character offsets replaced when deriving the linker script name.
pub const WILDCARD_POSITIONS: [usize; 2] = [8, 9];

/// The don't-care character.
pub const WILDCARD: char = 'x';

/// Returns `true` iff `platform` starts with `stm32f1` and is exactly 11
/// characters long.
///
/// Tolerates any input; empty or malformed strings are simply not owned.
pub fn owns(platform: &str) -> bool {
    platform.starts_with(FAMILY_PREFIX) && platform.chars().count() == IDENTIFIER_LENGTH
}

/// A platform identifier that passed [`owns`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlatformIdentifier(String);

impl PlatformIdentifier {
    /// Parse an identifier, rejecting anything this package does not own.
    pub fn parse(platform: &str) -> Result<Self> {
        if owns(platform) {
            Ok(Self(platform.to_string()))
        } else {
            Err(PlatformError::PreconditionViolation {
                platform: platform.to_string(),
            })
        }
    }

    /// The identifier exactly as supplied by the host.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Linker script base name (without the `.ld` extension).
    ///
    /// `stm32f103c8` maps to `stm32f10xx8`.
    pub fn linker_script_name(&self) -> String {
        self.0
            .chars()
            .enumerate()
            .map(|(i, c)| {
                if WILDCARD_POSITIONS.contains(&i) {
                    WILDCARD
                } else {
                    c
                }
            })
            .collect()
    }
}

impl TryFrom<&str> for PlatformIdentifier {
    type Error = PlatformError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for PlatformIdentifier {
    type Error = PlatformError;

    fn try_from(value: String) -> Result<Self> {
        if owns(&value) {
            Ok(Self(value))
        } else {
            Err(PlatformError::PreconditionViolation { platform: value })
        }
    }
}

impl From<PlatformIdentifier> for String {
    fn from(value: PlatformIdentifier) -> Self {
        value.0
    }
}

impl AsRef<str> for PlatformIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlatformIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
