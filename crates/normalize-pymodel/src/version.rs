//! Target Python version tiers.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported target Python version, ordered oldest to newest.
///
/// The ordering is what gates syntax: comparisons such as
/// `version >= PythonVersion::NATIVE_TYPE_STATEMENT` decide which alias forms
/// are legal in the generated source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PythonVersion {
    Py39,
    Py310,
    Py311,
    Py312,
    Py313,
    Py314,
}

impl PythonVersion {
    /// All supported versions, oldest first.
    pub const ALL: [PythonVersion; 6] = [
        PythonVersion::Py39,
        PythonVersion::Py310,
        PythonVersion::Py311,
        PythonVersion::Py312,
        PythonVersion::Py313,
        PythonVersion::Py314,
    ];

    /// The oldest supported tier.
    pub const OLDEST: PythonVersion = PythonVersion::Py39;

    /// First tier with the native `type X = ...` statement.
    pub const NATIVE_TYPE_STATEMENT: PythonVersion = PythonVersion::Py312;

    pub fn as_str(self) -> &'static str {
        match self {
            PythonVersion::Py39 => "3.9",
            PythonVersion::Py310 => "3.10",
            PythonVersion::Py311 => "3.11",
            PythonVersion::Py312 => "3.12",
            PythonVersion::Py313 => "3.13",
            PythonVersion::Py314 => "3.14",
        }
    }

    pub fn is_oldest(self) -> bool {
        self == Self::OLDEST
    }

    pub fn supports_type_statement(self) -> bool {
        self >= Self::NATIVE_TYPE_STATEMENT
    }

    /// `typing.TypeAlias` exists from 3.10 on.
    pub fn has_typing_type_alias(self) -> bool {
        self > Self::OLDEST
    }

    /// `typing.NotRequired` for TypedDict keys exists from 3.11 on.
    pub fn has_typed_dict_non_required(self) -> bool {
        self >= PythonVersion::Py311
    }
}

impl Default for PythonVersion {
    fn default() -> Self {
        Self::OLDEST
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PythonVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s.trim())
            .ok_or_else(|| Error::UnsupportedFeatureLevel(s.to_string()))
    }
}

impl TryFrom<String> for PythonVersion {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PythonVersion> for String {
    fn from(version: PythonVersion) -> Self {
        version.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_tier() {
        for version in PythonVersion::ALL {
            assert_eq!(version.as_str().parse::<PythonVersion>(), Ok(version));
        }
    }

    #[test]
    fn rejects_unknown_tier() {
        assert_eq!(
            "3.8".parse::<PythonVersion>(),
            Err(Error::UnsupportedFeatureLevel("3.8".into()))
        );
        assert!("latest".parse::<PythonVersion>().is_err());
        assert!("".parse::<PythonVersion>().is_err());
    }

    #[test]
    fn tiers_are_ordered() {
        let mut sorted = PythonVersion::ALL;
        sorted.sort();
        assert_eq!(sorted, PythonVersion::ALL);
        assert!(PythonVersion::Py310 > PythonVersion::Py39);
    }

    #[test]
    fn feature_gates() {
        assert!(!PythonVersion::Py311.supports_type_statement());
        assert!(PythonVersion::Py312.supports_type_statement());
        assert!(PythonVersion::Py314.supports_type_statement());
        assert!(!PythonVersion::Py39.has_typing_type_alias());
        assert!(PythonVersion::Py310.has_typing_type_alias());
        assert!(!PythonVersion::Py310.has_typed_dict_non_required());
        assert!(PythonVersion::Py311.has_typed_dict_non_required());
    }
}
