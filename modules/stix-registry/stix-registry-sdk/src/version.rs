//! Specification versions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A revision of the STIX specification.
///
/// The two baseline revisions are enumerated; anything else is carried as
/// [`SpecVersion::Other`] and treated by the registry as a future revision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SpecVersion {
    /// STIX 2.0, the earliest baseline.
    V2_0,
    /// STIX 2.1, the newest baseline.
    #[default]
    V2_1,
    /// Any revision not known to this crate.
    Other(FutureVersion),
}

/// Textual form of a revision newer than the baselines.
///
/// Only parsing a [`SpecVersion`] produces one, so it is never empty, never
/// padded, and never the text of a baseline revision:
///
/// ```compile_fail
/// use stix_registry_sdk::version::{FutureVersion, SpecVersion};
///
/// let aliased = SpecVersion::Other(FutureVersion("2.1".to_owned()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FutureVersion(String);

impl FutureVersion {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FutureVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl SpecVersion {
    /// Versions for which catalogs exist from the start.
    pub const KNOWN: [Self; 2] = [Self::V2_0, Self::V2_1];

    /// Returns the textual form, e.g. `"2.1"`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::V2_0 => "2.0",
            Self::V2_1 => "2.1",
            Self::Other(v) => v.as_str(),
        }
    }

    /// Returns `true` for one of the baseline revisions.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a version string is blank.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid spec version: {0:?}")]
pub struct ParseSpecVersionError(pub String);

impl FromStr for SpecVersion {
    type Err = ParseSpecVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(ParseSpecVersionError(s.to_owned())),
            "2.0" => Ok(Self::V2_0),
            "2.1" => Ok(Self::V2_1),
            other => Ok(Self::Other(FutureVersion(other.to_owned()))),
        }
    }
}

impl TryFrom<String> for SpecVersion {
    type Error = ParseSpecVersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SpecVersion> for String {
    fn from(value: SpecVersion) -> Self {
        match value {
            SpecVersion::Other(v) => v.0,
            known => known.as_str().to_owned(),
        }
    }
}
