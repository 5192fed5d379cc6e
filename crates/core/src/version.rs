use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::VersionParseError;

/// `(major, minor)` comparison key of a dotted CMake version.
///
/// Only the first two components take part in ordering; `3.10.2` and `3.10`
/// compare equal. A version without a minor component gets an implicit `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    #[must_use]
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parse the first two components of `version`.
    ///
    /// # Errors
    /// Returns error if the major or minor component is not an unsigned integer.
    pub fn parse(version: &str) -> Result<Self, VersionParseError> {
        let version = version.trim();
        let mut components = version.split('.');
        let major = parse_component(version, components.next())?;
        let minor = match components.next() {
            Some(minor) => parse_component(version, Some(minor))?,
            None => 0,
        };
        Ok(Self { major, minor })
    }

    /// Whether a directive declaring `self` falls below `threshold`.
    #[must_use]
    pub fn needs_update(&self, threshold: &Self) -> bool {
        self < threshold
    }
}

fn parse_component(version: &str, component: Option<&str>) -> Result<u32, VersionParseError> {
    let component = component.unwrap_or_default();
    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VersionParseError::new(version, component));
    }
    component
        .parse()
        .map_err(|_| VersionParseError::new(version, component))
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// The configured minimum version: its original text, written into rewritten directives,
/// and its comparison key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Threshold {
    text: String,
    version: Version,
}

impl Threshold {
    /// # Errors
    /// Returns error if any component of `text` is not an unsigned integer.
    pub fn parse(text: &str) -> Result<Self, VersionParseError> {
        let text = text.trim();
        if let Some(bad) = text
            .split('.')
            .find(|c| c.is_empty() || !c.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(VersionParseError::new(text, bad));
        }
        Ok(Self {
            text: text.to_string(),
            version: Version::parse(text)?,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn version(&self) -> &Version {
        &self.version
    }
}

/// Compare two version strings on their `(major, minor)` keys.
///
/// # Errors
/// Returns error if either string fails to parse.
pub fn needs_update(version: &str, threshold: &str) -> Result<bool, VersionParseError> {
    Ok(Version::parse(version)?.needs_update(&Version::parse(threshold)?))
}
