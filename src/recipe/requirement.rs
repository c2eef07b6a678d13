// src/recipe/requirement.rs

//! Package requirement references
//!
//! A requirement names another package and the version wanted, written as
//! `name/version`:
//!
//! - `fmt/11.0.2`
//! - `zlib/1.3.1`
//! - `openssl/3.2.0@acme/stable` (everything after the first `/` is the version)
//!
//! The version is kept verbatim. Ranges, revisions and user/channel suffixes
//! mean something only to the resolver, so nothing here compares or orders
//! versions.

use crate::error::{Error, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A dependency on another package, as a `(name, version)` pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Requirement {
    name: String,
    version: String,
}

impl Requirement {
    /// Parse a requirement from `name/version`
    ///
    /// Splits on the first `/` only.
    pub fn parse(s: &str) -> Result<Self> {
        let (name, version) = s.split_once('/').ok_or_else(|| Error::MalformedRequirement {
            requirement: s.to_string(),
            reason: "missing '/' separator",
        })?;

        if name.is_empty() {
            return Err(Error::MalformedRequirement {
                requirement: s.to_string(),
                reason: "empty package name",
            });
        }
        if version.is_empty() {
            return Err(Error::MalformedRequirement {
                requirement: s.to_string(),
                reason: "empty version",
            });
        }

        Ok(Self {
            name: name.to_string(),
            version: version.to_string(),
        })
    }

    /// Package name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Version or reference specifier, verbatim
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The requirement as a `(name, version)` pair
    pub fn pair(&self) -> (&str, &str) {
        (&self.name, &self.version)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.version)
    }
}

impl FromStr for Requirement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Requirement::parse(s)
    }
}

impl Serialize for Requirement {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
