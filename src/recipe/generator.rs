// src/recipe/generator.rs

//! Generator vocabulary
//!
//! A generator selects a build-integration file the engine synthesizes for a
//! package (a dependency-list file, a toolchain file, an environment script).
//! Which names are valid depends on the engine doing the synthesis, so the
//! vocabulary is passed to validation explicitly as a [`GeneratorRegistry`].

use std::collections::BTreeSet;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Generators shipped with a stock engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, EnumIter, AsRefStr)]
pub enum BuiltinGenerator {
    /// Per-dependency `find_package()` config files
    CMakeDeps,
    /// `conan_toolchain.cmake` with compiler and settings
    CMakeToolchain,
    MesonToolchain,
    /// `.pc` files for pkg-config
    PkgConfigDeps,
    AutotoolsDeps,
    AutotoolsToolchain,
    MSBuildDeps,
    MSBuildToolchain,
    BazelDeps,
    BazelToolchain,
    XcodeDeps,
    XcodeToolchain,
    /// Environment script exposing tool requirements on PATH
    VirtualBuildEnv,
    /// Environment script for running against runtime requirements
    VirtualRunEnv,
}

impl BuiltinGenerator {
    /// Get the generator name as written in a recipe
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }
}

/// The set of generator names an engine recognizes
///
/// Lookups are exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorRegistry {
    names: BTreeSet<String>,
}

impl GeneratorRegistry {
    /// A registry that knows no generators
    pub fn empty() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    /// A registry holding every [`BuiltinGenerator`]
    pub fn builtin() -> Self {
        Self::from_names(BuiltinGenerator::iter().map(|g| g.to_string()))
    }

    /// A registry holding exactly the given names
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Add a generator name, e.g. a custom generator installed in the engine
    pub fn with_generator(mut self, name: impl Into<String>) -> Self {
        self.names.insert(name.into());
        self
    }

    /// Check whether `name` is known
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// All known names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
