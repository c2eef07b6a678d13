// src/recipe/format.rs

//! The validated recipe descriptor
//!
//! A [`Recipe`] is built once per package definition and only read after
//! that. Construction validates every field; either the whole recipe is
//! returned or the first problem found is reported, checking settings,
//! requires, tool_requires and generators in that order.

use crate::error::{Error, Result};
use crate::recipe::generator::GeneratorRegistry;
use crate::recipe::requirement::Requirement;
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// A package's build-variance axes, dependencies and generator selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    settings: Vec<String>,
    requires: Vec<Requirement>,
    tool_requires: Vec<Requirement>,
    generators: Vec<String>,
}

impl Recipe {
    /// Build and validate a recipe
    ///
    /// # Arguments
    /// * `settings` - Setting-axis names, e.g. `os`, `compiler`. Must be unique.
    /// * `requires` - Runtime/link requirements as `name/version`
    /// * `tool_requires` - Build-time-only requirements as `name/version`
    /// * `generators` - Generator names, each known to `registry`
    /// * `registry` - The generator vocabulary to validate against
    ///
    /// An empty `generators` list is accepted; the engine then generates nothing.
    /// Generators are kept exactly as given, including repeated names;
    /// [`validate_recipe`](crate::recipe::validate_recipe) reports repeats as warnings.
    pub fn new<S, R, T, G>(
        settings: S,
        requires: R,
        tool_requires: T,
        generators: G,
        registry: &GeneratorRegistry,
    ) -> Result<Self>
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: AsRef<str>,
        T: IntoIterator,
        T::Item: AsRef<str>,
        G: IntoIterator,
        G::Item: AsRef<str>,
    {
        let settings = collect_settings(settings)?;
        let requires = collect_requirements(requires)?;
        let tool_requires = collect_requirements(tool_requires)?;
        let generators = collect_generators(generators, registry)?;

        debug!(
            "Recipe: {} settings, {} requires, {} tool_requires, {} generators",
            settings.len(),
            requires.len(),
            tool_requires.len(),
            generators.len()
        );

        Ok(Self {
            settings,
            requires,
            tool_requires,
            generators,
        })
    }

    /// Setting axes the engine resolves per build variant, in declaration order
    pub fn settings(&self) -> &[String] {
        &self.settings
    }

    /// Runtime/link requirements, in declaration order
    pub fn requirements(&self) -> &[Requirement] {
        &self.requires
    }

    /// Build-time-only requirements, in declaration order
    ///
    /// Not linked into the package and not propagated to its consumers.
    pub fn tool_requirements(&self) -> &[Requirement] {
        &self.tool_requires
    }

    /// Selected generators, in declaration order
    pub fn generators(&self) -> &[String] {
        &self.generators
    }

    /// Check if the recipe declares the given setting axis
    pub fn has_setting(&self, name: &str) -> bool {
        self.settings.iter().any(|s| s == name)
    }

    /// Check if any build-integration files will be generated
    pub fn generates_files(&self) -> bool {
        !self.generators.is_empty()
    }
}

fn collect_settings<S>(settings: S) -> Result<Vec<String>>
where
    S: IntoIterator,
    S::Item: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for setting in settings {
        let setting = setting.as_ref();
        if !seen.insert(setting.to_string()) {
            return Err(Error::DuplicateSetting(setting.to_string()));
        }
        out.push(setting.to_string());
    }
    Ok(out)
}

fn collect_requirements<R>(requires: R) -> Result<Vec<Requirement>>
where
    R: IntoIterator,
    R::Item: AsRef<str>,
{
    requires
        .into_iter()
        .map(|r| Requirement::parse(r.as_ref()))
        .collect()
}

fn collect_generators<G>(generators: G, registry: &GeneratorRegistry) -> Result<Vec<String>>
where
    G: IntoIterator,
    G::Item: AsRef<str>,
{
    generators
        .into_iter()
        .map(|g| {
            let g = g.as_ref();
            if registry.contains(g) {
                Ok(g.to_string())
            } else {
                Err(Error::UnknownGenerator(g.to_string()))
            }
        })
        .collect()
}
