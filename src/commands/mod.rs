// src/commands/mod.rs
//! Command handlers for the recipekit CLI

mod check;
mod generators;
mod show;

pub use check::cmd_check;
pub use generators::cmd_generators;
pub use show::cmd_show;

use anyhow::{Context, Result};
use recipekit::{parse_recipe_file, GeneratorRegistry, Recipe};
use std::path::Path;
use tracing::info;

/// Builtin generator vocabulary extended with names given on the command line
fn registry_with(extra: &[String]) -> GeneratorRegistry {
    extra
        .iter()
        .fold(GeneratorRegistry::builtin(), |registry, name| {
            registry.with_generator(name.as_str())
        })
}

/// Load and validate a recipe file against the extended vocabulary
fn load_recipe(recipe_path: &str, generators: &[String]) -> Result<Recipe> {
    let path = Path::new(recipe_path);
    let registry = registry_with(generators);
    info!("Loading recipe: {}", path.display());

    parse_recipe_file(path, &registry)
        .with_context(|| format!("Failed to load recipe: {}", path.display()))
}
