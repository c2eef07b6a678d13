// src/commands/check.rs

//! Check command - validate a recipe descriptor

use super::load_recipe;
use anyhow::{bail, Result};
use recipekit::validate_recipe;
use tracing::debug;

/// Validate a recipe file
///
/// # Arguments
/// * `recipe_path` - Path to the recipe file
/// * `generators` - Extra generator names to accept
/// * `strict` - Fail if any warnings are reported
pub fn cmd_check(recipe_path: &str, generators: &[String], strict: bool) -> Result<()> {
    let recipe = load_recipe(recipe_path, generators)?;
    let warnings = validate_recipe(&recipe);

    debug!("{} warning(s) in {}", warnings.len(), recipe_path);
    for warning in &warnings {
        println!("Warning: {}", warning);
    }

    if warnings.is_empty() {
        println!("[OK] No issues found");
    } else if strict {
        bail!("{} warning(s) in {}", warnings.len(), recipe_path);
    } else {
        println!("[OK] {} warning(s)", warnings.len());
    }

    Ok(())
}
