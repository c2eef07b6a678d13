// src/commands/show.rs

//! Show command - print a validated recipe

use super::load_recipe;
use anyhow::Result;

/// Print a validated recipe
pub fn cmd_show(recipe_path: &str, generators: &[String], json: bool) -> Result<()> {
    let recipe = load_recipe(recipe_path, generators)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&recipe)?);
        return Ok(());
    }

    println!("Settings: {}", recipe.settings().join(", "));
    println!("Requires:");
    for req in recipe.requirements() {
        println!("  {} {}", req.name(), req.version());
    }
    println!("Tool requires:");
    for req in recipe.tool_requirements() {
        println!("  {} {}", req.name(), req.version());
    }
    println!("Generators: {}", recipe.generators().join(", "));

    Ok(())
}
