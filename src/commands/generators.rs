// src/commands/generators.rs

//! Generators command - list the builtin vocabulary

use anyhow::Result;
use recipekit::BuiltinGenerator;
use strum::IntoEnumIterator;

/// List the builtin generators
pub fn cmd_generators() -> Result<()> {
    for generator in BuiltinGenerator::iter() {
        println!("{}", generator);
    }
    Ok(())
}
