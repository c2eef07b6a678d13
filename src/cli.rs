// src/cli.rs
//! CLI definitions for recipekit
//!
//! The command implementations are in the `commands` module.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "recipekit")]
#[command(version)]
#[command(about = "Load and validate package recipe descriptors", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a recipe file and report warnings
    Check {
        /// Path to the recipe file
        recipe: String,

        /// Accept an extra generator name besides the builtin ones
        #[arg(short, long = "generator", value_name = "NAME")]
        generators: Vec<String>,

        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },

    /// Print a validated recipe
    Show {
        /// Path to the recipe file
        recipe: String,

        /// Accept an extra generator name besides the builtin ones
        #[arg(short, long = "generator", value_name = "NAME")]
        generators: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the builtin generators
    Generators,
}
