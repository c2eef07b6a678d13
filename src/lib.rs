// src/lib.rs

//! recipekit
//!
//! Validated recipe descriptors for a package-management engine.
//!
//! # Architecture
//!
//! - Recipes are immutable once built; every field is checked at construction
//! - Requirements are kept as opaque `name/version` pairs for the resolver
//! - The generator vocabulary is an explicit registry, not a global lookup

mod error;
pub mod recipe;

pub use error::{Error, Result};
pub use recipe::{
    parse_recipe, parse_recipe_file, validate_recipe, BuiltinGenerator, GeneratorRegistry, Recipe,
    Requirement,
};
