// src/recipe/mod.rs

//! Recipe descriptors for package builds
//!
//! A recipe tells the package-management engine three things about a package:
//! - Which setting axes its binaries vary over (`os`, `compiler`, `build_type`, `arch`)
//! - What it depends on, split into runtime/link `requires` and build-time-only
//!   `tool_requires`
//! - Which generators should produce build-integration files for it
//!
//! Resolution, caching and file generation happen in the engine. This module
//! only loads and validates the descriptor.
//!
//! # Example Recipe
//!
//! ```toml
//! settings = ["os", "compiler", "build_type", "arch"]
//! requires = ["fmt/11.0.2"]
//! tool_requires = []
//! generators = ["CMakeDeps", "CMakeToolchain"]
//! ```

mod format;
pub mod generator;
pub mod parser;
mod requirement;

pub use format::Recipe;
pub use generator::{BuiltinGenerator, GeneratorRegistry};
pub use parser::{parse_recipe, parse_recipe_file, validate_recipe, RecipeFile};
pub use requirement::Requirement;
