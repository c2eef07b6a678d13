// src/error.rs

//! Error types for recipe construction and loading

use thiserror::Error;

/// Errors produced while building or loading a recipe
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Requirement string is not of the form `name/version`
    #[error("Malformed requirement '{requirement}': {reason}")]
    MalformedRequirement {
        requirement: String,
        reason: &'static str,
    },

    /// Setting axis declared more than once
    #[error("Duplicate setting: {0}")]
    DuplicateSetting(String),

    /// Generator name outside the known vocabulary
    #[error("Unknown generator: {0}")]
    UnknownGenerator(String),

    /// Recipe file content could not be parsed
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Recipe file could not be read
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
