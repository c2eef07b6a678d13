// src/recipe/parser.rs

//! Recipe file parsing and linting

use crate::error::{Error, Result};
use crate::recipe::format::Recipe;
use crate::recipe::generator::GeneratorRegistry;
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Unvalidated contents of a recipe file
///
/// Every key is optional. A key may hold a list or a single string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecipeFile {
    #[serde(default, deserialize_with = "string_or_list")]
    pub settings: Vec<String>,

    #[serde(default, deserialize_with = "string_or_list")]
    pub requires: Vec<String>,

    #[serde(default, deserialize_with = "string_or_list")]
    pub tool_requires: Vec<String>,

    #[serde(default, deserialize_with = "string_or_list")]
    pub generators: Vec<String>,
}

impl RecipeFile {
    /// Validate the file contents into a [`Recipe`]
    pub fn into_recipe(self, registry: &GeneratorRegistry) -> Result<Recipe> {
        Recipe::new(
            self.settings,
            self.requires,
            self.tool_requires,
            self.generators,
            registry,
        )
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrList {
    One(String),
    Many(Vec<String>),
}

fn string_or_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrList::deserialize(deserializer)? {
        StringOrList::One(s) => vec![s],
        StringOrList::Many(v) => v,
    })
}

/// Parse and validate a recipe from a TOML string
pub fn parse_recipe(content: &str, registry: &GeneratorRegistry) -> Result<Recipe> {
    let file: RecipeFile =
        toml::from_str(content).map_err(|e| Error::ParseError(format!("Invalid recipe: {}", e)))?;
    file.into_recipe(registry)
}

/// Parse and validate a recipe from a file
pub fn parse_recipe_file(path: &Path, registry: &GeneratorRegistry) -> Result<Recipe> {
    debug!("Reading recipe file: {}", path.display());
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::IoError(format!("Failed to read recipe file: {}", e)))?;

    parse_recipe(&content, registry)
}

/// Check a recipe for suspicious but legal declarations
///
/// Returns human-readable warnings; an empty list means nothing was found.
pub fn validate_recipe(recipe: &Recipe) -> Vec<String> {
    let mut warnings = Vec::new();

    if !recipe.generates_files() {
        warnings.push(
            "No generators selected; no build-integration files will be generated".to_string(),
        );
    }

    let mut seen = HashSet::new();
    for generator in recipe.generators() {
        if !seen.insert(generator.as_str()) {
            warnings.push(format!("Generator {} is listed more than once", generator));
        }
    }

    for (field, reqs) in [
        ("requires", recipe.requirements()),
        ("tool_requires", recipe.tool_requirements()),
    ] {
        let mut seen = HashSet::new();
        for req in reqs {
            if !seen.insert(req.name()) {
                warnings.push(format!(
                    "Package {} is required more than once in {}",
                    req.name(),
                    field
                ));
            }
        }
    }

    let runtime: HashSet<&str> = recipe.requirements().iter().map(|r| r.name()).collect();
    let mut reported = HashSet::new();
    for tool in recipe.tool_requirements() {
        if runtime.contains(tool.name()) && reported.insert(tool.name()) {
            warnings.push(format!(
                "Package {} appears in both requires and tool_requires",
                tool.name()
            ));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONANFILE: &str = r#"
settings = ["os", "compiler", "build_type", "arch"]
requires = ["fmt/11.0.2"]
tool_requires = []
generators = ["CMakeDeps", "CMakeToolchain"]
"#;

    #[test]
    fn test_parse_valid_recipe() {
        let recipe = parse_recipe(CONANFILE, &GeneratorRegistry::builtin()).unwrap();
        assert_eq!(recipe.settings(), ["os", "compiler", "build_type", "arch"]);
        assert_eq!(recipe.requirements()[0].pair(), ("fmt", "11.0.2"));
        assert!(recipe.tool_requirements().is_empty());
        assert_eq!(recipe.generators(), ["CMakeDeps", "CMakeToolchain"]);
    }

    #[test]
    fn test_single_string_values() {
        let content = r#"
settings = "os"
requires = "fmt/11.0.2"
generators = "CMakeDeps"
"#;
        let recipe = parse_recipe(content, &GeneratorRegistry::builtin()).unwrap();
        assert_eq!(recipe.settings(), ["os"]);
        assert_eq!(recipe.requirements().len(), 1);
        assert_eq!(recipe.generators(), ["CMakeDeps"]);
    }

    #[test]
    fn test_missing_tool_requires_same_as_empty() {
        let without = parse_recipe(
            "requires = [\"fmt/11.0.2\"]",
            &GeneratorRegistry::builtin(),
        )
        .unwrap();
        let with_empty = parse_recipe(
            "requires = [\"fmt/11.0.2\"]\ntool_requires = []",
            &GeneratorRegistry::builtin(),
        )
        .unwrap();
        assert_eq!(without, with_empty);
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = parse_recipe("this is not valid toml at all {}", &GeneratorRegistry::builtin())
            .unwrap_err();
        assert!(matches!(err, Error::ParseError(_)));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = parse_recipe("tool_require = [\"cmake/3.30.0\"]", &GeneratorRegistry::builtin())
            .unwrap_err();
        assert!(matches!(err, Error::ParseError(_)));
    }

    #[test]
    fn test_wrong_value_type_rejected() {
        let err = parse_recipe("settings = 42", &GeneratorRegistry::builtin()).unwrap_err();
        assert!(matches!(err, Error::ParseError(_)));
    }

    #[test]
    fn test_validation_errors_pass_through() {
        let registry = GeneratorRegistry::from_names(["CMakeDeps", "CMakeToolchain"]);
        assert!(matches!(
            parse_recipe("requires = [\"fmt\"]", &registry),
            Err(Error::MalformedRequirement { .. })
        ));
        assert!(matches!(
            parse_recipe("settings = [\"os\", \"os\"]", &registry),
            Err(Error::DuplicateSetting(_))
        ));
        assert!(matches!(
            parse_recipe("generators = [\"MakeGen\"]", &registry),
            Err(Error::UnknownGenerator(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = parse_recipe_file(
            Path::new("/nonexistent/recipe.toml"),
            &GeneratorRegistry::builtin(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::IoError(_)));
    }

    #[test]
    fn test_validate_clean_recipe() {
        let recipe = parse_recipe(CONANFILE, &GeneratorRegistry::builtin()).unwrap();
        assert!(validate_recipe(&recipe).is_empty());
    }

    #[test]
    fn test_validate_warnings() {
        let content = r#"
requires = ["fmt/11.0.2", "fmt/10.2.1", "cmake/3.30.0"]
tool_requires = ["cmake/3.30.0", "ninja/1.12.1", "ninja/1.11.0"]
"#;
        let recipe = parse_recipe(content, &GeneratorRegistry::builtin()).unwrap();
        let warnings = validate_recipe(&recipe);
        assert_eq!(warnings.len(), 4);
        assert!(warnings.iter().any(|w| w.contains("No generators")));
        assert!(
            warnings
                .iter()
                .any(|w| w.contains("fmt") && w.contains("more than once in requires"))
        );
        assert!(warnings.iter().any(|w| w.contains("ninja") && w.contains("tool_requires")));
        assert!(warnings.iter().any(|w| w.contains("cmake") && w.contains("both")));
    }

    #[test]
    fn test_validate_duplicate_generator() {
        let recipe = parse_recipe(
            "generators = [\"CMakeDeps\", \"CMakeDeps\"]",
            &GeneratorRegistry::builtin(),
        )
        .unwrap();
        let warnings = validate_recipe(&recipe);
        assert_eq!(warnings, vec!["Generator CMakeDeps is listed more than once".to_string()]);
    }
}
