// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            recipe,
            generators,
            strict,
        } => commands::cmd_check(&recipe, &generators, strict),
        Commands::Show {
            recipe,
            generators,
            json,
        } => commands::cmd_show(&recipe, &generators, json),
        Commands::Generators => commands::cmd_generators(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check_with_generators() {
        let cli = Cli::try_parse_from([
            "recipekit",
            "check",
            "conanfile.toml",
            "-g",
            "MakeGen",
            "--generator",
            "Premake",
            "--strict",
        ])
        .unwrap();
        match cli.command {
            Commands::Check {
                recipe,
                generators,
                strict,
            } => {
                assert_eq!(recipe, "conanfile.toml");
                assert_eq!(generators, vec!["MakeGen", "Premake"]);
                assert!(strict);
            }
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["recipekit", "show", "r.toml", "-v", "--json"]).unwrap();
        assert!(cli.verbose);
    }
}
