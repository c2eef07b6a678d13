// build.rs

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: recipe file path
fn recipe_arg() -> Arg {
    Arg::new("recipe")
        .required(true)
        .value_name("RECIPE")
        .help("Path to the recipe file")
}

/// Common argument: extra generator names
fn generator_arg() -> Arg {
    Arg::new("generator")
        .short('g')
        .long("generator")
        .value_name("NAME")
        .action(ArgAction::Append)
        .help("Accept an extra generator name besides the builtin ones")
}

fn build_cli() -> Command {
    Command::new("recipekit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Load and validate package recipe descriptors")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .subcommand(
            Command::new("check")
                .about("Validate a recipe file and report warnings")
                .arg(recipe_arg())
                .arg(generator_arg())
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .action(ArgAction::SetTrue)
                        .help("Treat warnings as errors"),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("Print a validated recipe")
                .arg(recipe_arg())
                .arg(generator_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(Command::new("generators").about("List the builtin generators"))
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    if let Err(e) = fs::write(man_dir.join("recipekit.1"), buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
