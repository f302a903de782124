use std::{env, path::PathBuf};

use clap::Parser;

mod mask_generator;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

// ----------------------------------------------------------------------------
// Command-line Interface

#[derive(Debug, Parser)]
enum Cli {
    /// Generate efuse mask tables from vendor mask dumps
    GenerateMaskTables(mask_generator::GenerateMaskTablesArgs),
}

// ----------------------------------------------------------------------------
// Application

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_module("xtask", log::LevelFilter::Info)
        .init();

    // Determine the path to the workspace (i.e. the root of the repository).
    // Fall back to the current working directory when the compile-time
    // location no longer exists.
    let workspace_from_build = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(PathBuf::from)
        .ok_or("`CARGO_MANIFEST_DIR` has no parent")?;

    let workspace = if workspace_from_build.exists() {
        workspace_from_build.canonicalize()?
    } else {
        env::current_dir()?.canonicalize()?
    };

    match Cli::parse() {
        Cli::GenerateMaskTables(args) => mask_generator::generate_mask_tables(&workspace, args),
    }
}
