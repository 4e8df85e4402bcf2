pub mod cli;
pub mod config;
pub mod core;
pub mod fs;
pub mod models;

use anyhow::{Context, Result};
use std::env;

use self::cli::Cli;
use self::config::load_config;
use self::core::render_tree;
use self::fs::RealFileSystem;

/// Resolve options, render, and print. Traversal errors propagate to the
/// caller untouched; the process shell turns them into a diagnostic.
pub fn run(args: Cli) -> Result<()> {
    let config_path = args.config_path();
    let options = args.merge_options(load_config(config_path.as_deref()));
    log::debug!("resolved options: {options:?}");

    let root = match &args.path {
        Some(path) => path.clone(),
        None => env::current_dir().context("failed to get current directory")?,
    };

    let tree = render_tree(&RealFileSystem, &root, &options)?;

    // The root is always labeled "."; the print call supplies the final
    // trailing newline.
    println!(".\n{tree}");

    Ok(())
}
