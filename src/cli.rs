use clap::Parser;
use std::path::PathBuf;

use crate::config::{DEFAULT_CONFIG_FILE, Options};

#[derive(Parser, Debug)]
#[command(name = "tree-export")]
#[command(about = "Print a directory tree as ASCII art", long_about = None)]
#[command(after_help = "Examples:
  tree-export
  tree-export --include-files --max-depth 2
  tree-export --exclude-dirs \"node_modules,.git\" /path/to/project
  tree-export --no-config --include-files")]
pub struct Cli {
    /// Root path to print (defaults to current directory)
    pub path: Option<PathBuf>,

    /// Include files in the output (default: from config, or directories only)
    #[arg(short = 'f', long)]
    pub include_files: bool,

    /// Show only directories, overriding the config and --include-files
    #[arg(long)]
    pub no_include_files: bool,

    /// Maximum depth to descend (0 renders only the root's children)
    #[arg(short = 'd', long, value_name = "N")]
    pub max_depth: Option<u32>,

    /// Comma-separated directory-name globs to exclude
    #[arg(short = 'D', long, value_name = "PATTERNS")]
    pub exclude_dirs: Option<String>,

    /// Comma-separated file-name globs to exclude
    #[arg(short = 'X', long, value_name = "PATTERNS")]
    pub exclude_files: Option<String>,

    /// Path to a custom config file
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Ignore any config file entirely
    #[arg(long)]
    pub no_config: bool,
}

impl Cli {
    /// Resolve where the config loader should look. `None` is the skip
    /// sentinel produced by `--no-config`.
    pub fn config_path(&self) -> Option<PathBuf> {
        if self.no_config {
            return None;
        }
        Some(
            self.config
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE)),
        )
    }

    /// Overlay CLI flags onto the loaded options. An absent flag leaves the
    /// config value untouched; `--max-depth 0` survives as an explicit zero.
    pub fn merge_options(&self, mut options: Options) -> Options {
        if self.no_include_files {
            options.include_files = false;
        } else if self.include_files {
            options.include_files = true;
        }

        if let Some(depth) = self.max_depth {
            options.max_depth = Some(depth);
        }

        if let Some(raw) = &self.exclude_dirs {
            options.exclude_dirs = split_patterns(raw);
        }

        if let Some(raw) = &self.exclude_files {
            options.exclude_files = split_patterns(raw);
        }

        options
    }
}

fn split_patterns(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|pattern| !pattern.is_empty())
        .map(str::to_owned)
        .collect()
}
