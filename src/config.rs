use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Config file looked up in the working directory when no `--config` or
/// `--no-config` flag is given.
pub const DEFAULT_CONFIG_FILE: &str = "tree-export.json";

/// Resolved rendering options, immutable for the duration of one render.
///
/// `max_depth` distinguishes `Some(0)` (render one level) from `None`
/// (unlimited); the two must never collapse into each other.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    pub exclude_dirs: Vec<String>,
    pub exclude_files: Vec<String>,
    pub include_files: bool,
    pub max_depth: Option<u32>,
}

/// Load options from a JSON config file. `None` means the config file is
/// skipped entirely. A missing, unreadable, or malformed file degrades to
/// the defaults without surfacing anything to the user.
pub fn load_config(path: Option<&Path>) -> Options {
    let Some(path) = path else {
        return Options::default();
    };

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            log::debug!("no config at {}: {err}", path.display());
            return Options::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(options) => options,
        Err(err) => {
            log::debug!("ignoring malformed config {}: {err}", path.display());
            Options::default()
        }
    }
}
