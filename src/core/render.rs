use std::path::Path;

use anyhow::Result;

use crate::config::Options;
use crate::core::patterns::{CompiledPatterns, NameMatcher};
use crate::fs::FileSystem;
use crate::models::FsEntry;

/// Public entry point: compiles the exclusion patterns once and starts the
/// traversal at depth 0 with an empty indent.
pub fn render_tree<F: FileSystem>(fs: &F, root: &Path, options: &Options) -> Result<String> {
    let exclude_dirs = CompiledPatterns::new(&options.exclude_dirs)?;
    let exclude_files = CompiledPatterns::new(&options.exclude_files)?;

    render(fs, root, options, &exclude_dirs, &exclude_files, "", 0)
}

/// Recursively render the children of `dir`, one line per surviving entry,
/// in the order the filesystem enumerates them. An enumeration failure
/// anywhere in the subtree aborts the whole render.
pub fn render<F: FileSystem>(
    fs: &F,
    dir: &Path,
    options: &Options,
    exclude_dirs: &dyn NameMatcher,
    exclude_files: &dyn NameMatcher,
    indent: &str,
    depth: u32,
) -> Result<String> {
    let visible: Vec<FsEntry> = fs
        .read_dir(dir)?
        .into_iter()
        .filter(|entry| {
            if entry.kind.is_directory() {
                return !exclude_dirs.matches(&entry.name);
            }
            // Symlinks and special files follow the file policy and are
            // never descended into.
            options.include_files && !exclude_files.matches(&entry.name)
        })
        .collect();

    let mut rendered = String::new();
    for (index, entry) in visible.iter().enumerate() {
        let is_last = index + 1 == visible.len();
        let connector = if is_last { "└── " } else { "├── " };

        rendered.push_str(indent);
        rendered.push_str(connector);
        rendered.push_str(&entry.name);
        rendered.push('\n');

        if entry.kind.is_directory() {
            // max_depth 0 still lists root's children; the depth check only
            // gates descending further.
            let should_recurse = match options.max_depth {
                Some(max) => depth < max,
                None => true,
            };

            if should_recurse {
                let child_indent = if is_last {
                    format!("{indent}    ")
                } else {
                    format!("{indent}│   ")
                };
                let subtree = render(
                    fs,
                    &entry.path,
                    options,
                    exclude_dirs,
                    exclude_files,
                    &child_indent,
                    depth + 1,
                )?;
                rendered.push_str(&subtree);
            }
        }
    }

    Ok(rendered)
}
