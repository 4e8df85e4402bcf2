use anyhow::{Context, Result};
use std::path::Path;

use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(dir)
            .with_context(|| format!("failed to read directory {}", dir.display()))?
        {
            let entry =
                entry.with_context(|| format!("failed to read entry in {}", dir.display()))?;
            // file_type() does not follow symlinks, so a link to a directory
            // is reported as EntryKind::Symlink.
            let file_type = entry.file_type().with_context(|| {
                format!("failed to determine type of {}", entry.path().display())
            })?;

            entries.push(FsEntry {
                path: entry.path(),
                name: entry.file_name().to_string_lossy().into_owned(),
                kind: EntryKind::from_file_type(file_type),
            });
        }
        Ok(entries)
    }
}
