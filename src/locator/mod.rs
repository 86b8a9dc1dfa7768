//! Archive discovery.

use std::path::{Path, PathBuf};

use anyhow::Result;
use walkdir::WalkDir;

/// Exact file name every conversation archive carries.
pub const ARCHIVE_FILE_NAME: &str = "conversations.json";

/// Find every `conversations.json` file under `root`, recursively.
///
/// Returns an empty Vec when nothing matches. Paths are sorted for a stable
/// processing order.
///
/// # Errors
///
/// Propagates the underlying filesystem error if the root or any directory
/// under it cannot be read.
pub fn find_archives(root: &Path) -> Result<Vec<PathBuf>> {
    let mut archives = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if entry.file_type().is_file() && entry.file_name() == ARCHIVE_FILE_NAME {
            archives.push(entry.path().to_path_buf());
        }
    }

    archives.sort();
    Ok(archives)
}
