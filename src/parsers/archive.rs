use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::Conversation;

/// Parse one archive file: a JSON array of conversation records.
///
/// The file handle is scoped to this call and closed on every exit path,
/// including parse failure.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or its content is not a JSON
/// array of conversations.
pub fn parse_archive_file(path: &Path) -> Result<Vec<Conversation>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open archive file: {}", path.display()))?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse archive file: {}", path.display()))
}
