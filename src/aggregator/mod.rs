//! Aggregation of word and phrase counts across archive files.
//!
//! # Error Handling Strategy
//!
//! Aggregation is all-or-nothing: the first archive that cannot be read or
//! parsed aborts the run with the file path attached via `anyhow::Context`.
//! Missing or unexpected fields inside a conversation are not errors; they
//! simply contribute no text. Progress is reported per file on stderr.

use std::path::PathBuf;

use anyhow::Result;

use crate::models::ConversationStats;
use crate::parsers::parse_archive_file;
use crate::transcript::conversation_messages;

/// Parse every archive, reconstruct each conversation's transcript, and
/// accumulate the total word count plus per-phrase occurrence counts.
///
/// Files are processed sequentially in the given order; each is opened, fully
/// read, and closed before the next one.
///
/// # Errors
///
/// Returns an error if any archive cannot be read or is not a JSON array of
/// conversations. The run stops at the first bad file.
pub fn aggregate_archives(files: &[PathBuf], phrases: &[String]) -> Result<ConversationStats> {
    let mut stats = ConversationStats::new(phrases);

    for file in files {
        eprintln!("Processing file: {}", file.display());
        let conversations = parse_archive_file(file)?;
        for conversation in &conversations {
            for message in conversation_messages(conversation) {
                stats.add_text(&message.text);
            }
        }
    }

    Ok(stats)
}
