use std::path::Path;

use anyhow::Result;
use clap::Parser;

use crate::aggregator::aggregate_archives;
use crate::chart::render_chart;
use crate::locator::{ARCHIVE_FILE_NAME, find_archives};
use crate::models::ConversationStats;

/// Fixed output path for the rendered chart, relative to the working directory.
pub const OUTPUT_FILE_NAME: &str = "conversation_stats.png";

#[derive(Parser)]
#[command(name = "conversation-stats")]
#[command(version = "0.1.0")]
#[command(about = "Process conversations.json archives and chart word and phrase statistics", long_about = None)]
pub struct Cli {
    /// Words or phrases to count across all transcripts, e.g. "hello world"
    #[arg(required = true)]
    pub phrases: Vec<String>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let archives = find_archives(Path::new("."))?;
    if archives.is_empty() {
        println!("No `{}` files found.", ARCHIVE_FILE_NAME);
        return Ok(());
    }

    let stats = aggregate_archives(&archives, &cli.phrases)?;
    print_summary(&stats);

    render_chart(&stats, Path::new(OUTPUT_FILE_NAME))?;
    println!("Visualization saved as {}", OUTPUT_FILE_NAME);

    Ok(())
}

fn print_summary(stats: &ConversationStats) {
    println!("Conversation Statistics");
    println!("========================");
    println!("Total word count: {}", stats.total_word_count);
    for entry in &stats.phrase_counts {
        println!("  {}: {}", entry.phrase, entry.count);
    }
}
