use anyhow::Result;

fn main() -> Result<()> {
    conversation_stats::cli::run()
}
