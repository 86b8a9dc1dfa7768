//! Bar-chart rendering of the aggregate counts.

use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;

use crate::models::ConversationStats;

const CHART_WIDTH: u32 = 1200;
const CHART_HEIGHT: u32 = 800;

const BAR_COLOR: RGBColor = RGBColor(128, 0, 128);

/// Render the phrase counts as a horizontal bar chart PNG at `output`.
///
/// One bar per phrase in table order (bottom to top), bar length equal to the
/// occurrence count, the count annotated at the end of each bar, and the total
/// word count in the caption. Overwrites `output` if it already exists.
pub fn render_chart(stats: &ConversationStats, output: &Path) -> Result<()> {
    let root = BitMapBackend::new(output, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).context("Failed to fill chart background")?;

    let max_count = stats.phrase_counts.iter().map(|p| p.count).max().unwrap_or(0).max(1);
    let rows = stats.phrase_counts.len().max(1);
    // Headroom past the longest bar so its end label stays inside the plot.
    let x_end = max_count + max_count / 5 + 1;

    let caption =
        format!("Conversation Statistics - Total Word Count: {}", stats.total_word_count);
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 32))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(200)
        .build_cartesian_2d(0u64..x_end, (0..rows).into_segmented())
        .context("Failed to build chart axes")?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc("Frequency")
        .y_desc("Phrases")
        .axis_desc_style(("sans-serif", 22))
        .label_style(("sans-serif", 18))
        .y_label_formatter(&|position| match position {
            SegmentValue::CenterOf(index) => stats
                .phrase_counts
                .get(*index)
                .map(|entry| entry.phrase.clone())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .draw()
        .context("Failed to draw chart mesh")?;

    chart
        .draw_series(stats.phrase_counts.iter().enumerate().map(|(index, entry)| {
            let mut bar = Rectangle::new(
                [(0, SegmentValue::Exact(index)), (entry.count, SegmentValue::Exact(index + 1))],
                BAR_COLOR.filled(),
            );
            bar.set_margin(12, 12, 0, 0);
            bar
        }))
        .context("Failed to draw bars")?;

    // Numeric label just past the end of each bar
    chart
        .draw_series(stats.phrase_counts.iter().enumerate().map(|(index, entry)| {
            Text::new(
                format!(" {}", entry.count),
                (entry.count, SegmentValue::CenterOf(index)),
                ("sans-serif", 20).into_font(),
            )
        }))
        .context("Failed to draw bar labels")?;

    root.present().with_context(|| format!("Failed to write chart to {}", output.display()))?;
    Ok(())
}
