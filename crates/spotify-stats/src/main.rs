mod bootstrap;

use anyhow::Result;
use clap::Parser;
use history_core::models::Attribute;
use history_core::settings::Settings;
use history_data::aggregator::HistoryAggregator;
use history_data::loader::{find_json_files, load_history};
use history_report::chart::{render_bar_chart, ChartConfig};
use history_report::summary::{render_debug_report, render_summary};

fn main() -> Result<()> {
    let settings = Settings::parse();
    bootstrap::setup_logging(settings.effective_log_level())?;

    tracing::info!("spotify-stats v{} starting", env!("CARGO_PKG_VERSION"));

    let files = find_json_files(&settings.data_dir);
    if files.is_empty() {
        println!("No JSON files found in {}.", settings.data_dir.display());
        return Ok(());
    }
    tracing::info!(
        "Found {} history files in {}",
        files.len(),
        settings.data_dir.display()
    );

    let config = settings.loader_config();
    let outcome = load_history(&files, &config);

    if !outcome.failed_files.is_empty() {
        tracing::warn!(
            "{} of {} files could not be processed",
            outcome.failed_files.len(),
            files.len()
        );
    }

    if settings.debug {
        print!("{}", render_debug_report(&outcome, files.len()));
        return Ok(());
    }

    print!("{}", render_summary(&outcome.records, settings.top_n));

    let chart_config = ChartConfig {
        max_bar_width: settings.chart_width,
        ..Default::default()
    };
    for attribute in [Attribute::Artist, Attribute::Track] {
        let top =
            HistoryAggregator::top_entities(&outcome.records, attribute, settings.chart_entries);
        let title = format!("Top {} {}", settings.chart_entries, attribute.label());
        println!();
        print!("{}", render_bar_chart(&title, &top, &chart_config));
    }

    Ok(())
}
