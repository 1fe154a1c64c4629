//! Text summary and debug report rendering.

use history_core::formatting::{format_hours, format_number, format_plays};
use history_core::models::{Attribute, PlayRecord};
use history_data::aggregator::HistoryAggregator;
use history_data::loader::LoadOutcome;

/// How many records the debug report previews.
const PREVIEW_LEN: usize = 5;

/// How many entries the debug report shows per top list.
const DEBUG_TOP_N: usize = 5;

/// Render the standard text summary: headline totals followed by the Top-N
/// artist, track, and album lists.
pub fn render_summary(records: &[PlayRecord], top_n: usize) -> String {
    let summary = HistoryAggregator::summarize(records);

    let mut out = String::new();
    out.push_str(&format!("Total Tracks Played: {}\n", summary.total_tracks));
    out.push_str(&format!(
        "Total Playback Time: {}\n",
        format_hours(summary.total_playback_hours)
    ));
    out.push_str(&format!("Skipped Tracks: {}\n", summary.skipped_count));

    for attribute in [Attribute::Artist, Attribute::Track, Attribute::Album] {
        out.push('\n');
        out.push_str(&render_top_list(records, attribute, top_n));
    }

    out
}

/// Render the debug report: loader counters, headline totals, Top-5 lists,
/// and a preview of the first few records.
pub fn render_debug_report(outcome: &LoadOutcome, files_scanned: usize) -> String {
    let records = &outcome.records;
    let summary = HistoryAggregator::summarize(records);

    let mut out = String::new();
    out.push_str(&format!(
        "Files Processed: {}\n",
        files_scanned - outcome.failed_files.len()
    ));
    out.push_str(&format!("Failed Files: {}\n", outcome.failed_files.len()));
    out.push_str(&format!("Invalid Entries: {}\n", outcome.invalid_entries));
    out.push_str(&format!("Bad Timestamps: {}\n", outcome.bad_timestamps));
    out.push_str(&format!(
        "Total Tracks Extracted: {}\n",
        summary.total_tracks
    ));
    out.push_str(&format!(
        "Total Playback Time: {}\n",
        format_hours(summary.total_playback_hours)
    ));
    out.push_str(&format!("Skipped Tracks: {}\n", summary.skipped_count));

    for attribute in [Attribute::Artist, Attribute::Track, Attribute::Album] {
        out.push('\n');
        out.push_str(&render_top_list(records, attribute, DEBUG_TOP_N));
    }

    out.push_str(&format!("\nData Preview (first {} records):\n", PREVIEW_LEN));
    for record in HistoryAggregator::preview(records, PREVIEW_LEN) {
        out.push_str(&format!(
            "  {} / {} / {} ({} ms)\n",
            record.track_name,
            record.artist_name,
            record.album_name,
            format_number(record.ms_played as f64, 0),
        ));
    }

    out
}

/// One `Top N <attribute>` block, one `name: count plays` line per entry.
fn render_top_list(records: &[PlayRecord], attribute: Attribute, n: usize) -> String {
    let mut out = format!("Top {} {}:\n", n, attribute.label());
    for (value, count) in HistoryAggregator::top_entities(records, attribute, n) {
        let name = if value.is_empty() {
            "(unknown)"
        } else {
            value.as_str()
        };
        out.push_str(&format!("  {}: {}\n", name, format_plays(count)));
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
