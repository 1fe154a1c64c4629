//! Aggregate statistics over loaded play records.
//!
//! Every function recomputes from the full record collection; the inputs
//! are small enough that no caching or incremental aggregation is needed.

use std::collections::HashMap;

use history_core::models::{Attribute, PlayRecord};

/// Milliseconds per hour, for playback-time conversion.
const MS_PER_HOUR: f64 = 3_600_000.0;

// ── AggregateSummary ──────────────────────────────────────────────────────────

/// Headline totals over a record collection, bundled for the report layer.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateSummary {
    /// Number of play records.
    pub total_tracks: usize,
    /// Sum of playback durations, in hours.
    pub total_playback_hours: f64,
    /// Number of records flagged as skipped.
    pub skipped_count: usize,
}

// ── HistoryAggregator ─────────────────────────────────────────────────────────

/// Stateless helper computing summary statistics over play records.
pub struct HistoryAggregator;

impl HistoryAggregator {
    /// Count of records.
    pub fn total_tracks(records: &[PlayRecord]) -> usize {
        records.len()
    }

    /// Sum of playback durations in milliseconds, divided by 3,600,000.
    pub fn total_playback_hours(records: &[PlayRecord]) -> f64 {
        let total_ms: u64 = records.iter().map(|r| r.ms_played).sum();
        total_ms as f64 / MS_PER_HOUR
    }

    /// Count of records where `skipped` is set.
    pub fn skipped_count(records: &[PlayRecord]) -> usize {
        records.iter().filter(|r| r.skipped).count()
    }

    /// Bundle the three headline totals into an [`AggregateSummary`].
    pub fn summarize(records: &[PlayRecord]) -> AggregateSummary {
        AggregateSummary {
            total_tracks: Self::total_tracks(records),
            total_playback_hours: Self::total_playback_hours(records),
            skipped_count: Self::skipped_count(records),
        }
    }

    /// Play count per distinct value of `attribute`.
    ///
    /// Empty-string values are counted like any other value.
    pub fn frequency_by_attribute(
        records: &[PlayRecord],
        attribute: Attribute,
    ) -> HashMap<String, u64> {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for record in records {
            *counts
                .entry(attribute.value_of(record).to_string())
                .or_insert(0) += 1;
        }
        counts
    }

    /// The `n` values of `attribute` with the highest play counts,
    /// descending.
    ///
    /// Ties are broken by first-seen input order: the sort is stable over a
    /// list built in encounter order, so of two equally-counted values the
    /// one that appeared earlier in the records comes first. Returns fewer
    /// than `n` pairs when fewer distinct values exist.
    pub fn top_entities(
        records: &[PlayRecord],
        attribute: Attribute,
        n: usize,
    ) -> Vec<(String, u64)> {
        // Accumulate counts in first-seen order.
        let mut order: Vec<(String, u64)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for record in records {
            let value = attribute.value_of(record);
            match index.get(value) {
                Some(&i) => order[i].1 += 1,
                None => {
                    index.insert(value.to_string(), order.len());
                    order.push((value.to_string(), 1));
                }
            }
        }

        // Stable sort keeps the first-seen order among equal counts.
        order.sort_by(|a, b| b.1.cmp(&a.1));
        order.truncate(n);
        order
    }

    /// The first `n` records, for diagnostic display in the debug report.
    pub fn preview(records: &[PlayRecord], n: usize) -> &[PlayRecord] {
        &records[..records.len().min(n)]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
