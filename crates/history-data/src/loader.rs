//! JSON file discovery and loading for the Spotify history tool.
//!
//! Reads extended streaming-history files (JSON arrays of play events),
//! validates each entry, applies the play-worthiness filter, and converts
//! the survivors into [`PlayRecord`] structs for downstream aggregation.

use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDateTime, Utc};
use history_core::error::HistoryError;
use history_core::models::{LoaderConfig, PlayRecord};
use tracing::{debug, warn};

use crate::validator::validate_entry;

/// Strict timestamp format used by the `ts` field (UTC, second precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

// ── LoadOutcome ───────────────────────────────────────────────────────────────

/// Everything a single `load_history` call produced.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Validated, filter-passing records in file-list order, then in-file
    /// array order. Never re-sorted.
    pub records: Vec<PlayRecord>,
    /// Paths that could not be read or did not parse as a JSON array.
    pub failed_files: Vec<PathBuf>,
    /// Entries rejected by the validator (missing fields, wrong types).
    pub invalid_entries: u64,
    /// Valid entries whose `ts` string did not match [`TIMESTAMP_FORMAT`].
    /// Counted separately from file failures: one bad timestamp never
    /// aborts the rest of its file.
    pub bad_timestamps: u64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Find all `.json` files directly under `data_path`, sorted by path.
pub fn find_json_files(data_path: &Path) -> Vec<PathBuf> {
    if !data_path.exists() {
        warn!("Data path does not exist: {}", data_path.display());
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(data_path)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .map(|ext| ext == "json")
                    .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

/// Load and filter play records from `paths`.
///
/// Failure is per-file, never fatal to the whole run: an unreadable or
/// malformed file lands in `failed_files` and processing continues with the
/// remaining paths. Individual bad entries are counted and logged without
/// affecting the rest of their file.
pub fn load_history(paths: &[PathBuf], config: &LoaderConfig) -> LoadOutcome {
    let mut outcome = LoadOutcome::default();

    for path in paths {
        if let Err(e) = process_single_file(path, config, &mut outcome) {
            warn!("Failed to process {}: {}", path.display(), e);
            outcome.failed_files.push(path.clone());
        }
    }

    debug!(
        "Loaded {} records from {} files ({} failed, {} invalid entries, {} bad timestamps)",
        outcome.records.len(),
        paths.len(),
        outcome.failed_files.len(),
        outcome.invalid_entries,
        outcome.bad_timestamps,
    );

    outcome
}

/// Parse a `ts` string strictly against [`TIMESTAMP_FORMAT`].
pub fn parse_timestamp(ts: &str) -> Result<DateTime<Utc>, HistoryError> {
    NaiveDateTime::parse_from_str(ts, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| HistoryError::TimestampParse(ts.to_string()))
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Read one file and append its surviving records to `outcome`.
///
/// Returns `Err` only for file-level problems (I/O, JSON syntax, wrong
/// top-level shape); entry-level problems bump the outcome counters.
fn process_single_file(
    path: &Path,
    config: &LoaderConfig,
    outcome: &mut LoadOutcome,
) -> Result<(), HistoryError> {
    let content = std::fs::read_to_string(path).map_err(|source| HistoryError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let data: serde_json::Value =
        serde_json::from_str(&content).map_err(|source| HistoryError::JsonParse {
            path: path.to_path_buf(),
            source,
        })?;

    let Some(entries) = data.as_array() else {
        return Err(HistoryError::NotAnArray(path.to_path_buf()));
    };

    let mut entries_filtered = 0u64;
    let mut entries_kept = 0u64;

    for entry in entries {
        if let Err(rejection) = validate_entry(entry) {
            warn!("Skipping entry in {}: {}", path.display(), rejection);
            outcome.invalid_entries += 1;
            continue;
        }

        // Types were checked by the validator.
        let ms_played = entry["ms_played"].as_u64().unwrap_or(0);
        let skipped = entry["skipped"].as_bool().unwrap_or(false);

        if !config.is_play_worthy(ms_played, skipped) {
            entries_filtered += 1;
            continue;
        }

        let ts = entry["ts"].as_str().unwrap_or_default();
        let timestamp = match parse_timestamp(ts) {
            Ok(t) => t,
            Err(e) => {
                warn!("Skipping entry in {}: {}", path.display(), e);
                outcome.bad_timestamps += 1;
                continue;
            }
        };

        outcome.records.push(record_from_entry(entry, timestamp, ms_played, skipped));
        entries_kept += 1;
    }

    debug!(
        "File {}: {} entries, {} filtered, {} kept",
        path.display(),
        entries.len(),
        entries_filtered,
        entries_kept,
    );

    Ok(())
}

/// Build a [`PlayRecord`] from a validated entry.
///
/// Name fields are read leniently: a `null` track/artist/album name becomes
/// the empty string and is counted like any other value downstream.
fn record_from_entry(
    entry: &serde_json::Value,
    timestamp: DateTime<Utc>,
    ms_played: u64,
    skipped: bool,
) -> PlayRecord {
    let field = |key: &str| {
        entry[key]
            .as_str()
            .map(|s| s.to_string())
            .unwrap_or_default()
    };

    PlayRecord {
        track_name: field("master_metadata_track_name"),
        artist_name: field("master_metadata_album_artist_name"),
        album_name: field("master_metadata_album_album_name"),
        ms_played,
        timestamp,
        skipped,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
