//! Field-presence and type validation for raw history entries.

use thiserror::Error;

/// The six keys every raw entry must carry.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "master_metadata_track_name",
    "master_metadata_album_artist_name",
    "master_metadata_album_album_name",
    "ms_played",
    "ts",
    "skipped",
];

/// Why a raw entry was rejected by the validator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryRejection {
    /// A required key is absent from the entry.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// A required key is present but holds a value of the wrong type.
    #[error("field `{0}` has the wrong type")]
    TypeError(&'static str),
}

/// Check a raw entry for required fields and best-effort type correctness.
///
/// Type checks cover `ms_played` (non-negative integer), `ts` (string) and
/// `skipped` (boolean). Malformed timestamp *content* is not detected here;
/// it surfaces later as a parse failure in the loader. Extra keys are
/// ignored. No side effects; callers decide whether to log the rejection.
pub fn validate_entry(entry: &serde_json::Value) -> Result<(), EntryRejection> {
    let Some(obj) = entry.as_object() else {
        return Err(EntryRejection::TypeError("entry"));
    };

    for field in REQUIRED_FIELDS {
        if !obj.contains_key(field) {
            return Err(EntryRejection::MissingField(field));
        }
    }

    if obj["ms_played"].as_u64().is_none() {
        return Err(EntryRejection::TypeError("ms_played"));
    }
    if !obj["ts"].is_string() {
        return Err(EntryRejection::TypeError("ts"));
    }
    if !obj["skipped"].is_boolean() {
        return Err(EntryRejection::TypeError("skipped"));
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
