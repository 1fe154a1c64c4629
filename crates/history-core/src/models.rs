use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single validated play event read from a streaming-history JSON file.
///
/// Records carry no identity beyond their field values; multiple plays of
/// the same track are distinct records. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayRecord {
    /// Title of the track that was played.
    pub track_name: String,
    /// Name of the album artist.
    pub artist_name: String,
    /// Name of the album the track belongs to.
    pub album_name: String,
    /// Playback duration in milliseconds.
    pub ms_played: u64,
    /// UTC timestamp when the play ended.
    pub timestamp: DateTime<Utc>,
    /// Whether the listener skipped to the next track.
    pub skipped: bool,
}

/// The record attribute a frequency count or top-N ranking is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    /// Group plays by artist name.
    Artist,
    /// Group plays by track title.
    Track,
    /// Group plays by album name.
    Album,
}

impl Attribute {
    /// The value of this attribute on `record`.
    pub fn value_of<'a>(&self, record: &'a PlayRecord) -> &'a str {
        match self {
            Attribute::Artist => &record.artist_name,
            Attribute::Track => &record.track_name,
            Attribute::Album => &record.album_name,
        }
    }

    /// Human-readable label used in report headings.
    pub fn label(&self) -> &'static str {
        match self {
            Attribute::Artist => "Artists",
            Attribute::Track => "Tracks",
            Attribute::Album => "Albums",
        }
    }
}

/// Explicit loader configuration.
///
/// The play-worthiness filter decides whether a *skipped* play still counts
/// as a genuine partial listen: a skipped track is kept only when it played
/// for at least `avg_track_length_ms * min_play_fraction` milliseconds.
/// Non-skipped plays are always kept. Setting `apply_play_filter` to `false`
/// keeps every valid entry unconditionally (the historical debug behavior).
#[derive(Debug, Clone, PartialEq)]
pub struct LoaderConfig {
    /// Assumed average track length in milliseconds.
    pub avg_track_length_ms: u64,
    /// Fraction of the average track length that must have elapsed for a
    /// skipped play to count.
    pub min_play_fraction: f64,
    /// Whether the play-worthiness filter is applied at all.
    pub apply_play_filter: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            avg_track_length_ms: 180_000,
            min_play_fraction: 0.1,
            apply_play_filter: true,
        }
    }
}

impl LoaderConfig {
    /// Minimum milliseconds played for a skipped track to still be counted.
    pub fn min_play_threshold_ms(&self) -> f64 {
        self.avg_track_length_ms as f64 * self.min_play_fraction
    }

    /// Returns `true` when a record with the given duration and skip flag
    /// passes the play-worthiness filter.
    pub fn is_play_worthy(&self, ms_played: u64, skipped: bool) -> bool {
        if !self.apply_play_filter {
            return true;
        }
        ms_played as f64 >= self.min_play_threshold_ms() || !skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_record(track: &str, artist: &str, album: &str) -> PlayRecord {
        PlayRecord {
            track_name: track.to_string(),
            artist_name: artist.to_string(),
            album_name: album.to_string(),
            ms_played: 60_000,
            timestamp: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
            skipped: false,
        }
    }

    use chrono::Utc;

    // ── Attribute ──────────────────────────────────────────────────────────

    #[test]
    fn test_attribute_value_of() {
        let record = make_record("Song A", "Artist B", "Album C");
        assert_eq!(Attribute::Track.value_of(&record), "Song A");
        assert_eq!(Attribute::Artist.value_of(&record), "Artist B");
        assert_eq!(Attribute::Album.value_of(&record), "Album C");
    }

    #[test]
    fn test_attribute_labels() {
        assert_eq!(Attribute::Artist.label(), "Artists");
        assert_eq!(Attribute::Track.label(), "Tracks");
        assert_eq!(Attribute::Album.label(), "Albums");
    }

    #[test]
    fn test_attribute_serde() {
        let json = serde_json::to_string(&Attribute::Artist).unwrap();
        assert_eq!(json, r#""artist""#);
        let back: Attribute = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Attribute::Artist);
    }

    // ── LoaderConfig ───────────────────────────────────────────────────────

    #[test]
    fn test_loader_config_defaults() {
        let config = LoaderConfig::default();
        assert_eq!(config.avg_track_length_ms, 180_000);
        assert!((config.min_play_fraction - 0.1).abs() < f64::EPSILON);
        assert!(config.apply_play_filter);
    }

    #[test]
    fn test_min_play_threshold_default() {
        // 180_000 * 0.1 = 18_000 ms
        let config = LoaderConfig::default();
        assert!((config.min_play_threshold_ms() - 18_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_play_worthy_boundary() {
        let config = LoaderConfig::default();
        // Skipped plays are kept only at or above the threshold.
        assert!(!config.is_play_worthy(17_999, true));
        assert!(config.is_play_worthy(18_000, true));
        // Non-skipped plays always count, even at zero duration.
        assert!(config.is_play_worthy(0, false));
    }

    #[test]
    fn test_play_worthy_filter_disabled() {
        let config = LoaderConfig {
            apply_play_filter: false,
            ..Default::default()
        };
        assert!(config.is_play_worthy(0, true));
    }

    #[test]
    fn test_zero_fraction_disables_threshold() {
        let config = LoaderConfig {
            min_play_fraction: 0.0,
            ..Default::default()
        };
        assert!(config.is_play_worthy(0, true));
    }
}
