use clap::Parser;
use std::path::PathBuf;

use crate::models::LoaderConfig;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Aggregate statistics over Spotify extended streaming history
#[derive(Parser, Debug, Clone)]
#[command(
    name = "spotify-stats",
    about = "Aggregate statistics over Spotify extended streaming history",
    version
)]
pub struct Settings {
    /// Directory scanned for .json history files
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Assumed average track length in milliseconds
    #[arg(long, default_value = "180000")]
    pub avg_track_length_ms: u64,

    /// Fraction of the average track length a skipped play must reach to count
    #[arg(long, default_value = "0.1")]
    pub min_play_fraction: f64,

    /// Count every valid entry, disabling the play-worthiness filter
    #[arg(long)]
    pub no_play_filter: bool,

    /// Number of entries shown in the top-artist/track/album lists
    #[arg(long, default_value = "10")]
    pub top_n: usize,

    /// Number of entries drawn in the bar charts
    #[arg(long, default_value = "50")]
    pub chart_entries: usize,

    /// Width in columns of the longest chart bar
    #[arg(long, default_value = "40", value_parser = clap::value_parser!(u16).range(1..=200))]
    pub chart_width: u16,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Show the debug report (loader counters, data preview) and disable
    /// the play-worthiness filter
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Build the loader configuration implied by the CLI flags.
    ///
    /// Both `--no-play-filter` and `--debug` disable the play-worthiness
    /// filter; `--debug` additionally forces debug logging.
    pub fn loader_config(&self) -> LoaderConfig {
        LoaderConfig {
            avg_track_length_ms: self.avg_track_length_ms,
            min_play_fraction: self.min_play_fraction,
            apply_play_filter: !(self.no_play_filter || self.debug),
        }
    }

    /// The effective log level, accounting for `--debug`.
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "DEBUG"
        } else {
            &self.log_level
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── test_settings_default_values ──────────────────────────────────────────

    #[test]
    fn test_settings_default_values() {
        // Parse with only the binary name (no flags) to get all defaults.
        let settings = Settings::parse_from(["spotify-stats"]);

        assert_eq!(settings.data_dir, PathBuf::from("data"));
        assert_eq!(settings.avg_track_length_ms, 180_000);
        assert!((settings.min_play_fraction - 0.1).abs() < f64::EPSILON);
        assert!(!settings.no_play_filter);
        assert_eq!(settings.top_n, 10);
        assert_eq!(settings.chart_entries, 50);
        assert_eq!(settings.chart_width, 40);
        assert_eq!(settings.log_level, "INFO");
        assert!(!settings.debug);
    }

    // ── test_loader_config ────────────────────────────────────────────────────

    #[test]
    fn test_loader_config_from_defaults() {
        let settings = Settings::parse_from(["spotify-stats"]);
        let config = settings.loader_config();
        assert_eq!(config.avg_track_length_ms, 180_000);
        assert!((config.min_play_fraction - 0.1).abs() < f64::EPSILON);
        assert!(config.apply_play_filter);
    }

    #[test]
    fn test_no_play_filter_flag() {
        let settings = Settings::parse_from(["spotify-stats", "--no-play-filter"]);
        assert!(!settings.loader_config().apply_play_filter);
    }

    #[test]
    fn test_debug_disables_filter_and_raises_log_level() {
        let settings = Settings::parse_from(["spotify-stats", "--debug"]);
        assert!(!settings.loader_config().apply_play_filter);
        assert_eq!(settings.effective_log_level(), "DEBUG");
    }

    #[test]
    fn test_threshold_flags() {
        let settings = Settings::parse_from([
            "spotify-stats",
            "--avg-track-length-ms",
            "240000",
            "--min-play-fraction",
            "0.25",
        ]);
        let config = settings.loader_config();
        assert_eq!(config.avg_track_length_ms, 240_000);
        assert!((config.min_play_threshold_ms() - 60_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_data_dir_flag() {
        let settings = Settings::parse_from(["spotify-stats", "--data-dir", "/tmp/history"]);
        assert_eq!(settings.data_dir, PathBuf::from("/tmp/history"));
    }
}
