use std::path::PathBuf;
use thiserror::Error;

/// All errors produced while loading and analyzing listening history.
#[derive(Error, Debug)]
pub enum HistoryError {
    /// A history file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A history file is not valid JSON.
    #[error("Failed to parse JSON in {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A history file parsed as JSON but its top-level value is not an array.
    #[error("Expected a JSON array in {0}")]
    NotAnArray(PathBuf),

    /// A timestamp string did not match the expected format.
    #[error("Invalid timestamp format: {0}")]
    TimestampParse(String),

    /// The expected data directory does not exist.
    #[error("Data path not found: {0}")]
    DataPathNotFound(PathBuf),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the history crates.
pub type Result<T> = std::result::Result<T, HistoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = HistoryError::FileRead {
            path: PathBuf::from("/data/history.json"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read file"));
        assert!(msg.contains("/data/history.json"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_json_parse() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid}").unwrap_err();
        let err = HistoryError::JsonParse {
            path: PathBuf::from("/data/broken.json"),
            source: json_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to parse JSON"));
        assert!(msg.contains("/data/broken.json"));
    }

    #[test]
    fn test_error_display_not_an_array() {
        let err = HistoryError::NotAnArray(PathBuf::from("/data/object.json"));
        assert_eq!(err.to_string(), "Expected a JSON array in /data/object.json");
    }

    #[test]
    fn test_error_display_timestamp_parse() {
        let err = HistoryError::TimestampParse("not-a-timestamp".to_string());
        assert_eq!(err.to_string(), "Invalid timestamp format: not-a-timestamp");
    }

    #[test]
    fn test_error_display_data_path_not_found() {
        let err = HistoryError::DataPathNotFound(PathBuf::from("/missing/dir"));
        assert_eq!(err.to_string(), "Data path not found: /missing/dir");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: HistoryError = io_err.into();
        assert!(err.to_string().contains("denied"));
    }
}
