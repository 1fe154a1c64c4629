//! Data ingestion and aggregation layer for the Spotify history tool.
//!
//! Responsible for discovering and reading streaming-history JSON files,
//! validating their entries, applying the play-worthiness filter, and
//! computing aggregate statistics over the loaded records.

pub mod aggregator;
pub mod loader;
pub mod validator;

pub use history_core as core;
