//! Core domain types for the Spotify history statistics tool.
//!
//! Defines the play-record entity, the closed attribute enumeration,
//! loader configuration, the error taxonomy, CLI settings, and number
//! formatting helpers shared by the data and report layers.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
