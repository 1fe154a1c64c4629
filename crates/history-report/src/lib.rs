//! Report rendering for the Spotify history tool.
//!
//! Turns aggregate statistics into the text summary, the debug report, and
//! horizontal bar charts printed to stdout.

pub mod chart;
pub mod summary;
