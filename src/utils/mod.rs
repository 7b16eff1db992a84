//! Process-level plumbing: save files and log output.

pub mod logging;
pub mod persistence;
