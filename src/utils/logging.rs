//! File logging. The terminal belongs to the game, so logs go to a file.

use crate::core::error::{GameError, GameResult};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

/// Local wall-clock timestamps to the minute, e.g. `2024-05-01 18:30`.
struct MinuteClock;

impl FormatTime for MinuteClock {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M"))
    }
}

/// Install the global subscriber writing INFO and above to `path`.
///
/// The file is truncated so it only ever holds the latest session.
pub fn init(path: &Path) -> GameResult<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_timer(MinuteClock)
        .with_max_level(Level::INFO)
        .try_init()
        .map_err(|e| GameError::Logging(e.to_string()))
}
