use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Where the tracked events file lives
    pub data_dir: PathBuf,
    pub search_debounce: Duration,
    pub log_level: Level,
}
