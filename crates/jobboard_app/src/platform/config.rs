use std::path::PathBuf;
use std::time::Duration;

use jobboard_engine::FetchSettings;
use log::LevelFilter;

/// API Gateway invoke URL serving the job list.
///
/// Set to a value containing `jobboard_engine::ENDPOINT_PLACEHOLDER` to run
/// without a backend; the app then shows a "not configured" error.
pub const JOBS_ENDPOINT: &str =
    "https://jppvlwvuy8.execute-api.eu-central-1.amazonaws.com/prod/jobs";

/// Storage key for bookmarks; becomes `<key>.json` in the data directory.
pub const SAVED_JOBS_KEY: &str = "ajiraChapchapSavedJobs";

#[derive(Debug, Clone)]
pub struct BoardConfig {
    pub endpoint: String,
    pub data_dir: PathBuf,
    pub saved_key: String,
    pub fetch: FetchSettings,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    /// How long the UI loop waits for input before draining engine events.
    pub poll_interval: Duration,
}

impl Default for BoardConfig {
    fn default() -> Self {
        let base = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            endpoint: JOBS_ENDPOINT.to_string(),
            data_dir: base.join("data"),
            saved_key: SAVED_JOBS_KEY.to_string(),
            fetch: FetchSettings::default(),
            log_file: base.join("jobboard.log"),
            log_level: LevelFilter::Info,
            poll_interval: Duration::from_millis(75),
        }
    }
}
