//! Platform logging initialization for jobboard_app.
//!
//! The terminal belongs to the UI while the app runs, so logs only go to a
//! file (`./jobboard.log` by default).

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{CombinedLogger, Config, ConfigBuilder, SharedLogger, WriteLogger};

/// Initialize the file logger at `path`.
///
/// If the file cannot be created a warning goes to stderr and logging stays off.
pub fn initialize(path: &Path, level: LevelFilter) {
    let config = build_config();

    let loggers: Vec<Box<dyn SharedLogger>> = match create_file_logger(path, level, config) {
        Some(file_logger) => vec![file_logger],
        None => return,
    };

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(
    path: &Path,
    level: LevelFilter,
    config: Config,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
            None
        }
    }
}
