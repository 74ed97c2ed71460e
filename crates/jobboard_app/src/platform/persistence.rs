use std::fs;
use std::path::PathBuf;

use board_logging::{board_info, board_warn};
use jobboard_core::{SavedSet, SavedStore};
use jobboard_engine::{AtomicFileWriter, PersistError};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to encode saved jobs: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Bookmarks stored as a JSON array of job ids in `<data_dir>/<key>.json`.
pub struct FileSavedStore {
    writer: AtomicFileWriter,
    filename: String,
}

impl FileSavedStore {
    pub fn new(data_dir: PathBuf, key: &str) -> Self {
        Self {
            writer: AtomicFileWriter::new(data_dir),
            filename: format!("{key}.json"),
        }
    }

    fn path(&self) -> PathBuf {
        self.writer.dir().join(&self.filename)
    }
}

impl SavedStore for FileSavedStore {
    type Error = StoreError;

    fn load(&self) -> SavedSet {
        let path = self.path();
        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return SavedSet::new();
            }
            Err(err) => {
                board_warn!("Failed to read saved jobs from {:?}: {}", path, err);
                return SavedSet::new();
            }
        };

        let entries: Vec<Value> = match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(err) => {
                board_warn!("Ignoring corrupt saved jobs in {:?}: {}", path, err);
                return SavedSet::new();
            }
        };

        let ids: Vec<&str> = entries.iter().filter_map(Value::as_str).collect();
        if ids.len() < entries.len() {
            board_warn!(
                "Skipped {} non-string saved job ids in {:?}",
                entries.len() - ids.len(),
                path
            );
        }
        let saved: SavedSet = ids.into_iter().collect();
        board_info!("Loaded {} saved jobs from {:?}", saved.len(), path);
        saved
    }

    fn save(&self, saved: &SavedSet) -> Result<(), StoreError> {
        let ids: Vec<&str> = saved.iter().collect();
        let content = serde_json::to_vec(&ids)?;
        self.writer.write(&self.filename, &content)?;
        Ok(())
    }
}
