//! Job board engine: job feed IO and effect execution.
mod decode;
mod engine;
mod fetch;
mod persist;
mod types;

pub use decode::decode_jobs;
pub use engine::EngineHandle;
pub use fetch::{is_placeholder_endpoint, FetchSettings, Fetcher, ReqwestFetcher, ENDPOINT_PLACEHOLDER};
pub use persist::{ensure_data_dir, AtomicFileWriter, PersistError};
pub use types::{EngineEvent, FailureKind, FetchError, FetchedJobs, JobRecord, ScamAnalysisRecord};
