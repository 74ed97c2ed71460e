use board_logging::board_warn;
use serde_json::Value;

use crate::{FailureKind, FetchError, FetchedJobs, JobRecord};

/// Decode a feed body: a JSON array of job objects.
///
/// The array itself must parse; individual elements that do not look like a
/// job are dropped and counted so one bad record cannot hide the rest.
pub fn decode_jobs(bytes: &[u8]) -> Result<FetchedJobs, FetchError> {
    let elements: Vec<Value> = serde_json::from_slice(bytes)
        .map_err(|err| FetchError::new(FailureKind::Parse, err.to_string()))?;

    let mut records = Vec::with_capacity(elements.len());
    let mut skipped = 0;
    for (index, element) in elements.into_iter().enumerate() {
        match serde_json::from_value::<JobRecord>(element) {
            Ok(record) => records.push(record),
            Err(err) => {
                board_warn!("Skipping job record #{}: {}", index, err);
                skipped += 1;
            }
        }
    }

    Ok(FetchedJobs {
        records,
        skipped,
        byte_len: bytes.len() as u64,
    })
}
