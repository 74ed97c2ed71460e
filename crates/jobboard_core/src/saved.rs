use std::collections::BTreeSet;

use crate::JobId;

/// The user's bookmarks, keyed by job id.
///
/// Ids may point at jobs that are no longer in the feed; bookmarks outlive
/// the listing they were made from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SavedSet {
    ids: BTreeSet<JobId>,
}

impl SavedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, job_id: &str) -> bool {
        self.ids.contains(job_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl<S: Into<JobId>> FromIterator<S> for SavedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Adds `job_id` if absent, removes it if present.
pub fn toggle_save(mut saved: SavedSet, job_id: &str) -> SavedSet {
    if !saved.ids.remove(job_id) {
        saved.ids.insert(job_id.to_owned());
    }
    saved
}

/// Durable storage for the bookmark set.
///
/// `load` never fails: a missing or unreadable record is an empty set.
pub trait SavedStore {
    type Error: std::error::Error;

    fn load(&self) -> SavedSet;
    fn save(&self, saved: &SavedSet) -> Result<(), Self::Error>;
}
