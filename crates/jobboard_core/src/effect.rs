use crate::SavedSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue the one and only request for the job list.
    FetchJobs,
    /// Write the bookmark set to durable storage.
    PersistSaved { saved: SavedSet },
}
