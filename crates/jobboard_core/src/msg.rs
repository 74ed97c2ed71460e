use crate::{CategoryFilter, Job, JobId, SavedSet, View};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// UI finished its setup; triggers the initial fetch.
    Started,
    /// Bookmarks loaded from durable storage at startup.
    SavedRestored(SavedSet),
    /// Fetch succeeded; replaces the job list wholesale.
    JobsLoaded(Vec<Job>),
    /// Fetch failed; the error panel stays until the app is restarted.
    JobsFailed {
        message: String,
        detail: Option<String>,
    },
    /// User edited the search box.
    SearchChanged(String),
    /// User picked a category from the selector.
    CategorySelected(CategoryFilter),
    /// User clicked one of the view tabs.
    ViewSwitched(View),
    /// User clicked the save/unsave control on a card.
    SaveToggled { job_id: JobId },
    /// User moved the card cursor by a relative amount.
    CursorMoved(isize),
}
