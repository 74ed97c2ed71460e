//! Job board core: pure state machine, filtering and view-model helpers.
mod categories;
mod effect;
mod filter;
mod job;
mod msg;
mod saved;
mod score;
mod state;
mod update;
mod view_model;

pub use categories::{category_options, distinct_categories};
pub use effect::Effect;
pub use filter::{visible_jobs, CategoryFilter, View, ViewSelector};
pub use job::{Job, JobId, ScamAnalysis};
pub use msg::Msg;
pub use saved::{toggle_save, SavedSet, SavedStore};
pub use score::{classify, ScoreClass};
pub use state::{AppState, LoadState};
pub use update::update;
pub use view_model::{AppViewModel, JobCardView, NO_FLAGS_TEXT, UNCATEGORIZED};
