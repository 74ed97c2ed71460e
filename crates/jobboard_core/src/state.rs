use crate::view_model::{AppViewModel, JobCardView};
use crate::{
    category_options, distinct_categories, toggle_save, visible_jobs, CategoryFilter, Job,
    SavedSet, View, ViewSelector,
};

/// Progress of the one-time job list load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed {
        message: String,
        detail: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    jobs: Vec<Job>,
    categories: Vec<String>,
    saved: SavedSet,
    selector: ViewSelector,
    load: LoadState,
    cursor: usize,
    fetch_requested: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn saved(&self) -> &SavedSet {
        &self.saved
    }

    pub fn visible(&self) -> Vec<&Job> {
        visible_jobs(&self.jobs, &self.saved, &self.selector)
    }

    pub fn view(&self) -> AppViewModel {
        let cards: Vec<JobCardView> = self
            .visible()
            .into_iter()
            .map(|job| JobCardView::from_job(job, self.saved.contains(&job.job_id)))
            .collect();
        let selected = if cards.is_empty() {
            None
        } else {
            Some(self.cursor.min(cards.len() - 1))
        };

        AppViewModel {
            load: self.load.clone(),
            view: self.selector.view,
            search_term: self.selector.search_term.clone(),
            category: self.selector.category.clone(),
            category_options: category_options(&self.categories),
            saved_count: self.saved.len(),
            total_jobs: self.jobs.len(),
            cards,
            selected,
        }
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Records the fetch request; returns false if one was already issued.
    pub(crate) fn request_fetch(&mut self) -> bool {
        !std::mem::replace(&mut self.fetch_requested, true)
    }

    pub(crate) fn restore_saved(&mut self, saved: SavedSet) {
        if self.saved != saved {
            self.saved = saved;
            self.clamp_cursor();
            self.mark_dirty();
        }
    }

    pub(crate) fn replace_jobs(&mut self, jobs: Vec<Job>) {
        self.categories = distinct_categories(&jobs);
        self.jobs = jobs;
        self.load = LoadState::Ready;
        self.clamp_cursor();
        self.mark_dirty();
    }

    pub(crate) fn fail_load(&mut self, message: String, detail: Option<String>) {
        self.load = LoadState::Failed { message, detail };
        self.mark_dirty();
    }

    pub(crate) fn set_search_term(&mut self, term: String) {
        if self.selector.search_term != term {
            self.selector.search_term = term;
            self.cursor = 0;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_category(&mut self, category: CategoryFilter) {
        if self.selector.category != category {
            self.selector.category = category;
            self.cursor = 0;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_view(&mut self, view: View) {
        if self.selector.view != view {
            self.selector.view = view;
            self.cursor = 0;
            self.mark_dirty();
        }
    }

    pub(crate) fn toggle_saved(&mut self, job_id: &str) {
        self.saved = toggle_save(std::mem::take(&mut self.saved), job_id);
        self.clamp_cursor();
        self.mark_dirty();
    }

    pub(crate) fn move_cursor(&mut self, delta: isize) {
        let len = self.visible().len();
        if len == 0 {
            return;
        }
        let next = self.cursor.saturating_add_signed(delta).min(len - 1);
        if next != self.cursor {
            self.cursor = next;
            self.mark_dirty();
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}
