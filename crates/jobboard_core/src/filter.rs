use crate::{Job, SavedSet};

/// Top-level display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    All,
    Saved,
}

impl View {
    pub fn toggled(self) -> Self {
        match self {
            View::All => View::Saved,
            View::Saved => View::All,
        }
    }
}

/// Category selector value; `All` is the "no filter" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Absent categories only pass the `All` filter.
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => {
                category.is_some_and(|c| c.to_lowercase() == wanted.to_lowercase())
            }
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All Categories",
            CategoryFilter::Only(name) => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewSelector {
    pub view: View,
    pub search_term: String,
    pub category: CategoryFilter,
}

/// Derives the visible subset of `jobs`, preserving input order.
pub fn visible_jobs<'a>(jobs: &'a [Job], saved: &SavedSet, selector: &ViewSelector) -> Vec<&'a Job> {
    let needle = selector.search_term.to_lowercase();
    jobs.iter()
        .filter(|job| selector.view == View::All || saved.contains(&job.job_id))
        .filter(|job| matches_search(job, &needle))
        .filter(|job| selector.category.matches(job.category()))
        .collect()
}

fn matches_search(job: &Job, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let hit = |field: &Option<String>| {
        field
            .as_deref()
            .is_some_and(|value| value.to_lowercase().contains(needle))
    };
    hit(&job.title) || hit(&job.company)
}
