use url::Url;

use crate::{classify, CategoryFilter, Job, JobId, LoadState, ScoreClass, View};

pub const UNCATEGORIZED: &str = "Uncategorized";
pub const NO_FLAGS_TEXT: &str = "No specific flags identified.";

const UNTITLED: &str = "Untitled position";
const UNKNOWN_COMPANY: &str = "Unknown company";
const NO_SUMMARY: &str = "No summary available.";
const NOT_ANALYSED: &str = "No trust analysis available.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub load: LoadState,
    pub view: View,
    pub search_term: String,
    pub category: CategoryFilter,
    pub category_options: Vec<CategoryFilter>,
    pub saved_count: usize,
    pub total_jobs: usize,
    pub cards: Vec<JobCardView>,
    /// Index into `cards` of the focused card.
    pub selected: Option<usize>,
}

impl AppViewModel {
    /// Loaded successfully but nothing survives the filters.
    pub fn shows_no_jobs(&self) -> bool {
        self.load == LoadState::Ready && self.cards.is_empty()
    }

    pub fn selected_card(&self) -> Option<&JobCardView> {
        self.selected.and_then(|index| self.cards.get(index))
    }

    /// The category option `step` positions away from the active one, wrapping.
    pub fn cycle_category(&self, step: isize) -> CategoryFilter {
        let len = self.category_options.len();
        if len == 0 {
            return CategoryFilter::All;
        }
        let current = self
            .category_options
            .iter()
            .position(|option| *option == self.category)
            .unwrap_or(0);
        let next = (current as isize + step).rem_euclid(len as isize) as usize;
        self.category_options[next].clone()
    }
}

/// Display projection of a single job, with absent fields substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCardView {
    pub job_id: JobId,
    pub title: String,
    pub company: String,
    pub category: String,
    pub summary: String,
    /// Raw posted date; formatting is left to the renderer.
    pub posted_date: Option<String>,
    /// Present only when the record carries a usable http(s) link.
    pub original_url: Option<String>,
    pub score: Option<u8>,
    pub score_class: Option<ScoreClass>,
    pub flags_text: String,
    pub is_saved: bool,
}

impl JobCardView {
    pub(crate) fn from_job(job: &Job, is_saved: bool) -> Self {
        let (score, score_class, flags_text) = match &job.scam_analysis {
            Some(analysis) => {
                let flags = if analysis.flags.is_empty() {
                    NO_FLAGS_TEXT.to_string()
                } else {
                    analysis.flags.join(", ")
                };
                (analysis.score, analysis.score.map(classify), flags)
            }
            None => (None, None, NOT_ANALYSED.to_string()),
        };

        Self {
            job_id: job.job_id.clone(),
            title: text_or(&job.title, UNTITLED),
            company: text_or(&job.company, UNKNOWN_COMPANY),
            category: job.category().unwrap_or(UNCATEGORIZED).to_string(),
            summary: text_or(&job.summary, NO_SUMMARY),
            posted_date: job.posted_date.clone().filter(|d| !d.trim().is_empty()),
            original_url: job.original_url.as_deref().and_then(web_link),
            score,
            score_class,
            flags_text,
            is_saved,
        }
    }
}

fn text_or(value: &Option<String>, fallback: &str) -> String {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => fallback.to_string(),
    }
}

fn web_link(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let parsed = Url::parse(raw).ok()?;
    matches!(parsed.scheme(), "http" | "https").then(|| raw.to_string())
}
