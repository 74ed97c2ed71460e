pub type JobId = String;

/// Trust assessment computed upstream and attached to each posting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScamAnalysis {
    /// 0-100, higher is more trustworthy. `None` when the upstream analysis
    /// carried flags but no usable score.
    pub score: Option<u8>,
    pub flags: Vec<String>,
}

/// One posting as returned by the job feed.
///
/// Only `job_id` is guaranteed; every other field may be missing from a
/// record and is substituted or omitted at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub job_id: JobId,
    pub title: Option<String>,
    pub company: Option<String>,
    pub category: Option<String>,
    pub summary: Option<String>,
    pub original_url: Option<String>,
    pub posted_date: Option<String>,
    pub scam_analysis: Option<ScamAnalysis>,
}

impl Job {
    pub fn new(job_id: impl Into<JobId>) -> Self {
        Self {
            job_id: job_id.into(),
            title: None,
            company: None,
            category: None,
            summary: None,
            original_url: None,
            posted_date: None,
            scam_analysis: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_original_url(mut self, url: impl Into<String>) -> Self {
        self.original_url = Some(url.into());
        self
    }

    pub fn with_posted_date(mut self, posted: impl Into<String>) -> Self {
        self.posted_date = Some(posted.into());
        self
    }

    pub fn with_scam_analysis(mut self, score: u8, flags: Vec<String>) -> Self {
        self.scam_analysis = Some(ScamAnalysis {
            score: Some(score),
            flags,
        });
        self
    }

    /// Category with empty strings treated as absent.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}
