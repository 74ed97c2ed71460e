use std::fmt;

use serde::Deserialize;

/// Wire shape of one job in the feed.
///
/// Everything except `jobId` is optional so that a sparse record still
/// decodes; unknown fields such as `status` are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub job_id: String,
    pub title: Option<String>,
    pub company: Option<String>,
    pub category: Option<String>,
    pub summary: Option<String>,
    pub original_url: Option<String>,
    pub posted_date: Option<String>,
    pub scam_analysis: Option<ScamAnalysisRecord>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScamAnalysisRecord {
    pub score: Option<f64>,
    pub flags: Option<Vec<String>>,
}

impl ScamAnalysisRecord {
    /// Score rounded and clamped into 0-100; `None` when the record carries
    /// no usable score.
    pub fn clamped_score(&self) -> Option<u8> {
        self.score
            .filter(|s| s.is_finite())
            .map(|s| s.round().clamp(0.0, 100.0) as u8)
    }
}

/// Successfully decoded feed.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedJobs {
    pub records: Vec<JobRecord>,
    /// Array elements that did not decode as a job and were dropped.
    pub skipped: usize,
    pub byte_len: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    JobsFetched(Result<FetchedJobs, FetchError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    NotConfigured,
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Parse,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::NotConfigured => write!(f, "endpoint not configured"),
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Parse => write!(f, "malformed job list"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
