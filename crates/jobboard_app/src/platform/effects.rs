use board_logging::{board_error, board_info, board_warn};
use jobboard_core::{Effect, Job, Msg, SavedStore, ScamAnalysis};
use jobboard_engine::{EngineEvent, EngineHandle, FailureKind, FetchError, FetchedJobs, JobRecord};

/// Executes effects emitted by `update` and turns engine events back into messages.
pub struct EffectRunner<S> {
    engine: EngineHandle,
    store: S,
    endpoint: String,
}

impl<S: SavedStore> EffectRunner<S> {
    pub fn new(engine: EngineHandle, store: S, endpoint: impl Into<String>) -> Self {
        Self {
            engine,
            store,
            endpoint: endpoint.into(),
        }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchJobs => {
                    board_info!("FetchJobs endpoint={}", self.endpoint);
                    self.engine.request_jobs(self.endpoint.clone());
                }
                Effect::PersistSaved { saved } => {
                    if let Err(err) = self.store.save(&saved) {
                        board_error!("Failed to persist {} saved jobs: {}", saved.len(), err);
                    }
                }
            }
        }
    }

    /// Messages for every engine event that arrived since the last call.
    pub fn drain_events(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            match event {
                EngineEvent::JobsFetched(result) => inbox.push(jobs_fetched_msg(result)),
            }
        }
        inbox
    }
}

fn jobs_fetched_msg(result: Result<FetchedJobs, FetchError>) -> Msg {
    match result {
        Ok(fetched) => {
            if fetched.skipped > 0 {
                board_warn!("{} job records were malformed and skipped", fetched.skipped);
            }
            Msg::JobsLoaded(fetched.records.into_iter().map(to_job).collect())
        }
        Err(err) => failure_msg(&err),
    }
}

fn failure_msg(err: &FetchError) -> Msg {
    match err.kind {
        FailureKind::NotConfigured => Msg::JobsFailed {
            message: "API endpoint is not configured.".to_string(),
            detail: Some("Set JOBS_ENDPOINT to your API Gateway URL.".to_string()),
        },
        _ => Msg::JobsFailed {
            message: "Failed to load jobs.".to_string(),
            detail: Some(err.to_string()),
        },
    }
}

fn to_job(record: JobRecord) -> Job {
    let scam_analysis = record.scam_analysis.map(|analysis| ScamAnalysis {
        score: analysis.clamped_score(),
        flags: analysis.flags.unwrap_or_default(),
    });
    Job {
        job_id: record.job_id,
        title: record.title,
        company: record.company,
        category: record.category,
        summary: record.summary,
        original_url: record.original_url,
        posted_date: record.posted_date,
        scam_analysis,
    }
}
