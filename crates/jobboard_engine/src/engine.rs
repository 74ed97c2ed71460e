use std::sync::{mpsc, Arc};
use std::thread;

use board_logging::{board_info, board_warn};

use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::EngineEvent;

enum EngineCommand {
    FetchJobs { endpoint: String },
}

/// Runs fetches on a background tokio runtime and reports back over a channel.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> std::io::Result<Self> {
        Self::with_fetcher(Arc::new(ReqwestFetcher::new(settings)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> std::io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("jobboard-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let fetcher = fetcher.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(fetcher.as_ref(), command, event_tx).await;
                    });
                }
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn request_jobs(&self, endpoint: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::FetchJobs {
            endpoint: endpoint.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchJobs { endpoint } => {
            let result = fetcher.fetch_jobs(&endpoint).await;
            match &result {
                Ok(jobs) => board_info!(
                    "Fetched {} jobs ({} skipped, {} bytes)",
                    jobs.records.len(),
                    jobs.skipped,
                    jobs.byte_len
                ),
                Err(err) => board_warn!("Job fetch failed: {}", err),
            }
            let _ = event_tx.send(EngineEvent::JobsFetched(result));
        }
    }
}
