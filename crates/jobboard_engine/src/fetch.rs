use std::time::Duration;

use board_logging::{board_debug, board_info};
use futures_util::StreamExt;

use crate::{decode_jobs, FailureKind, FetchError, FetchedJobs};

/// Marker left in the endpoint constant until a real URL is configured.
pub const ENDPOINT_PLACEHOLDER: &str = "YOUR_API_GATEWAY_INVOKE_URL_HERE";

pub fn is_placeholder_endpoint(endpoint: &str) -> bool {
    endpoint.trim().is_empty() || endpoint.contains(ENDPOINT_PLACEHOLDER)
}

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 5,
            max_bytes: 10 * 1024 * 1024,
        }
    }
}

/// Single-attempt retrieval of the job feed.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch_jobs(&self, endpoint: &str) -> Result<FetchedJobs, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(
                self.settings.redirect_limit,
            ))
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    fn too_large(&self, actual: u64) -> FetchError {
        FetchError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch_jobs(&self, endpoint: &str) -> Result<FetchedJobs, FetchError> {
        if is_placeholder_endpoint(endpoint) {
            return Err(FetchError::new(
                FailureKind::NotConfigured,
                "API endpoint is not configured",
            ));
        }
        let parsed = url::Url::parse(endpoint)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let client = self.build_client()?;

        board_info!("Requesting job list from {}", parsed);
        let response = client.get(parsed).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                format!("API request failed with status: {}", status.as_u16()),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
        }
        board_debug!("Received {} bytes of job data", bytes.len());

        decode_jobs(&bytes)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_redirect() {
        return FetchError::new(FailureKind::RedirectLimitExceeded, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
