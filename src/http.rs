//! HTTP client for the sort service.

use std::future::Future;

use reqwest::{Client, StatusCode};

use crate::config::DEFAULT_SERVICE_URL;
use crate::service::{sort_path, SortRequestBody, SortResponse, ALGORITHMS_PATH};
use crate::{NumericSequence, ServiceError, SortRun, SortService};

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ServiceError::Malformed(err.to_string())
        } else {
            ServiceError::Transport(err.to_string())
        }
    }
}

/// [`SortService`] over HTTP + JSON.
#[derive(Clone, Debug)]
pub struct HttpSortService {
    client: Client,
    base_url: String,
}

impl Default for HttpSortService {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICE_URL)
    }
}

impl HttpSortService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    #[inline]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl SortService for HttpSortService {
    fn algorithms(&self) -> impl Future<Output = Result<Vec<String>, ServiceError>> {
        let request = self.client.get(self.url(ALGORITHMS_PATH));
        async move {
            let response = request.send().await?;
            let status = response.status();
            let body = response.text().await?;
            let algorithms = decode_catalog(status, &body)?;
            tracing::debug!(count = algorithms.len(), "fetched algorithm catalog");
            Ok(algorithms)
        }
    }

    fn sort(
        &self,
        algorithm: &str,
        numbers: &NumericSequence,
    ) -> impl Future<Output = Result<SortRun, ServiceError>> {
        let url = self.url(&sort_path(algorithm));
        let request = self.client.post(&url).json(&SortRequestBody::new(numbers));
        async move {
            tracing::debug!(%url, "requesting sort run");
            let response = request.send().await?;
            let status = response.status();
            let body = response.text().await?;
            let run = decode_sort_response(status, &body)?;
            tracing::debug!(
                len = run.flat_result.len(),
                frame_length = run.frame_length,
                "received sort run"
            );
            Ok(run)
        }
    }
}

/// Error for a non-2xx response.
///
/// The service reports failures as `{"status": "error", "reason": ...}`
/// even on error statuses; anything else falls back to the status line.
fn error_response(status: StatusCode, body: &str) -> ServiceError {
    serde_json::from_str::<SortResponse>(body)
        .ok()
        .and_then(|response| response.rejection())
        .unwrap_or_else(|| ServiceError::Transport(format!("HTTP status {status}")))
}

fn decode_catalog(status: StatusCode, body: &str) -> Result<Vec<String>, ServiceError> {
    if !status.is_success() {
        return Err(error_response(status, body));
    }
    serde_json::from_str(body).map_err(|err| ServiceError::Malformed(err.to_string()))
}

fn decode_sort_response(status: StatusCode, body: &str) -> Result<SortRun, ServiceError> {
    if !status.is_success() {
        return Err(error_response(status, body));
    }
    serde_json::from_str::<SortResponse>(body)
        .map_err(|err| ServiceError::Malformed(err.to_string()))?
        .into_run()
}
