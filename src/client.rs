use anyhow::{Context, Result};
use common::{Metadata, PredictionOutcome, PredictionRequest};
use tracing::{debug, error, info, trace, warn};

/// HTTP client for the `/metadata` and `/predict` endpoints
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: reqwest::Client,
    api_base: String,
}

impl PredictionClient {
    pub fn new(api_base: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base, endpoint)
    }

    /// Fetch the selectable districts and neighborhoods
    pub async fn metadata(&self) -> Result<Metadata> {
        let url = self.url("/metadata");
        debug!("GET request to: {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Request failed: GET {}", url))?;

        if !response.status().is_success() {
            error!("GET /metadata - HTTP error: {}", response.status());
            anyhow::bail!("HTTP error: {}", response.status());
        }

        trace!("GET /metadata - Response received, parsing JSON");
        let metadata: Metadata = response
            .json()
            .await
            .context("Failed to parse metadata response")?;

        if let Some(reason) = &metadata.error {
            warn!("Metadata endpoint reported an error: {}", reason);
        }
        info!(
            "Fetched {} districts and {} neighborhoods",
            metadata.districts().len(),
            metadata.neighborhoods().len()
        );
        Ok(metadata)
    }

    /// Submit property features. A server-side rejection is returned as
    /// `PredictionOutcome::Rejected`, not as an error.
    pub async fn predict(&self, request: &PredictionRequest) -> Result<PredictionOutcome> {
        let url = self.url("/predict");
        debug!("POST request to: {}", url);

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .with_context(|| format!("Request failed: POST {}", url))?;

        let status = response.status();
        if !status.is_success() {
            warn!("POST /predict - Non-OK response: {}", status);
        }

        let body = response
            .text()
            .await
            .context("Failed to read prediction response body")?;
        trace!("POST /predict - Response received ({} bytes)", body.len());

        let outcome = PredictionOutcome::from_body(status.is_success(), &body)?;
        Ok(outcome)
    }
}
