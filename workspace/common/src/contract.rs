//! Request/response payloads of the `/metadata` and `/predict` endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Selectable option lists returned by `GET /metadata`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub districts: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhoods: Option<Vec<String>>,
    /// Set by the backend (with a 200 status) when its label encoders are unavailable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Metadata {
    pub fn districts(&self) -> &[String] {
        self.districts.as_deref().unwrap_or_default()
    }

    pub fn neighborhoods(&self) -> &[String] {
        self.neighborhoods.as_deref().unwrap_or_default()
    }
}

/// Body of `POST /predict`.
///
/// Integer fields that failed to parse are `None` and go out as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub room: Option<i64>,
    pub living_room: Option<i64>,
    pub area: Option<i64>,
    pub floor: Option<i64>,
    pub age: Option<i64>,
    pub district: String,
    pub neighborhood: String,
}

/// Per-model sub-estimates of the stacked regressor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelDetails {
    #[serde(default)]
    pub xgb: Option<f64>,
    #[serde(default)]
    pub cat: Option<f64>,
    #[serde(default)]
    pub rf: Option<f64>,
}

/// Body returned by `POST /predict`, for both success and failure statuses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub prediction: Option<f64>,
    #[serde(default)]
    pub details: Option<ModelDetails>,
    #[serde(default)]
    pub success_rate: Option<f64>,
    /// Failure reason. A plain string for application errors, an array of
    /// objects for request validation errors.
    #[serde(default)]
    pub detail: Option<Value>,
}

impl PredictionResponse {
    /// Headline price, `NaN` when the backend omitted it.
    pub fn price(&self) -> f64 {
        self.prediction.unwrap_or(f64::NAN)
    }

    /// Failure reason as shown to the user.
    pub fn detail_message(&self) -> String {
        match &self.detail {
            Some(Value::String(detail)) => detail.clone(),
            Some(other) => other.to_string(),
            None => "no detail provided".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ContractError {
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result of a `/predict` round trip once the body has been decoded.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
    Success(PredictionResponse),
    Rejected { detail: String },
}

impl PredictionOutcome {
    /// Decode a `/predict` body. The body is decoded before the status is
    /// looked at, so an unreadable error body is a decode error, not a rejection.
    pub fn from_body(status_ok: bool, body: &str) -> Result<Self, ContractError> {
        let response: PredictionResponse = serde_json::from_str(body)?;
        if status_ok {
            Ok(Self::Success(response))
        } else {
            let detail = response.detail_message();
            tracing::warn!("Prediction rejected by server: {}", detail);
            Ok(Self::Rejected { detail })
        }
    }

    /// Text of the blocking alert for a rejected prediction.
    pub fn alert_message(&self) -> Option<String> {
        match self {
            Self::Success(_) => None,
            Self::Rejected { detail } => Some(format!("Prediction failed: {}", detail)),
        }
    }
}

/// Text of the blocking alert when the round trip itself failed.
pub const GENERIC_FAILURE_ALERT: &str = "An error occurred.";
