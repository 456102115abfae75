use common::{PredictionOutcome, PredictionRequest};
use crate::api_client;

/// Submit property features and decode the answer.
///
/// A rejection by the server is `Ok(PredictionOutcome::Rejected)`; `Err` is
/// reserved for requests that never produced a readable body.
pub async fn predict(request: &PredictionRequest) -> Result<PredictionOutcome, String> {
    log::debug!(
        "Requesting prediction for {} / {}",
        request.district,
        request.neighborhood
    );
    let raw = api_client::post("/predict", request).await?;

    let outcome = PredictionOutcome::from_body(raw.ok, &raw.body).map_err(|e| {
        let error_msg = e.to_string();
        log::error!("POST /predict - {} (status {})", error_msg, raw.status);
        error_msg
    })?;

    match &outcome {
        PredictionOutcome::Success(response) => {
            log::info!("Received prediction: {}", response.price())
        }
        PredictionOutcome::Rejected { detail } => {
            log::warn!("Prediction rejected (status {}): {}", raw.status, detail)
        }
    }
    Ok(outcome)
}
