use anyhow::Result;
use common::{CATEGORY_LABELS, Estimate, FormInput, PredictionOutcome, SimulatedAverages, format_amount};
use tracing::{debug, info};

use crate::client::PredictionClient;

/// Run one prediction and fold it into a fresh [`Estimate`].
/// A rejection by the server becomes an error carrying its detail.
pub async fn estimate(client: &PredictionClient, input: FormInput) -> Result<Estimate> {
    let request = input.to_request();
    debug!("Prediction request: {:?}", request);

    match client.predict(&request).await? {
        PredictionOutcome::Success(response) => {
            let mut sampler = rand::random::<f64>;
            let averages = SimulatedAverages::around(response.price(), &mut sampler);

            let mut estimate = Estimate::default();
            estimate.apply(&response, averages);
            info!("Prediction succeeded for {} / {}", request.district, request.neighborhood);
            Ok(estimate)
        }
        rejected @ PredictionOutcome::Rejected { .. } => {
            let message = rejected
                .alert_message()
                .unwrap_or_else(|| "Prediction failed".to_string());
            anyhow::bail!(message)
        }
    }
}

pub async fn show_prediction(client: &PredictionClient, input: FormInput) -> Result<()> {
    let estimate = estimate(client, input).await?;
    let board = &estimate.board;
    let placeholder = || "-".to_string();

    println!(
        "Predicted rent: {} TL",
        board.predicted_price.clone().unwrap_or_else(placeholder)
    );
    if let Some(rate) = &board.success_rate {
        println!("Model accuracy: {}", rate);
    }
    println!("  XGBoost:       {}", board.xgb_price.clone().unwrap_or_else(placeholder));
    println!("  CatBoost:      {}", board.cat_price.clone().unwrap_or_else(placeholder));
    println!("  Random Forest: {}", board.rf_price.clone().unwrap_or_else(placeholder));

    println!("Comparison (district and neighborhood values are simulated):");
    for (label, value) in CATEGORY_LABELS.iter().zip(estimate.chart.values()) {
        println!("  {:<14} {}", label, format_amount(value));
    }
    Ok(())
}
