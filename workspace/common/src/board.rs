use crate::chart::{ChartState, SimulatedAverages};
use crate::contract::PredictionResponse;
use crate::format::{format_amount, format_lira, format_percent};

/// Display text of the result panel. `None` means the slot has never been
/// filled; a filled slot keeps its text until a later response replaces it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceBoard {
    pub predicted_price: Option<String>,
    pub xgb_price: Option<String>,
    pub cat_price: Option<String>,
    pub rf_price: Option<String>,
    pub success_rate: Option<String>,
}

/// Zero, `NaN` and missing sub-estimates all leave their slot untouched.
fn truthy(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

impl PriceBoard {
    pub fn apply(&mut self, response: &PredictionResponse) {
        self.predicted_price = Some(format_amount(response.price()));

        if let Some(details) = &response.details {
            if let Some(xgb) = truthy(details.xgb) {
                self.xgb_price = Some(format_lira(xgb));
            }
            if let Some(cat) = truthy(details.cat) {
                self.cat_price = Some(format_lira(cat));
            }
            if let Some(rf) = truthy(details.rf) {
                self.rf_price = Some(format_lira(rf));
            }
        }

        if let Some(rate) = response.success_rate.filter(|r| r.is_finite()) {
            self.success_rate = Some(format_percent(rate));
        }
    }
}

/// Everything a successful prediction changes on the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Estimate {
    pub board: PriceBoard,
    pub chart: ChartState,
}

impl Estimate {
    pub fn apply(&mut self, response: &PredictionResponse, averages: SimulatedAverages) {
        self.board.apply(response);
        self.chart.record(response.price(), averages);
        tracing::info!(
            "Estimate updated: headline={:?}, chart={:?}",
            self.board.predicted_price,
            self.chart.values()
        );
    }
}
