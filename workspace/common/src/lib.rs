//! Shared contract of the rent estimator.
//! Payload shapes of the `/metadata` and `/predict` endpoints plus the pure
//! logic that turns form input into requests and responses into page state,
//! used by both the browser app and the command-line client.

mod board;
mod chart;
mod contract;
mod form;
mod format;
mod sequence;

pub use board::{Estimate, PriceBoard};
pub use chart::{
    BAR_COLORS, CATEGORY_LABELS, ChartState, DATASET_LABEL, SimulatedAverages, UnitSampler,
};
pub use contract::{
    ContractError, GENERIC_FAILURE_ALERT, Metadata, ModelDetails, PredictionOutcome,
    PredictionRequest, PredictionResponse,
};
pub use form::{FormInput, parse_int};
pub use format::{format_amount, format_lira, format_percent, round_half_up};
pub use sequence::{RequestSequencer, Ticket};
