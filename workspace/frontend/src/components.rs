pub mod comparison_chart;
pub mod estimator;
pub mod price_board;
