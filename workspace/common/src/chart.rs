//! Data behind the price comparison bar chart.
//!
//! The backend does not return district or neighborhood averages yet. Until it
//! does, the two comparison bars are simulated around the predicted price by
//! [`SimulatedAverages`] and must not be read as real statistics.

pub const DATASET_LABEL: &str = "Fiyat (TL)";

/// Category labels: your home, district average, neighborhood average.
pub const CATEGORY_LABELS: [&str; 3] = ["Sizin Eviniz", "İlçe Ort.", "Mahalle Ort."];

pub const BAR_COLORS: [&str; 3] = ["#4f46e5", "#9ca3af", "#f43f5e"];

/// Source of uniformly distributed samples in `[0, 1)`.
pub trait UnitSampler {
    fn sample(&mut self) -> f64;
}

impl<F> UnitSampler for F
where
    F: FnMut() -> f64,
{
    fn sample(&mut self) -> f64 {
        self()
    }
}

/// Placeholder comparison values drawn around a predicted price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedAverages {
    /// Within `[0.9, 1.1)` of the price.
    pub district: f64,
    /// Within `[0.95, 1.05)` of the price.
    pub neighborhood: f64,
}

impl SimulatedAverages {
    pub fn around<S: UnitSampler + ?Sized>(price: f64, sampler: &mut S) -> Self {
        let district = price * (0.9 + sampler.sample() * 0.2);
        let neighborhood = price * (0.95 + sampler.sample() * 0.1);
        tracing::trace!(
            "Simulated averages around {}: district={}, neighborhood={}",
            price,
            district,
            neighborhood
        );
        Self {
            district,
            neighborhood,
        }
    }
}

/// Bar values in [`CATEGORY_LABELS`] order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChartState {
    values: [f64; 3],
}

impl ChartState {
    pub fn zeroed() -> Self {
        Self::default()
    }

    pub fn values(&self) -> [f64; 3] {
        self.values
    }

    pub fn user_price(&self) -> f64 {
        self.values[0]
    }

    /// Replace all three bars after a successful prediction. The first bar
    /// keeps the unrounded price.
    pub fn record(&mut self, price: f64, averages: SimulatedAverages) {
        self.values = [price, averages.district, averages.neighborhood];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<f64>);

    impl UnitSampler for Fixed {
        fn sample(&mut self) -> f64 {
            self.0.remove(0)
        }
    }

    #[test]
    fn test_zeroed() {
        assert_eq!(ChartState::zeroed().values(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_averages_bounds() {
        let price = 1234567.0;

        let low = SimulatedAverages::around(price, &mut Fixed(vec![0.0, 0.0]));
        assert_eq!(low.district, price * 0.9);
        assert_eq!(low.neighborhood, price * 0.95);

        let high = SimulatedAverages::around(price, &mut Fixed(vec![0.999_999, 0.999_999]));
        assert!(high.district < price * 1.1);
        assert!(high.neighborhood < price * 1.05);
    }

    #[test]
    fn test_averages_with_closure_sampler() {
        let mut sampler = || 0.5;
        let averages = SimulatedAverages::around(1000.0, &mut sampler);

        assert!((averages.district - 1000.0).abs() < 1e-9);
        assert!((averages.neighborhood - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_record_keeps_raw_price() {
        let price = 1234567.0;
        let mut state = ChartState::zeroed();
        let averages = SimulatedAverages::around(price, &mut Fixed(vec![0.25, 0.75]));

        state.record(price, averages);

        let [user, district, neighborhood] = state.values();
        assert_eq!(user, 1234567.0);
        assert_eq!(state.user_price(), 1234567.0);
        assert!(district >= price * 0.9 && district <= price * 1.1);
        assert!(neighborhood >= price * 0.95 && neighborhood <= price * 1.05);
    }
}
