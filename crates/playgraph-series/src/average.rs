//! Incremental cumulative averaging.

use playgraph_common::{AveragePoint, TimestampMs};

/// Running mean over a weekly timeline, recorded point by point.
///
/// The mean is maintained with the incremental update
/// `m_n = m_{n-1} + (x_n - m_{n-1}) / n`, so no running sum is stored and
/// each update is O(1). The incremental form also keeps precision acceptable
/// on long series where a naive sum would drift.
#[derive(Debug, Clone, Default)]
pub struct CumulativeAverage {
    count: u64,
    mean: f64,
    history: Vec<AveragePoint>,
}

impl CumulativeAverage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one value and records the updated mean at the given instant.
    pub fn update(&mut self, timestamp_ms: TimestampMs, value: f64) {
        self.count += 1;
        self.mean += (value - self.mean) / self.count as f64;
        self.history.push(AveragePoint::new(timestamp_ms, self.mean));
    }

    /// Mean of all values fed so far; 0 before the first update.
    pub fn current(&self) -> f64 {
        self.mean
    }

    /// Number of values fed so far.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// The recorded `(timestamp, mean)` points, one per update.
    pub fn history(&self) -> &[AveragePoint] {
        &self.history
    }

    /// Consumes the accumulator, returning its recorded points.
    pub fn into_history(self) -> Vec<AveragePoint> {
        self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let acc = CumulativeAverage::new();
        assert!(acc.is_empty());
        assert_eq!(acc.len(), 0);
        assert_eq!(acc.current(), 0.0);
        assert!(acc.history().is_empty());
    }

    #[test]
    fn test_running_mean() {
        let mut acc = CumulativeAverage::new();
        acc.update(0, 10.0);
        acc.update(1, 20.0);
        acc.update(2, 30.0);

        let history = acc.history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].average, 10.0);
        assert_eq!(history[1].average, 15.0);
        assert_eq!(history[2].average, 20.0);
        assert_eq!(acc.current(), 20.0);
    }

    #[test]
    fn test_zeros_drag_the_mean_down() {
        let mut acc = CumulativeAverage::new();
        acc.update(0, 10.0);
        acc.update(1, 0.0);
        acc.update(2, 30.0);

        let history = acc.history();
        assert_eq!(history[0].average, 10.0);
        assert_eq!(history[1].average, 5.0);
        assert!((history[2].average - 40.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_history_timestamps_are_preserved() {
        let mut acc = CumulativeAverage::new();
        acc.update(1_108_252_800_000, 3.0);
        acc.update(1_108_857_600_000, 5.0);

        let history = acc.into_history();
        assert_eq!(history[0].timestamp_ms, 1_108_252_800_000);
        assert_eq!(history[1].timestamp_ms, 1_108_857_600_000);
    }

    #[test]
    fn test_long_series_precision() {
        // Mean of 1..=n is (n + 1) / 2 exactly; the incremental form must
        // stay within 1e-9 relative error over ten thousand updates.
        let n = 10_000u64;
        let mut acc = CumulativeAverage::new();
        for i in 1..=n {
            acc.update(i as i64, i as f64);
        }

        let expected = (n as f64 + 1.0) / 2.0;
        let relative_error = (acc.current() - expected).abs() / expected;
        assert!(
            relative_error < 1e-9,
            "relative error {} exceeds tolerance",
            relative_error
        );
    }
}
