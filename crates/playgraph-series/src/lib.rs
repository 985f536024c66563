//! Weekly play-count series preparation.
//!
//! Turns a sparse, ascending list of `(week, plays)` observations into the
//! dense, chronologically contiguous `[timestamp, value]` series a line chart
//! expects, with optional cumulative averaging over the same timeline.

pub mod average;
pub mod builder;
pub mod ticks;
pub mod weeks;

pub use average::CumulativeAverage;
pub use builder::{build_series, SeriesOptions, WeeklySeries, WeeklySeriesBuilder};
