//! Axis tick data for monthly bars and play-count histograms.
//!
//! These helpers only shape `(index, label)` pairs; drawing them is the
//! charting collaborator's job.

use playgraph_common::{ensure, Result};

/// Month labels for a twelve-bucket monthly axis.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Index/label pairs for a monthly bar chart axis.
pub fn month_ticks() -> Vec<(usize, &'static str)> {
    MONTH_LABELS
        .iter()
        .enumerate()
        .map(|(i, &label)| (i, label))
        .collect()
}

/// Index/label pairs for histogram buckets of the given width.
///
/// Labels follow the `0-50`, `51-100`, `101-150` pattern: each bucket after
/// the first starts one past the previous bucket's end.
pub fn bucket_labels(step: u32, buckets: usize) -> Result<Vec<(usize, String)>> {
    ensure!(step > 0, "histogram bucket step must be positive");
    Ok((0..buckets)
        .map(|i| {
            let low = step as usize * i + usize::from(i != 0);
            let high = step as usize * (i + 1);
            (i, format!("{}-{}", low, high))
        })
        .collect())
}
