//! Running one export job: observations in, chart payload out.

use crate::config::JobConfig;
use playgraph_common::{Result, WeekCount};
use playgraph_series::{build_series, WeeklySeries};
use std::fs;
use std::io::Write;
use tracing::info;

/// Read the job's observations, densify them, and return the chart series.
pub fn build_payload(config: &JobConfig) -> Result<WeeklySeries> {
    let raw = fs::read_to_string(&config.input)?;
    let observations: Vec<WeekCount> = serde_json::from_str(&raw)?;
    info!(
        "Loaded {} observations from {}",
        observations.len(),
        config.input.display()
    );

    build_series(&observations, &config.series)
}

/// Run one export job end to end, writing the payload to the configured
/// output or stdout.
pub fn run(config: &JobConfig) -> Result<()> {
    let series = build_payload(config)?;
    let payload = serde_json::to_string(&series)?;

    match &config.output {
        Some(path) => {
            fs::write(path, &payload)?;
            info!(
                "Wrote {} weekly points to {}",
                series.series.len(),
                path.display()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(payload.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
