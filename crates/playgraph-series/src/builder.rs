//! Densification of sparse weekly observations into chart-ready series.

use crate::average::CumulativeAverage;
use crate::weeks;
use playgraph_common::{
    AveragePoint, PlayGraphError, PlayPoint, Result, WeekCount, WeekIndex,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Options controlling densification, as supplied by callers or job configs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesOptions {
    /// First week of the output range; the first observation's week when
    /// omitted. Must not be after the first observation.
    pub start: Option<WeekIndex>,
    /// Last week of the output range; the last observation's week when
    /// omitted. Must not be before the last observation.
    pub end: Option<WeekIndex>,
    /// Also compute the parallel cumulative-average series.
    pub show_averages: bool,
}

/// Dense weekly output handed to the charting collaborator.
///
/// Both sequences are ascending and contiguous: one point per week, spaced
/// exactly one week apart, serialized as `[timestamp, value]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklySeries {
    pub series: Vec<PlayPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub averages: Option<Vec<AveragePoint>>,
}

/// Builds gap-free weekly play series from sparse observations.
///
/// Weeks absent from the input get zero-valued entries, so a line chart drawn
/// from the output dips to the axis instead of interpolating across silent
/// stretches.
#[derive(Debug, Clone, Default)]
pub struct WeeklySeriesBuilder {
    start: Option<WeekIndex>,
    end: Option<WeekIndex>,
    show_averages: bool,
}

impl WeeklySeriesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_options(options: &SeriesOptions) -> Self {
        Self {
            start: options.start,
            end: options.end,
            show_averages: options.show_averages,
        }
    }

    /// Sets the first week of the output range.
    pub fn with_start(mut self, week: WeekIndex) -> Self {
        self.start = Some(week);
        self
    }

    /// Sets the last week of the output range.
    pub fn with_end(mut self, week: WeekIndex) -> Self {
        self.end = Some(week);
        self
    }

    /// Enables the parallel cumulative-average series.
    pub fn with_averages(mut self, enabled: bool) -> Self {
        self.show_averages = enabled;
        self
    }

    /// Densifies the observations into one point per week over the effective
    /// range, zero-filling every missing week.
    ///
    /// When averaging is enabled the running mean is fed every dense entry,
    /// zeros included, so quiet weeks pull the average down.
    pub fn build(&self, observations: &[WeekCount]) -> Result<WeeklySeries> {
        self.validate(observations)?;

        let effective_start = match self.start {
            Some(week) => week,
            // Validation guarantees observations are non-empty here.
            None => observations[0].week,
        };

        let mut series = Vec::new();
        let mut averages = if self.show_averages {
            Some(CumulativeAverage::new())
        } else {
            None
        };
        let mut last_week = effective_start - 1;

        for obs in observations {
            // Zero-fill weeks missing at the beginning or in the middle.
            while last_week != obs.week - 1 {
                last_week += 1;
                push_week(&mut series, &mut averages, last_week, 0);
            }
            push_week(&mut series, &mut averages, obs.week, obs.plays);
            last_week = obs.week;
        }

        // Zero-fill weeks missing at the end.
        if let Some(end) = self.end {
            while last_week < end {
                last_week += 1;
                push_week(&mut series, &mut averages, last_week, 0);
            }
        }

        debug!(
            "Densified {} observations into {} weekly points",
            observations.len(),
            series.len()
        );

        Ok(WeeklySeries {
            series,
            averages: averages.map(CumulativeAverage::into_history),
        })
    }

    fn validate(&self, observations: &[WeekCount]) -> Result<()> {
        for (i, pair) in observations.windows(2).enumerate() {
            if pair[1].week <= pair[0].week {
                return Err(PlayGraphError::unsorted_input_at(
                    format!(
                        "week {} does not ascend past week {}",
                        pair[1].week, pair[0].week
                    ),
                    i + 1,
                ));
            }
        }

        match (observations.first(), observations.last()) {
            (Some(first), Some(last)) => {
                if let Some(start) = self.start {
                    if start > first.week {
                        return Err(PlayGraphError::invalid_range(format!(
                            "start week {} is after the first observation (week {}); \
                             backward fill is not supported",
                            start, first.week
                        )));
                    }
                }
                if let Some(end) = self.end {
                    if end < last.week {
                        return Err(PlayGraphError::invalid_range(format!(
                            "end week {} is before the last observation (week {})",
                            end, last.week
                        )));
                    }
                }
            }
            _ => {
                // An all-zero series can still be built, but only with both
                // bounds supplied.
                if self.start.is_none() {
                    return Err(PlayGraphError::invalid_range(
                        "empty observations require an explicit start week",
                    ));
                }
                if self.end.is_none() {
                    return Err(PlayGraphError::invalid_range(
                        "empty observations require an explicit end week",
                    ));
                }
            }
        }

        if let (Some(start), Some(end)) = (self.start, self.end) {
            if start > end {
                return Err(PlayGraphError::invalid_range(format!(
                    "start week {} is after end week {}",
                    start, end
                )));
            }
        }

        Ok(())
    }
}

/// Builds a dense series in one call from caller-supplied options.
pub fn build_series(
    observations: &[WeekCount],
    options: &SeriesOptions,
) -> Result<WeeklySeries> {
    WeeklySeriesBuilder::from_options(options).build(observations)
}

fn push_week(
    series: &mut Vec<PlayPoint>,
    averages: &mut Option<CumulativeAverage>,
    week: WeekIndex,
    plays: u32,
) {
    let timestamp_ms = weeks::timestamp_of_week(week);
    series.push(PlayPoint::new(timestamp_ms, plays));
    if let Some(acc) = averages {
        acc.update(timestamp_ms, f64::from(plays));
    }
}
