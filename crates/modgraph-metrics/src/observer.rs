//! Progress reporting for [`MetricsAnalyzer`](crate::MetricsAnalyzer).
//!
//! The analyzer never writes progress anywhere on its own. Hosts that want
//! it pass an [`AnalysisObserver`]; [`StageTimings`] is the stock one and
//! records how long each stage took.

use std::cell::RefCell;
use std::fmt;
use std::time::Duration;

use serde_json::json;
use tracing::debug;

/// One phase of a full analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    Centrality,
    Structure,
    Community,
    Rankings,
}

impl Stage {
    pub const ALL: [Self; 4] = [Self::Centrality, Self::Structure, Self::Community, Self::Rankings];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Centrality => "centrality",
            Self::Structure => "structure",
            Self::Community => "community",
            Self::Rankings => "rankings",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives stage boundaries from the analyzer. Both methods default to
/// doing nothing.
pub trait AnalysisObserver {
    fn stage_started(&self, _stage: Stage) {}

    fn stage_finished(&self, _stage: Stage, _elapsed: Duration) {}
}

/// Observer that records the duration of every finished stage.
#[derive(Debug, Default)]
pub struct StageTimings {
    samples: RefCell<Vec<(Stage, Duration)>>,
}

impl StageTimings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded `(stage, elapsed)` pairs in completion order.
    #[must_use]
    pub fn samples(&self) -> Vec<(Stage, Duration)> {
        self.samples.borrow().clone()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.borrow().is_empty()
    }

    #[must_use]
    pub fn total(&self) -> Duration {
        self.samples.borrow().iter().map(|(_, d)| *d).sum()
    }

    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let stages = self
            .samples
            .borrow()
            .iter()
            .map(|(stage, elapsed)| json!({ "stage": stage.as_str(), "elapsed_us": elapsed.as_micros() }))
            .collect::<Vec<_>>();
        json!({ "stages": stages, "total_us": self.total().as_micros() })
    }

    /// Render as a two-column table for terminal output.
    #[must_use]
    pub fn display_table(&self) -> String {
        let samples = self.samples.borrow();
        if samples.is_empty() {
            return "No stages recorded.".to_string();
        }

        let mut out = String::new();
        out.push_str("stage              elapsed\n");
        out.push_str("--------------------------\n");
        for (stage, elapsed) in samples.iter() {
            out.push_str(&format!("{:<14} {:>11}\n", stage.as_str(), format_duration(*elapsed)));
        }
        out.push_str(&format!("{:<14} {:>11}\n", "total", format_duration(self.total())));
        out
    }
}

impl AnalysisObserver for StageTimings {
    fn stage_started(&self, stage: Stage) {
        debug!(%stage, "stage started");
    }

    fn stage_finished(&self, stage: Stage, elapsed: Duration) {
        debug!(%stage, elapsed_us = elapsed.as_micros(), "stage finished");
        self.samples.borrow_mut().push((stage, elapsed));
    }
}

fn format_duration(duration: Duration) -> String {
    let micros = duration.as_micros();

    if micros >= 1_000_000 {
        let secs = micros / 1_000_000;
        let millis = (micros % 1_000_000) / 1_000;
        format!("{secs}.{millis:03}s")
    } else if micros >= 1_000 {
        let millis = micros / 1_000;
        let rem = micros % 1_000;
        format!("{millis}.{rem:03}ms")
    } else {
        format!("{micros}µs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_completion_order() {
        let timings = StageTimings::new();
        assert!(timings.is_empty());
        timings.stage_started(Stage::Structure);
        timings.stage_finished(Stage::Structure, Duration::from_millis(3));
        timings.stage_finished(Stage::Centrality, Duration::from_micros(40));

        assert_eq!(
            timings.samples(),
            vec![
                (Stage::Structure, Duration::from_millis(3)),
                (Stage::Centrality, Duration::from_micros(40)),
            ]
        );
        assert_eq!(timings.total(), Duration::from_micros(3_040));
    }

    #[test]
    fn table_and_json_render() {
        let timings = StageTimings::new();
        assert_eq!(timings.display_table(), "No stages recorded.");

        timings.stage_finished(Stage::Community, Duration::from_micros(1_500));
        let table = timings.display_table();
        assert!(table.contains("community"));
        assert!(table.contains("1.500ms"));

        let json = timings.to_json();
        assert_eq!(json["stages"][0]["stage"], "community");
        assert_eq!(json["total_us"], 1_500);
    }

    #[test]
    fn durations_pick_a_unit() {
        assert_eq!(format_duration(Duration::from_micros(12)), "12µs");
        assert_eq!(format_duration(Duration::from_micros(2_345)), "2.345ms");
        assert_eq!(format_duration(Duration::from_millis(1_200)), "1.200s");
    }
}
