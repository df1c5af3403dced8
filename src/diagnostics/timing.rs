use serde::Serialize;
use std::time::Instant;

/// Wall time of one labelled stage, e.g. a `(preprocessing, threshold)` pair.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }

    /// Stage timing measured from `start` until now.
    pub fn since(label: impl Into<String>, start: Instant) -> Self {
        Self::new(label, start.elapsed().as_secs_f64() * 1000.0)
    }
}

/// Total run time plus the per-stage entries, in enumeration order.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, stage: StageTiming) {
        self.stages.push(stage);
    }

    /// Sum of stage times. Exceeds `total_ms` when stages ran in parallel.
    pub fn stage_sum_ms(&self) -> f64 {
        self.stages.iter().map(|s| s.elapsed_ms).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakdown_keeps_push_order_and_sums_stages() {
        let mut timing = TimingBreakdown::default();
        timing.push(StageTiming::new("Conservative T128", 1.5));
        timing.push(StageTiming::new("Gaussian Blur T150", 2.5));
        assert_eq!(timing.stages[0].label, "Conservative T128");
        assert_eq!(timing.stages[1].label, "Gaussian Blur T150");
        assert_eq!(timing.stage_sum_ms(), 4.0);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let mut timing = TimingBreakdown {
            total_ms: 1.0,
            ..Default::default()
        };
        timing.push(StageTiming::new("Simple Median T100", 0.5));
        let json = serde_json::to_string(&timing).unwrap();
        assert_eq!(
            json,
            r#"{"totalMs":1.0,"stages":[{"label":"Simple Median T100","elapsedMs":0.5}]}"#
        );
    }
}
