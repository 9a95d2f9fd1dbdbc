use std::sync::Mutex;

use serde::Serialize;

/// Counters a host keeps across evaluations. Formulas never touch it.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Metrics {
    pub evaluated: usize,
    pub domain_violations: usize,
    pub patterns: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics::default()),
        }
    }

    pub fn record_evaluation(&self, valid: bool) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.evaluated += 1;
            if !valid {
                metrics.domain_violations += 1;
            }
        }
    }

    pub fn record_pattern(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.patterns += 1;
        }
    }

    pub fn snapshot(&self) -> Metrics {
        if let Ok(metrics) = self.inner.lock() {
            *metrics
        } else {
            Metrics::default()
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_violations_separately() {
        let recorder = MetricsRecorder::new();
        recorder.record_evaluation(true);
        recorder.record_evaluation(false);
        recorder.record_pattern();
        assert_eq!(
            recorder.snapshot(),
            Metrics {
                evaluated: 2,
                domain_violations: 1,
                patterns: 1,
            }
        );
    }
}
