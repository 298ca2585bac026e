//! Result bundle handed to the output formatters
//!
//! Besides the per-delay steps, the decoded scanner series also holds one
//! combined perfusion image that uses the whole labeling time (CV5) and the
//! shortest delay (CV4). The report carries that entry so every output
//! format can list it after the steps.

use crate::schedule::Schedule;
use crate::timing::TimingParams;

/// One row of the results table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRow {
    /// 1-based acquisition order
    pub index: usize,
    pub label_duration_ms: f64,
    pub post_label_delay_ms: f64,
}

/// Parameters plus the computed schedule, ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct TimingReport {
    pub params: TimingParams,
    pub steps: Vec<StepRow>,
    /// Combined image timing: (label duration, post-label delay) in ms
    pub combined: (f64, f64),
}

impl TimingReport {
    pub fn new(params: TimingParams, schedule: &Schedule) -> Self {
        let steps = schedule
            .steps()
            .enumerate()
            .map(|(i, step)| StepRow {
                index: i + 1,
                label_duration_ms: step.label_duration,
                post_label_delay_ms: step.post_label_delay,
            })
            .collect();

        Self {
            params,
            steps,
            combined: (params.total_label_duration, params.min_delay),
        }
    }

    /// Sum of step label durations (ms)
    pub fn total_label_duration(&self) -> f64 {
        self.steps.iter().map(|s| s.label_duration_ms).sum()
    }

    /// Delay of the last step, i.e. the longest one for any sane input
    pub fn last_post_label_delay(&self) -> Option<f64> {
        self.steps.last().map(|s| s.post_label_delay_ms)
    }
}
