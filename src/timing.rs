//! Top-level timing computation
//!
//! Runs both generators on the same inputs and blends them by the
//! linearity weight. Pure and stateless: every call recomputes from scratch.

use crate::blend::blend;
use crate::exponential::exponential;
use crate::linear::linear;
use crate::schedule::{Result, Schedule, TimingError};

/// Protocol parameters for one multi-PLD acquisition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingParams {
    /// Shortest post-label delay (CV4, ms)
    pub min_delay: f64,
    /// Total perfusion labeling time (CV5, ms)
    pub total_label_duration: f64,
    /// Number of delay steps (CV6)
    pub step_count: usize,
    /// Blend weight between linear (1.0) and exponential (0.0) schedules (CV7)
    pub linearity: f64,
}

impl TimingParams {
    pub fn new(min_delay: f64, total_label_duration: f64, step_count: usize, linearity: f64) -> Self {
        Self {
            min_delay,
            total_label_duration,
            step_count,
            linearity,
        }
    }

    /// Reject NaN and infinite inputs, which would otherwise yield NaN steps
    pub fn check_finite(&self) -> Result<()> {
        for (name, value) in [
            ("min_delay", self.min_delay),
            ("total_label_duration", self.total_label_duration),
            ("linearity", self.linearity),
        ] {
            if !value.is_finite() {
                return Err(TimingError::NonFiniteParameter { name, value });
            }
        }
        Ok(())
    }
}

impl Default for TimingParams {
    fn default() -> Self {
        Self::new(1000.0, 3500.0, 7, 0.5)
    }
}

/// Compute the blended schedule for `params`
///
/// Non-finite parameters are rejected up front. Errors from either generator
/// are returned unchanged; no partial schedule is produced.
pub fn compute_timing(params: &TimingParams) -> Result<Schedule> {
    params.check_finite()?;
    let lin = linear(params.min_delay, params.total_label_duration, params.step_count)?;
    let exp = exponential(params.min_delay, params.total_label_duration, params.step_count)?;
    blend(&lin, &exp, params.linearity)
}
