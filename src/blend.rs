//! Weighted blend of two schedules
//!
//! The blend is a plain element-wise linear combination. The weight is not
//! clamped: values outside [0, 1] extrapolate beyond either schedule.

use crate::schedule::{Result, Schedule, TimingError};

/// Blend `linear` and `exponential` with weight `linearity`
///
/// `value = linearity * linear + (1 - linearity) * exponential`, applied to
/// label durations and post-label delays alike. A weight of 1.0 returns the
/// linear schedule, 0.0 returns the exponential one.
pub fn blend(linear: &Schedule, exponential: &Schedule, linearity: f64) -> Result<Schedule> {
    if linear.len() != exponential.len() {
        return Err(TimingError::LengthMismatch {
            left: linear.len(),
            right: exponential.len(),
        });
    }

    let mix = |a: f64, b: f64| linearity * a + (1.0 - linearity) * b;

    let mut blended = Schedule::with_capacity(linear.len());
    for (lin, exp) in linear.steps().zip(exponential.steps()) {
        blended.push(
            mix(lin.label_duration, exp.label_duration),
            mix(lin.post_label_delay, exp.post_label_delay),
        );
    }

    Ok(blended)
}
