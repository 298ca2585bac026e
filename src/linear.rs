//! Linear timing schedule
//!
//! Splits the total label duration evenly across all steps and spaces the
//! post-label delays by that same amount, starting at the minimum delay.

use crate::schedule::{check_step_count, Result, Schedule};

/// Generate the linear schedule
///
/// Every step gets `total_label_duration / step_count`, and
/// `pld[i] = min_delay + i * step_label_duration`. Inputs are taken as
/// given; non-finite values propagate into the result, so callers wanting a
/// checked schedule go through [`crate::timing::compute_timing`].
pub fn linear(min_delay: f64, total_label_duration: f64, step_count: usize) -> Result<Schedule> {
    check_step_count(step_count)?;

    let step_label_duration = total_label_duration / step_count as f64;
    let mut schedule = Schedule::with_capacity(step_count);
    for i in 0..step_count {
        schedule.push(step_label_duration, min_delay + step_label_duration * i as f64);
    }

    Ok(schedule)
}
