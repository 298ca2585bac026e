//! Exponential (signal-matched) timing schedule
//!
//! Labeled arterial blood relaxes towards equilibrium with time constant
//! T1a, so a bolus measured after a long delay carries less signal than one
//! measured early. This generator picks each step's label duration so that
//! every step contributes the same share of the total perfusion signal:
//!
//! ```text
//! S_total  = (1 - exp(-LD_total / T1a)) * exp(-PLD_min / T1a)
//! S_step   = S_total / N
//! LD_i     = -T1a * ln(1 - S_step * exp(PLD_i / T1a))
//! PLD_i+1  = PLD_i + LD_i
//! ```
//!
//! Later steps sit further down the relaxation curve and therefore get
//! longer label durations.

use crate::schedule::{check_step_count, Result, Schedule, TimingError};

/// Longitudinal relaxation time of arterial blood at 3T (ms)
pub const T1A_MS: f64 = 1650.0;

/// Total labeled signal available to the protocol, as a fraction of M0
pub fn total_signal(min_delay: f64, total_label_duration: f64) -> f64 {
    (1.0 - (-total_label_duration / T1A_MS).exp()) * (-min_delay / T1A_MS).exp()
}

/// Generate the exponential schedule
///
/// Fails with [`TimingError::DomainError`] when a step's signal fraction
/// `S_step * exp(PLD_i / T1a)` is not below 1 (or is not a number), since
/// the logarithm would be taken of a non-positive value. No partial schedule
/// is returned.
pub fn exponential(
    min_delay: f64,
    total_label_duration: f64,
    step_count: usize,
) -> Result<Schedule> {
    check_step_count(step_count)?;

    let target_per_step = total_signal(min_delay, total_label_duration) / step_count as f64;

    let mut schedule = Schedule::with_capacity(step_count);
    let mut pld = min_delay;
    for step in 0..step_count {
        let argument = target_per_step * (pld / T1A_MS).exp();
        // NaN shows up when exp(-PLD/T1a) underflows and exp(PLD/T1a) overflows
        if argument.is_nan() || argument >= 1.0 {
            return Err(TimingError::DomainError { step, argument });
        }

        let ld = -T1A_MS * (1.0 - argument).ln();
        schedule.push(ld, pld);
        pld += ld;
    }

    Ok(schedule)
}
