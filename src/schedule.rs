//! Timing schedule types shared by the generators and the blender
//!
//! A schedule is an ordered list of acquisition steps, each pairing a label
//! duration (LD) with the post-label delay (PLD) that follows it. Step order
//! matches acquisition order.

use thiserror::Error;

/// Errors raised while computing a timing schedule
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimingError {
    #[error("Invalid step count: {0} (must be >= 1)")]
    InvalidStepCount(usize),

    #[error(
        "Exponential model out of domain at step {step}: signal fraction {argument} leaves no signal to label (label duration too short for the step count, or minimum delay too long)"
    )]
    DomainError { step: usize, argument: f64 },

    #[error("Step count {value} is too large (at most {max})")]
    StepCountTooLarge { value: usize, max: usize },

    #[error("{name} must be a finite number, got {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },

    #[error("Schedule length mismatch: {left} vs {right} steps")]
    LengthMismatch { left: usize, right: usize },
}

pub type Result<T> = std::result::Result<T, TimingError>;

/// Largest step count a generator will allocate a schedule for
pub const MAX_STEPS: usize = 4096;

/// Reject step counts the generators cannot produce
pub(crate) fn check_step_count(step_count: usize) -> Result<()> {
    if step_count == 0 {
        return Err(TimingError::InvalidStepCount(step_count));
    }
    if step_count > MAX_STEPS {
        return Err(TimingError::StepCountTooLarge {
            value: step_count,
            max: MAX_STEPS,
        });
    }
    Ok(())
}

/// A single acquisition step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepTiming {
    /// Label duration in milliseconds
    pub label_duration: f64,
    /// Post-label delay in milliseconds
    pub post_label_delay: f64,
}

/// Ordered label durations and post-label delays of equal length
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schedule {
    lds: Vec<f64>,
    plds: Vec<f64>,
}

impl Schedule {
    /// Build a schedule from parallel LD and PLD sequences
    ///
    /// Fails with [`TimingError::LengthMismatch`] when the sequences differ
    /// in length.
    pub fn new(lds: Vec<f64>, plds: Vec<f64>) -> Result<Self> {
        if lds.len() != plds.len() {
            return Err(TimingError::LengthMismatch {
                left: lds.len(),
                right: plds.len(),
            });
        }
        Ok(Self { lds, plds })
    }

    /// Build a schedule with room for `steps` pairs
    pub(crate) fn with_capacity(steps: usize) -> Self {
        Self {
            lds: Vec::with_capacity(steps),
            plds: Vec::with_capacity(steps),
        }
    }

    /// Append one step, keeping both sequences the same length
    pub(crate) fn push(&mut self, label_duration: f64, post_label_delay: f64) {
        self.lds.push(label_duration);
        self.plds.push(post_label_delay);
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.lds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lds.is_empty()
    }

    /// Label durations in step order (ms)
    pub fn label_durations(&self) -> &[f64] {
        &self.lds
    }

    /// Post-label delays in step order (ms)
    pub fn post_label_delays(&self) -> &[f64] {
        &self.plds
    }

    /// Iterate over (LD, PLD) pairs in step order
    pub fn steps(&self) -> impl Iterator<Item = StepTiming> + '_ {
        self.lds
            .iter()
            .zip(&self.plds)
            .map(|(&label_duration, &post_label_delay)| StepTiming {
                label_duration,
                post_label_delay,
            })
    }

    /// Sum of all label durations (ms)
    pub fn total_label_duration(&self) -> f64 {
        self.lds.iter().sum()
    }

    /// Split into the owned `(lds, plds)` sequences
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.lds, self.plds)
    }
}
