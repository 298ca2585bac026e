//! Input validation for scanner timing parameters
//!
//! The timing core accepts any numbers; this layer enforces the ranges the
//! scanner console documents for each control variable before the core is
//! called:
//!
//! | CV  | Parameter            | Accepted        |
//! |-----|----------------------|-----------------|
//! | CV4 | min post-label delay | 700 ..= 4000 ms |
//! | CV5 | labeling time        | 0 ..= 4000 ms   |
//! | CV6 | delay steps          | 3 or 7          |
//! | CV7 | delay linearity      | 0.0 ..= 1.0     |

use crate::timing::TimingParams;
use serde::Deserialize;
use thiserror::Error;

/// Errors for rejected input parameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamError {
    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error("{name} = {value} is out of range ({min} ..= {max})")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Step count {value} is not allowed (choose one of {allowed:?})")]
    StepCountNotAllowed { value: usize, allowed: Vec<usize> },

    #[error("Invalid limits for {name}: min {min} is greater than max {max}")]
    InvertedLimits {
        name: &'static str,
        min: f64,
        max: f64,
    },
}

pub type Result<T> = std::result::Result<T, ParamError>;

/// Accepted ranges for each parameter
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputLimits {
    /// CV4 bounds (ms)
    pub min_delay: (f64, f64),
    /// CV5 bounds (ms)
    pub label_duration: (f64, f64),
    /// CV6 choices
    pub allowed_steps: Vec<usize>,
    /// CV7 bounds
    pub linearity: (f64, f64),
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            min_delay: (700.0, 4000.0),
            label_duration: (0.0, 4000.0),
            allowed_steps: vec![3, 7],
            linearity: (0.0, 1.0),
        }
    }
}

impl InputLimits {
    /// Check that every configured range is well-formed
    pub fn check(&self) -> Result<()> {
        for (name, (min, max)) in [
            ("min_delay", self.min_delay),
            ("label_duration", self.label_duration),
            ("linearity", self.linearity),
        ] {
            if min > max {
                return Err(ParamError::InvertedLimits { name, min, max });
            }
        }
        Ok(())
    }

    /// Validate `params` against these limits
    pub fn validate(&self, params: &TimingParams) -> Result<()> {
        check_finite(params)?;
        check_range("min_delay", params.min_delay, self.min_delay)?;
        check_range(
            "label_duration",
            params.total_label_duration,
            self.label_duration,
        )?;
        if !self.allowed_steps.contains(&params.step_count) {
            return Err(ParamError::StepCountNotAllowed {
                value: params.step_count,
                allowed: self.allowed_steps.clone(),
            });
        }
        check_range("linearity", params.linearity, self.linearity)?;
        Ok(())
    }
}

/// Reject NaN and infinite values regardless of limits
pub fn check_finite(params: &TimingParams) -> Result<()> {
    for (name, value) in [
        ("min_delay", params.min_delay),
        ("label_duration", params.total_label_duration),
        ("linearity", params.linearity),
    ] {
        if !value.is_finite() {
            return Err(ParamError::NotFinite { name, value });
        }
    }
    Ok(())
}

fn check_range(name: &'static str, value: f64, (min, max): (f64, f64)) -> Result<()> {
    if value < min || value > max {
        return Err(ParamError::OutOfRange {
            name,
            value,
            min,
            max,
        });
    }
    Ok(())
}
