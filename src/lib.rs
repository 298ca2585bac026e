//! pldcalc - Multi-PLD arterial spin labeling timing calculator
//!
//! Computes per-step label durations and post-label delays for a
//! time-encoded multi-delay ASL protocol by blending a linear schedule with
//! a signal-matched exponential schedule.
//!
//! ```
//! use pldcalc::timing::{compute_timing, TimingParams};
//!
//! let schedule = compute_timing(&TimingParams::new(1000.0, 3500.0, 7, 1.0)).unwrap();
//! assert_eq!(schedule.label_durations(), &[500.0; 7]);
//! ```

pub mod blend;
pub mod cli;
pub mod config;
pub mod csv_output;
pub mod exponential;
pub mod html_output;
pub mod json_output;
pub mod linear;
pub mod params;
pub mod report;
pub mod schedule;
pub mod text_output;
pub mod timing;

pub use schedule::{Schedule, StepTiming, TimingError};
pub use timing::{compute_timing, TimingParams};
