//! Optional TOML configuration for pldcalc
//!
//! Lets a site pin its own parameter defaults and input limits instead of
//! the scanner console values.
//!
//! # Example pldcalc.toml
//!
//! ```toml
//! [defaults]
//! min_delay = 1500.0
//! label_duration = 3000.0
//! steps = 3
//! linearity = 0.25
//!
//! [limits]
//! min_delay = [700.0, 4000.0]
//! label_duration = [0.0, 4000.0]
//! allowed_steps = [3, 7]
//! linearity = [0.0, 1.0]
//! ```
//!
//! Every key is optional; missing keys keep the built-in values.

use crate::params::InputLimits;
use crate::timing::TimingParams;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default parameter values used when the command line leaves one unset
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParamDefaults {
    pub min_delay: f64,
    pub label_duration: f64,
    pub steps: usize,
    pub linearity: f64,
}

impl Default for ParamDefaults {
    fn default() -> Self {
        let params = TimingParams::default();
        Self {
            min_delay: params.min_delay,
            label_duration: params.total_label_duration,
            steps: params.step_count,
            linearity: params.linearity,
        }
    }
}

impl ParamDefaults {
    pub fn to_params(&self) -> TimingParams {
        TimingParams::new(self.min_delay, self.label_duration, self.steps, self.linearity)
    }
}

/// Root configuration for pldcalc.toml
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub defaults: ParamDefaults,
    pub limits: InputLimits,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// ```no_run
    /// use pldcalc::config::Config;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let config = Config::from_file("pldcalc.toml")?;
    /// println!("Default steps: {}", config.defaults.steps);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Load configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse TOML")?;
        config.limits.check()?;
        tracing::debug!(?config, "loaded configuration");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_builtins() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.defaults.to_params(), TimingParams::default());
    }

    #[test]
    fn test_partial_defaults() {
        let toml = r#"
            [defaults]
            steps = 3
            linearity = 0.25
        "#;

        let config = Config::from_toml_str(toml).unwrap();
        let params = config.defaults.to_params();
        assert_eq!(params.step_count, 3);
        assert_eq!(params.linearity, 0.25);
        assert_eq!(params.min_delay, 1000.0);
        assert_eq!(params.total_label_duration, 3500.0);
    }

    #[test]
    fn test_custom_limits() {
        let toml = r#"
            [limits]
            min_delay = [500.0, 5000.0]
            allowed_steps = [1, 3, 5, 7]
        "#;

        let config = Config::from_toml_str(toml).unwrap();
        assert_eq!(config.limits.min_delay, (500.0, 5000.0));
        assert_eq!(config.limits.allowed_steps, vec![1, 3, 5, 7]);
        assert_eq!(config.limits.linearity, (0.0, 1.0));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let toml = r#"
            [defaults]
            t1a = 1600.0
        "#;

        assert!(Config::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_inverted_limits_rejected() {
        let toml = r#"
            [limits]
            label_duration = [4000.0, 0.0]
        "#;

        let err = Config::from_toml_str(toml).unwrap_err();
        assert!(err.to_string().contains("label_duration"));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file("/nonexistent/pldcalc.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
