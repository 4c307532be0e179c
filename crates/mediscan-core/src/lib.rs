//! MediScan AI Core
//!
//! This crate holds everything the MediScan front-ends share: the static
//! content tables (report types, findings, marketing copy), the upload
//! selection model, and the simulated analysis driver that walks a progress
//! counter from 0 to 100 before handing off to the results view.
//!
//! Nothing here performs I/O. The driver emits [`upload::Effect`]s and leaves
//! timers, notifications and navigation to its host.

pub mod catalog;
pub mod notify;
pub mod report;
pub mod route;
pub mod upload;

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub use catalog::{FindingRecord, ReportType, Severity};
pub use notify::{Notification, NotificationLevel, ResultsAction};
pub use route::Route;
pub use upload::{DriverState, Effect, ProgressDriver, RunId, SelectedFile, UploadError, UploadProgress, UploadSelection};

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

/// Timing of the simulated analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Interval between progress ticks
    #[serde(with = "millis")]
    pub tick_interval: Duration,
    /// Percentage points added per tick
    pub step: u8,
    /// Pause between reaching 100% and the completion action
    #[serde(with = "millis")]
    pub completion_delay: Duration,
}

impl SimulationConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if self.tick_interval.is_zero() {
            return Err(CoreError::Config("tick interval must be non-zero".into()));
        }
        if self.step == 0 || self.step > 100 {
            return Err(CoreError::Config(format!(
                "step must be between 1 and 100, got {}",
                self.step
            )));
        }
        Ok(())
    }

    /// Number of ticks a run takes to reach 100%
    pub fn ticks_per_run(&self) -> u32 {
        let step = u32::from(self.step.max(1));
        (100 + step - 1) / step
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(200),
            step: 10,
            completion_delay: Duration::from_millis(500),
        }
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.tick_interval, Duration::from_millis(200));
        assert_eq!(config.step, 10);
        assert_eq!(config.completion_delay, Duration::from_millis(500));
        assert_eq!(config.ticks_per_run(), 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_bad_step() {
        let config = SimulationConfig { step: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));

        let config = SimulationConfig { step: 101, ..Default::default() };
        assert!(config.validate().is_err());

        let config = SimulationConfig { tick_interval: Duration::ZERO, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_uneven_step_rounds_up() {
        let config = SimulationConfig { step: 30, ..Default::default() };
        assert_eq!(config.ticks_per_run(), 4);
    }

    #[test]
    fn test_config_serde_in_millis() {
        let json = serde_json::to_string(&SimulationConfig::default()).unwrap();
        assert!(json.contains("\"tick_interval\":200"));
        let parsed: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, SimulationConfig::default());
    }
}
