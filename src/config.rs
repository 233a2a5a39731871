//! Monitor configuration
//!
//! Alert thresholds and worker profile, loaded from JSON and validated against
//! the ranges the settings panel allows.

use serde::{Deserialize, Serialize};

use crate::aggregator::ClampPolicy;
use crate::error::GuardError;

pub const DEFAULT_MAX_HEART_RATE_ALERT: i32 = 100;
pub const DEFAULT_MIN_POSTURE_SCORE: i32 = 70;
pub const DEFAULT_WORKER_ID: &str = "WRK-001";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shift {
    /// 6AM-2PM
    #[default]
    Morning,
    /// 2PM-10PM
    Afternoon,
    /// 10PM-6AM
    Night,
}

impl Shift {
    pub fn label(&self) -> &'static str {
        match self {
            Shift::Morning => "Morning (6AM-2PM)",
            Shift::Afternoon => "Afternoon (2PM-10PM)",
            Shift::Night => "Night (10PM-6AM)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    #[default]
    Assembly,
    Logistics,
    QualityControl,
    Maintenance,
    Packaging,
}

impl Department {
    pub fn label(&self) -> &'static str {
        match self {
            Department::Assembly => "Assembly",
            Department::Logistics => "Logistics",
            Department::QualityControl => "Quality Control",
            Department::Maintenance => "Maintenance",
            Department::Packaging => "Packaging",
        }
    }
}

/// Settings for a monitoring session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Heart rate (bpm) above which an alert fires, 80-120
    pub max_heart_rate_alert: i32,
    /// Posture score below which an alert fires, 50-90
    pub min_posture_score: i32,
    /// When off, scans are still scored but threshold alerts are not raised
    pub auto_health_checks: bool,
    pub clamp_policy: ClampPolicy,
    pub worker_id: String,
    pub shift: Shift,
    pub department: Department,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            max_heart_rate_alert: DEFAULT_MAX_HEART_RATE_ALERT,
            min_posture_score: DEFAULT_MIN_POSTURE_SCORE,
            auto_health_checks: true,
            clamp_policy: ClampPolicy::default(),
            worker_id: DEFAULT_WORKER_ID.to_string(),
            shift: Shift::default(),
            department: Department::default(),
        }
    }
}

impl MonitorConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, GuardError> {
        let config: MonitorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GuardError> {
        if !(80..=120).contains(&self.max_heart_rate_alert) {
            return Err(GuardError::InvalidConfig(format!(
                "max_heart_rate_alert must be 80-120, got {}",
                self.max_heart_rate_alert
            )));
        }
        if !(50..=90).contains(&self.min_posture_score) {
            return Err(GuardError::InvalidConfig(format!(
                "min_posture_score must be 50-90, got {}",
                self.min_posture_score
            )));
        }
        if self.worker_id.trim().is_empty() {
            return Err(GuardError::InvalidConfig(
                "worker_id must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// One-line worker profile for report headers
    pub fn profile_line(&self) -> String {
        format!(
            "{} | {} | {}",
            self.worker_id,
            self.department.label(),
            self.shift.label()
        )
    }
}
