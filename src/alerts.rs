//! Status indicators and alerts
//!
//! Maps vital signs onto traffic-light indicators, builds the per-metric
//! report table, and raises threshold alerts from the configured limits.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::MonitorConfig;
use crate::session::SessionHealthState;
use crate::types::{FatigueLevel, HealthReport, StressLevel};

/// Traffic-light status for a single metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    Normal,
    Caution,
    Critical,
    Unknown,
}

impl Indicator {
    /// Display color used by dashboards
    pub fn color(&self) -> &'static str {
        match self {
            Indicator::Normal => "green",
            Indicator::Caution => "orange",
            Indicator::Critical => "red",
            Indicator::Unknown => "gray",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Indicator::Normal => "[OK]",
            Indicator::Caution => "[WARN]",
            Indicator::Critical => "[CRIT]",
            Indicator::Unknown => "[?]",
        }
    }
}

/// Heart rate: normal range 60-100 bpm, with a caution margin inside it
pub fn heart_rate_indicator(heart_rate: i32) -> Indicator {
    if !(60..=100).contains(&heart_rate) {
        Indicator::Critical
    } else if heart_rate > 90 || heart_rate < 65 {
        Indicator::Caution
    } else {
        Indicator::Normal
    }
}

pub fn stress_indicator(level: StressLevel) -> Indicator {
    match level {
        StressLevel::Low => Indicator::Normal,
        StressLevel::Moderate => Indicator::Caution,
        StressLevel::High => Indicator::Critical,
        StressLevel::Unknown => Indicator::Unknown,
    }
}

pub fn fatigue_indicator(level: FatigueLevel) -> Indicator {
    match level {
        FatigueLevel::Alert => Indicator::Normal,
        FatigueLevel::MildFatigue => Indicator::Caution,
        FatigueLevel::Fatigued => Indicator::Critical,
        FatigueLevel::Unknown => Indicator::Unknown,
    }
}

pub fn posture_indicator(posture_score: i32) -> Indicator {
    if posture_score >= 80 {
        Indicator::Normal
    } else if posture_score >= 60 {
        Indicator::Caution
    } else {
        Indicator::Critical
    }
}

pub fn temperature_indicator(temperature: f64) -> Indicator {
    if (36.0..=37.5).contains(&temperature) {
        Indicator::Normal
    } else {
        Indicator::Caution
    }
}

pub fn overall_indicator(score: u8) -> Indicator {
    if score >= 70 {
        Indicator::Normal
    } else if score >= 50 {
        Indicator::Caution
    } else {
        Indicator::Critical
    }
}

/// Vocal stress gauge band, on a 0-100 scale
pub fn vocal_stress_indicator(vocal_stress: f64) -> Indicator {
    let percent = vocal_stress * 100.0;
    if percent < 40.0 {
        Indicator::Normal
    } else if percent < 70.0 {
        Indicator::Caution
    } else {
        Indicator::Critical
    }
}

/// One row of the per-metric report table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalSignRow {
    pub metric: String,
    pub value: String,
    pub indicator: Indicator,
}

impl VitalSignRow {
    fn new(metric: &str, value: String, indicator: Indicator) -> Self {
        Self {
            metric: metric.to_string(),
            value,
            indicator,
        }
    }
}

/// Build the report table for a health report
pub fn vital_sign_rows(report: &HealthReport) -> Vec<VitalSignRow> {
    let reading = &report.reading;
    let mut rows = vec![
        VitalSignRow::new(
            "Overall Health",
            format!(
                "{} ({}/100)",
                report.health_status, report.overall_health_score
            ),
            overall_indicator(report.overall_health_score),
        ),
        VitalSignRow::new(
            "Heart Rate",
            format!("{} BPM", reading.heart_rate),
            heart_rate_indicator(reading.heart_rate),
        ),
        VitalSignRow::new(
            "Stress",
            reading.stress_level.to_string(),
            stress_indicator(reading.stress_level),
        ),
        VitalSignRow::new(
            "Fatigue",
            reading.fatigue_level.to_string(),
            fatigue_indicator(reading.fatigue_level),
        ),
        VitalSignRow::new(
            "Posture",
            format!("{}%", reading.posture_score),
            posture_indicator(reading.posture_score),
        ),
        VitalSignRow::new(
            "Temperature",
            format!("{:.1}°C", reading.temperature),
            temperature_indicator(reading.temperature),
        ),
    ];

    if let Some(vocal_stress) = reading.vocal_stress {
        rows.push(VitalSignRow::new(
            "Vocal Stress",
            format!("{:.0}%", vocal_stress * 100.0),
            vocal_stress_indicator(vocal_stress),
        ));
    }

    rows
}

/// Dashboard banner level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerLevel {
    Low,
    Moderate,
    Good,
}

/// Dashboard banner driven by the session's posture score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardBanner {
    pub level: BannerLevel,
    pub gauge_value: i32,
    pub message: String,
}

pub fn dashboard_banner(state: &SessionHealthState) -> DashboardBanner {
    let score = state.posture_score;
    let (level, message) = if score < 60 {
        (
            BannerLevel::Low,
            "LOW HEALTH SCORE - Worker needs immediate attention!",
        )
    } else if score < 75 {
        (BannerLevel::Moderate, "MODERATE HEALTH SCORE - Monitor closely")
    } else {
        (
            BannerLevel::Good,
            "GOOD HEALTH SCORE - Worker is in good condition",
        )
    };

    DashboardBanner {
        level,
        gauge_value: score,
        message: message.to_string(),
    }
}

/// Alert raised when a configured limit is crossed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ThresholdAlert {
    HeartRateHigh { heart_rate: i32, limit: i32 },
    PostureLow { posture_score: i32, limit: i32 },
}

/// Check the session state against the configured limits.
///
/// Returns nothing when automatic health checks are switched off.
pub fn check_thresholds(state: &SessionHealthState, config: &MonitorConfig) -> Vec<ThresholdAlert> {
    let mut alerts = Vec::new();
    if !config.auto_health_checks {
        debug!("automatic health checks disabled, skipping threshold alerts");
        return alerts;
    }

    if state.heart_rate > config.max_heart_rate_alert {
        warn!(
            heart_rate = state.heart_rate,
            limit = config.max_heart_rate_alert,
            "heart rate above alert limit"
        );
        alerts.push(ThresholdAlert::HeartRateHigh {
            heart_rate: state.heart_rate,
            limit: config.max_heart_rate_alert,
        });
    }

    if state.posture_score < config.min_posture_score {
        warn!(
            posture_score = state.posture_score,
            limit = config.min_posture_score,
            "posture score below alert limit"
        );
        alerts.push(ThresholdAlert::PostureLow {
            posture_score: state.posture_score,
            limit: config.min_posture_score,
        });
    }

    alerts
}
