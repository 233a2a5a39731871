//! Health score aggregation
//!
//! This module turns a `Reading` into a `HealthReport`:
//! - Categorical stress/fatigue mapped to 0-100 scores
//! - Heart rate and temperature scored by distance from resting targets
//! - Weighted sum truncated to an integer score
//! - Status band and canned recommendation

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::types::{
    FatigueLevel, HealthReport, HealthStatus, Reading, ScoreComponents, StressLevel,
};

/// Resting heart rate target (bpm)
pub const TARGET_HEART_RATE: f64 = 72.0;
/// Normal body temperature target (celsius)
pub const TARGET_TEMPERATURE: f64 = 36.6;
/// Score used for stress/fatigue labels the aggregator does not recognize
pub const NEUTRAL_CATEGORY_SCORE: f64 = 60.0;

pub const HEART_WEIGHT: f64 = 0.2;
pub const STRESS_WEIGHT: f64 = 0.25;
pub const FATIGUE_WEIGHT: f64 = 0.25;
pub const POSTURE_WEIGHT: f64 = 0.2;
pub const TEMPERATURE_WEIGHT: f64 = 0.1;

/// How out-of-range components are bounded before summing.
///
/// Either way the final score is clamped to 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClampPolicy {
    /// Clamp each component to 0-100 before weighting
    #[default]
    Components,
    /// Use the raw weighted formula, letting heart/temperature go negative
    Unclamped,
}

/// Aggregator for converting readings to health reports
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggregator {
    policy: ClampPolicy,
}

impl Aggregator {
    pub fn new(policy: ClampPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ClampPolicy {
        self.policy
    }

    /// Score a reading
    pub fn aggregate(&self, reading: &Reading) -> HealthReport {
        let components = self.components(reading);
        let overall = weighted_sum(&components);
        let health_status = HealthStatus::classify(overall);

        debug!(
            heart = components.heart,
            stress = components.stress,
            fatigue = components.fatigue,
            posture = components.posture,
            temperature = components.temperature,
            overall,
            "aggregated reading"
        );

        HealthReport {
            reading: reading.clone(),
            components,
            overall_health_score: truncate_score(overall),
            health_status,
            recommendation: health_status.recommendation().to_string(),
        }
    }

    /// Compute the per-metric scores under this aggregator's policy
    pub fn components(&self, reading: &Reading) -> ScoreComponents {
        let mut components = ScoreComponents {
            heart: heart_component(reading.heart_rate),
            stress: stress_score(reading.stress_level),
            fatigue: fatigue_score(reading.fatigue_level),
            posture: reading.posture_score as f64,
            temperature: temperature_component(reading.temperature),
        };

        if self.policy == ClampPolicy::Components {
            components.heart = components.heart.clamp(0.0, 100.0);
            components.posture = components.posture.clamp(0.0, 100.0);
            components.temperature = components.temperature.clamp(0.0, 100.0);
        }

        components
    }
}

/// Score a reading with the default clamping policy
pub fn aggregate(reading: &Reading) -> HealthReport {
    Aggregator::default().aggregate(reading)
}

/// Map stress category to a 0-100 score
pub fn stress_score(level: StressLevel) -> f64 {
    match level {
        StressLevel::Low => 90.0,
        StressLevel::Moderate => 70.0,
        StressLevel::High => 40.0,
        StressLevel::Unknown => {
            warn!("unrecognized stress level, using neutral score");
            NEUTRAL_CATEGORY_SCORE
        }
    }
}

/// Map fatigue category to a 0-100 score
pub fn fatigue_score(level: FatigueLevel) -> f64 {
    match level {
        FatigueLevel::Alert => 90.0,
        FatigueLevel::MildFatigue => 70.0,
        FatigueLevel::Fatigued => 40.0,
        FatigueLevel::Unknown => {
            warn!("unrecognized fatigue level, using neutral score");
            NEUTRAL_CATEGORY_SCORE
        }
    }
}

/// Heart rate score: loses 2 points per bpm away from 72, capped at 100.
/// Not floored.
pub fn heart_component(heart_rate: i32) -> f64 {
    (100.0 - (heart_rate as f64 - TARGET_HEART_RATE).abs() * 2.0).min(100.0)
}

/// Temperature score: loses 20 points per degree away from 36.6, capped at 100.
/// Not floored.
pub fn temperature_component(temperature: f64) -> f64 {
    (100.0 - (temperature - TARGET_TEMPERATURE).abs() * 20.0).min(100.0)
}

/// Weighted overall score before truncation
pub fn weighted_sum(components: &ScoreComponents) -> f64 {
    HEART_WEIGHT * components.heart
        + STRESS_WEIGHT * components.stress
        + FATIGUE_WEIGHT * components.fatigue
        + POSTURE_WEIGHT * components.posture
        + TEMPERATURE_WEIGHT * components.temperature
}

/// Truncate toward zero and bound to 0-100
fn truncate_score(overall: f64) -> u8 {
    overall.trunc().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn reading(
        heart_rate: i32,
        stress: StressLevel,
        fatigue: FatigueLevel,
        posture: i32,
        temperature: f64,
    ) -> Reading {
        Reading {
            heart_rate,
            stress_level: stress,
            fatigue_level: fatigue,
            posture_score: posture,
            temperature,
            vocal_stress: None,
            speech_rate: None,
            voice_health: None,
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        let total =
            HEART_WEIGHT + STRESS_WEIGHT + FATIGUE_WEIGHT + POSTURE_WEIGHT + TEMPERATURE_WEIGHT;
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_resting_worker_is_excellent() {
        let r = reading(72, StressLevel::Low, FatigueLevel::Alert, 85, 36.6);
        let report = aggregate(&r);

        assert_eq!(report.components.heart, 100.0);
        assert_eq!(report.components.stress, 90.0);
        assert_eq!(report.components.fatigue, 90.0);
        assert_eq!(report.components.temperature, 100.0);
        assert_eq!(report.overall_health_score, 92);
        assert_eq!(report.health_status, HealthStatus::Excellent);
        assert_eq!(report.recommendation, "Maintain current routine");
    }

    #[test]
    fn test_high_heart_rate_unclamped() {
        let r = reading(140, StressLevel::High, FatigueLevel::Fatigued, 50, 36.6);
        let aggregator = Aggregator::new(ClampPolicy::Unclamped);

        let components = aggregator.components(&r);
        assert_eq!(components.heart, -36.0);

        // -7.2 + 10 + 10 + 10 + 10 = 32.8
        let report = aggregator.aggregate(&r);
        assert_eq!(report.overall_health_score, 32);
        assert_eq!(report.health_status, HealthStatus::Poor);
    }

    #[test]
    fn test_high_heart_rate_clamped() {
        let r = reading(140, StressLevel::High, FatigueLevel::Fatigued, 50, 36.6);
        let aggregator = Aggregator::new(ClampPolicy::Components);

        assert_eq!(aggregator.components(&r).heart, 0.0);

        let report = aggregator.aggregate(&r);
        assert_eq!(report.overall_health_score, 40);
        assert_eq!(report.health_status, HealthStatus::Poor);
        assert_eq!(report.recommendation, "Immediate rest recommended");
    }

    #[test]
    fn test_score_bounded_under_both_policies() {
        let stresses = [
            StressLevel::Low,
            StressLevel::Moderate,
            StressLevel::High,
            StressLevel::Unknown,
        ];
        let fatigues = [
            FatigueLevel::Alert,
            FatigueLevel::MildFatigue,
            FatigueLevel::Fatigued,
            FatigueLevel::Unknown,
        ];

        for policy in [ClampPolicy::Components, ClampPolicy::Unclamped] {
            let aggregator = Aggregator::new(policy);
            for heart_rate in 0..=300 {
                for half_degree in 0..=100 {
                    let temperature = half_degree as f64 / 2.0;
                    for stress in stresses {
                        for fatigue in fatigues {
                            for posture in [0, 50, 100] {
                                let r = reading(heart_rate, stress, fatigue, posture, temperature);
                                let report = aggregator.aggregate(&r);
                                assert!(
                                    report.overall_health_score <= 100,
                                    "{:?} {:?}",
                                    policy,
                                    r
                                );

                                if policy == ClampPolicy::Components {
                                    let sum = weighted_sum(&report.components);
                                    assert!((0.0..=100.0).contains(&sum), "{:?}", r);
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_extreme_unclamped_floors_at_zero() {
        let r = reading(300, StressLevel::High, FatigueLevel::Fatigued, 0, 0.0);
        let report = Aggregator::new(ClampPolicy::Unclamped).aggregate(&r);

        assert!(weighted_sum(&report.components) < 0.0);
        assert_eq!(report.overall_health_score, 0);
        assert_eq!(report.health_status, HealthStatus::Poor);
    }

    #[test]
    fn test_unknown_categories_fall_back() {
        let r = reading(72, StressLevel::Unknown, FatigueLevel::Unknown, 85, 36.6);
        let report = aggregate(&r);

        assert_eq!(report.components.stress, NEUTRAL_CATEGORY_SCORE);
        assert_eq!(report.components.fatigue, NEUTRAL_CATEGORY_SCORE);
        // 20 + 15 + 15 + 17 + 10 = 77
        assert_eq!(report.overall_health_score, 77);
        assert_eq!(report.health_status, HealthStatus::Good);
    }

    #[test]
    fn test_aggregate_is_pure() {
        let r = reading(88, StressLevel::Moderate, FatigueLevel::MildFatigue, 71, 36.9);
        assert_eq!(aggregate(&r), aggregate(&r));

        let unclamped = Aggregator::new(ClampPolicy::Unclamped);
        assert_eq!(unclamped.aggregate(&r), unclamped.aggregate(&r));
    }

    #[test]
    fn test_truncation_not_rounding() {
        // 19.2 + 22.5 + 17.5 + 15.8 + 9.8 = 84.8
        let r = reading(74, StressLevel::Low, FatigueLevel::MildFatigue, 79, 36.7);
        let report = aggregate(&r);
        assert_eq!(report.overall_health_score, 84);
        assert_eq!(report.health_status, HealthStatus::Good);
    }
}
