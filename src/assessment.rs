//! Self-assessment scoring
//!
//! Scores the quick health check form a worker fills in by hand. This score is
//! independent of the sensor aggregate and uses its own bands.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GuardError;
use crate::types::HydrationLevel;

/// Body areas a worker can report discomfort in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscomfortArea {
    None,
    Back,
    Neck,
    Shoulders,
    Eyes,
    Legs,
}

/// Raw form input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfAssessment {
    /// Energy level, 1-10
    pub energy: u8,
    /// Stress level, 1-10
    pub stress: u8,
    /// Hours slept last night, 0-12
    pub hours_slept: f64,
    /// Breaks taken so far, 0-10
    pub breaks_taken: u8,
    pub hydration: HydrationLevel,
    pub discomfort: Vec<DiscomfortArea>,
}

impl Default for SelfAssessment {
    fn default() -> Self {
        Self {
            energy: 7,
            stress: 4,
            hours_slept: 7.0,
            breaks_taken: 2,
            hydration: HydrationLevel::Poor,
            discomfort: Vec::new(),
        }
    }
}

/// Condition band for a self-assessment score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentCondition {
    Excellent,
    Fair,
    NeedsAttention,
}

impl AssessmentCondition {
    pub fn classify(score: f64) -> Self {
        if score >= 80.0 {
            AssessmentCondition::Excellent
        } else if score >= 60.0 {
            AssessmentCondition::Fair
        } else {
            AssessmentCondition::NeedsAttention
        }
    }
}

/// Scored self-assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub energy_score: f64,
    pub stress_score: f64,
    pub sleep_score: f64,
    pub break_score: f64,
    /// Mean of the four sub-scores
    pub overall_score: f64,
    pub condition: AssessmentCondition,
    pub recommendations: Vec<String>,
}

impl SelfAssessment {
    /// Reject values outside the form's ranges
    pub fn validate(&self) -> Result<(), GuardError> {
        if !(1..=10).contains(&self.energy) {
            return Err(GuardError::InvalidAssessment(format!(
                "energy must be 1-10, got {}",
                self.energy
            )));
        }
        if !(1..=10).contains(&self.stress) {
            return Err(GuardError::InvalidAssessment(format!(
                "stress must be 1-10, got {}",
                self.stress
            )));
        }
        if !(0.0..=12.0).contains(&self.hours_slept) {
            return Err(GuardError::InvalidAssessment(format!(
                "hours slept must be 0-12, got {}",
                self.hours_slept
            )));
        }
        if self.breaks_taken > 10 {
            return Err(GuardError::InvalidAssessment(format!(
                "breaks taken must be 0-10, got {}",
                self.breaks_taken
            )));
        }
        Ok(())
    }

    /// Validate and score the form
    pub fn score(&self) -> Result<AssessmentResult, GuardError> {
        self.validate()?;

        let energy_score = self.energy as f64 * 10.0;
        let stress_score = 100.0 - self.stress as f64 * 8.0;
        let sleep_score = (self.hours_slept / 8.0 * 100.0).min(100.0);
        let break_score = (self.breaks_taken as f64 / 4.0 * 100.0).min(100.0);
        let overall_score = (energy_score + stress_score + sleep_score + break_score) / 4.0;

        debug!(
            energy_score,
            stress_score, sleep_score, break_score, overall_score, "scored self-assessment"
        );

        Ok(AssessmentResult {
            energy_score,
            stress_score,
            sleep_score,
            break_score,
            overall_score,
            condition: AssessmentCondition::classify(overall_score),
            recommendations: self.recommendations(),
        })
    }

    fn recommendations(&self) -> Vec<String> {
        let mut recommendations = Vec::new();

        if self.energy < 5 {
            recommendations.push("Consider a short break".to_string());
        }
        if self.stress > 6 {
            recommendations.push("Practice deep breathing".to_string());
        }
        if self.hours_slept < 6.0 {
            recommendations.push("Ensure adequate sleep".to_string());
        }
        if self.discomfort.len() > 2 {
            recommendations.push("Stretch affected areas".to_string());
        }

        recommendations
    }
}
