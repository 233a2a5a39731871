//! Core types for HealthGuard
//!
//! This module defines the records that flow from the signal sources through
//! the aggregator to the session: stub readings, the flat `Reading`, and the
//! derived `HealthReport`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stress category reported by the face analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StressLevel {
    Low,
    Moderate,
    High,
    #[serde(other)]
    Unknown,
}

impl StressLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StressLevel::Low => "Low",
            StressLevel::Moderate => "Moderate",
            StressLevel::High => "High",
            StressLevel::Unknown => "Unknown",
        }
    }

    /// Parse a display label; anything unrecognized maps to `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Low" => StressLevel::Low,
            "Moderate" => StressLevel::Moderate,
            "High" => StressLevel::High,
            _ => StressLevel::Unknown,
        }
    }
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fatigue category reported by the face analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FatigueLevel {
    Alert,
    #[serde(rename = "Mild Fatigue")]
    MildFatigue,
    Fatigued,
    #[serde(other)]
    Unknown,
}

impl FatigueLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FatigueLevel::Alert => "Alert",
            FatigueLevel::MildFatigue => "Mild Fatigue",
            FatigueLevel::Fatigued => "Fatigued",
            FatigueLevel::Unknown => "Unknown",
        }
    }

    /// Parse a display label; anything unrecognized maps to `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Alert" => FatigueLevel::Alert,
            "Mild Fatigue" => FatigueLevel::MildFatigue,
            "Fatigued" => FatigueLevel::Fatigued,
            _ => FatigueLevel::Unknown,
        }
    }

    /// Position on the 1 (alert) to 3 (fatigued) session scale
    pub fn session_score(&self) -> u8 {
        match self {
            FatigueLevel::Alert => 1,
            FatigueLevel::MildFatigue => 2,
            FatigueLevel::Fatigued => 3,
            FatigueLevel::Unknown => 2,
        }
    }
}

impl fmt::Display for FatigueLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vocal fatigue category reported by the voice analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VocalFatigue {
    Low,
    Moderate,
    High,
}

impl VocalFatigue {
    pub fn as_str(&self) -> &'static str {
        match self {
            VocalFatigue::Low => "Low",
            VocalFatigue::Moderate => "Moderate",
            VocalFatigue::High => "High",
        }
    }
}

/// Overall voice condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoiceHealth {
    Healthy,
    Strained,
    Fatigued,
}

impl VoiceHealth {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceHealth::Healthy => "Healthy",
            VoiceHealth::Strained => "Strained",
            VoiceHealth::Fatigued => "Fatigued",
        }
    }
}

/// Self-reported or logged hydration level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HydrationLevel {
    Poor,
    Fair,
    #[default]
    Good,
    Excellent,
}

impl HydrationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            HydrationLevel::Poor => "Poor",
            HydrationLevel::Fair => "Fair",
            HydrationLevel::Good => "Good",
            HydrationLevel::Excellent => "Excellent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShoulderAlignment {
    Good,
    Fair,
    Poor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpineCurvature {
    Normal,
    Slight,
    Excessive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadPosition {
    Neutral,
    Forward,
    Tilted,
}

/// Output of a face analyzer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceReading {
    /// Estimated heart rate (bpm)
    pub heart_rate_estimate: i32,
    pub stress_level: StressLevel,
    pub fatigue_signs: FatigueLevel,
    /// Estimated skin temperature (celsius)
    pub temperature_estimate: f64,
}

/// Output of a posture analyzer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostureReading {
    /// Posture quality (0-100)
    pub posture_score: i32,
    pub shoulder_alignment: ShoulderAlignment,
    pub spine_curvature: SpineCurvature,
    pub head_position: HeadPosition,
    pub recommendations: Vec<String>,
}

/// Output of a voice analyzer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceReading {
    /// Vocal stress (0-1)
    pub vocal_stress: f64,
    pub fatigue_level: VocalFatigue,
    /// Speech rate (words per minute)
    pub speech_rate: f64,
    pub voice_health: VoiceHealth,
}

/// One snapshot of vital-sign values, flattened from the analyzer outputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Heart rate (bpm)
    pub heart_rate: i32,
    pub stress_level: StressLevel,
    pub fatigue_level: FatigueLevel,
    /// Posture quality (0-100)
    pub posture_score: i32,
    /// Temperature (celsius)
    pub temperature: f64,
    /// Vocal stress (0-1), present when a voice sample was analyzed
    pub vocal_stress: Option<f64>,
    /// Speech rate (words per minute)
    pub speech_rate: Option<f64>,
    pub voice_health: Option<VoiceHealth>,
}

impl Reading {
    /// Combine analyzer outputs into a single reading.
    pub fn from_scan(
        face: &FaceReading,
        posture: &PostureReading,
        voice: Option<&VoiceReading>,
    ) -> Self {
        Self {
            heart_rate: face.heart_rate_estimate,
            stress_level: face.stress_level,
            fatigue_level: face.fatigue_signs,
            posture_score: posture.posture_score,
            temperature: face.temperature_estimate,
            vocal_stress: voice.map(|v| v.vocal_stress),
            speech_rate: voice.map(|v| v.speech_rate),
            voice_health: voice.map(|v| v.voice_health),
        }
    }

    /// Plain field-name to value mapping for presentation layers.
    ///
    /// Optional voice fields are omitted when absent.
    pub fn to_field_map(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut map = serde_json::Map::new();
        map.insert("heart_rate".into(), self.heart_rate.into());
        map.insert("stress_level".into(), self.stress_level.as_str().into());
        map.insert("fatigue_level".into(), self.fatigue_level.as_str().into());
        map.insert("posture_score".into(), self.posture_score.into());
        map.insert("temperature".into(), self.temperature.into());
        if let Some(stress) = self.vocal_stress {
            map.insert("vocal_stress".into(), stress.into());
        }
        if let Some(rate) = self.speech_rate {
            map.insert("speech_rate".into(), rate.into());
        }
        if let Some(health) = self.voice_health {
            map.insert("voice_health".into(), health.as_str().into());
        }
        map
    }
}

/// Status band derived from the overall health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HealthStatus {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl HealthStatus {
    /// Classify an overall score. Each band includes its lower bound.
    pub fn classify(score: f64) -> Self {
        if score >= 85.0 {
            HealthStatus::Excellent
        } else if score >= 70.0 {
            HealthStatus::Good
        } else if score >= 50.0 {
            HealthStatus::Fair
        } else {
            HealthStatus::Poor
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            HealthStatus::Excellent => "Maintain current routine",
            HealthStatus::Good => "Take short breaks, stay hydrated",
            HealthStatus::Fair => "Consider rest break, hydrate, stretch",
            HealthStatus::Poor => "Immediate rest recommended",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Excellent => "Excellent",
            HealthStatus::Good => "Good",
            HealthStatus::Fair => "Fair",
            HealthStatus::Poor => "Poor",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Individual scores that feed the weighted sum
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponents {
    pub heart: f64,
    pub stress: f64,
    pub fatigue: f64,
    pub posture: f64,
    pub temperature: f64,
}

/// A reading plus its computed score, status band and recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub reading: Reading,
    pub components: ScoreComponents,
    /// Overall score (0-100), truncated toward zero
    pub overall_health_score: u8,
    pub health_status: HealthStatus,
    pub recommendation: String,
}

impl HealthReport {
    /// Reading fields plus the derived report fields as one flat mapping.
    pub fn to_field_map(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut map = self.reading.to_field_map();
        map.insert(
            "overall_health_score".into(),
            self.overall_health_score.into(),
        );
        map.insert("health_status".into(), self.health_status.as_str().into());
        map.insert(
            "recommendation".into(),
            self.recommendation.clone().into(),
        );
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_labels_deserialize() {
        let level: StressLevel = serde_json::from_str("\"Panicked\"").unwrap();
        assert_eq!(level, StressLevel::Unknown);

        let fatigue: FatigueLevel = serde_json::from_str("\"Mild Fatigue\"").unwrap();
        assert_eq!(fatigue, FatigueLevel::MildFatigue);
    }

    #[test]
    fn test_from_label() {
        assert_eq!(StressLevel::from_label("Moderate"), StressLevel::Moderate);
        assert_eq!(StressLevel::from_label("moderate"), StressLevel::Unknown);
        assert_eq!(FatigueLevel::from_label("Mild Fatigue"), FatigueLevel::MildFatigue);
        assert_eq!(FatigueLevel::from_label(""), FatigueLevel::Unknown);
    }

    #[test]
    fn test_status_boundaries() {
        assert_eq!(HealthStatus::classify(85.0), HealthStatus::Excellent);
        assert_eq!(HealthStatus::classify(84.999), HealthStatus::Good);
        assert_eq!(HealthStatus::classify(70.0), HealthStatus::Good);
        assert_eq!(HealthStatus::classify(50.0), HealthStatus::Fair);
        assert_eq!(HealthStatus::classify(49.999), HealthStatus::Poor);
        assert_eq!(HealthStatus::classify(-12.0), HealthStatus::Poor);
    }

    #[test]
    fn test_field_map_omits_missing_voice() {
        let reading = Reading {
            heart_rate: 72,
            stress_level: StressLevel::Low,
            fatigue_level: FatigueLevel::Alert,
            posture_score: 85,
            temperature: 36.6,
            vocal_stress: None,
            speech_rate: None,
            voice_health: None,
        };

        let map = reading.to_field_map();
        assert_eq!(map.len(), 5);
        assert_eq!(map["stress_level"], "Low");
        assert!(!map.contains_key("vocal_stress"));
    }
}
