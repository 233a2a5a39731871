//! Voice reading interpretation: comparison rows and care tips

use serde::{Deserialize, Serialize};

use crate::types::{VocalFatigue, VoiceHealth, VoiceReading};

/// One row of a simulated voice comparison run, scaled to 0-100
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceSimulationRow {
    pub label: String,
    pub stress: f64,
    pub fatigue: f64,
    pub speech_rate: f64,
    pub health: f64,
}

impl VoiceSimulationRow {
    pub fn from_reading(label: String, reading: &VoiceReading) -> Self {
        let fatigue = match reading.fatigue_level {
            VocalFatigue::Low => 25.0,
            VocalFatigue::Moderate => 50.0,
            VocalFatigue::High => 75.0,
        };
        let health = match reading.voice_health {
            VoiceHealth::Healthy => 90.0,
            VoiceHealth::Strained => 60.0,
            VoiceHealth::Fatigued => 30.0,
        };

        Self {
            label,
            stress: reading.vocal_stress * 100.0,
            fatigue,
            speech_rate: reading.speech_rate,
            health,
        }
    }

    /// Map the 0-100 health value back to a label
    pub fn health_label(&self) -> VoiceHealth {
        if self.health > 70.0 {
            VoiceHealth::Healthy
        } else if self.health > 40.0 {
            VoiceHealth::Strained
        } else {
            VoiceHealth::Fatigued
        }
    }
}

/// Care advice for a voice reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceCareTips {
    /// Warning headline, absent when the voice looks healthy
    pub warning: Option<String>,
    pub tips: Vec<String>,
}

/// Pick care tips: high vocal stress outranks vocal fatigue.
pub fn voice_care_tips(reading: &VoiceReading) -> VoiceCareTips {
    if reading.vocal_stress > 0.7 {
        VoiceCareTips::new(
            Some("High vocal stress detected"),
            &[
                "Drink warm water with honey",
                "Avoid shouting or straining",
                "Take 5-minute voice breaks hourly",
            ],
        )
    } else if reading.fatigue_level == VocalFatigue::High {
        VoiceCareTips::new(
            Some("Voice fatigue detected"),
            &[
                "Rest your voice for 15 minutes",
                "Stay hydrated",
                "Avoid caffeine",
            ],
        )
    } else {
        VoiceCareTips::new(None, &["Maintain good hydration", "Practice vocal warm-ups"])
    }
}

impl VoiceCareTips {
    fn new(warning: Option<&str>, tips: &[&str]) -> Self {
        Self {
            warning: warning.map(str::to_string),
            tips: tips.iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voice(stress: f64, fatigue: VocalFatigue, health: VoiceHealth) -> VoiceReading {
        VoiceReading {
            vocal_stress: stress,
            fatigue_level: fatigue,
            speech_rate: 150.0,
            voice_health: health,
        }
    }

    #[test]
    fn test_row_scaling() {
        let row = VoiceSimulationRow::from_reading(
            "Test 1".to_string(),
            &voice(0.42, VocalFatigue::Moderate, VoiceHealth::Strained),
        );

        assert!((row.stress - 42.0).abs() < 1e-9);
        assert_eq!(row.fatigue, 50.0);
        assert_eq!(row.health, 60.0);
        assert_eq!(row.health_label(), VoiceHealth::Strained);
    }

    #[test]
    fn test_stress_tips_take_priority() {
        let tips = voice_care_tips(&voice(0.8, VocalFatigue::High, VoiceHealth::Fatigued));
        assert_eq!(tips.warning.as_deref(), Some("High vocal stress detected"));
        assert_eq!(tips.tips.len(), 3);
    }

    #[test]
    fn test_fatigue_and_healthy_tips() {
        let tips = voice_care_tips(&voice(0.7, VocalFatigue::High, VoiceHealth::Healthy));
        assert_eq!(tips.warning.as_deref(), Some("Voice fatigue detected"));

        let tips = voice_care_tips(&voice(0.3, VocalFatigue::Low, VoiceHealth::Healthy));
        assert!(tips.warning.is_none());
        assert_eq!(tips.tips[0], "Maintain good hydration");
    }
}
