//! Simulated signal generator
//!
//! Produces readings by sampling fixed distributions. Media passed in is never
//! inspected; only its length is logged.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use std::f64::consts::PI;
use tracing::{debug, warn};

use super::voice::VoiceSimulationRow;
use super::VitalSignSource;
use crate::types::{
    FaceReading, FatigueLevel, HeadPosition, PostureReading, ShoulderAlignment, SpineCurvature,
    StressLevel, VocalFatigue, VoiceHealth, VoiceReading,
};

const STRESS_WEIGHTS: [(StressLevel, f64); 3] = [
    (StressLevel::Low, 0.6),
    (StressLevel::Moderate, 0.3),
    (StressLevel::High, 0.1),
];

const FATIGUE_WEIGHTS: [(FatigueLevel, f64); 3] = [
    (FatigueLevel::Alert, 0.5),
    (FatigueLevel::MildFatigue, 0.4),
    (FatigueLevel::Fatigued, 0.1),
];

const SHOULDER_WEIGHTS: [(ShoulderAlignment, f64); 3] = [
    (ShoulderAlignment::Good, 0.7),
    (ShoulderAlignment::Fair, 0.2),
    (ShoulderAlignment::Poor, 0.1),
];

const SPINE_WEIGHTS: [(SpineCurvature, f64); 3] = [
    (SpineCurvature::Normal, 0.8),
    (SpineCurvature::Slight, 0.15),
    (SpineCurvature::Excessive, 0.05),
];

const HEAD_WEIGHTS: [(HeadPosition, f64); 3] = [
    (HeadPosition::Neutral, 0.75),
    (HeadPosition::Forward, 0.2),
    (HeadPosition::Tilted, 0.05),
];

const VOCAL_FATIGUE_WEIGHTS: [(VocalFatigue, f64); 3] = [
    (VocalFatigue::Low, 0.6),
    (VocalFatigue::Moderate, 0.3),
    (VocalFatigue::High, 0.1),
];

const VOICE_HEALTH_WEIGHTS: [(VoiceHealth, f64); 3] = [
    (VoiceHealth::Healthy, 0.7),
    (VoiceHealth::Strained, 0.2),
    (VoiceHealth::Fatigued, 0.1),
];

/// Longest waveform generated, in seconds
pub const MAX_WAVEFORM_SECS: f64 = 60.0;
/// Upper bound on samples regardless of sample rate (one minute at 48 kHz)
pub const MAX_WAVEFORM_SAMPLES: usize = 48_000 * 60;

/// Generic posture advice attached to every posture reading
pub const POSTURE_RECOMMENDATIONS: [&str; 3] = [
    "Take regular breaks",
    "Adjust chair height",
    "Keep feet flat on floor",
];

/// Random stand-in for real face, posture and voice analysis.
///
/// The random source is injected so runs can be reproduced from a seed.
pub struct SimulatedSignalGenerator<R: Rng = StdRng> {
    rng: R,
}

impl SimulatedSignalGenerator<StdRng> {
    /// Create a generator with a fixed seed
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a generator seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<R: Rng> SimulatedSignalGenerator<R> {
    /// Create a generator drawing from the given random source
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Draw a face reading
    pub fn generate_face_reading(&mut self) -> FaceReading {
        FaceReading {
            heart_rate_estimate: 65 + self.rng.gen_range(-10..20),
            stress_level: pick(&mut self.rng, &STRESS_WEIGHTS),
            fatigue_signs: pick(&mut self.rng, &FATIGUE_WEIGHTS),
            temperature_estimate: 36.5 + self.rng.gen_range(-0.5..0.5),
        }
    }

    /// Draw a posture reading
    pub fn generate_posture_reading(&mut self) -> PostureReading {
        PostureReading {
            posture_score: self.rng.gen_range(60..95),
            shoulder_alignment: pick(&mut self.rng, &SHOULDER_WEIGHTS),
            spine_curvature: pick(&mut self.rng, &SPINE_WEIGHTS),
            head_position: pick(&mut self.rng, &HEAD_WEIGHTS),
            recommendations: POSTURE_RECOMMENDATIONS
                .iter()
                .map(|r| r.to_string())
                .collect(),
        }
    }

    /// Draw a voice reading
    pub fn generate_voice_reading(&mut self) -> VoiceReading {
        VoiceReading {
            vocal_stress: self.rng.gen_range(0.1..0.9),
            fatigue_level: pick(&mut self.rng, &VOCAL_FATIGUE_WEIGHTS),
            speech_rate: self.rng.gen_range(120.0..180.0),
            voice_health: pick(&mut self.rng, &VOICE_HEALTH_WEIGHTS),
        }
    }

    /// Synthesize a voice-like waveform for visualization.
    ///
    /// A sine around 180 Hz with slow amplitude modulation and additive noise.
    /// Durations are capped at `MAX_WAVEFORM_SECS` and sample counts at
    /// `MAX_WAVEFORM_SAMPLES`; NaN or negative durations yield no samples.
    pub fn generate_waveform(&mut self, duration_secs: f64, sample_rate: u32) -> Vec<f64> {
        let requested = duration_secs;
        let duration_secs = if requested.is_nan() {
            0.0
        } else {
            requested.clamp(0.0, MAX_WAVEFORM_SECS)
        };
        if duration_secs < requested {
            warn!(requested, cap = MAX_WAVEFORM_SECS, "waveform duration capped");
        }

        let sample_count = (sample_rate as f64 * duration_secs)
            .max(0.0)
            .min(MAX_WAVEFORM_SAMPLES as f64) as usize;
        let base_freq = 180.0 + self.rng.sample::<f64, _>(StandardNormal) * 20.0;
        let step = if sample_count > 1 {
            duration_secs / (sample_count - 1) as f64
        } else {
            0.0
        };

        (0..sample_count)
            .map(|i| {
                let t = i as f64 * step;
                let envelope = 1.0 + 0.3 * (2.0 * PI * 0.5 * t).sin();
                let noise = 0.1 * self.rng.sample::<f64, _>(StandardNormal);
                (2.0 * PI * base_freq * t).sin() * envelope + noise
            })
            .collect()
    }

    /// Run `count` voice simulations and map them to comparison rows
    pub fn simulate_voice_batch(&mut self, count: usize) -> Vec<VoiceSimulationRow> {
        (0..count)
            .map(|i| {
                let reading = self.generate_voice_reading();
                VoiceSimulationRow::from_reading(format!("Test {}", i + 1), &reading)
            })
            .collect()
    }
}

impl<R: Rng> VitalSignSource for SimulatedSignalGenerator<R> {
    fn produce_face_reading(&mut self, image: &[u8]) -> FaceReading {
        debug!(image_bytes = image.len(), "simulating face analysis");
        self.generate_face_reading()
    }

    fn produce_posture_reading(&mut self, image: &[u8]) -> PostureReading {
        debug!(image_bytes = image.len(), "simulating posture analysis");
        self.generate_posture_reading()
    }

    fn produce_voice_reading(&mut self, audio: &[u8]) -> VoiceReading {
        debug!(audio_bytes = audio.len(), "simulating voice analysis");
        self.generate_voice_reading()
    }
}

/// Weighted categorical draw
fn pick<R: Rng, T: Copy>(rng: &mut R, choices: &[(T, f64)]) -> T {
    choices
        .choose_weighted(rng, |choice| choice.1)
        .map(|choice| choice.0)
        .unwrap_or(choices[0].0)
}
