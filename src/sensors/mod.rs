//! Vital-sign sources
//!
//! This module defines the capability interface a face/posture/voice analyzer
//! exposes to the rest of the crate, plus the simulated implementation used in
//! place of real sensing.

mod simulated;
mod voice;

pub use simulated::SimulatedSignalGenerator;
pub use voice::{voice_care_tips, VoiceCareTips, VoiceSimulationRow};

use crate::types::{FaceReading, PostureReading, VoiceReading};

/// Trait for analyzers that turn captured media into readings
pub trait VitalSignSource {
    /// Analyze a camera frame for heart rate, stress, fatigue and temperature
    fn produce_face_reading(&mut self, image: &[u8]) -> FaceReading;

    /// Analyze a camera frame for posture quality
    fn produce_posture_reading(&mut self, image: &[u8]) -> PostureReading;

    /// Analyze an audio clip for vocal stress and fatigue
    fn produce_voice_reading(&mut self, audio: &[u8]) -> VoiceReading;
}
