//! Scan orchestration
//!
//! This module provides the public scan API. It runs the full flow from
//! captured media to a recorded health report.

use chrono::Utc;
use tracing::info;

use crate::aggregator::{Aggregator, ClampPolicy};
use crate::sensors::{SimulatedSignalGenerator, VitalSignSource};
use crate::session::HealthSession;
use crate::types::{HealthReport, Reading, VoiceReading};

/// Result of one scan, with the analyzer outputs kept for display
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub report: HealthReport,
    pub posture_recommendations: Vec<String>,
    pub voice: Option<VoiceReading>,
}

/// Run a single scan without touching any session.
///
/// # Arguments
/// * `source` - Analyzer producing the readings
/// * `image` - Camera frame handed to the face and posture analyzers
/// * `audio` - Optional voice clip; when absent no voice fields are reported
///
/// # Example
/// ```
/// use healthguard::pipeline::scan_once;
/// use healthguard::sensors::SimulatedSignalGenerator;
///
/// let mut source = SimulatedSignalGenerator::from_seed(7);
/// let outcome = scan_once(&mut source, &[], None);
/// assert!(outcome.report.overall_health_score <= 100);
/// ```
pub fn scan_once(
    source: &mut dyn VitalSignSource,
    image: &[u8],
    audio: Option<&[u8]>,
) -> ScanOutcome {
    run_scan(source, &Aggregator::default(), image, audio)
}

/// Pipeline stages:
/// 1. VitalSignSource - face and posture (and voice) readings
/// 2. Reading::from_scan - flatten into one reading
/// 3. Aggregator - score, band, recommendation
fn run_scan(
    source: &mut dyn VitalSignSource,
    aggregator: &Aggregator,
    image: &[u8],
    audio: Option<&[u8]>,
) -> ScanOutcome {
    let face = source.produce_face_reading(image);
    let posture = source.produce_posture_reading(image);
    let voice = audio.map(|clip| source.produce_voice_reading(clip));

    let reading = Reading::from_scan(&face, &posture, voice.as_ref());
    let report = aggregator.aggregate(&reading);

    ScanOutcome {
        report,
        posture_recommendations: posture.recommendations,
        voice,
    }
}

/// Stateful monitor owning one session.
///
/// Use this when scans and quick actions should accumulate into a history.
pub struct HealthMonitor<S: VitalSignSource> {
    source: S,
    aggregator: Aggregator,
    session: HealthSession,
}

impl HealthMonitor<SimulatedSignalGenerator> {
    /// Monitor backed by the simulated generator, seeded when `seed` is given
    pub fn simulated(seed: Option<u64>, policy: ClampPolicy) -> Self {
        let source = match seed {
            Some(seed) => SimulatedSignalGenerator::from_seed(seed),
            None => SimulatedSignalGenerator::from_entropy(),
        };
        Self::new(source, policy)
    }
}

impl<S: VitalSignSource> HealthMonitor<S> {
    /// Create a monitor with a fresh session
    pub fn new(source: S, policy: ClampPolicy) -> Self {
        Self {
            source,
            aggregator: Aggregator::new(policy),
            session: HealthSession::new(Utc::now()),
        }
    }

    /// Scan captured media and record the result in the session
    pub fn scan(&mut self, image: &[u8], audio: Option<&[u8]>) -> ScanOutcome {
        let outcome = run_scan(&mut self.source, &self.aggregator, image, audio);

        info!(
            score = outcome.report.overall_health_score,
            status = %outcome.report.health_status,
            with_voice = outcome.voice.is_some(),
            "scan complete"
        );

        self.session.record_scan(outcome.report.clone(), Utc::now());
        outcome
    }

    /// Scan with no media, as the quick health check does
    pub fn quick_check(&mut self) -> ScanOutcome {
        self.scan(&[], None)
    }

    /// Analyze a voice clip on its own; the session is not updated
    pub fn analyze_voice(&mut self, audio: &[u8]) -> VoiceReading {
        self.source.produce_voice_reading(audio)
    }

    pub fn session(&self) -> &HealthSession {
        &self.session
    }

    /// Mutable access for quick actions (hydration, rest, notes, reset)
    pub fn session_mut(&mut self) -> &mut HealthSession {
        &mut self.session
    }

    pub fn into_session(self) -> HealthSession {
        self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        FaceReading, FatigueLevel, HeadPosition, HealthStatus, PostureReading,
        ShoulderAlignment, SpineCurvature, StressLevel, VocalFatigue, VoiceHealth,
    };
    use pretty_assertions::assert_eq;

    /// Source returning fixed readings
    struct FixedSource;

    impl VitalSignSource for FixedSource {
        fn produce_face_reading(&mut self, _image: &[u8]) -> FaceReading {
            FaceReading {
                heart_rate_estimate: 72,
                stress_level: StressLevel::Low,
                fatigue_signs: FatigueLevel::Alert,
                temperature_estimate: 36.6,
            }
        }

        fn produce_posture_reading(&mut self, _image: &[u8]) -> PostureReading {
            PostureReading {
                posture_score: 85,
                shoulder_alignment: ShoulderAlignment::Good,
                spine_curvature: SpineCurvature::Normal,
                head_position: HeadPosition::Neutral,
                recommendations: vec!["Adjust chair height".to_string()],
            }
        }

        fn produce_voice_reading(&mut self, _audio: &[u8]) -> VoiceReading {
            VoiceReading {
                vocal_stress: 0.25,
                fatigue_level: VocalFatigue::Low,
                speech_rate: 150.0,
                voice_health: VoiceHealth::Healthy,
            }
        }
    }

    #[test]
    fn test_scan_once_with_fixed_source() {
        let outcome = scan_once(&mut FixedSource, b"frame", None);

        assert_eq!(outcome.report.overall_health_score, 92);
        assert_eq!(outcome.report.health_status, HealthStatus::Excellent);
        assert_eq!(outcome.posture_recommendations, vec!["Adjust chair height"]);
        assert!(outcome.voice.is_none());
        assert!(outcome.report.reading.vocal_stress.is_none());
    }

    #[test]
    fn test_scan_with_audio_fills_voice_fields() {
        let outcome = scan_once(&mut FixedSource, b"frame", Some(b"clip"));

        assert_eq!(outcome.report.reading.vocal_stress, Some(0.25));
        assert_eq!(outcome.report.reading.speech_rate, Some(150.0));
        assert_eq!(outcome.report.reading.voice_health, Some(VoiceHealth::Healthy));
        // Voice fields do not enter the weighted score
        assert_eq!(outcome.report.overall_health_score, 92);
    }

    #[test]
    fn test_monitor_records_each_scan() {
        let mut monitor = HealthMonitor::new(FixedSource, ClampPolicy::Components);
        monitor.quick_check();
        monitor.scan(b"frame", Some(b"clip"));

        let session = monitor.session();
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.state().fatigue_score, 1);
        assert!(session.history()[0].timestamp <= session.history()[1].timestamp);
    }

    #[test]
    fn test_voice_analysis_leaves_session_alone() {
        let mut monitor = HealthMonitor::new(FixedSource, ClampPolicy::Components);
        let voice = monitor.analyze_voice(b"clip");

        assert_eq!(voice.voice_health, VoiceHealth::Healthy);
        assert!(monitor.session().history().is_empty());
    }

    #[test]
    fn test_seeded_simulated_monitors_agree() {
        let mut a = HealthMonitor::simulated(Some(17), ClampPolicy::Components);
        let mut b = HealthMonitor::simulated(Some(17), ClampPolicy::Components);

        let first = a.quick_check();
        let second = b.quick_check();
        assert_eq!(first.report.reading, second.report.reading);
        assert_eq!(
            first.report.overall_health_score,
            second.report.overall_health_score
        );
    }
}
