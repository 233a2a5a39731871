//! Session state
//!
//! One `HealthSession` holds everything a single interactive session knows
//! about the worker: the latest vital signs, the append-only scan history,
//! quick-action tallies, notes, and the emergency flag. It is owned by exactly
//! one monitor and passed by reference to whatever handles an action.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::GuardError;
use crate::types::{HealthReport, HydrationLevel, StressLevel};

pub const DEFAULT_HEART_RATE: i32 = 72;
pub const DEFAULT_FATIGUE_SCORE: u8 = 3;
pub const DEFAULT_POSTURE_SCORE: i32 = 85;
pub const DEFAULT_TEMPERATURE: f64 = 36.6;
/// Lowest value on the 1-3 fatigue scale
pub const MIN_FATIGUE_SCORE: u8 = 1;

/// Latest vital signs shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionHealthState {
    /// Heart rate (bpm)
    pub heart_rate: i32,
    pub stress_level: StressLevel,
    /// Fatigue on a 1 (alert) to 3 (fatigued) scale
    pub fatigue_score: u8,
    /// Posture quality (0-100)
    pub posture_score: i32,
    pub hydration_level: HydrationLevel,
    /// Temperature (celsius)
    pub temperature: f64,
    /// When the state was last refreshed by a scan or reset
    pub last_check: DateTime<Utc>,
}

impl SessionHealthState {
    /// Fresh state with the fixed defaults
    pub fn defaults_at(at: DateTime<Utc>) -> Self {
        Self {
            heart_rate: DEFAULT_HEART_RATE,
            stress_level: StressLevel::Low,
            fatigue_score: DEFAULT_FATIGUE_SCORE,
            posture_score: DEFAULT_POSTURE_SCORE,
            hydration_level: HydrationLevel::Good,
            temperature: DEFAULT_TEMPERATURE,
            last_check: at,
        }
    }
}

/// One scan in the history log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Assigned when the scan is recorded
    pub entry_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub report: HealthReport,
}

/// Free-text note attached to the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthNote {
    pub timestamp: DateTime<Utc>,
    pub text: String,
}

/// Counts of quick actions logged during the session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickActionTally {
    pub hydration: u32,
    pub rest: u32,
    pub stretch: u32,
}

/// State for one interactive session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthSession {
    session_id: Uuid,
    started_at: DateTime<Utc>,
    state: SessionHealthState,
    history: Vec<HistoryEntry>,
    notes: Vec<HealthNote>,
    actions: QuickActionTally,
    emergency: bool,
}

impl Default for HealthSession {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl HealthSession {
    /// Start a session with default vital signs
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            started_at,
            state: SessionHealthState::defaults_at(started_at),
            history: Vec::new(),
            notes: Vec::new(),
            actions: QuickActionTally::default(),
            emergency: false,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn state(&self) -> &SessionHealthState {
        &self.state
    }

    /// Scan history, oldest first
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn latest_report(&self) -> Option<&HealthReport> {
        self.history.last().map(|entry| &entry.report)
    }

    pub fn notes(&self) -> &[HealthNote] {
        &self.notes
    }

    pub fn actions(&self) -> QuickActionTally {
        self.actions
    }

    pub fn emergency_active(&self) -> bool {
        self.emergency
    }

    /// Copy a scan's reading into the state and append it to the history
    pub fn record_scan(&mut self, report: HealthReport, at: DateTime<Utc>) {
        let reading = &report.reading;
        self.state.heart_rate = reading.heart_rate;
        self.state.stress_level = reading.stress_level;
        self.state.fatigue_score = reading.fatigue_level.session_score();
        self.state.posture_score = reading.posture_score;
        self.state.temperature = reading.temperature;
        self.state.last_check = at;

        info!(
            session = %self.session_id,
            score = report.overall_health_score,
            status = %report.health_status,
            "recorded scan"
        );

        self.history.push(HistoryEntry {
            entry_id: Uuid::new_v4(),
            timestamp: at,
            report,
        });
    }

    /// Log a drink of water
    pub fn log_hydration(&mut self) {
        self.state.hydration_level = HydrationLevel::Good;
        self.actions.hydration += 1;
        info!(session = %self.session_id, "hydration logged");
    }

    /// Log a rest break; fatigue drops one step but never below 1
    pub fn log_rest(&mut self) {
        self.state.fatigue_score = self
            .state
            .fatigue_score
            .saturating_sub(1)
            .max(MIN_FATIGUE_SCORE);
        self.actions.rest += 1;
        info!(
            session = %self.session_id,
            fatigue = self.state.fatigue_score,
            "rest break logged"
        );
    }

    /// Log a stretch break
    pub fn log_stretch(&mut self) {
        self.actions.stretch += 1;
        info!(session = %self.session_id, "stretch break logged");
    }

    /// Attach a note; blank notes are rejected
    pub fn add_note(&mut self, text: &str, at: DateTime<Utc>) -> Result<(), GuardError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(GuardError::EmptyNote);
        }

        self.notes.push(HealthNote {
            timestamp: at,
            text: text.to_string(),
        });
        Ok(())
    }

    /// Restore default vital signs. History and notes are kept.
    pub fn reset(&mut self, at: DateTime<Utc>) {
        self.state = SessionHealthState::defaults_at(at);
        info!(session = %self.session_id, "session state reset");
    }

    pub fn raise_emergency(&mut self) {
        self.emergency = true;
        warn!(session = %self.session_id, "medical emergency alert raised");
    }

    pub fn acknowledge_emergency(&mut self) {
        self.emergency = false;
        info!(session = %self.session_id, "emergency acknowledged");
    }

    /// Serialize the session snapshot to JSON
    pub fn to_json(&self) -> Result<String, GuardError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
