//! HealthGuard - Worker vital-sign monitoring core
//!
//! HealthGuard turns captured media into a scored health report through a
//! short pipeline: vital-sign source → flat reading → weighted aggregation →
//! session history.
//!
//! The shipped vital-sign source is a simulated generator that samples fixed
//! distributions and never inspects the media it is given. Real analyzers plug
//! in behind the same `VitalSignSource` trait.
//!
//! ## Modules
//!
//! - **Scoring**: `sensors`, `aggregator`, `pipeline`, `session`
//! - **Side analyses**: `text` (stress keywords), `assessment` (self-report form)
//! - **Presentation support**: `alerts`, `analytics` (history, CSV export)

pub mod aggregator;
pub mod alerts;
pub mod analytics;
pub mod assessment;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod sensors;
pub mod session;
pub mod text;
pub mod types;

pub use aggregator::{aggregate, Aggregator, ClampPolicy};
pub use config::MonitorConfig;
pub use error::GuardError;
pub use pipeline::{scan_once, HealthMonitor, ScanOutcome};
pub use sensors::{SimulatedSignalGenerator, VitalSignSource};
pub use session::HealthSession;
pub use types::{HealthReport, HealthStatus, Reading};

/// HealthGuard version
pub const GUARD_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Product name shown in reports
pub const PRODUCT_NAME: &str = "HealthGuard";
