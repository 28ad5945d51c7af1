//! netguard - home network security assessment
//!
//! This library turns the device list of a local network scan into:
//! - A deterministic security score with ordered findings
//! - Device categories for grouping and display
//! - Suspicious device reports (cameras, rogue access points, exposed IoT)
//! - Persisted scan, security and display preferences

pub mod config;
pub mod constants;
pub mod detect;
pub mod engine;
pub mod errors;
pub mod fixture;
pub mod model;
pub mod settings;
pub mod source;
pub mod table;

// Re-export commonly used types for convenience
pub use config::{DisplayConfig, RiskConfig, ScanConfig, Settings};
pub use detect::{classify, find_suspicious, Indicator, SuspiciousDevice};
pub use engine::assess;
pub use errors::NetGuardError;
pub use model::{
    AssessmentResult, Device, DeviceCategory, Finding, OpenPort, ScoreStatus, Severity,
};
pub use settings::{JsonFileStore, MemoryStore, SettingsStore};
pub use source::{DeviceSource, FixtureSource, JsonFileSource};
