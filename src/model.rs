use crate::constants::PLACEHOLDER_IDENTIFIERS;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A discovered network host as reported by a device data source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    #[serde(alias = "ip")]
    pub address: String,
    #[serde(default, alias = "mac", alias = "hardwareId")]
    pub hardware_id: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default, alias = "manufacturer")]
    pub vendor: Option<String>,
    #[serde(default, alias = "openPorts")]
    pub open_ports: Vec<OpenPort>,
    #[serde(default, alias = "os", alias = "operatingSystem")]
    pub operating_system: Option<String>,
}

/// An open port and the service name the scanner attached to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenPort {
    pub port: u16,
    #[serde(default)]
    pub service: String,
}

impl OpenPort {
    pub fn new(port: u16, service: impl Into<String>) -> Self {
        Self {
            port,
            service: service.into(),
        }
    }
}

impl Device {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            hardware_id: None,
            hostname: None,
            vendor: None,
            open_ports: Vec::new(),
            operating_system: None,
        }
    }

    /// Hostname if it was actually resolved
    pub fn known_hostname(&self) -> Option<&str> {
        identified(self.hostname.as_deref())
    }

    /// Vendor if it was actually resolved
    pub fn known_vendor(&self) -> Option<&str> {
        identified(self.vendor.as_deref())
    }

    /// True when either the hostname or the vendor is missing or a placeholder
    pub fn is_unidentified(&self) -> bool {
        self.known_hostname().is_none() || self.known_vendor().is_none()
    }

    /// Name used when a finding refers to this device
    pub fn label(&self) -> &str {
        self.known_hostname().unwrap_or(&self.address)
    }
}

/// Returns the trimmed value unless it is empty or a placeholder like "Unknown"
pub fn identified(value: Option<&str>) -> Option<&str> {
    let value = value?.trim();
    if value.is_empty()
        || PLACEHOLDER_IDENTIFIERS
            .iter()
            .any(|p| value.eq_ignore_ascii_case(p))
    {
        None
    } else {
        Some(value)
    }
}

/// Urgency of a finding, ordered from least to most urgent
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        };
        f.write_str(s)
    }
}

/// One security observation produced by the assessment engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    #[serde(default)]
    pub affected_addresses: Vec<String>,
}

/// Score plus findings for one assessment run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub score: u8,
    pub findings: Vec<Finding>,
}

impl AssessmentResult {
    pub fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }

    pub fn highest_severity(&self) -> Option<Severity> {
        self.findings.iter().map(|f| f.severity).max()
    }

    pub fn status(&self) -> ScoreStatus {
        ScoreStatus::from_score(self.score)
    }
}

/// Coarse band a security score falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreStatus {
    Good,
    NeedsAttention,
    AtRisk,
}

impl ScoreStatus {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => ScoreStatus::Good,
            50..=79 => ScoreStatus::NeedsAttention,
            _ => ScoreStatus::AtRisk,
        }
    }
}

impl fmt::Display for ScoreStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScoreStatus::Good => "Good",
            ScoreStatus::NeedsAttention => "Needs attention",
            ScoreStatus::AtRisk => "At risk",
        };
        f.write_str(s)
    }
}

/// Classification of device types used for grouping and icons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceCategory {
    Router,
    Server,
    Phone,
    Tablet,
    Printer,
    Computer,
}

impl fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeviceCategory::Router => "Router",
            DeviceCategory::Server => "Server",
            DeviceCategory::Phone => "Phone",
            DeviceCategory::Tablet => "Tablet",
            DeviceCategory::Printer => "Printer",
            DeviceCategory::Computer => "Computer",
        };
        f.write_str(s)
    }
}

/// Scan result envelope as served by the scanner backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanResult {
    #[serde(default)]
    pub current_ip: String,
    #[serde(default)]
    pub network_range: String,
    pub devices: Vec<Device>,
}
