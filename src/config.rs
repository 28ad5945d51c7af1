use crate::constants::DEFAULT_CRITICAL_PORTS;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Tunable parameters for the risk assessment engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Ports considered high-risk when open
    pub critical_ports: BTreeSet<u16>,

    /// A device with more open ports than this gets an excessive-ports finding
    pub excessive_port_threshold: usize,

    /// Deducted once when any device is unidentified
    pub unknown_penalty: u32,

    /// Deducted per device exposing a critical port
    pub critical_port_penalty: u32,

    /// Deducted per device exceeding the open port threshold
    pub excessive_port_penalty: u32,

    /// Append the password-rotation advisory to every result
    pub include_generic_advisory: bool,

    /// Report devices whose open ports are neither critical nor excessive
    pub flag_open_ports: bool,

    /// Deducted per device reported by `flag_open_ports`
    pub open_port_penalty: u32,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            critical_ports: DEFAULT_CRITICAL_PORTS.iter().copied().collect(),
            excessive_port_threshold: 5,
            unknown_penalty: 10,
            critical_port_penalty: 15,
            excessive_port_penalty: 10,
            include_generic_advisory: false,
            flag_open_ports: false,
            open_port_penalty: 5,
        }
    }
}

/// Configuration settings for scanning behaviour, consumed by the data source layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Rescan automatically on the configured interval
    pub auto_scan: bool,

    /// Hours between automatic scans
    pub scan_interval_hours: u32,

    /// Scan every port instead of the common list
    pub deep_scan: bool,

    /// Collect open ports for discovered hosts
    pub scan_ports: bool,

    /// Attempt operating system fingerprinting
    pub os_detection: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            auto_scan: true,
            scan_interval_hours: 12,
            deep_scan: false,
            scan_ports: true,
            os_detection: true,
        }
    }
}

/// Presentation preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub dark_mode: bool,
    pub compact_view: bool,
    pub show_ips: bool,
    pub show_macs: bool,
    pub show_hostnames: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            compact_view: false,
            show_ips: true,
            show_macs: true,
            show_hostnames: true,
        }
    }
}

/// All settings groups, resolved once at the application boundary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub scanning: ScanConfig,
    pub security: RiskConfig,
    pub display: DisplayConfig,
}
