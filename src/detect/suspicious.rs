use crate::constants::{
    GENERIC_HOSTNAME_MARKERS, SUSPICIOUS_PORTS, SUSPICIOUS_VENDOR_MARKERS, UNUSUAL_OS_MARKERS,
};
use crate::model::Device;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One reason a device was flagged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Indicator {
    SuspiciousPort(u16),
    GenericHostname,
    SuspiciousVendor(Option<String>),
    UnusualOs(String),
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Indicator::SuspiciousPort(port) => write!(f, "suspicious port {}", port),
            Indicator::GenericHostname => f.write_str("generic or missing hostname"),
            Indicator::SuspiciousVendor(Some(vendor)) => write!(f, "manufacturer {}", vendor),
            Indicator::SuspiciousVendor(None) => f.write_str("unknown manufacturer"),
            Indicator::UnusualOs(os) => write!(f, "unusual OS {}", os),
        }
    }
}

/// A device that matched the suspicious-device rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspiciousDevice {
    pub address: String,
    pub label: String,
    pub indicators: Vec<Indicator>,
}

/// Flag devices that look like cameras, rogue access points or compromised IoT.
///
/// A device is suspicious when it exposes a suspicious port, or when its
/// hostname is generic and either its manufacturer or its OS is suspicious.
/// Input order is preserved.
pub fn find_suspicious(devices: &[Device]) -> Vec<SuspiciousDevice> {
    devices.iter().filter_map(inspect).collect()
}

fn inspect(device: &Device) -> Option<SuspiciousDevice> {
    let port = device
        .open_ports
        .iter()
        .find(|p| SUSPICIOUS_PORTS.contains(&p.port))
        .map(|p| Indicator::SuspiciousPort(p.port));

    let generic_hostname = match device.known_hostname() {
        None => true,
        Some(h) => GENERIC_HOSTNAME_MARKERS.iter().any(|m| h.contains(m)),
    };

    let vendor = match device.known_vendor() {
        None => Some(Indicator::SuspiciousVendor(None)),
        Some(v) if SUSPICIOUS_VENDOR_MARKERS.iter().any(|m| v.contains(m)) => {
            Some(Indicator::SuspiciousVendor(Some(v.to_string())))
        }
        Some(_) => None,
    };

    let os = device
        .operating_system
        .as_deref()
        .filter(|os| UNUSUAL_OS_MARKERS.iter().any(|m| os.contains(m)))
        .map(|os| Indicator::UnusualOs(os.to_string()));

    let flagged = port.is_some() || (generic_hostname && (vendor.is_some() || os.is_some()));
    if !flagged {
        return None;
    }

    let mut indicators = Vec::new();
    indicators.extend(port);
    if generic_hostname {
        indicators.push(Indicator::GenericHostname);
    }
    indicators.extend(vendor);
    indicators.extend(os);

    Some(SuspiciousDevice {
        address: device.address.clone(),
        label: device.label().to_string(),
        indicators,
    })
}
