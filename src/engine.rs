use crate::config::RiskConfig;
use crate::constants::{ADVISORY_DESCRIPTION, ADVISORY_TITLE};
use crate::errors::NetGuardError;
use crate::model::{AssessmentResult, Device, Finding, Severity};
use std::collections::HashSet;
use tracing::debug;

const MAX_SCORE: i64 = 100;

/// Compute the security score and findings for a set of devices.
///
/// Findings are emitted in detection order: per-device findings in input
/// order, then the unknown-devices finding, then the advisory. The input is
/// validated up front so a malformed device list never yields a partial score.
pub fn assess(devices: &[Device], config: &RiskConfig) -> Result<AssessmentResult, NetGuardError> {
    validate(devices)?;

    let mut score = MAX_SCORE;
    let mut findings = Vec::new();

    for device in devices {
        if let Some((finding, penalty)) = port_finding(device, config) {
            debug!(
                address = %device.address,
                severity = %finding.severity,
                penalty,
                "port finding"
            );
            score -= i64::from(penalty);
            findings.push(finding);
        }
    }

    let unknown: Vec<&Device> = devices.iter().filter(|d| d.is_unidentified()).collect();
    if !unknown.is_empty() {
        debug!(count = unknown.len(), "unidentified devices");
        score -= i64::from(config.unknown_penalty);
        findings.push(Finding {
            title: "Unknown Devices Detected".to_string(),
            description: format!(
                "{} device{} with unidentified hostname or manufacturer {} connected to your network. These could be unauthorized devices.",
                unknown.len(),
                if unknown.len() == 1 { "" } else { "s" },
                if unknown.len() == 1 { "is" } else { "are" },
            ),
            severity: Severity::Medium,
            affected_addresses: unknown.iter().map(|d| d.address.clone()).collect(),
        });
    }

    if config.include_generic_advisory {
        findings.push(Finding {
            title: ADVISORY_TITLE.to_string(),
            description: ADVISORY_DESCRIPTION.to_string(),
            severity: Severity::Low,
            affected_addresses: Vec::new(),
        });
    }

    let score = score.clamp(0, MAX_SCORE) as u8;
    debug!(score, findings = findings.len(), "assessment complete");

    Ok(AssessmentResult { score, findings })
}

/// Addresses must be present and unique within one run
fn validate(devices: &[Device]) -> Result<(), NetGuardError> {
    let mut seen = HashSet::with_capacity(devices.len());
    for (index, device) in devices.iter().enumerate() {
        let address = device.address.trim();
        if address.is_empty() {
            return Err(NetGuardError::InvalidArgument(format!(
                "device at index {} has an empty address",
                index
            )));
        }
        if !seen.insert(address) {
            return Err(NetGuardError::InvalidArgument(format!(
                "duplicate device address {}",
                address
            )));
        }
    }
    Ok(())
}

/// At most one port-related finding per device; critical ports take precedence
fn port_finding(device: &Device, config: &RiskConfig) -> Option<(Finding, u32)> {
    if device.open_ports.is_empty() {
        return None;
    }

    let label = device.label();
    let count = device.open_ports.len();

    if let Some(critical) = device
        .open_ports
        .iter()
        .find(|p| config.critical_ports.contains(&p.port))
    {
        let service = if critical.service.is_empty() {
            "unknown service"
        } else {
            critical.service.as_str()
        };
        let finding = Finding {
            title: "Critical Port Detected".to_string(),
            description: format!(
                "Port {} ({}) is open on {}. This port is commonly targeted by attackers and should be closed if not required.",
                critical.port, service, label
            ),
            severity: Severity::High,
            affected_addresses: vec![device.address.clone()],
        };
        return Some((finding, config.critical_port_penalty));
    }

    if count > config.excessive_port_threshold {
        let finding = Finding {
            title: "Excessive Open Ports".to_string(),
            description: format!(
                "{} has {} open ports, increasing its attack surface. Consider closing unnecessary ports.",
                label, count
            ),
            severity: Severity::Medium,
            affected_addresses: vec![device.address.clone()],
        };
        return Some((finding, config.excessive_port_penalty));
    }

    if config.flag_open_ports {
        let finding = Finding {
            title: "Open Ports Detected".to_string(),
            description: format!(
                "{} open port{} on {}. While not critical, open ports can be potential entry points.",
                count,
                if count == 1 { "" } else { "s" },
                label
            ),
            severity: Severity::Low,
            affected_addresses: vec![device.address.clone()],
        };
        return Some((finding, config.open_port_penalty));
    }

    None
}
