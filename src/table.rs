use crate::config::DisplayConfig;
use crate::detect::{classify, SuspiciousDevice};
use crate::model::{AssessmentResult, Device, Severity};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

fn base_table(display: &DisplayConfig) -> Table {
    let mut table = Table::new();
    table
        .load_preset(if display.compact_view {
            UTF8_FULL_CONDENSED
        } else {
            UTF8_FULL
        })
        .set_content_arrangement(ContentArrangement::Dynamic)
        .apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}

fn severity_cell(severity: Severity) -> Cell {
    let color = match severity {
        Severity::High => Color::Red,
        Severity::Medium => Color::Yellow,
        Severity::Low => Color::Green,
    };
    Cell::new(severity.to_string())
        .fg(color)
        .add_attribute(Attribute::Bold)
}

/// Format ports list, truncated after six entries
fn ports_summary(device: &Device) -> String {
    if device.open_ports.is_empty() {
        return "—".to_string();
    }
    let mut ports = device
        .open_ports
        .iter()
        .take(6)
        .map(|p| p.port.to_string())
        .collect::<Vec<String>>()
        .join(", ");
    if device.open_ports.len() > 6 {
        ports.push_str(&format!(" (+{})", device.open_ports.len() - 6));
    }
    ports
}

/// Device inventory honouring the column visibility preferences
pub fn devices_table(devices: &[Device], display: &DisplayConfig) -> Table {
    let mut table = base_table(display);

    let mut header = Vec::new();
    if display.show_ips {
        header.push("IP");
    }
    if display.show_hostnames {
        header.push("Hostname");
    }
    if display.show_macs {
        header.push("MAC");
    }
    header.extend(["Vendor", "Type", "OS", "Ports"]);
    table.set_header(header);

    for device in devices {
        let mut row = Vec::new();
        if display.show_ips {
            row.push(Cell::new(&device.address));
        }
        if display.show_hostnames {
            row.push(Cell::new(device.known_hostname().unwrap_or("—")));
        }
        if display.show_macs {
            row.push(Cell::new(device.hardware_id.as_deref().unwrap_or("—")));
        }
        row.push(Cell::new(device.known_vendor().unwrap_or("—")));
        row.push(Cell::new(classify(device).to_string()));
        row.push(Cell::new(
            device.operating_system.as_deref().unwrap_or("Unknown"),
        ));
        row.push(Cell::new(ports_summary(device)));
        table.add_row(row);
    }
    table
}

pub fn findings_table(result: &AssessmentResult, display: &DisplayConfig) -> Table {
    let mut table = base_table(display);
    table.set_header(vec!["Severity", "Finding", "Details", "Affected"]);
    for finding in &result.findings {
        let affected = if finding.affected_addresses.is_empty() {
            "—".to_string()
        } else if display.show_ips {
            finding.affected_addresses.join(", ")
        } else {
            format!("{} device(s)", finding.affected_addresses.len())
        };
        table.add_row(vec![
            severity_cell(finding.severity),
            Cell::new(&finding.title).add_attribute(Attribute::Bold),
            Cell::new(&finding.description),
            Cell::new(affected),
        ]);
    }
    table
}

pub fn suspicious_table(suspicious: &[SuspiciousDevice], display: &DisplayConfig) -> Table {
    let mut table = base_table(display);
    table.set_header(vec!["Device", "Indicators"]);
    for device in suspicious {
        let name = if display.show_ips && device.label != device.address {
            format!("{} ({})", device.label, device.address)
        } else {
            device.label.clone()
        };
        let indicators = device
            .indicators
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row(vec![Cell::new(name), Cell::new(indicators)]);
    }
    table
}

/// One-paragraph summary printed under the findings table
pub fn summary(result: &AssessmentResult) -> String {
    format!(
        "Security score: {}/100 ({})\nFindings: {} high, {} medium, {} low",
        result.score,
        result.status(),
        result.count(Severity::High),
        result.count(Severity::Medium),
        result.count(Severity::Low),
    )
}
