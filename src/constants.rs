/// Ports treated as high-risk when found open
pub const DEFAULT_CRITICAL_PORTS: &[u16] = &[
    22,   // SSH
    23,   // Telnet
    25,   // SMTP
    445,  // SMB
    3389, // RDP
];

/// Hostname/vendor values that mean "not resolved", compared case-insensitively
pub const PLACEHOLDER_IDENTIFIERS: &[&str] = &["unknown", "n/a", "-", "—", "none"];

/// Ports commonly exposed by cameras, telnet-enabled IoT firmware and ad-hoc servers
pub const SUSPICIOUS_PORTS: &[u16] = &[
    21,   // FTP
    23,   // Telnet
    554,  // RTSP
    2323, // Telnet-Alt
    8080, // HTTP-Alt
    8443, // HTTPS-Alt
    8554, // RTSP-Alt
];

/// Hostname fragments typical of unconfigured embedded devices
pub const GENERIC_HOSTNAME_MARKERS: &[&str] = &["ESP", "Camera"];

/// Surveillance hardware manufacturers
pub const SUSPICIOUS_VENDOR_MARKERS: &[&str] = &["Unknown", "Dahua", "Hikvision", "Foscam"];

/// Operating system fingerprints that warrant a closer look
pub const UNUSUAL_OS_MARKERS: &[&str] = &["Embedded", "Unknown"];

pub const ADVISORY_TITLE: &str = "Regular Password Updates";
pub const ADVISORY_DESCRIPTION: &str =
    "Remember to change default passwords periodically on your router and connected devices.";

/// Settings store keys, one JSON document per settings group
pub const SCANNING_SETTINGS_KEY: &str = "scanning";
pub const SECURITY_SETTINGS_KEY: &str = "security";
pub const DISPLAY_SETTINGS_KEY: &str = "display";
