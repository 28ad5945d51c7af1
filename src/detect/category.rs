use crate::model::{Device, DeviceCategory};

const ROUTER_MARKERS: &[&str] = &[
    "router", "gateway", "modem", "netgear", "tp-link", "linksys", "ubiquiti",
];
const SERVER_MARKERS: &[&str] = &["server", "nas", "synology", "qnap"];
const PHONE_MARKERS: &[&str] = &["phone", "mobile", "android", "iphone", "pixel", "galaxy"];
const TABLET_MARKERS: &[&str] = &["tablet", "ipad"];
const PRINTER_MARKERS: &[&str] = &["printer", "jetdirect"];

/// Classify a device from its hostname and vendor strings.
///
/// Precedence is fixed: router-like names win over server-like names, which
/// win over phones, tablets and printers. Anything else is a computer.
pub fn classify(device: &Device) -> DeviceCategory {
    let hostname = device.known_hostname().unwrap_or_default().to_lowercase();
    let vendor = device.known_vendor().unwrap_or_default().to_lowercase();
    let contains_any =
        |markers: &[&str]| markers.iter().any(|m| hostname.contains(m) || vendor.contains(m));

    match () {
        _ if contains_any(ROUTER_MARKERS) => DeviceCategory::Router,
        _ if contains_any(SERVER_MARKERS) => DeviceCategory::Server,
        _ if contains_any(PHONE_MARKERS) => DeviceCategory::Phone,
        _ if contains_any(TABLET_MARKERS) => DeviceCategory::Tablet,
        _ if contains_any(PRINTER_MARKERS) => DeviceCategory::Printer,
        _ => DeviceCategory::Computer,
    }
}
