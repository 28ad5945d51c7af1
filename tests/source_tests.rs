use netguard::config::{RiskConfig, ScanConfig};
use netguard::engine::assess;
use netguard::errors::NetGuardError;
use netguard::fixture::sample_devices;
use netguard::source::{apply_scan_preferences, DeviceSource, FixtureSource, JsonFileSource};
use tempfile::TempDir;

const BACKEND_PAYLOAD: &str = r#"{
    "current_ip": "192.168.1.20",
    "network_range": "192.168.1.0/24",
    "devices": [
        {
            "ip": "192.168.1.1",
            "mac": "AA:BB:CC:DD:EE:FF",
            "hostname": "router",
            "manufacturer": "Netgear",
            "bssid": "",
            "open_ports": [{"port": 23, "service": "telnet"}, {"port": 80, "service": "http"}],
            "streaming_ports": [],
            "os": "Linux"
        },
        {
            "ip": "192.168.1.30",
            "mac": "11:22:33:44:55:66",
            "hostname": "Unknown",
            "manufacturer": "Unknown",
            "open_ports": []
        }
    ]
}"#;

#[test]
fn test_parse_backend_scan_result() {
    let devices = JsonFileSource::parse(BACKEND_PAYLOAD).unwrap();
    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0].address, "192.168.1.1");
    assert_eq!(devices[0].vendor.as_deref(), Some("Netgear"));
    assert_eq!(devices[0].hardware_id.as_deref(), Some("AA:BB:CC:DD:EE:FF"));
    assert_eq!(devices[0].operating_system.as_deref(), Some("Linux"));
    assert_eq!(devices[0].open_ports[0].service, "telnet");
    assert!(devices[1].is_unidentified());

    let result = assess(&devices, &RiskConfig::default()).unwrap();
    assert_eq!(result.score, 75);
}

#[test]
fn test_parse_bare_device_array() {
    let devices = JsonFileSource::parse(
        r#"[{"address": "10.0.0.5", "hostname": "pc", "openPorts": [{"port": 22}]}]"#,
    )
    .unwrap();
    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0].open_ports[0].port, 22);
    assert!(devices[0].open_ports[0].service.is_empty());
}

#[test]
fn test_parse_rejects_garbage() {
    assert!(JsonFileSource::parse("\"hello\"").is_err());
    assert!(JsonFileSource::parse(r#"[{"port": 70000}]"#).is_err());

    match JsonFileSource::parse("{}") {
        Err(NetGuardError::SourceError(message)) => assert!(message.contains("devices")),
        other => panic!("expected a source error, got {:?}", other),
    }
    let renamed_field =
        r#"{"hosts": [{"ip": "10.0.0.1", "open_ports": [{"port": 23, "service": "telnet"}]}]}"#;
    match JsonFileSource::parse(renamed_field) {
        Err(NetGuardError::SourceError(message)) => assert!(message.contains("hosts")),
        other => panic!("expected a source error, got {:?}", other),
    }
    assert!(matches!(
        JsonFileSource::parse(r#"{"devices": "none"}"#),
        Err(NetGuardError::SourceError(_))
    ));
}

#[tokio::test]
async fn test_json_file_source_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hosts.json");
    std::fs::write(&path, BACKEND_PAYLOAD).unwrap();

    let source = JsonFileSource::new(&path);
    assert_eq!(source.name(), "JSON scan result file");
    let devices = source.load().await.unwrap();
    assert_eq!(devices.len(), 2);
}

#[tokio::test]
async fn test_json_file_source_missing_file() {
    let source = JsonFileSource::new("/nonexistent/netguard/hosts.json");
    assert!(source.load().await.is_err());
}

#[tokio::test]
async fn test_fixture_source_is_seeded() {
    let first = FixtureSource::new(12, 99).load().await.unwrap();
    let second = FixtureSource::new(12, 99).load().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 12);
    assert_eq!(first[0].address, "192.168.1.1");
}

#[test]
fn test_fixture_caps_at_subnet_size() {
    assert_eq!(sample_devices(1000, 1).len(), 254);
    assert!(sample_devices(0, 1).is_empty());
}

#[test]
fn test_scan_preferences_strip_disabled_data() {
    let mut devices = JsonFileSource::parse(BACKEND_PAYLOAD).unwrap();
    let config = ScanConfig {
        scan_ports: false,
        os_detection: false,
        ..ScanConfig::default()
    };
    apply_scan_preferences(&mut devices, &config);
    assert!(devices.iter().all(|d| d.open_ports.is_empty()));
    assert!(devices.iter().all(|d| d.operating_system.is_none()));

    // Only the unknown-devices finding remains once ports are discarded
    let result = assess(&devices, &RiskConfig::default()).unwrap();
    assert_eq!(result.score, 90);
}
