use netguard::config::{DisplayConfig, RiskConfig, ScanConfig, Settings};
use netguard::errors::NetGuardError;
use netguard::settings::{JsonFileStore, MemoryStore, SettingsStore};
use tempfile::TempDir;

#[test]
fn test_missing_keys_resolve_to_defaults() {
    let store = MemoryStore::new();
    let settings = Settings::load(&store).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.security.excessive_port_threshold, 5);
    assert_eq!(settings.scanning.scan_interval_hours, 12);
    assert!(settings.display.show_ips);
}

#[test]
fn test_partial_group_keeps_other_defaults() {
    let mut store = MemoryStore::new();
    store
        .set(
            "security",
            r#"{"critical_ports":[23],"include_generic_advisory":true}"#.to_string(),
        )
        .unwrap();

    let settings = Settings::load(&store).unwrap();
    assert_eq!(
        settings.security.critical_ports.iter().copied().collect::<Vec<_>>(),
        vec![23]
    );
    assert!(settings.security.include_generic_advisory);
    assert_eq!(settings.security.critical_port_penalty, 15);
}

#[test]
fn test_malformed_group_is_rejected() {
    let mut store = MemoryStore::new();
    store.set("display", "{not json".to_string()).unwrap();

    let err = Settings::load(&store).unwrap_err();
    assert!(matches!(err, NetGuardError::Settings { ref key, .. } if key == "display"));
}

#[test]
fn test_memory_store_round_trip() {
    let mut store = MemoryStore::new();
    let settings = Settings {
        scanning: ScanConfig {
            deep_scan: true,
            ..ScanConfig::default()
        },
        security: RiskConfig {
            excessive_port_threshold: 3,
            ..RiskConfig::default()
        },
        display: DisplayConfig {
            dark_mode: true,
            ..DisplayConfig::default()
        },
    };
    settings.save(&mut store).unwrap();
    assert_eq!(Settings::load(&store).unwrap(), settings);

    store.remove("security").unwrap();
    assert_eq!(Settings::load(&store).unwrap().security, RiskConfig::default());
}

#[test]
fn test_json_file_store_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");

    let mut store = JsonFileStore::open(&path).unwrap();
    assert_eq!(store.get("display").unwrap(), None);

    let settings = Settings {
        display: DisplayConfig {
            show_macs: false,
            ..DisplayConfig::default()
        },
        ..Settings::default()
    };
    settings.save(&mut store).unwrap();

    let reopened = JsonFileStore::open(&path).unwrap();
    let loaded = Settings::load(&reopened).unwrap();
    assert!(!loaded.display.show_macs);
    assert_eq!(loaded, settings);
}

#[test]
fn test_json_file_store_leaves_no_temp_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");

    let mut store = JsonFileStore::open(&path).unwrap();
    Settings::default().save(&mut store).unwrap();
    store.remove("display").unwrap();

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["settings.json"]);

    let raw = std::fs::read_to_string(&path).unwrap();
    let entries: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(entries.get("security").is_some());
    assert!(entries.get("display").is_none());
}

#[test]
fn test_json_file_store_rejects_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    assert!(matches!(
        JsonFileStore::open(&path),
        Err(NetGuardError::JsonError(_))
    ));
}
