use netguard::detect::classify;
use netguard::model::DeviceCategory;
use test_utils::create_named_device;


#[test]
fn test_router_names() {
    for name in ["router", "Home-Gateway", "cable-modem"] {
        let device = create_named_device("192.168.1.1", Some(name), None);
        assert_eq!(classify(&device), DeviceCategory::Router, "{}", name);
    }
}

#[test]
fn test_router_vendor() {
    let device = create_named_device("192.168.1.1", None, Some("NETGEAR"));
    assert_eq!(classify(&device), DeviceCategory::Router);
}

#[test]
fn test_router_takes_precedence_over_server() {
    let device = create_named_device("192.168.1.1", Some("router-server"), None);
    assert_eq!(classify(&device), DeviceCategory::Router);
}

#[test]
fn test_server_takes_precedence_over_phone() {
    let device = create_named_device("192.168.1.2", Some("media-server"), Some("Samsung Mobile"));
    assert_eq!(classify(&device), DeviceCategory::Server);
}

#[test]
fn test_phone_and_tablet() {
    let phone = create_named_device("192.168.1.3", Some("Johns-iPhone"), Some("Apple, Inc."));
    assert_eq!(classify(&phone), DeviceCategory::Phone);

    let tablet = create_named_device("192.168.1.4", Some("kitchen-ipad"), Some("Apple, Inc."));
    assert_eq!(classify(&tablet), DeviceCategory::Tablet);
}

#[test]
fn test_printer() {
    let device = create_named_device("192.168.1.5", Some("office-printer"), Some("Brother"));
    assert_eq!(classify(&device), DeviceCategory::Printer);
}

#[test]
fn test_default_is_computer() {
    let device = create_named_device("192.168.1.6", Some("home-laptop"), Some("Dell"));
    assert_eq!(classify(&device), DeviceCategory::Computer);
}

#[test]
fn test_absent_fields_fall_through_to_computer() {
    let device = create_named_device("192.168.1.7", None, None);
    assert_eq!(classify(&device), DeviceCategory::Computer);

    let placeholder = create_named_device("192.168.1.8", Some("Unknown"), Some("N/A"));
    assert_eq!(classify(&placeholder), DeviceCategory::Computer);
}
