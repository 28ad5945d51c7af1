//! Sample device generator for demos.
//!
//! Output is pseudo-random but fully determined by the seed. Nothing in the
//! assessment path depends on this module.

use crate::model::{Device, OpenPort};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const HOSTNAMES: &[&str] = &[
    "router",
    "home-laptop",
    "iphone",
    "media-server",
    "ipad",
    "office-printer",
    "ESP_3A1F20",
    "Unknown",
];

const VENDORS: &[&str] = &[
    "Netgear",
    "Apple, Inc.",
    "Samsung Electronics Co.,Ltd",
    "Synology",
    "Hikvision",
    "Raspberry Pi Foundation",
    "Unknown",
];

const OPERATING_SYSTEMS: &[&str] = &["Linux", "Windows 11", "iOS", "Android", "Embedded"];

const SERVICES: &[(u16, &str)] = &[
    (21, "ftp"),
    (22, "ssh"),
    (23, "telnet"),
    (53, "domain"),
    (80, "http"),
    (139, "netbios-ssn"),
    (443, "https"),
    (445, "microsoft-ds"),
    (554, "rtsp"),
    (3389, "ms-wbt-server"),
    (8080, "http-proxy"),
    (9100, "jetdirect"),
];

/// Generate `count` devices on 192.168.1.0/24 starting at .1
pub fn sample_devices(count: usize, seed: u64) -> Vec<Device> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count.min(254))
        .map(|i| {
            let mut device = Device::new(format!("192.168.1.{}", i + 1));
            device.hardware_id = Some(
                (0..6)
                    .map(|_| format!("{:02X}", rng.gen::<u8>()))
                    .collect::<Vec<_>>()
                    .join(":"),
            );
            device.hostname = HOSTNAMES.choose(&mut rng).map(|s| s.to_string());
            device.vendor = VENDORS.choose(&mut rng).map(|s| s.to_string());
            device.operating_system = if rng.gen_bool(0.7) {
                OPERATING_SYSTEMS.choose(&mut rng).map(|s| s.to_string())
            } else {
                None
            };
            let port_count = rng.gen_range(0..=7);
            device.open_ports = SERVICES
                .choose_multiple(&mut rng, port_count)
                .map(|&(port, service)| OpenPort::new(port, service))
                .collect();
            device.open_ports.sort_by_key(|p| p.port);
            device
        })
        .collect()
}
