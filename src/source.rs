use crate::config::ScanConfig;
use crate::errors::NetGuardError;
use crate::fixture;
use crate::model::{Device, ScanResult};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::path::PathBuf;
use tracing::{debug, info};

/// Upstream provider of device records
#[async_trait]
pub trait DeviceSource: Send + Sync {
    async fn load(&self) -> Result<Vec<Device>, NetGuardError>;
    fn name(&self) -> &'static str;
}

/// Reads a scanner result file: either `{"devices": [...]}` or a bare array
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse a payload already held in memory.
    ///
    /// Only a bare device array or an object carrying a `devices` array is
    /// accepted; any other shape is an error rather than an empty network.
    pub fn parse(raw: &str) -> Result<Vec<Device>, NetGuardError> {
        let value: Value = serde_json::from_str(raw)?;
        match value {
            Value::Array(_) => Vec::<Device>::deserialize(value).map_err(|e| {
                NetGuardError::SourceError(format!("invalid device array: {}", e))
            }),
            Value::Object(fields) => {
                if !fields.contains_key("devices") {
                    return Err(NetGuardError::SourceError(format!(
                        "scan result object has no \"devices\" field (found: {})",
                        fields.keys().cloned().collect::<Vec<_>>().join(", ")
                    )));
                }
                ScanResult::deserialize(Value::Object(fields))
                    .map(|scan| scan.devices)
                    .map_err(|e| NetGuardError::SourceError(format!("invalid scan result: {}", e)))
            }
            other => Err(NetGuardError::SourceError(format!(
                "expected a device array or scan result object, found {}",
                json_kind(&other)
            ))),
        }
    }
}

#[async_trait]
impl DeviceSource for JsonFileSource {
    fn name(&self) -> &'static str {
        "JSON scan result file"
    }

    async fn load(&self) -> Result<Vec<Device>, NetGuardError> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let devices = Self::parse(&raw)?;
        info!(path = %self.path.display(), devices = devices.len(), "loaded devices");
        Ok(devices)
    }
}

/// Sample devices for demos; never feeds real assessments
pub struct FixtureSource {
    count: usize,
    seed: u64,
}

impl FixtureSource {
    pub fn new(count: usize, seed: u64) -> Self {
        Self { count, seed }
    }
}

#[async_trait]
impl DeviceSource for FixtureSource {
    fn name(&self) -> &'static str {
        "sample fixture generator"
    }

    async fn load(&self) -> Result<Vec<Device>, NetGuardError> {
        Ok(fixture::sample_devices(self.count, self.seed))
    }
}

/// Drop data the user asked the scanner not to collect
pub fn apply_scan_preferences(devices: &mut [Device], config: &ScanConfig) {
    if !config.scan_ports {
        debug!("port scanning disabled, discarding open ports");
        devices.iter_mut().for_each(|d| d.open_ports.clear());
    }
    if !config.os_detection {
        devices.iter_mut().for_each(|d| d.operating_system = None);
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
