use crate::config::Settings;
use crate::constants::{DISPLAY_SETTINGS_KEY, SCANNING_SETTINGS_KEY, SECURITY_SETTINGS_KEY};
use crate::errors::NetGuardError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// String key-value persistence with local-storage semantics
pub trait SettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>, NetGuardError>;
    fn set(&mut self, key: &str, value: String) -> Result<(), NetGuardError>;
    fn remove(&mut self, key: &str) -> Result<(), NetGuardError>;
}

/// Volatile store, mostly for tests and one-shot runs
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, NetGuardError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), NetGuardError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), NetGuardError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON object file.
///
/// The file is read once on open; every mutation rewrites the whole file
/// atomically.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store, treating a missing file as empty
    pub fn open(path: impl AsRef<Path>) -> Result<Self, NetGuardError> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            if raw.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&raw)?
            }
        } else {
            debug!(path = %path.display(), "settings file not found, starting empty");
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write to a sibling temp file and rename it over the store
    fn flush(&self) -> Result<(), NetGuardError> {
        let raw = serde_json::to_string_pretty(&self.entries)?;
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, raw)?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

impl SettingsStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, NetGuardError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), NetGuardError> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), NetGuardError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

impl Settings {
    /// Resolve every settings group, falling back to defaults for missing keys
    pub fn load(store: &dyn SettingsStore) -> Result<Self, NetGuardError> {
        Ok(Self {
            scanning: load_group(store, SCANNING_SETTINGS_KEY)?,
            security: load_group(store, SECURITY_SETTINGS_KEY)?,
            display: load_group(store, DISPLAY_SETTINGS_KEY)?,
        })
    }

    pub fn save(&self, store: &mut dyn SettingsStore) -> Result<(), NetGuardError> {
        save_group(store, SCANNING_SETTINGS_KEY, &self.scanning)?;
        save_group(store, SECURITY_SETTINGS_KEY, &self.security)?;
        save_group(store, DISPLAY_SETTINGS_KEY, &self.display)?;
        Ok(())
    }
}

fn load_group<T>(store: &dyn SettingsStore, key: &str) -> Result<T, NetGuardError>
where
    T: DeserializeOwned + Default,
{
    match store.get(key)? {
        Some(raw) => serde_json::from_str(&raw).map_err(|e| {
            warn!(key, error = %e, "rejecting malformed settings group");
            NetGuardError::Settings {
                key: key.to_string(),
                reason: e.to_string(),
            }
        }),
        None => Ok(T::default()),
    }
}

fn save_group<T: Serialize>(
    store: &mut dyn SettingsStore,
    key: &str,
    value: &T,
) -> Result<(), NetGuardError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, raw)
}
