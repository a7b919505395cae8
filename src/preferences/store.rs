//! A small JSON key-value store for user preferences.

use crate::preferences::error::PreferencesError;
use crate::types::lat_lon::LatLon;
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::NamedTempFile;
use tokio::sync::Mutex;
use tokio::{fs, task};

pub const PREFERENCES_FILE_NAME: &str = "preferences.json";
pub const SELECTED_LOCATION_KEY: &str = "selectedLocation";
pub const AUTO_REFRESH_KEY: &str = "autoRefreshInterval";
pub const DEFAULT_AUTO_REFRESH: Duration = Duration::from_secs(60);

/// Which location the dashboard follows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredLocation", into = "StoredLocation")]
pub enum SelectedLocation {
    /// Follow the device position supplied by the host.
    CurrentLocation,
    Manual { position: LatLon, name: String },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredLocation {
    #[serde(default)]
    is_current_location: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lon: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl From<StoredLocation> for SelectedLocation {
    fn from(stored: StoredLocation) -> Self {
        match (stored.is_current_location, stored.lat, stored.lon) {
            (false, Some(lat), Some(lon)) => SelectedLocation::Manual {
                position: LatLon(lat, lon),
                name: stored.name.unwrap_or_default(),
            },
            _ => SelectedLocation::CurrentLocation,
        }
    }
}

impl From<SelectedLocation> for StoredLocation {
    fn from(selected: SelectedLocation) -> Self {
        match selected {
            SelectedLocation::CurrentLocation => StoredLocation {
                is_current_location: true,
                ..Default::default()
            },
            SelectedLocation::Manual { position, name } => StoredLocation {
                is_current_location: false,
                lat: Some(position.latitude()),
                lon: Some(position.longitude()),
                name: Some(name),
            },
        }
    }
}

/// Preferences persisted as one JSON object in `<dir>/preferences.json`.
///
/// The file is read once on open; every change rewrites it through a temporary
/// file in the same directory that is then renamed over the original.
#[derive(Debug)]
pub struct PreferenceStore {
    path: PathBuf,
    values: Mutex<Map<String, Value>>,
}

impl PreferenceStore {
    /// Opens the store in `dir`. A missing file is an empty store.
    pub async fn open(dir: &Path) -> Result<Self, PreferencesError> {
        let path = dir.join(PREFERENCES_FILE_NAME);
        let values = match fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice::<Map<String, Value>>(&bytes)
                .map_err(|e| PreferencesError::Parse(path.clone(), e))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No preferences at {:?}, starting empty", path);
                Map::new()
            }
            Err(e) => return Err(PreferencesError::Read(path, e)),
        };
        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored value for `key`. Values that no longer decode as `T` read as `None`.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let values = self.values.lock().await;
        values
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    pub async fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), PreferencesError> {
        let value = serde_json::to_value(value).map_err(PreferencesError::Encode)?;
        let mut values = self.values.lock().await;
        values.insert(key.to_string(), value);
        self.persist(&values).await
    }

    /// Removes `key`, returning whether it was present.
    pub async fn remove(&self, key: &str) -> Result<bool, PreferencesError> {
        let mut values = self.values.lock().await;
        if values.remove(key).is_none() {
            return Ok(false);
        }
        self.persist(&values).await?;
        Ok(true)
    }

    pub async fn selected_location(&self) -> SelectedLocation {
        self.get(SELECTED_LOCATION_KEY)
            .await
            .unwrap_or(SelectedLocation::CurrentLocation)
    }

    pub async fn set_selected_location(
        &self,
        location: &SelectedLocation,
    ) -> Result<(), PreferencesError> {
        self.set(SELECTED_LOCATION_KEY, location).await
    }

    /// Polling interval; zero disables auto refresh. Stored in milliseconds.
    pub async fn auto_refresh_interval(&self) -> Duration {
        self.get::<u64>(AUTO_REFRESH_KEY)
            .await
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_AUTO_REFRESH)
    }

    pub async fn set_auto_refresh_interval(
        &self,
        interval: Duration,
    ) -> Result<(), PreferencesError> {
        let millis = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self.set(AUTO_REFRESH_KEY, &millis).await
    }

    async fn persist(&self, values: &Map<String, Value>) -> Result<(), PreferencesError> {
        let bytes = serde_json::to_vec_pretty(values).map_err(PreferencesError::Encode)?;
        let path = self.path.clone();
        let dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| PreferencesError::Write(dir.clone(), e))?;

        task::spawn_blocking(move || {
            let mut temp_file = NamedTempFile::new_in(&dir)
                .map_err(|e| PreferencesError::Write(path.clone(), e))?;
            temp_file
                .write_all(&bytes)
                .map_err(|e| PreferencesError::Write(path.clone(), e))?;
            temp_file
                .flush()
                .map_err(|e| PreferencesError::Write(path.clone(), e))?;
            temp_file
                .persist(&path)
                .map_err(|e| PreferencesError::Persist(path.clone(), e))?;
            debug!("Saved preferences to {:?}", path);
            Ok::<(), PreferencesError>(())
        })
        .await??;
        Ok(())
    }
}
