//! Remapping configuration loaded from YAML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// A remapping choice: reference point in degrees plus an optional azimuth.
///
/// Ranges are not checked here; they are validated when the settings are
/// applied through
/// [`RemappedGrid::configure_from`](crate::RemappedGrid::configure_from).
///
/// ```yaml
/// reference_lat: 40.0
/// reference_lng: 116.0
/// azimuth_rad: 0.5236   # optional, defaults to 0
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct RemapSettings {
    /// Reference latitude in degrees.
    pub reference_lat: f64,

    /// Reference longitude in degrees.
    pub reference_lng: f64,

    /// Azimuth about the reference point in radians.
    #[serde(default)]
    pub azimuth_rad: f64,
}

impl RemapSettings {
    /// Create settings directly.
    pub fn new(reference_lat: f64, reference_lng: f64, azimuth_rad: f64) -> Self {
        Self {
            reference_lat,
            reference_lng,
            azimuth_rad,
        }
    }

    /// Load settings from a YAML file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Parse settings from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SettingsError> {
        serde_yaml::from_str(yaml).map_err(|e| SettingsError::Parse(e.to_string()))
    }
}
