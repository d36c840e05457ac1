//! Configuration models and loaders for celestial-body catalogs.

use std::fs::File;
use std::path::{Path, PathBuf};

use launch_core::constants::GRAVITATIONAL_CONSTANT;
use serde::Deserialize;
use thiserror::Error;

/// Body definition parsed from a catalog file. All quantities are SI.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    pub mass_kg: f64,
    pub radius_m: f64,
    #[serde(default = "default_gravitational_constant")]
    pub gravitational_constant: f64,
    /// Sidereal rotation period.
    pub rotation_period_s: f64,
    pub default_altitude_m: f64,
    #[serde(default)]
    pub default_latitude_deg: f64,
}

fn default_gravitational_constant() -> f64 {
    GRAVITATIONAL_CONSTANT
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load body definitions from a YAML list, a single TOML table, or a directory of TOML files.
pub fn load_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<BodyConfig>, ConfigError> {
    load_records(path.as_ref())
}

fn load_records<T>(path: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    if path.is_dir() {
        read_dir_records(path)
    } else if has_toml_extension(path) {
        let record: T = toml::from_str(&read_to_string(path)?)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path).map_err(|source| io_error(path, source))?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(|source| io_error(dir, source))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| has_toml_extension(path))
        .collect();
    entries.sort();

    let mut records = Vec::with_capacity(entries.len());
    for path in entries {
        let record: T = toml::from_str(&read_to_string(&path)?)?;
        records.push(record);
    }
    Ok(records)
}

fn has_toml_extension(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}

fn read_to_string(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| io_error(path, source))
}

fn io_error(path: &Path, source: std::io::Error) -> ConfigError {
    ConfigError::Io {
        path: path.to_path_buf(),
        source,
    }
}
