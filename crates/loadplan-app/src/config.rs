//! Configuration management for loadplan
//!
//! Config stored at: ~/.config/loadplan/config.json

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use loadplan_domain::model::TruckSpec;
use loadplan_types::{ConfigError, Error, OutputFormat, Result};

use crate::constants::{default_truck_types, DEFAULT_TRUCK_TYPE};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Truck type used when --truck is not given
    #[serde(default = "default_truck_type")]
    pub default_truck_type: String,

    /// Named truck types and their capacities
    #[serde(default = "default_truck_types")]
    pub truck_types: HashMap<String, TruckSpec>,

    /// Data directory override (history and templates)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_truck_type() -> String {
    DEFAULT_TRUCK_TYPE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            default_truck_type: default_truck_type(),
            truck_types: default_truck_types(),
            data_dir: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("loadplan");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.data_dir {
            return Ok(dir.clone());
        }

        let data_dir = dirs::data_dir().ok_or(ConfigError::NotFound)?.join("loadplan");
        Ok(data_dir)
    }

    /// Resolve a truck type by name, case-insensitively
    pub fn truck_spec(&self, name: &str) -> Result<(String, TruckSpec)> {
        if let Some(spec) = self.truck_types.get(name) {
            return Ok((name.to_string(), *spec));
        }

        for (key, spec) in &self.truck_types {
            if key.eq_ignore_ascii_case(name) {
                return Ok((key.clone(), *spec));
            }
        }

        let mut available: Vec<_> = self.truck_types.keys().cloned().collect();
        available.sort();
        Err(Error::UnknownTruckType(format!(
            "{} (available: {})",
            name,
            available.join(", ")
        )))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Loadplan Configuration")?;
        writeln!(f, "======================")?;
        writeln!(f)?;
        writeln!(f, "Output format:      {}", self.output_format)?;
        writeln!(f, "Default truck type: {}", self.default_truck_type)?;
        writeln!(
            f,
            "Data dir:           {}",
            self.data_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(f)?;
        writeln!(f, "Truck types:")?;
        let mut names: Vec<_> = self.truck_types.keys().collect();
        names.sort();
        for name in names {
            let spec = &self.truck_types[name];
            writeln!(
                f,
                "  {:<10} {:>8.1} m³ {:>10.1} kg",
                name, spec.volume_capacity, spec.weight_capacity
            )?;
        }

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:        {}", path.display())?;
        }

        Ok(())
    }
}
