//! Simulation configuration structures and loading.
//!
//! Typed configuration with YAML parsing, defaults matching the classic
//! simulation (random link distances in 1..=1000), and validation that
//! runs before any topology is generated. CLI flags may override loaded
//! values; callers re-validate after applying overrides.

use std::fs::File;
use std::path::Path;

use color_eyre::Result;
use log::info;
use serde::{Deserialize, Serialize};

use crate::topology::{DistanceRange, UNREACHABLE};

/// Top-level simulation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default)]
    pub network: NetworkConfig,
}

/// Network generation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Number of hosts in the fully connected network
    #[serde(default = "default_hosts")]
    pub hosts: usize,

    /// Smallest random link distance (inclusive)
    #[serde(default = "default_min_distance")]
    pub min_distance: u32,

    /// Largest random link distance (inclusive)
    #[serde(default = "default_max_distance")]
    pub max_distance: u32,

    /// Seed for reproducible topology generation; omit to seed from entropy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_hosts() -> usize {
    8
}

fn default_min_distance() -> u32 {
    1
}

fn default_max_distance() -> u32 {
    1000
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            hosts: default_hosts(),
            min_distance: default_min_distance(),
            max_distance: default_max_distance(),
            seed: None,
        }
    }
}

impl NetworkConfig {
    /// Distance range for the topology generator
    pub fn distance_range(&self) -> DistanceRange {
        DistanceRange {
            min: self.min_distance,
            max: self.max_distance,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid network configuration: {0}")]
    InvalidNetwork(String),
}

impl SimulationConfig {
    /// Validate the configuration before it is used
    pub fn validate(&self) -> Result<(), ValidationError> {
        let network = &self.network;

        if network.hosts == 0 {
            return Err(ValidationError::InvalidNetwork(
                "host count must be at least 1".to_string(),
            ));
        }
        if network.min_distance == 0 {
            return Err(ValidationError::InvalidNetwork(
                "min_distance must be at least 1".to_string(),
            ));
        }
        if network.min_distance > network.max_distance {
            return Err(ValidationError::InvalidNetwork(format!(
                "min_distance {} exceeds max_distance {}",
                network.min_distance, network.max_distance
            )));
        }
        if network.max_distance >= UNREACHABLE {
            return Err(ValidationError::InvalidNetwork(format!(
                "max_distance {} collides with the unreachable sentinel",
                network.max_distance
            )));
        }

        Ok(())
    }
}

/// Load and parse configuration from a YAML file
pub fn load_config(config_path: &Path) -> Result<SimulationConfig> {
    info!("Loading configuration from: {:?}", config_path);

    let file = File::open(config_path)?;
    let config: SimulationConfig = serde_yaml::from_reader(file)?;

    config.validate()?;

    Ok(config)
}
