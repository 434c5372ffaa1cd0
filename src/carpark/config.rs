use crate::error::{CarParkError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CAPACITY: u32 = 5;
const DEFAULT_HOURLY_RATE: f64 = 2.0;
const DEFAULT_DATA_FILE: &str = "ParkingRecords.csv";

/// Configuration for the car park, stored as config.json beside the data file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarParkConfig {
    /// Number of physical spaces, numbered 1..=capacity
    #[serde(default = "default_capacity")]
    pub capacity: u32,

    /// Charge per hour of parking, in currency units
    #[serde(default = "default_hourly_rate")]
    pub hourly_rate: f64,

    /// File name of the CSV record store, relative to the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_capacity() -> u32 {
    DEFAULT_CAPACITY
}

fn default_hourly_rate() -> f64 {
    DEFAULT_HOURLY_RATE
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for CarParkConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            hourly_rate: DEFAULT_HOURLY_RATE,
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }
}

impl CarParkConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CarParkError::Io)?;
        let config: CarParkConfig =
            serde_json::from_str(&content).map_err(CarParkError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CarParkError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CarParkError::Serialization)?;
        fs::write(config_path, content).map_err(CarParkError::Io)?;
        Ok(())
    }

    pub fn set_capacity(&mut self, capacity: u32) {
        self.capacity = capacity;
    }
}
