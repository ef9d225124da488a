use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tankful::Fuel;

/// The vehicle the demo builds and the fuel level it asks for after driving.
///
/// Keys missing from a file keep their default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub brand: String,
    pub model: String,
    pub trim: String,
    pub new_level: Fuel,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            brand: "Ford".to_string(),
            model: "Taurus".to_string(),
            trim: "SE".to_string(),
            new_level: 12.0,
        }
    }
}

impl DemoConfig {
    /// Reads a config file named explicitly on the command line.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid vehicle config in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
