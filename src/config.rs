//! Configuration management
//!
//! Project configuration lives in `.ticketapp/config.yaml` and can be
//! overridden through `TICKETAPP_*` environment variables. A missing
//! file yields the defaults, so every command works in a freshly
//! initialized project.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Name of the configuration file inside the data directory
pub const CONFIG_FILE: &str = "config.yaml";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,
}

/// Project-level settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Display name of the project
    #[serde(default = "default_project_name")]
    pub name: String,
    /// Optional project description
    #[serde(default)]
    pub description: Option<String>,
}

fn default_project_name() -> String {
    "TicketApp".to_string()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_project_name(),
            description: None,
        }
    }
}

impl Config {
    /// Load configuration from a data directory, layering environment
    /// overrides on top of the file
    ///
    /// A missing config file is not an error; defaults apply.
    pub fn load_from(data_dir: impl AsRef<Path>) -> Result<Self> {
        let path = data_dir.as_ref().join(CONFIG_FILE);
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix("TICKETAPP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Write the configuration file into a data directory
    pub fn save_to(&self, data_dir: impl AsRef<Path>) -> Result<()> {
        let path = data_dir.as_ref().join(CONFIG_FILE);
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }
}
