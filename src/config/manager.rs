//! Configuration loading
//!
//! Stepper configuration is read-only: it is loaded once when the host builds a
//! controller and never written back.

use crate::config::models::StepperConfig;
use crate::error::{Result, StepperError};
use std::path::Path;
use tracing::{info, warn};

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Parse and validate configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<StepperConfig> {
        let config: StepperConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from disk
    ///
    /// A missing file or a file that is not valid JSON yields the default
    /// configuration. A file that parses but fails validation is an error.
    pub fn load(path: &Path) -> Result<StepperConfig> {
        if !path.exists() {
            info!(
                "Configuration file {} not found, using defaults",
                path.display()
            );
            return Ok(StepperConfig::default());
        }

        let json = std::fs::read_to_string(path)?;

        match serde_json::from_str::<StepperConfig>(&json) {
            Ok(config) => {
                config.validate()?;
                info!("Configuration loaded from {}", path.display());
                Ok(config)
            }
            Err(e) => {
                warn!("Failed to parse configuration, using defaults: {}", e);
                Ok(StepperConfig::default())
            }
        }
    }

    /// Load configuration when a path is given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<StepperConfig> {
        match path {
            Some(path) => Self::load(path).map_err(|e| match e {
                StepperError::IoError(io) => StepperError::ConfigError(Box::new(io)),
                other => other,
            }),
            None => Ok(StepperConfig::default()),
        }
    }
}
