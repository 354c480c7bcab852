//! App Configuration
//!
//! Startup settings and seed tasks, read from the embedded `assets/seed.json`.

use std::collections::HashSet;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{default_seed, Task, TaskId};

const EMBEDDED_CONFIG: &str = include_str!("../assets/seed.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate seed task id {0}")]
    DuplicateId(TaskId),
    #[error("seed task {0} has empty text")]
    EmptyText(TaskId),
    #[error("click delay must be greater than zero")]
    ZeroClickDelay,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How long a click waits for a possible double click
    pub click_delay_ms: u32,
    /// Name of the read-only `window` property exposing the live task list
    pub inspect_global: String,
    pub seed: Vec<Task>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            click_delay_ms: 250,
            inspect_global: "todos".to_string(),
            seed: default_seed(),
        }
    }
}

impl AppConfig {
    /// Load the config bundled with the app
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED_CONFIG)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.click_delay_ms == 0 {
            return Err(ConfigError::ZeroClickDelay);
        }
        let mut seen = HashSet::new();
        for task in &self.seed {
            if !seen.insert(task.id) {
                return Err(ConfigError::DuplicateId(task.id));
            }
            if task.text.trim().is_empty() {
                return Err(ConfigError::EmptyText(task.id));
            }
        }
        Ok(())
    }

    pub fn click_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.click_delay_ms))
    }
}
