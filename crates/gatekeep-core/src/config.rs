//! Authentication configuration management.
//!
//! This module handles loading and saving the authentication policy,
//! which includes how rejections are presented to end users and the
//! Argon2 cost used when hashing new credentials.
//!
//! Configuration is stored at `~/.config/gatekeep/config.json`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::auth::verifier::{Argon2Cost, Argon2Verifier};
use crate::error::ErrorPresentation;

/// Application name used for config directory paths
const APP_NAME: &str = "gatekeep";

/// Config file name
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AuthConfig {
    pub error_presentation: ErrorPresentation,
    pub argon2: Argon2Cost,
}

impl AuthConfig {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Build a verifier using the configured Argon2 cost
    pub fn verifier(&self) -> Result<Argon2Verifier> {
        Argon2Verifier::with_cost(self.argon2)
            .map_err(|e| anyhow::anyhow!("Invalid argon2 cost {:?}: {}", self.argon2, e))
    }
}
