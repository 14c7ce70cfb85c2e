//! App Configuration
//!
//! Read from the `roster.json` embedded at build time. Every field is
//! optional; missing ones fall back to the defaults below.

use log::LevelFilter;
use roster_core::{sample_members, DomainError, Member, MemberStore};
use serde::Deserialize;

const EMBEDDED_CONFIG: &str = include_str!("../roster.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Heading shown above every view
    pub title: String,
    /// `log` level name, e.g. "debug"
    pub log_level: String,
    /// Initial roster, in display order
    pub members: Vec<Member>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Club Roster".to_string(),
            log_level: "info".to_string(),
            members: sample_members(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    Seed(DomainError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "Invalid config: {}", e),
            ConfigError::Seed(e) => write!(f, "Invalid seed members: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Seed(e) => Some(e),
        }
    }
}

impl AppConfig {
    /// Load the embedded config
    pub fn load() -> Result<Self, ConfigError> {
        Self::parse(EMBEDDED_CONFIG)
    }

    /// Parse and validate a JSON config, including its seed members
    pub fn parse(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.build_store()?;
        Ok(config)
    }

    pub fn level(&self) -> LevelFilter {
        console_logger::parse_level(&self.log_level)
    }

    /// A fresh store seeded with the configured members
    pub fn build_store(&self) -> Result<MemberStore, ConfigError> {
        MemberStore::with_members(self.members.clone()).map_err(ConfigError::Seed)
    }
}
