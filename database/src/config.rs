use crate::{DatabaseError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Environment variable selecting the [`UnregisteredCode`] policy
pub const UNREGISTERED_CODE_VAR: &str = "RECORD_ERROR_UNREGISTERED_CODE";
/// Environment variable toggling constraint capture
pub const CAPTURE_CONSTRAINT_VAR: &str = "RECORD_ERROR_CAPTURE_CONSTRAINT";

/// Message used when a server error number has no registered message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnregisteredCode {
    /// Use the server's own message text
    #[default]
    PassThrough,
    /// Leave the message empty
    Empty,
}

impl UnregisteredCode {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pass_through" | "passthrough" => Ok(UnregisteredCode::PassThrough),
            "empty" => Ok(UnregisteredCode::Empty),
            other => Err(DatabaseError::Config(format!(
                "{} must be 'pass_through' or 'empty', got '{}'",
                UNREGISTERED_CODE_VAR, other
            ))),
        }
    }
}

/// Translator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Message policy for unregistered error numbers
    pub unregistered_code: UnregisteredCode,
    /// Whether to record the violated key name on duplicate-entry errors
    pub capture_constraint: bool,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            unregistered_code: UnregisteredCode::PassThrough,
            capture_constraint: true,
        }
    }
}

impl TranslatorConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the unregistered code policy
    pub fn with_unregistered_code(mut self, policy: UnregisteredCode) -> Self {
        self.unregistered_code = policy;
        self
    }

    /// Set whether duplicate-entry key names are captured
    pub fn with_capture_constraint(mut self, capture: bool) -> Self {
        self.capture_constraint = capture;
        self
    }

    /// Parse a configuration from JSON; missing keys take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load the configuration from the process environment, reading a `.env`
    /// file first when one is present
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration from a dotenv-formatted file without touching
    /// the process environment
    pub fn from_env_file(path: &Path) -> Result<Self> {
        info!("Loading translator configuration from {:?}", path);

        let mut pairs = Vec::new();
        let iter = dotenvy::from_path_iter(path)
            .map_err(|e| DatabaseError::Config(format!("cannot read {:?}: {}", path, e)))?;
        for item in iter {
            let pair =
                item.map_err(|e| DatabaseError::Config(format!("invalid line in {:?}: {}", path, e)))?;
            pairs.push(pair);
        }

        Self::from_lookup(|key| {
            pairs
                .iter()
                .rev()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        })
    }

    /// Build a configuration from a key lookup, starting from the defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(UNREGISTERED_CODE_VAR) {
            config.unregistered_code = UnregisteredCode::parse(&value)?;
        }

        if let Some(value) = lookup(CAPTURE_CONSTRAINT_VAR) {
            config.capture_constraint = parse_bool(CAPTURE_CONSTRAINT_VAR, &value)?;
        }

        debug!("Translator configuration: {:?}", config);
        Ok(config)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(DatabaseError::Config(format!(
            "{} must be a boolean, got '{}'",
            key, other
        ))),
    }
}
