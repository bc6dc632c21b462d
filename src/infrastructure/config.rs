//! Session configuration

use crate::domain::Language;
use crate::error::{GratitudeError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Language active when the session starts
    pub language: Language,
    /// Tracing filter directive, e.g. "warn" or "gratitude=debug"
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            language: Language::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GratitudeError::ConfigNotFound(path.to_path_buf())
            } else {
                GratitudeError::Io(e)
            }
        })?;

        Self::parse(&contents)
    }

    /// Parse config from TOML text
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Config::default()),
        }
    }
}
