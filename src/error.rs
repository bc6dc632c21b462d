//! Error types for gratitude

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the gratitude application
#[derive(Debug, Error)]
pub enum GratitudeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Attachment reader failed: {0}")]
    Attachment(String),
}

impl GratitudeError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            GratitudeError::Config(_)
            | GratitudeError::ConfigNotFound(_)
            | GratitudeError::TomlDeserialize(_) => 2,
            GratitudeError::InvalidCommand(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            GratitudeError::ConfigNotFound(path) => {
                format!(
                    "Config file not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path passed to --config\n\
                    • Omit --config to start with the defaults",
                    path.display()
                )
            }
            GratitudeError::InvalidCommand(input) => {
                format!(
                    "Invalid command: '{}'\n\n\
                    Available commands:\n\
                    • new, save, cancel, list, lang, wait, help, quit\n\
                    • title <text>, description <text>\n\
                    • image <path>\n\
                    • draw <x,y> <x,y> ...\n\n\
                    Examples:\n\
                    title Morning Sunshine\n\
                    draw 10,10 120,40 200,180",
                    input
                )
            }
            GratitudeError::TomlDeserialize(e) => {
                format!(
                    "Failed to parse config: {}\n\n\
                    Valid keys: language, log_level\n\
                    Example: language = \"spanish\"",
                    e.message()
                )
            }
            GratitudeError::Config(msg) => {
                if msg.contains("Invalid language") {
                    format!(
                        "{}\n\n\
                        Valid languages: english, spanish\n\
                        Example: gratitude --language spanish",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using GratitudeError
pub type Result<T> = std::result::Result<T, GratitudeError>;
