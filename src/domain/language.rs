//! Display language selector

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// The two supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Primary language, active at session start unless configured otherwise
    #[default]
    English,
    /// Secondary language
    Spanish,
}

impl Language {
    /// The other language. Applying this twice yields the original value.
    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::Spanish,
            Language::Spanish => Language::English,
        }
    }

    /// Lowercase identifier, as used in config files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Spanish => "spanish",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "spanish" | "es" => Ok(Language::Spanish),
            _ => Err(format!(
                "Invalid language: '{}'. Valid languages are: english, spanish",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_primary() {
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn test_toggled_flips() {
        assert_eq!(Language::English.toggled(), Language::Spanish);
        assert_eq!(Language::Spanish.toggled(), Language::English);
    }

    #[test]
    fn test_toggled_is_its_own_inverse() {
        for lang in [Language::English, Language::Spanish] {
            assert_eq!(lang.toggled().toggled(), lang);
        }
    }

    #[test]
    fn test_from_str_accepts_names_and_codes() {
        assert_eq!(Language::from_str("english").unwrap(), Language::English);
        assert_eq!(Language::from_str("EN").unwrap(), Language::English);
        assert_eq!(Language::from_str("Spanish").unwrap(), Language::Spanish);
        assert_eq!(Language::from_str(" es ").unwrap(), Language::Spanish);
    }

    #[test]
    fn test_from_str_invalid() {
        let err = Language::from_str("klingon").unwrap_err();
        assert!(err.contains("Invalid language"));
        assert!(err.contains("english, spanish"));
        assert!(Language::from_str("").is_err());
    }

    #[test]
    fn test_display_matches_config_name() {
        assert_eq!(Language::Spanish.to_string(), "spanish");
        assert_eq!(Language::English.as_str(), "english");
    }
}
