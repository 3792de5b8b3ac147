//! Board session configuration.
//!
//! # Responsibility
//! - Describe the initial board and form-input limits.
//! - Parse and validate configuration supplied by the UI host as JSON.
//!
//! # Invariants
//! - Every field has a default; `{}` is a valid configuration.
//! - A validated config always has a non-blank root id and non-zero limits.

use crate::generator::color::default_palette;
use crate::model::board::DEFAULT_ROOT_CONTAINER_ID;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Maximum note title length accepted by the note form.
pub const DEFAULT_TITLE_MAX_CHARS: usize = 50;
/// Maximum container name length accepted by the rename form.
pub const DEFAULT_CONTAINER_NAME_MAX_CHARS: usize = 28;

/// Configuration for one board session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Id of the permanent root container.
    pub root_container_id: String,
    /// Optional display name for the root container.
    pub root_container_name: Option<String>,
    /// Note colours. Empty falls back to the default palette.
    pub palette: Vec<String>,
    pub title_max_chars: usize,
    pub container_name_max_chars: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            root_container_id: DEFAULT_ROOT_CONTAINER_ID.to_string(),
            root_container_name: None,
            palette: default_palette(),
            title_max_chars: DEFAULT_TITLE_MAX_CHARS,
            container_name_max_chars: DEFAULT_CONTAINER_NAME_MAX_CHARS,
        }
    }
}

impl BoardConfig {
    /// Parses and validates configuration JSON.
    ///
    /// Blank input yields the default configuration.
    pub fn from_json(value: &str) -> Result<Self, ConfigError> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_json::from_str(value).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks field-level constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root_container_id.trim().is_empty() {
            return Err(ConfigError::EmptyRootId);
        }
        if self.title_max_chars == 0 {
            return Err(ConfigError::InvalidLimit("title_max_chars"));
        }
        if self.container_name_max_chars == 0 {
            return Err(ConfigError::InvalidLimit("container_name_max_chars"));
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Input is not valid configuration JSON.
    Parse(String),
    /// Root container id is blank.
    EmptyRootId,
    /// A length limit is zero.
    InvalidLimit(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(message) => write!(f, "invalid board config: {message}"),
            Self::EmptyRootId => write!(f, "root_container_id must not be blank"),
            Self::InvalidLimit(field) => write!(f, "{field} must be greater than zero"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{BoardConfig, ConfigError, DEFAULT_TITLE_MAX_CHARS};

    #[test]
    fn blank_and_empty_object_use_defaults() {
        assert_eq!(
            BoardConfig::from_json("  ").expect("blank config"),
            BoardConfig::default()
        );
        let config = BoardConfig::from_json("{}").expect("empty object");
        assert_eq!(config.root_container_id, "root");
        assert_eq!(config.title_max_chars, DEFAULT_TITLE_MAX_CHARS);
        assert_eq!(config.palette.len(), 10);
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = BoardConfig::from_json(r#"{"root_container_id":"inbox"}"#)
            .expect("partial config should parse");
        assert_eq!(config.root_container_id, "inbox");
        assert_eq!(config.container_name_max_chars, 28);
    }

    #[test]
    fn rejects_blank_root_and_zero_limits() {
        assert_eq!(
            BoardConfig::from_json(r#"{"root_container_id":"  "}"#),
            Err(ConfigError::EmptyRootId)
        );
        assert_eq!(
            BoardConfig::from_json(r#"{"title_max_chars":0}"#),
            Err(ConfigError::InvalidLimit("title_max_chars"))
        );
        assert!(matches!(
            BoardConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
