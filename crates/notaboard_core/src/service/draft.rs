//! Form input validation for notes and container names.
//!
//! # Invariants
//! - Lengths are counted in Unicode scalar values, not bytes.
//! - Note titles and messages may be empty; only the title is capped.

use crate::config::{DEFAULT_CONTAINER_NAME_MAX_CHARS, DEFAULT_TITLE_MAX_CHARS};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validated note form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    title: String,
    message: String,
}

impl NoteDraft {
    /// Validates with the default title cap.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Result<Self, DraftError> {
        Self::with_title_limit(title, message, DEFAULT_TITLE_MAX_CHARS)
    }

    pub fn with_title_limit(
        title: impl Into<String>,
        message: impl Into<String>,
        max_title_chars: usize,
    ) -> Result<Self, DraftError> {
        let title = title.into();
        let actual = title.chars().count();
        if actual > max_title_chars {
            return Err(DraftError::TitleTooLong {
                max: max_title_chars,
                actual,
            });
        }
        Ok(Self {
            title,
            message: message.into(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_parts(self) -> (String, String) {
        (self.title, self.message)
    }
}

/// Normalizes a container name with the default cap.
pub fn normalize_container_name(raw: &str) -> Result<Option<String>, DraftError> {
    normalize_container_name_with_limit(raw, DEFAULT_CONTAINER_NAME_MAX_CHARS)
}

/// Trims a container name; blank means "no name".
pub fn normalize_container_name_with_limit(
    raw: &str,
    max_chars: usize,
) -> Result<Option<String>, DraftError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let actual = trimmed.chars().count();
    if actual > max_chars {
        return Err(DraftError::NameTooLong {
            max: max_chars,
            actual,
        });
    }
    Ok(Some(trimmed.to_string()))
}

/// Form input rejected before reaching the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// Note title exceeds the configured cap.
    TitleTooLong { max: usize, actual: usize },
    /// Container name exceeds the configured cap.
    NameTooLong { max: usize, actual: usize },
}

impl Display for DraftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TitleTooLong { max, actual } => {
                write!(f, "title has {actual} characters; at most {max} allowed")
            }
            Self::NameTooLong { max, actual } => {
                write!(f, "container name has {actual} characters; at most {max} allowed")
            }
        }
    }
}

impl Error for DraftError {}
