//! Card preview projection for rendering notes.
//!
//! Rules:
//! - Whitespace runs in the message collapse to one space.
//! - Title keeps 15 characters, message 500, with a `...` suffix when cut.
//! - Empty fields fall back to placeholder labels.

use crate::model::item::Item;
use once_cell::sync::Lazy;
use regex::Regex;

const CARD_TITLE_MAX_CHARS: usize = 15;
const CARD_MESSAGE_MAX_CHARS: usize = 500;
const UNTITLED_LABEL: &str = "Untitled";
const NO_MESSAGE_LABEL: &str = "No message";

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Display-ready projection of one note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPreview {
    pub title: String,
    pub message: String,
    pub color: Option<String>,
}

/// Cuts `text` to `max_chars` characters and appends `...` when shortened.
///
/// Returns `None` for empty input.
pub fn truncate_text(text: &str, max_chars: usize) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    if text.chars().count() > max_chars {
        let mut truncated = text.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        return Some(truncated);
    }
    Some(text.to_string())
}

/// Derives the card projection rendered for one note.
pub fn card_preview(item: &Item) -> CardPreview {
    let message = WHITESPACE_RE.replace_all(item.message.trim(), " ");
    CardPreview {
        title: truncate_text(&item.title, CARD_TITLE_MAX_CHARS)
            .unwrap_or_else(|| UNTITLED_LABEL.to_string()),
        message: truncate_text(&message, CARD_MESSAGE_MAX_CHARS)
            .unwrap_or_else(|| NO_MESSAGE_LABEL.to_string()),
        color: item.color.clone(),
    }
}
