//! Note item model.
//!
//! # Responsibility
//! - Define the note record rendered as one card on the board.
//!
//! # Invariants
//! - `id` is stable and never reused for another item.
//! - `color` is assigned once at creation and never edited.

use serde::{Deserialize, Serialize};

/// Opaque board-wide unique note identifier.
pub type ItemId = String;

/// One free-form text note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable id, unique across all containers.
    pub id: ItemId,
    /// Short heading. Capped at the form layer, may be empty.
    #[serde(default)]
    pub title: String,
    /// Free text body.
    #[serde(default)]
    pub message: String,
    /// Palette colour picked at creation. Older payloads may not carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Item {
    /// Creates an item without colour.
    pub fn new(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            message: message.into(),
            color: None,
        }
    }

    /// Returns the same item with the given display colour.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}
