//! Container model: a named, ordered group of notes.

use crate::model::item::{Item, ItemId};
use serde::{Deserialize, Serialize};

/// Opaque board-wide unique container identifier.
pub type ContainerId = String;

/// Ordered group of notes.
///
/// Item order is meaningful: it drives rendering order and is rewritten by
/// reorder actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    /// Stable id, unique across the board.
    pub id: ContainerId,
    /// Optional display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Notes in display order.
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Container {
    /// Creates an unnamed, empty container.
    pub fn new(id: impl Into<ContainerId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            items: Vec::new(),
        }
    }

    /// Returns the same container with a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the same container with the given items appended.
    pub fn with_items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.items.extend(items);
        self
    }

    /// Position of one item inside this container.
    pub fn item_index(&self, item_id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == item_id)
    }

    pub fn contains_item(&self, item_id: &str) -> bool {
        self.item_index(item_id).is_some()
    }

    /// Ids of the contained items in display order.
    pub fn item_ids(&self) -> Vec<&ItemId> {
        self.items.iter().map(|item| &item.id).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
