//! Board actions.
//!
//! Wire shape is adjacently tagged: `{"type": "ADD_ITEM", "payload": {...}}`
//! with camelCase payload fields.

use crate::model::container::{Container, ContainerId};
use crate::model::item::{Item, ItemId};
use serde::{Deserialize, Serialize};

/// Intent to mutate the board, consumed once by the reducer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum BoardAction {
    /// Appends a container. It may arrive seeded with items.
    AddContainer(Container),
    /// Removes a container together with its items.
    RemoveContainer { container_id: ContainerId },
    /// Appends an item to one container.
    AddItem { container_id: ContainerId, item: Item },
    /// Replaces title and message of one item in place.
    EditItem {
        container_id: ContainerId,
        item_id: ItemId,
        new_title: String,
        new_message: String,
    },
    /// Removes one item from one container.
    RemoveItem {
        container_id: ContainerId,
        item_id: ItemId,
    },
    /// Moves an item to the end of another container, both addressed by
    /// position in the container sequence.
    ///
    /// Positions shift whenever containers are added or removed; callers
    /// must resolve them immediately before dispatch.
    MoveItemBetweenContainers {
        source_index: usize,
        destination_index: usize,
        item_id: ItemId,
    },
    /// Relocates the item at `active_index` to `over_index` within one
    /// container, shifting the items in between by one.
    MoveItemWithinContainer {
        container_index: usize,
        active_index: usize,
        over_index: usize,
    },
    /// Sets the display name of one container.
    EditContainerName {
        container_id: ContainerId,
        new_name: String,
    },
    /// Id-addressed variant of `MoveItemBetweenContainers`. Containers are
    /// resolved at reduction time, so stale positions cannot misroute it.
    TransferItem {
        source_container_id: ContainerId,
        destination_container_id: ContainerId,
        item_id: ItemId,
    },
}

impl BoardAction {
    /// Stable tag used in logs; matches the wire `type` value.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AddContainer(_) => "ADD_CONTAINER",
            Self::RemoveContainer { .. } => "REMOVE_CONTAINER",
            Self::AddItem { .. } => "ADD_ITEM",
            Self::EditItem { .. } => "EDIT_ITEM",
            Self::RemoveItem { .. } => "REMOVE_ITEM",
            Self::MoveItemBetweenContainers { .. } => "MOVE_ITEM_BETWEEN_CONTAINERS",
            Self::MoveItemWithinContainer { .. } => "MOVE_ITEM_WITHIN_CONTAINER",
            Self::EditContainerName { .. } => "EDIT_CONTAINER_NAME",
            Self::TransferItem { .. } => "TRANSFER_ITEM",
        }
    }

    /// Parses one action from its JSON wire form.
    pub fn from_json(value: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(value)
    }
}
