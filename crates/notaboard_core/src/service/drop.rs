//! Drag-and-drop gesture resolution.
//!
//! # Responsibility
//! - Translate a finished drag of one note into the ordered actions the
//!   reducer expects.
//!
//! # Invariants
//! - Resolution reads the board at drop time; ids are resolved to positions
//!   only for same-container reorders.
//! - A split creates the empty container first, then transfers the note into
//!   it, so no intermediate board holds the note twice or not at all.
//! - Gestures that would not change the board resolve to no actions.

use crate::model::board::Board;
use crate::model::container::{Container, ContainerId};
use crate::model::item::ItemId;
use crate::reducer::action::BoardAction;

/// What a dragged note was released over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// A container body.
    Container(ContainerId),
    /// Another note, in the same or a different container.
    Item(ItemId),
    /// The "drop here to create a container" target.
    NewContainer,
}

/// Resolves one drop into board actions.
///
/// `new_container_id` is used only for [`DropTarget::NewContainer`].
pub fn resolve_drop(
    board: &Board,
    active_item_id: &str,
    target: &DropTarget,
    new_container_id: &str,
) -> Vec<BoardAction> {
    let Some((source, item)) = board.find_item(active_item_id) else {
        return Vec::new();
    };

    match target {
        DropTarget::Container(destination_id) => {
            if destination_id == &source.id || board.container(destination_id).is_none() {
                return Vec::new();
            }
            vec![transfer(&source.id, destination_id, active_item_id)]
        }
        DropTarget::Item(over_id) => {
            let Some((container_index, over_index)) = board.locate_item(over_id) else {
                return Vec::new();
            };
            let destination = &board.containers()[container_index];
            if destination.id != source.id {
                return vec![transfer(&source.id, &destination.id, active_item_id)];
            }
            match destination.item_index(active_item_id) {
                Some(active_index) if active_index != over_index => {
                    vec![BoardAction::MoveItemWithinContainer {
                        container_index,
                        active_index,
                        over_index,
                    }]
                }
                _ => Vec::new(),
            }
        }
        DropTarget::NewContainer => vec![
            BoardAction::AddContainer(Container::new(new_container_id)),
            transfer(&source.id, new_container_id, &item.id),
        ],
    }
}

fn transfer(source_id: &str, destination_id: &str, item_id: &str) -> BoardAction {
    BoardAction::TransferItem {
        source_container_id: source_id.to_string(),
        destination_container_id: destination_id.to_string(),
        item_id: item_id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{resolve_drop, DropTarget};
    use crate::model::board::Board;
    use crate::model::container::Container;
    use crate::model::item::Item;
    use crate::reducer::action::BoardAction;

    fn board() -> Board {
        Board::from_parts(
            "root",
            vec![
                Container::new("root").with_items([Item::new("r1", "", "")]),
                Container::new("c1").with_items([
                    Item::new("x", "", ""),
                    Item::new("y", "", ""),
                    Item::new("z", "", ""),
                ]),
            ],
        )
    }

    #[test]
    fn drop_on_own_container_resolves_to_nothing() {
        let actions = resolve_drop(&board(), "x", &DropTarget::Container("c1".to_string()), "new");
        assert!(actions.is_empty());
    }

    #[test]
    fn drop_on_item_in_same_container_reorders() {
        let actions = resolve_drop(&board(), "z", &DropTarget::Item("x".to_string()), "new");
        assert_eq!(
            actions,
            vec![BoardAction::MoveItemWithinContainer {
                container_index: 1,
                active_index: 2,
                over_index: 0,
            }]
        );
    }

    #[test]
    fn drop_on_item_in_other_container_transfers() {
        let actions = resolve_drop(&board(), "r1", &DropTarget::Item("y".to_string()), "new");
        assert_eq!(
            actions,
            vec![BoardAction::TransferItem {
                source_container_id: "root".to_string(),
                destination_container_id: "c1".to_string(),
                item_id: "r1".to_string(),
            }]
        );
    }

    #[test]
    fn unknown_active_or_target_resolves_to_nothing() {
        assert!(resolve_drop(&board(), "ghost", &DropTarget::NewContainer, "new").is_empty());
        assert!(resolve_drop(&board(), "x", &DropTarget::Item("ghost".to_string()), "new").is_empty());
        assert!(
            resolve_drop(&board(), "x", &DropTarget::Container("ghost".to_string()), "new")
                .is_empty()
        );
    }

    #[test]
    fn new_container_is_created_before_the_transfer() {
        let actions = resolve_drop(&board(), "y", &DropTarget::NewContainer, "c2");
        assert_eq!(
            actions,
            vec![
                BoardAction::AddContainer(Container::new("c2")),
                BoardAction::TransferItem {
                    source_container_id: "c1".to_string(),
                    destination_container_id: "c2".to_string(),
                    item_id: "y".to_string(),
                },
            ]
        );
    }
}
