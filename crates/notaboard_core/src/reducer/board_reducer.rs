//! Board reducer implementation.
//!
//! # Responsibility
//! - Apply exactly one `BoardAction` to a board.
//! - Report whether the action was applied or skipped, and why.
//!
//! # Invariants
//! - Every precondition is checked before the first mutation, so a skipped
//!   action returns the input board untouched.
//! - Between-container moves always append at the end of the destination.
//! - Within-container moves are a stable remove-then-insert.
//! - The root container and duplicate ids are guarded here, not by callers.

use crate::model::board::Board;
use crate::model::container::{Container, ContainerId};
use crate::model::item::{Item, ItemId};
use crate::reducer::action::BoardAction;
use std::collections::HashSet;
use std::fmt::{Display, Formatter};

/// Result of one reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The board was updated.
    Applied,
    /// A precondition failed; the board is unchanged.
    Skipped(SkipReason),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Precondition that made the reducer return the input board.
///
/// Diagnostic only. Skips are never surfaced as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    ContainerNotFound(ContainerId),
    ItemNotFound(ItemId),
    DuplicateContainerId(ContainerId),
    DuplicateItemId(ItemId),
    RootContainerProtected(ContainerId),
    ContainerIndexOutOfRange { index: usize, len: usize },
    ItemIndexOutOfRange { index: usize, len: usize },
    SameContainer,
    SamePosition,
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ContainerNotFound(id) => write!(f, "container_not_found:{id}"),
            Self::ItemNotFound(id) => write!(f, "item_not_found:{id}"),
            Self::DuplicateContainerId(id) => write!(f, "duplicate_container_id:{id}"),
            Self::DuplicateItemId(id) => write!(f, "duplicate_item_id:{id}"),
            Self::RootContainerProtected(id) => write!(f, "root_container_protected:{id}"),
            Self::ContainerIndexOutOfRange { index, len } => {
                write!(f, "container_index_out_of_range:{index}/{len}")
            }
            Self::ItemIndexOutOfRange { index, len } => {
                write!(f, "item_index_out_of_range:{index}/{len}")
            }
            Self::SameContainer => write!(f, "same_container"),
            Self::SamePosition => write!(f, "same_position"),
        }
    }
}

/// Computes the next board for one action.
///
/// Total: unmet preconditions return the input board unchanged.
pub fn reduce(board: Board, action: &BoardAction) -> Board {
    reduce_with_outcome(board, action).0
}

/// Computes the next board and reports whether the action took effect.
pub fn reduce_with_outcome(mut board: Board, action: &BoardAction) -> (Board, Outcome) {
    let outcome = match apply(&mut board, action) {
        Ok(()) => Outcome::Applied,
        Err(reason) => Outcome::Skipped(reason),
    };
    (board, outcome)
}

fn apply(board: &mut Board, action: &BoardAction) -> Result<(), SkipReason> {
    match action {
        BoardAction::AddContainer(container) => add_container(board, container),
        BoardAction::RemoveContainer { container_id } => remove_container(board, container_id),
        BoardAction::AddItem { container_id, item } => add_item(board, container_id, item),
        BoardAction::EditItem {
            container_id,
            item_id,
            new_title,
            new_message,
        } => {
            let container = board
                .container_mut(container_id)
                .ok_or_else(|| SkipReason::ContainerNotFound(container_id.clone()))?;
            let item = container
                .items
                .iter_mut()
                .find(|item| &item.id == item_id)
                .ok_or_else(|| SkipReason::ItemNotFound(item_id.clone()))?;
            item.title.clone_from(new_title);
            item.message.clone_from(new_message);
            Ok(())
        }
        BoardAction::RemoveItem {
            container_id,
            item_id,
        } => {
            let container = board
                .container_mut(container_id)
                .ok_or_else(|| SkipReason::ContainerNotFound(container_id.clone()))?;
            let index = container
                .item_index(item_id)
                .ok_or_else(|| SkipReason::ItemNotFound(item_id.clone()))?;
            container.items.remove(index);
            Ok(())
        }
        BoardAction::MoveItemBetweenContainers {
            source_index,
            destination_index,
            item_id,
        } => move_between(board, *source_index, *destination_index, item_id),
        BoardAction::MoveItemWithinContainer {
            container_index,
            active_index,
            over_index,
        } => move_within(board, *container_index, *active_index, *over_index),
        BoardAction::EditContainerName {
            container_id,
            new_name,
        } => {
            let container = board
                .container_mut(container_id)
                .ok_or_else(|| SkipReason::ContainerNotFound(container_id.clone()))?;
            container.name = (!new_name.is_empty()).then(|| new_name.clone());
            Ok(())
        }
        BoardAction::TransferItem {
            source_container_id,
            destination_container_id,
            item_id,
        } => {
            let source_index = board
                .container_index(source_container_id)
                .ok_or_else(|| SkipReason::ContainerNotFound(source_container_id.clone()))?;
            let destination_index = board
                .container_index(destination_container_id)
                .ok_or_else(|| SkipReason::ContainerNotFound(destination_container_id.clone()))?;
            move_between(board, source_index, destination_index, item_id)
        }
    }
}

fn add_container(board: &mut Board, container: &Container) -> Result<(), SkipReason> {
    if board.container(&container.id).is_some() {
        return Err(SkipReason::DuplicateContainerId(container.id.clone()));
    }
    let mut seeded = HashSet::with_capacity(container.items.len());
    for item in &container.items {
        if board.contains_item(&item.id) || !seeded.insert(item.id.as_str()) {
            return Err(SkipReason::DuplicateItemId(item.id.clone()));
        }
    }
    board.containers_mut().push(container.clone());
    Ok(())
}

fn remove_container(board: &mut Board, container_id: &str) -> Result<(), SkipReason> {
    if board.is_root(container_id) {
        return Err(SkipReason::RootContainerProtected(container_id.to_string()));
    }
    let index = board
        .container_index(container_id)
        .ok_or_else(|| SkipReason::ContainerNotFound(container_id.to_string()))?;
    board.containers_mut().remove(index);
    Ok(())
}

fn add_item(board: &mut Board, container_id: &str, item: &Item) -> Result<(), SkipReason> {
    if board.container(container_id).is_none() {
        return Err(SkipReason::ContainerNotFound(container_id.to_string()));
    }
    if board.contains_item(&item.id) {
        return Err(SkipReason::DuplicateItemId(item.id.clone()));
    }
    if let Some(container) = board.container_mut(container_id) {
        container.items.push(item.clone());
    }
    Ok(())
}

fn move_between(
    board: &mut Board,
    source_index: usize,
    destination_index: usize,
    item_id: &str,
) -> Result<(), SkipReason> {
    let containers = board.containers_mut();
    let len = containers.len();
    for index in [source_index, destination_index] {
        if index >= len {
            return Err(SkipReason::ContainerIndexOutOfRange { index, len });
        }
    }
    if source_index == destination_index {
        return Err(SkipReason::SameContainer);
    }
    let item_index = containers[source_index]
        .item_index(item_id)
        .ok_or_else(|| SkipReason::ItemNotFound(item_id.to_string()))?;

    let item = containers[source_index].items.remove(item_index);
    containers[destination_index].items.push(item);
    Ok(())
}

fn move_within(
    board: &mut Board,
    container_index: usize,
    active_index: usize,
    over_index: usize,
) -> Result<(), SkipReason> {
    let containers = board.containers_mut();
    let container_len = containers.len();
    let container = containers
        .get_mut(container_index)
        .ok_or(SkipReason::ContainerIndexOutOfRange {
            index: container_index,
            len: container_len,
        })?;

    let len = container.items.len();
    for index in [active_index, over_index] {
        if index >= len {
            return Err(SkipReason::ItemIndexOutOfRange { index, len });
        }
    }
    if active_index == over_index {
        return Err(SkipReason::SamePosition);
    }

    let item = container.items.remove(active_index);
    container.items.insert(over_index, item);
    Ok(())
}
