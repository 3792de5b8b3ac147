//! Board root model.
//!
//! # Responsibility
//! - Hold the ordered container sequence and the root container id.
//! - Provide read-only lookups used by the reducer, session and drop resolver.
//!
//! # Invariants
//! - The root container is present and conventionally first.
//! - Container ids and item ids are unique board-wide.
//! - Mutation happens only through the reducer (`pub(crate)` access).

use crate::model::container::{Container, ContainerId};
use crate::model::item::{Item, ItemId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::{Display, Formatter};

/// Root container id used when no configuration overrides it.
pub const DEFAULT_ROOT_CONTAINER_ID: &str = "root";

/// The complete board state: an ordered sequence of containers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    #[serde(default = "default_root_id")]
    root_id: ContainerId,
    containers: Vec<Container>,
}

fn default_root_id() -> ContainerId {
    DEFAULT_ROOT_CONTAINER_ID.to_string()
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT_CONTAINER_ID)
    }
}

impl Board {
    /// Creates a board holding only an empty root container.
    pub fn new(root_id: impl Into<ContainerId>) -> Self {
        Self::with_root(Container::new(root_id))
    }

    /// Creates a board whose root is the given container.
    pub fn with_root(root: Container) -> Self {
        Self {
            root_id: root.id.clone(),
            containers: vec![root],
        }
    }

    /// Builds a board from an explicit container list.
    ///
    /// The result is not validated; call [`Board::check_integrity`] when the
    /// input comes from outside the reducer.
    pub fn from_parts(root_id: impl Into<ContainerId>, containers: Vec<Container>) -> Self {
        Self {
            root_id: root_id.into(),
            containers,
        }
    }

    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    pub fn is_root(&self, container_id: &str) -> bool {
        self.root_id == container_id
    }

    pub fn root(&self) -> Option<&Container> {
        self.container(&self.root_id)
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn container(&self, container_id: &str) -> Option<&Container> {
        self.containers
            .iter()
            .find(|container| container.id == container_id)
    }

    pub fn container_index(&self, container_id: &str) -> Option<usize> {
        self.containers
            .iter()
            .position(|container| container.id == container_id)
    }

    /// Locates one item as `(container_index, item_index)`.
    pub fn locate_item(&self, item_id: &str) -> Option<(usize, usize)> {
        self.containers
            .iter()
            .enumerate()
            .find_map(|(container_index, container)| {
                container
                    .item_index(item_id)
                    .map(|item_index| (container_index, item_index))
            })
    }

    /// Returns the item and its owning container.
    pub fn find_item(&self, item_id: &str) -> Option<(&Container, &Item)> {
        let (container_index, item_index) = self.locate_item(item_id)?;
        let container = &self.containers[container_index];
        Some((container, &container.items[item_index]))
    }

    pub fn contains_item(&self, item_id: &str) -> bool {
        self.locate_item(item_id).is_some()
    }

    /// Total number of items across all containers.
    pub fn item_count(&self) -> usize {
        self.containers
            .iter()
            .map(|container| container.items.len())
            .sum()
    }

    pub(crate) fn containers_mut(&mut self) -> &mut Vec<Container> {
        &mut self.containers
    }

    pub(crate) fn container_mut(&mut self, container_id: &str) -> Option<&mut Container> {
        self.containers
            .iter_mut()
            .find(|container| container.id == container_id)
    }

    /// Checks every board invariant and reports all violations found.
    ///
    /// Returns an empty list for a valid board.
    pub fn check_integrity(&self) -> Vec<IntegrityViolation> {
        let mut violations = Vec::new();
        if self.root().is_none() {
            violations.push(IntegrityViolation::MissingRoot(self.root_id.clone()));
        }

        let mut container_ids = HashSet::new();
        let mut item_ids = HashSet::new();
        for container in &self.containers {
            if !container_ids.insert(container.id.as_str()) {
                violations.push(IntegrityViolation::DuplicateContainerId(
                    container.id.clone(),
                ));
            }
            for item in &container.items {
                if !item_ids.insert(item.id.as_str()) {
                    violations.push(IntegrityViolation::DuplicateItemId(item.id.clone()));
                }
            }
        }
        violations
    }
}

/// One broken board invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityViolation {
    /// Root container is absent.
    MissingRoot(ContainerId),
    /// Two containers share one id.
    DuplicateContainerId(ContainerId),
    /// Two items share one id.
    DuplicateItemId(ItemId),
}

impl Display for IntegrityViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRoot(id) => write!(f, "root container missing: {id}"),
            Self::DuplicateContainerId(id) => write!(f, "duplicate container id: {id}"),
            Self::DuplicateItemId(id) => write!(f, "duplicate item id: {id}"),
        }
    }
}
