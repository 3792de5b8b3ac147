//! Per-container presentation state kept beside the board.
//!
//! # Invariants
//! - Never stored in the domain tree and never read by the reducer.
//! - Entries for removed containers are dropped by `prune`.

use crate::model::board::Board;
use crate::model::container::{Container, ContainerId};
use std::collections::HashMap;

/// Transient view flags for one container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerViewState {
    /// Cards render stacked when collapsed.
    pub collapsed: bool,
    /// Inline name editor is open.
    pub editing_name: bool,
}

impl Default for ContainerViewState {
    fn default() -> Self {
        Self {
            collapsed: true,
            editing_name: false,
        }
    }
}

/// Side table of container view flags keyed by container id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardViewState {
    containers: HashMap<ContainerId, ContainerViewState>,
}

impl BoardViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// View flags for one container; defaults when never touched.
    pub fn get(&self, container_id: &str) -> ContainerViewState {
        self.containers
            .get(container_id)
            .copied()
            .unwrap_or_default()
    }

    /// Flips the collapsed flag and returns the new value.
    pub fn toggle_collapsed(&mut self, container_id: &str) -> bool {
        let state = self.entry(container_id);
        state.collapsed = !state.collapsed;
        state.collapsed
    }

    pub fn set_editing_name(&mut self, container_id: &str, editing: bool) {
        self.entry(container_id).editing_name = editing;
    }

    /// Collapsing only makes sense for stacks; the root is always toggleable.
    pub fn can_toggle_collapse(container: &Container, root_id: &str) -> bool {
        container.id == root_id || container.items.len() > 1
    }

    /// Drops entries whose container is gone from `board`.
    pub fn prune(&mut self, board: &Board) {
        self.containers
            .retain(|container_id, _| board.container(container_id).is_some());
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    fn entry(&mut self, container_id: &str) -> &mut ContainerViewState {
        self.containers
            .entry(container_id.to_string())
            .or_default()
    }
}
