//! Board domain model: notes, containers and the board root.
//!
//! # Responsibility
//! - Define canonical data structures owned by the board reducer.
//! - Keep view concerns (collapse/edit flags) out of the domain tree.
//!
//! # Invariants
//! - Item and container ids are unique board-wide.
//! - Every item belongs to exactly one container.
//! - The root container is always present.

pub mod board;
pub mod container;
pub mod item;
