//! Injected generators for new board entities.
//!
//! # Responsibility
//! - Mint board-wide unique identifiers.
//! - Hand out palette colours without repeats inside one cycle.
//!
//! # Invariants
//! - Generator state is owned by an explicit object, never a module global.

pub mod color;
pub mod id;
