//! Board state reducer: the sole mutation path of the domain tree.
//!
//! # Responsibility
//! - Define the action vocabulary accepted by the board.
//! - Map `(board, action)` to the next board, all-or-nothing.
//!
//! # Invariants
//! - Reduction never fails; unmet preconditions yield the input board.
//! - Containers not addressed by an action are left untouched.

pub mod action;
pub mod board_reducer;
