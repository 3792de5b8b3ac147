//! Board use-case services.
//!
//! # Responsibility
//! - Own the board session and route every mutation through the reducer.
//! - Turn form input and drag gestures into validated actions.
//! - Keep presentation state (collapse/edit flags, card previews) outside
//!   the domain tree.

pub mod board_session;
pub mod draft;
pub mod drop;
pub mod preview;
pub mod view_state;
