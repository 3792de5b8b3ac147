//! Core domain logic for NotaBoard.
//! This crate is the single source of truth for board invariants.

pub mod config;
pub mod generator;
pub mod logging;
pub mod model;
pub mod reducer;
pub mod service;

pub use config::{BoardConfig, ConfigError};
pub use generator::color::{ColorPicker, DEFAULT_PALETTE};
pub use generator::id::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::board::{Board, IntegrityViolation, DEFAULT_ROOT_CONTAINER_ID};
pub use model::container::{Container, ContainerId};
pub use model::item::{Item, ItemId};
pub use reducer::action::BoardAction;
pub use reducer::board_reducer::{reduce, reduce_with_outcome, Outcome, SkipReason};
pub use service::board_session::{BatchOutcome, BoardSession, SessionError};
pub use service::draft::{normalize_container_name, DraftError, NoteDraft};
pub use service::drop::{resolve_drop, DropTarget};
pub use service::preview::{card_preview, truncate_text, CardPreview};
pub use service::view_state::{BoardViewState, ContainerViewState};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
