//! FFI use-case API for UI-facing board calls.
//!
//! # Responsibility
//! - Expose board use-cases to the UI host via FRB sync functions.
//! - Own the single process-wide board session.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Every board call before `board_init` fails loudly; it is never treated
//!   as a silent no-op.
//! - `board_json` always carries the board as it is after the call.

use log::{error, warn};
use notaboard_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    BatchOutcome, BoardAction, BoardConfig, BoardSession, DropTarget, Outcome, SessionError,
};
use std::sync::{Mutex, OnceLock};

const SESSION_NOT_INITIALIZED: &str = "board session not initialized; call board_init first";

static BOARD_SESSION: OnceLock<Mutex<Option<BoardSession>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Same `level + log_dir` may be passed repeatedly.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Response envelope returned by every board call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardResponse {
    /// Whether the call was accepted.
    pub ok: bool,
    /// Whether the board changed.
    pub applied: bool,
    /// Human-readable diagnostics for UI/debug display.
    pub message: String,
    /// Board JSON after the call; empty when no session exists.
    pub board_json: String,
}

/// Creates (or replaces) the process-wide board session.
///
/// `config_json` may be empty for defaults. Returns empty string on success
/// and an error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn board_init(config_json: String) -> String {
    let session = match BoardConfig::from_json(config_json.as_str()).and_then(BoardSession::new) {
        Ok(session) => session,
        Err(err) => return format!("board_init failed: {err}"),
    };
    match session_slot().lock() {
        Ok(mut slot) => {
            *slot = Some(session);
            String::new()
        }
        Err(_) => "board_init failed: board session lock poisoned".to_string(),
    }
}

/// Drops the process-wide board session.
///
/// Later board calls fail until `board_init` runs again.
#[flutter_rust_bridge::frb(sync)]
pub fn board_shutdown() -> String {
    match session_slot().lock() {
        Ok(mut slot) => {
            *slot = None;
            String::new()
        }
        Err(_) => "board_shutdown failed: board session lock poisoned".to_string(),
    }
}

/// Returns the current board without changing it.
#[flutter_rust_bridge::frb(sync)]
pub fn board_snapshot_json() -> BoardResponse {
    with_session(|_| (true, false, "Board snapshot.".to_string()))
}

/// Dispatches one raw action in its JSON wire form.
///
/// Unknown or malformed actions leave the board unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn board_dispatch_json(action_json: String) -> BoardResponse {
    with_session(|session| match BoardAction::from_json(action_json.as_str()) {
        Ok(action) => outcome_reply(action.kind(), &session.dispatch(action)),
        Err(err) => {
            warn!("event=board_dispatch module=ffi status=noop reason=unrecognized_action");
            (true, false, format!("Unrecognized action ignored: {err}"))
        }
    })
}

/// Creates a note in one container.
#[flutter_rust_bridge::frb(sync)]
pub fn board_add_note(container_id: String, title: String, message: String) -> BoardResponse {
    with_session(|session| {
        let created = session
            .note_draft(title, message)
            .map_err(SessionError::from)
            .and_then(|draft| session.add_note(&container_id, draft));
        match created {
            Ok(item) => (true, true, format!("Note created: {}", item.id)),
            Err(err) => (false, false, format!("board_add_note failed: {err}")),
        }
    })
}

/// Replaces title and message of one note.
#[flutter_rust_bridge::frb(sync)]
pub fn board_edit_note(
    container_id: String,
    item_id: String,
    title: String,
    message: String,
) -> BoardResponse {
    with_session(|session| {
        let edited = session
            .note_draft(title, message)
            .map_err(SessionError::from)
            .and_then(|draft| session.edit_note(&container_id, &item_id, draft));
        match edited {
            Ok(()) => (true, true, "Note updated.".to_string()),
            Err(err) => (false, false, format!("board_edit_note failed: {err}")),
        }
    })
}

/// Removes one note.
#[flutter_rust_bridge::frb(sync)]
pub fn board_remove_note(container_id: String, item_id: String) -> BoardResponse {
    with_session(|session| {
        outcome_reply("REMOVE_ITEM", &session.remove_note(&container_id, &item_id))
    })
}

/// Creates an empty container; blank `name` means unnamed.
#[flutter_rust_bridge::frb(sync)]
pub fn board_add_container(name: String) -> BoardResponse {
    with_session(|session| match session.add_container(Some(name.as_str())) {
        Ok(container) => (true, true, format!("Container created: {}", container.id)),
        Err(err) => (false, false, format!("board_add_container failed: {err}")),
    })
}

/// Renames one container; blank `name` clears it.
#[flutter_rust_bridge::frb(sync)]
pub fn board_rename_container(container_id: String, name: String) -> BoardResponse {
    with_session(
        |session| match session.rename_container(&container_id, &name) {
            Ok(()) => (true, true, "Container renamed.".to_string()),
            Err(err) => (false, false, format!("board_rename_container failed: {err}")),
        },
    )
}

/// Removes one container and its notes. The root container is kept.
#[flutter_rust_bridge::frb(sync)]
pub fn board_remove_container(container_id: String) -> BoardResponse {
    with_session(|session| {
        outcome_reply(
            "REMOVE_CONTAINER",
            &session.remove_container(&container_id),
        )
    })
}

/// Applies a finished drag of one note.
///
/// `target_kind` is `container`, `item` or `new_container`; `target_id` is
/// ignored for `new_container`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_drop_item(
    active_item_id: String,
    target_kind: String,
    target_id: String,
) -> BoardResponse {
    let target = match parse_drop_target(target_kind.as_str(), target_id) {
        Ok(target) => target,
        Err(message) => return with_session(|_| (false, false, message)),
    };
    with_session(|session| batch_reply(&session.drop_item(&active_item_id, &target)))
}

/// Flips the collapsed flag of one container.
#[flutter_rust_bridge::frb(sync)]
pub fn board_toggle_collapsed(container_id: String) -> BoardResponse {
    with_session(|session| match session.toggle_collapsed(&container_id) {
        Ok(collapsed) => (true, false, format!("collapsed={collapsed}")),
        Err(err) => (false, false, format!("board_toggle_collapsed failed: {err}")),
    })
}

fn session_slot() -> &'static Mutex<Option<BoardSession>> {
    BOARD_SESSION.get_or_init(|| Mutex::new(None))
}

/// Runs `call` against the live session and packs the reply.
///
/// `call` returns `(ok, applied, message)`.
fn with_session<F>(call: F) -> BoardResponse
where
    F: FnOnce(&mut BoardSession) -> (bool, bool, String),
{
    let mut slot = match session_slot().lock() {
        Ok(slot) => slot,
        Err(_) => return failure("board session lock poisoned".to_string()),
    };
    let Some(session) = slot.as_mut() else {
        error!("event=session_scope module=ffi status=error reason=not_initialized");
        return failure(SESSION_NOT_INITIALIZED.to_string());
    };

    let (ok, applied, message) = call(session);
    match serde_json::to_string(session.board()) {
        Ok(board_json) => BoardResponse {
            ok,
            applied,
            message,
            board_json,
        },
        Err(err) => failure(format!("board serialization failed: {err}")),
    }
}

fn failure(message: String) -> BoardResponse {
    BoardResponse {
        ok: false,
        applied: false,
        message,
        board_json: String::new(),
    }
}

fn outcome_reply(kind: &str, outcome: &Outcome) -> (bool, bool, String) {
    match outcome {
        Outcome::Applied => (true, true, format!("{kind} applied.")),
        Outcome::Skipped(reason) => (true, false, format!("{kind} skipped: {reason}")),
    }
}

fn batch_reply(batch: &BatchOutcome) -> (bool, bool, String) {
    if !batch.committed {
        return (false, false, "Drop rolled back.".to_string());
    }
    if batch.changed_board() {
        (true, true, "Drop applied.".to_string())
    } else {
        (true, false, "Drop changed nothing.".to_string())
    }
}

fn parse_drop_target(kind: &str, target_id: String) -> Result<DropTarget, String> {
    match kind.trim() {
        "container" => Ok(DropTarget::Container(target_id)),
        "item" => Ok(DropTarget::Item(target_id)),
        "new_container" => Ok(DropTarget::NewContainer),
        other => Err(format!(
            "unsupported drop target `{other}`; expected container|item|new_container"
        )),
    }
}
