//! Board session: the owning scope of one board.
//!
//! # Responsibility
//! - Hold the board, its id/colour generators and the view-state side table.
//! - Route every mutation through the reducer, one action or one batch.
//! - Offer form- and gesture-level use-cases on top of raw actions.
//!
//! # Invariants
//! - Readers only ever see a fully reduced board; batches swap in once.
//! - A batch that leaves the board violating an integrity rule is rolled back.
//! - View-state entries never outlive their container.

use crate::config::{BoardConfig, ConfigError};
use crate::generator::color::ColorPicker;
use crate::generator::id::{IdGenerator, UuidIdGenerator};
use crate::model::board::Board;
use crate::model::container::{Container, ContainerId};
use crate::model::item::{Item, ItemId};
use crate::reducer::action::BoardAction;
use crate::reducer::board_reducer::{reduce_with_outcome, Outcome, SkipReason};
use crate::service::draft::{normalize_container_name_with_limit, DraftError, NoteDraft};
use crate::service::drop::{resolve_drop, DropTarget};
use crate::service::view_state::BoardViewState;
use log::{debug, error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors reported by session use-cases to the UI.
///
/// Raw `dispatch` never returns these; it reports skips as [`Outcome`].
/// Use-cases turn a skipped action into [`SessionError::Rejected`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Form input failed validation.
    InvalidDraft(DraftError),
    /// Target container does not exist.
    ContainerNotFound(ContainerId),
    /// Target note does not exist in the addressed container.
    ItemNotFound(ItemId),
    /// The reducer skipped the action the use-case produced.
    Rejected(SkipReason),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDraft(err) => write!(f, "{err}"),
            Self::ContainerNotFound(id) => write!(f, "container not found: {id}"),
            Self::ItemNotFound(id) => write!(f, "note not found: {id}"),
            Self::Rejected(reason) => write!(f, "board rejected the change: {reason}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDraft(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DraftError> for SessionError {
    fn from(value: DraftError) -> Self {
        Self::InvalidDraft(value)
    }
}

/// Result of applying an ordered action batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Per-action outcomes, in dispatch order.
    pub outcomes: Vec<Outcome>,
    /// `false` when the batch was rolled back by the integrity check.
    pub committed: bool,
}

impl BatchOutcome {
    /// Whether the batch was committed and at least one action took effect.
    pub fn changed_board(&self) -> bool {
        self.committed && self.outcomes.iter().any(Outcome::is_applied)
    }
}

/// Owner of one board and everything needed to grow it.
pub struct BoardSession {
    config: BoardConfig,
    board: Board,
    ids: Box<dyn IdGenerator + Send>,
    colors: ColorPicker,
    view: BoardViewState,
}

impl BoardSession {
    /// Creates a session with UUID ids and an entropy-seeded colour picker.
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        let colors = ColorPicker::new(config.palette.clone());
        Self::with_collaborators(config, UuidIdGenerator, colors)
    }

    /// Creates a session with injected generators.
    pub fn with_collaborators(
        config: BoardConfig,
        ids: impl IdGenerator + Send + 'static,
        colors: ColorPicker,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut root = Container::new(config.root_container_id.clone());
        root.name = config.root_container_name.clone();
        info!(
            "event=board_init module=session status=ok root_id={} palette_size={}",
            root.id,
            colors.palette().len()
        );
        Ok(Self {
            board: Board::with_root(root),
            config,
            ids: Box::new(ids),
            colors,
            view: BoardViewState::new(),
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Read-only view of the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Owned copy of the current board.
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    pub fn view(&self) -> &BoardViewState {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut BoardViewState {
        &mut self.view
    }

    /// Applies one action and replaces the board.
    pub fn dispatch(&mut self, action: BoardAction) -> Outcome {
        let board = std::mem::take(&mut self.board);
        let (next, outcome) = reduce_with_outcome(board, &action);
        self.board = next;
        log_outcome(&action, &outcome);
        self.view.prune(&self.board);
        outcome
    }

    /// Applies actions in order to a working copy and swaps it in once.
    ///
    /// Order is preserved exactly; the split gesture relies on its
    /// add-container step landing before its transfer step.
    pub fn dispatch_batch(&mut self, actions: Vec<BoardAction>) -> BatchOutcome {
        let mut working = self.board.clone();
        let mut outcomes = Vec::with_capacity(actions.len());
        for action in &actions {
            let (next, outcome) = reduce_with_outcome(working, action);
            working = next;
            log_outcome(action, &outcome);
            outcomes.push(outcome);
        }

        let violations = working.check_integrity();
        if !violations.is_empty() {
            for violation in &violations {
                error!(
                    "event=board_integrity module=session status=error violation={}",
                    violation
                );
            }
            return BatchOutcome {
                outcomes,
                committed: false,
            };
        }

        info!(
            "event=board_batch module=session status=ok actions={} applied={}",
            outcomes.len(),
            outcomes.iter().filter(|outcome| outcome.is_applied()).count()
        );
        self.board = working;
        self.view.prune(&self.board);
        BatchOutcome {
            outcomes,
            committed: true,
        }
    }

    /// Validates note form input against the configured title cap.
    pub fn note_draft(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<NoteDraft, DraftError> {
        NoteDraft::with_title_limit(title, message, self.config.title_max_chars)
    }

    /// Creates a note with a fresh id and palette colour.
    pub fn add_note(
        &mut self,
        container_id: &str,
        draft: NoteDraft,
    ) -> Result<Item, SessionError> {
        self.require_container(container_id)?;
        let (title, message) = draft.into_parts();
        let item = Item::new(self.ids.next_id(), title, message).with_color(self.colors.next());
        self.dispatch_use_case(BoardAction::AddItem {
            container_id: container_id.to_string(),
            item: item.clone(),
        })?;
        Ok(item)
    }

    /// Replaces the title and message of one note.
    pub fn edit_note(
        &mut self,
        container_id: &str,
        item_id: &str,
        draft: NoteDraft,
    ) -> Result<(), SessionError> {
        self.require_item(container_id, item_id)?;
        let (new_title, new_message) = draft.into_parts();
        self.dispatch_use_case(BoardAction::EditItem {
            container_id: container_id.to_string(),
            item_id: item_id.to_string(),
            new_title,
            new_message,
        })
    }

    pub fn remove_note(&mut self, container_id: &str, item_id: &str) -> Outcome {
        self.dispatch(BoardAction::RemoveItem {
            container_id: container_id.to_string(),
            item_id: item_id.to_string(),
        })
    }

    /// Creates an empty container with a fresh id.
    pub fn add_container(&mut self, name: Option<&str>) -> Result<Container, SessionError> {
        let name = match name {
            Some(raw) => {
                normalize_container_name_with_limit(raw, self.config.container_name_max_chars)?
            }
            None => None,
        };
        let mut container = Container::new(self.ids.next_id());
        container.name = name;
        self.dispatch_use_case(BoardAction::AddContainer(container.clone()))?;
        Ok(container)
    }

    /// Sets or clears (blank input) the display name of one container.
    pub fn rename_container(&mut self, container_id: &str, name: &str) -> Result<(), SessionError> {
        self.require_container(container_id)?;
        let new_name =
            normalize_container_name_with_limit(name, self.config.container_name_max_chars)?
                .unwrap_or_default();
        self.dispatch_use_case(BoardAction::EditContainerName {
            container_id: container_id.to_string(),
            new_name,
        })
    }

    pub fn remove_container(&mut self, container_id: &str) -> Outcome {
        self.dispatch(BoardAction::RemoveContainer {
            container_id: container_id.to_string(),
        })
    }

    /// Resolves a finished drag of one note and applies it as one batch.
    pub fn drop_item(&mut self, active_item_id: &str, target: &DropTarget) -> BatchOutcome {
        let new_container_id = match target {
            DropTarget::NewContainer => self.ids.next_id(),
            _ => String::new(),
        };
        let actions = resolve_drop(&self.board, active_item_id, target, &new_container_id);
        debug!(
            "event=board_drop module=session status=ok item_id={} target={:?} actions={}",
            active_item_id,
            target,
            actions.len()
        );
        self.dispatch_batch(actions)
    }

    /// Flips the collapsed flag of an existing container.
    pub fn toggle_collapsed(&mut self, container_id: &str) -> Result<bool, SessionError> {
        self.require_container(container_id)?;
        Ok(self.view.toggle_collapsed(container_id))
    }

    fn dispatch_use_case(&mut self, action: BoardAction) -> Result<(), SessionError> {
        match self.dispatch(action) {
            Outcome::Applied => Ok(()),
            Outcome::Skipped(reason) => Err(SessionError::Rejected(reason)),
        }
    }

    fn require_container(&self, container_id: &str) -> Result<&Container, SessionError> {
        self.board
            .container(container_id)
            .ok_or_else(|| SessionError::ContainerNotFound(container_id.to_string()))
    }

    fn require_item(&self, container_id: &str, item_id: &str) -> Result<(), SessionError> {
        if self.require_container(container_id)?.contains_item(item_id) {
            Ok(())
        } else {
            Err(SessionError::ItemNotFound(item_id.to_string()))
        }
    }
}

fn log_outcome(action: &BoardAction, outcome: &Outcome) {
    match outcome {
        Outcome::Applied => debug!(
            "event=board_dispatch module=reducer status=ok action={}",
            action.kind()
        ),
        Outcome::Skipped(reason) => debug!(
            "event=board_dispatch module=reducer status=noop action={} reason={}",
            action.kind(),
            reason
        ),
    }
}
