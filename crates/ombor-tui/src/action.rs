//! All possible UI actions. Actions are the sole mechanism for state mutation.

use std::fmt;
use std::sync::Arc;

use ombor_core::{Collection, CollectionListing, DashboardSummary, EntityId, FormFields};

use crate::screen::ScreenId;

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// A toast notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
}

impl Notification {
    pub fn success(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Success,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Error,
        }
    }

    pub fn info(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Info,
        }
    }
}

/// Delete awaiting a yes/no answer from the confirm dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub collection: Collection,
    pub id: EntityId,
    pub name: String,
}

impl fmt::Display for PendingDelete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.collection.delete_prompt(), self.name)
    }
}

/// Every state transition in the TUI is expressed as an Action.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── Navigation ────────────────────────────────────────────────
    SwitchScreen(ScreenId),
    GoBack,

    // ── Data events (after every store change) ────────────────────
    ListingUpdated(Arc<CollectionListing>),
    SummaryUpdated(DashboardSummary),

    // ── Record forms ──────────────────────────────────────────────
    OpenCreate(Collection),
    OpenEdit(Collection, EntityId),
    SubmitForm(FormFields),
    CancelForm,

    // ── Detail overlay ────────────────────────────────────────────
    OpenDetail(Collection, EntityId),
    CloseDetail,

    // ── Delete + confirm dialog ───────────────────────────────────
    RequestDelete(Collection, EntityId),
    ConfirmYes,
    ConfirmNo,

    // ── Search ────────────────────────────────────────────────────
    OpenSearch,
    CloseSearch,
    SearchInput(String),
    SearchSubmit,

    // ── Help ──────────────────────────────────────────────────────
    ToggleHelp,

    // ── Notifications ─────────────────────────────────────────────
    Notify(Notification),
}
