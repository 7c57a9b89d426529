// ── Core error types ──
//
// Every failure is terminal for the attempted operation and leaves the
// stores untouched. Validation happens before a store is reached; stores
// themselves only ever report a missing record.

use thiserror::Error;

use crate::model::{Collection, EntityId};

/// Unified error type for the core crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    // ── Data errors ──────────────────────────────────────────────────
    #[error("{} not found: {id}", .collection.entity_label())]
    NotFound { collection: Collection, id: EntityId },

    // ── Input errors ─────────────────────────────────────────────────
    #[error("Invalid {field}: {message}")]
    ValidationFailed {
        field: &'static str,
        message: String,
    },
}

impl CoreError {
    pub(crate) fn not_found(collection: Collection, id: EntityId) -> Self {
        Self::NotFound { collection, id }
    }

    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            field,
            message: message.into(),
        }
    }

    /// Whether the error was caused by user input rather than a stale id.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationFailed { .. })
    }
}
