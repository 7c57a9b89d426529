// ── Employee domain types ──

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use super::entity_id::EntityId;
use super::{Collection, Entity};
use crate::error::CoreError;

/// Employment status.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Human-readable badge text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    /// The other status. Used by toggle widgets.
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }
}

/// A staff member on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EntityId,
    pub name: String,
    /// Free-form phone number; matched literally by search.
    pub phone: String,
    pub position: String,
    /// Monthly salary in the smallest currency unit.
    pub salary: u64,
    pub status: EmployeeStatus,
    pub email: Option<String>,
}

/// Employee field values without an id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmployeeDraft {
    pub name: String,
    pub phone: String,
    pub position: String,
    pub salary: u64,
    #[serde(default)]
    pub status: EmployeeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl EmployeeDraft {
    /// Reject drafts that would break the record invariants.
    pub fn check(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::invalid("name", "is required"));
        }
        Ok(())
    }
}

impl Entity for Employee {
    type Draft = EmployeeDraft;

    const COLLECTION: Collection = Collection::Employees;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: EmployeeDraft) -> Self {
        Self {
            id,
            name: draft.name,
            phone: draft.phone,
            position: draft.position,
            salary: draft.salary,
            status: draft.status,
            email: draft.email,
        }
    }

    fn apply(&mut self, draft: EmployeeDraft) {
        self.name = draft.name;
        self.phone = draft.phone;
        self.position = draft.position;
        self.salary = draft.salary;
        self.status = draft.status;
        self.email = draft.email;
    }

    fn to_draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            name: self.name.clone(),
            phone: self.phone.clone(),
            position: self.position.clone(),
            salary: self.salary,
            status: self.status,
            email: self.email.clone(),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
