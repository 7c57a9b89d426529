// ── Domain model ──
//
// Two record kinds with the same lifecycle: created from a draft, replaced
// in place from a draft, removed by id. The `Entity` trait captures that
// shape so one collection type can serve both.

pub mod employee;
pub mod entity_id;
pub mod product;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

pub use employee::{Employee, EmployeeDraft, EmployeeStatus};
pub use entity_id::EntityId;
pub use product::{Product, ProductDraft};

/// Which record collection an operation targets.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Collection {
    Products,
    Employees,
}

impl Collection {
    /// Singular, capitalized name of one record ("Product").
    pub fn entity_label(self) -> &'static str {
        match self {
            Self::Products => "Product",
            Self::Employees => "Employee",
        }
    }

    /// Prompt shown before a record of this collection is deleted.
    pub fn delete_prompt(self) -> &'static str {
        match self {
            Self::Products => "Delete this product?",
            Self::Employees => "Delete this employee?",
        }
    }
}

/// A record owned by an [`EntityCollection`](crate::store::EntityCollection).
///
/// `Draft` is the record minus its id: what a form submission or a command
/// supplies.
pub trait Entity: Clone + std::fmt::Debug {
    type Draft: Clone + std::fmt::Debug;

    const COLLECTION: Collection;

    fn id(&self) -> EntityId;

    /// Build a stored record from a draft and a freshly allocated id.
    fn from_draft(id: EntityId, draft: Self::Draft) -> Self;

    /// Replace every field except the id.
    fn apply(&mut self, draft: Self::Draft);

    /// Current field values, without the id.
    fn to_draft(&self) -> Self::Draft;

    /// Display name, used in log lines and overlay titles.
    fn name(&self) -> &str;
}
