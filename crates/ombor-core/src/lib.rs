//! Record-management core for the ombor inventory and staff dashboard.
//!
//! This crate owns the domain model, the entity stores, and the view-state
//! logic shared by every front-end:
//!
//! - **[`EntityCollection<E>`](store::EntityCollection)**: insertion-ordered
//!   store for one entity type. [`ProductStore`] and [`EmployeeStore`] are the
//!   two concrete instantiations; [`DataStore`] bundles them.
//!
//! - **[`ViewController`]**: tracks which record is being edited and the
//!   current search text per collection, routes form submissions and
//!   [`Command`]s to the stores, and answers with a fresh [`Render`].
//!
//! - **Projection** ([`projection`]): pure functions mapping a filtered
//!   collection to display records ([`ProductCard`], [`EmployeeCard`]), the
//!   [`DashboardSummary`] counters, and [`DetailView`] sheets.
//!
//! - **Formatting** ([`format`]): digit grouping for money amounts and the
//!   matching whitespace-tolerant parser used by form validation.
//!
//! Nothing here is internally synchronized. Mutation goes through `&mut`
//! borrows; share a store across threads only behind a lock.

pub mod command;
pub mod controller;
pub mod error;
pub mod format;
pub mod model;
pub mod projection;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use command::forms::{EmployeeForm, FormFields, ProductForm};
pub use command::{Command, CommandResult};
pub use controller::{Confirm, DEFAULT_CURRENCY, Render, ViewController};
pub use error::CoreError;
pub use format::{format_amount, format_money, parse_amount};
pub use projection::{
    CollectionListing, DashboardSummary, DetailRow, DetailSection, DetailView, EmployeeCard,
    Listing, ProductCard,
};
pub use store::{DataStore, EmployeeStore, ProductStore};

pub use model::{
    Collection, Employee, EmployeeDraft, EmployeeStatus, Entity, EntityId, Product, ProductDraft,
};
