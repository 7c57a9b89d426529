// ── Command API ──
//
// The programmatic counterpart of the dashboard's forms and buttons. Every
// variant is routed by `ViewController::execute` through the same store
// operations the interactive flow uses.

pub mod forms;

use crate::controller::Render;
use crate::model::{Collection, Employee, EmployeeDraft, EntityId, Product, ProductDraft};

/// All operations exposed by the record-management core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // ── Products ─────────────────────────────────────────────────────
    CreateProduct(ProductDraft),
    UpdateProduct { id: EntityId, draft: ProductDraft },
    DeleteProduct { id: EntityId },

    // ── Employees ────────────────────────────────────────────────────
    CreateEmployee(EmployeeDraft),
    UpdateEmployee { id: EntityId, draft: EmployeeDraft },
    DeleteEmployee { id: EntityId },

    // ── Views ────────────────────────────────────────────────────────
    Search { collection: Collection, text: String },
}

impl Command {
    /// Collection the command reads or writes.
    pub fn collection(&self) -> Collection {
        match self {
            Self::CreateProduct(_) | Self::UpdateProduct { .. } | Self::DeleteProduct { .. } => {
                Collection::Products
            }
            Self::CreateEmployee(_) | Self::UpdateEmployee { .. } | Self::DeleteEmployee { .. } => {
                Collection::Employees
            }
            Self::Search { collection, .. } => *collection,
        }
    }
}

/// Result of a command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    Product(Product),
    Employee(Employee),
    /// Whether a delete removed a record; `false` when confirmation was
    /// declined.
    Deleted(bool),
    Render(Render),
}
