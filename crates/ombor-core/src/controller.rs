// ── View controller ──
//
// Transient UI state for both collections (which record is being edited,
// what the search box holds) and the routing of form submissions, deletes,
// and commands to the stores. The stores are always passed in explicitly;
// the controller never keeps a reference to them.

use serde::Serialize;
use tracing::{debug, warn};

use crate::command::forms::{EmployeeForm, FormFields, ProductForm};
use crate::command::{Command, CommandResult};
use crate::error::CoreError;
use crate::model::{Collection, EntityId};
use crate::projection::{
    CollectionListing, DashboardSummary, DetailView, project_employees, project_products,
};
use crate::store::DataStore;

/// Default currency suffix appended to formatted amounts.
pub const DEFAULT_CURRENCY: &str = "so'm";

// ── Confirmation capability ─────────────────────────────────────────

/// Yes/no gate consulted before a destructive operation.
///
/// Implemented for any `FnMut(&str) -> bool`, so tests can answer with a
/// closure and front-ends can answer with whatever their dialog collected.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

// ── Render ──────────────────────────────────────────────────────────

/// Everything a front-end needs to redraw after an operation: the listing of
/// the touched collection under its current search, plus fresh dashboard
/// counters. Replaces the previous display wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Render {
    pub listing: CollectionListing,
    pub summary: DashboardSummary,
}

// ── ViewController ──────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
struct CollectionView {
    /// Record currently open in the form; `None` means create mode.
    editing: Option<EntityId>,
    search: String,
}

/// Per-collection view state plus the operations that drive the stores.
#[derive(Debug, Clone)]
pub struct ViewController {
    products: CollectionView,
    employees: CollectionView,
    currency: String,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY)
    }
}

impl ViewController {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            products: CollectionView::default(),
            employees: CollectionView::default(),
            currency: currency.into(),
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Id of the record open in the form, if editing.
    pub fn editing(&self, collection: Collection) -> Option<EntityId> {
        self.state(collection).editing
    }

    /// Current search text for a collection.
    pub fn search(&self, collection: Collection) -> &str {
        &self.state(collection).search
    }

    /// Heading for the form overlay in its current mode.
    pub fn form_title(&self, collection: Collection) -> &'static str {
        match (collection, self.editing(collection).is_some()) {
            (Collection::Products, false) => "New product",
            (Collection::Products, true) => "Edit product",
            (Collection::Employees, false) => "New employee",
            (Collection::Employees, true) => "Edit employee",
        }
    }

    // ── Form lifecycle ───────────────────────────────────────────────

    /// Switch to create mode and hand back a blank form.
    pub fn begin_create(&mut self, collection: Collection) -> FormFields {
        self.state_mut(collection).editing = None;
        FormFields::empty(collection)
    }

    /// Switch to edit mode for `id` and hand back the form pre-populated with
    /// its current values. State is unchanged if the record is gone.
    pub fn begin_edit(
        &mut self,
        store: &DataStore,
        collection: Collection,
        id: EntityId,
    ) -> Result<FormFields, CoreError> {
        let form = match collection {
            Collection::Products => store
                .products()
                .find_by_id(id)
                .map(|p| FormFields::Product(ProductForm::from_product(p))),
            Collection::Employees => store
                .employees()
                .find_by_id(id)
                .map(|e| FormFields::Employee(EmployeeForm::from_employee(e))),
        };
        let form = form.ok_or_else(|| {
            warn!(%collection, %id, "edit requested for missing record");
            CoreError::not_found(collection, id)
        })?;

        self.state_mut(collection).editing = Some(id);
        Ok(form)
    }

    /// Close the form without saving.
    pub fn cancel(&mut self, collection: Collection) {
        self.state_mut(collection).editing = None;
    }

    /// Validate and save a form: update when editing, create otherwise.
    ///
    /// On any error nothing is stored and the edit target is kept, so the
    /// user can correct the form and resubmit.
    pub fn submit(&mut self, store: &mut DataStore, form: FormFields) -> Result<Render, CoreError> {
        let collection = form.collection();
        let editing = self.editing(collection);

        match form {
            FormFields::Product(form) => {
                let draft = form.validate()?;
                let products = store.products_mut();
                match editing {
                    Some(id) => products.update(id, draft).map(drop),
                    None => {
                        products.create(draft);
                        Ok(())
                    }
                }
            }
            FormFields::Employee(form) => {
                let draft = form.validate()?;
                let employees = store.employees_mut();
                match editing {
                    Some(id) => employees.update(id, draft).map(drop),
                    None => {
                        employees.create(draft);
                        Ok(())
                    }
                }
            }
        }
        .inspect_err(|e| warn!(%collection, error = %e, "form submission rejected"))?;

        self.state_mut(collection).editing = None;
        Ok(self.render(store, collection))
    }

    // ── Search ───────────────────────────────────────────────────────

    /// Store the search text and project the collection through it.
    pub fn set_search(
        &mut self,
        store: &DataStore,
        collection: Collection,
        text: impl Into<String>,
    ) -> Render {
        self.state_mut(collection).search = text.into();
        self.render(store, collection)
    }

    // ── Delete / view ────────────────────────────────────────────────

    /// Delete a record once `confirm` agrees.
    ///
    /// Returns `Ok(None)` when confirmation is declined (nothing changes),
    /// and `NotFound` when confirmed for an id that no longer exists.
    pub fn request_delete(
        &mut self,
        store: &mut DataStore,
        collection: Collection,
        id: EntityId,
        confirm: &mut impl Confirm,
    ) -> Result<Option<Render>, CoreError> {
        if !confirm.confirm(collection.delete_prompt()) {
            debug!(%collection, %id, "delete declined");
            return Ok(None);
        }

        let removed = match collection {
            Collection::Products => store.products_mut().delete(id),
            Collection::Employees => store.employees_mut().delete(id),
        };
        if !removed {
            warn!(%collection, %id, "delete confirmed for missing record");
            return Err(CoreError::not_found(collection, id));
        }

        let state = self.state_mut(collection);
        if state.editing == Some(id) {
            state.editing = None;
        }
        Ok(Some(self.render(store, collection)))
    }

    /// Detail sheet for one record.
    pub fn view(
        &self,
        store: &DataStore,
        collection: Collection,
        id: EntityId,
    ) -> Result<DetailView, CoreError> {
        let detail = match collection {
            Collection::Products => store
                .products()
                .find_by_id(id)
                .map(|p| DetailView::product(p, &self.currency)),
            Collection::Employees => store
                .employees()
                .find_by_id(id)
                .map(|e| DetailView::employee(e, &self.currency)),
        };
        detail.ok_or_else(|| CoreError::not_found(collection, id))
    }

    // ── Rendering ────────────────────────────────────────────────────

    /// Listing of `collection` under its current search, plus the summary.
    pub fn render(&self, store: &DataStore, collection: Collection) -> Render {
        let query = self.search(collection);
        let listing = match collection {
            Collection::Products => {
                CollectionListing::Products(project_products(store.products(), query, &self.currency))
            }
            Collection::Employees => CollectionListing::Employees(project_employees(
                store.employees(),
                query,
                &self.currency,
            )),
        };
        Render {
            listing,
            summary: store.summary(),
        }
    }

    // ── Command surface ──────────────────────────────────────────────

    /// Run a [`Command`] against the stores.
    ///
    /// Creates and updates bypass the form state; deletes still go through
    /// `confirm`.
    pub fn execute(
        &mut self,
        store: &mut DataStore,
        command: Command,
        confirm: &mut impl Confirm,
    ) -> Result<CommandResult, CoreError> {
        debug!(collection = %command.collection(), ?command, "executing command");

        match command {
            Command::CreateProduct(draft) => {
                draft.check()?;
                Ok(CommandResult::Product(store.products_mut().create(draft)))
            }
            Command::UpdateProduct { id, draft } => {
                draft.check()?;
                store.products_mut().update(id, draft).map(CommandResult::Product)
            }
            Command::CreateEmployee(draft) => {
                draft.check()?;
                Ok(CommandResult::Employee(store.employees_mut().create(draft)))
            }
            Command::UpdateEmployee { id, draft } => {
                draft.check()?;
                store.employees_mut().update(id, draft).map(CommandResult::Employee)
            }
            Command::DeleteProduct { id } => self
                .request_delete(store, Collection::Products, id, confirm)
                .map(|render| CommandResult::Deleted(render.is_some())),
            Command::DeleteEmployee { id } => self
                .request_delete(store, Collection::Employees, id, confirm)
                .map(|render| CommandResult::Deleted(render.is_some())),
            Command::Search { collection, text } => Ok(CommandResult::Render(
                self.set_search(store, collection, text),
            )),
        }
    }

    // ── Private helpers ──────────────────────────────────────────────

    fn state(&self, collection: Collection) -> &CollectionView {
        match collection {
            Collection::Products => &self.products,
            Collection::Employees => &self.employees,
        }
    }

    fn state_mut(&mut self, collection: Collection) -> &mut CollectionView {
        match collection {
            Collection::Products => &mut self.products,
            Collection::Employees => &mut self.employees,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::command::forms::ProductForm;
    use crate::model::EmployeeStatus;

    fn stol_form() -> FormFields {
        FormFields::Product(ProductForm {
            name: "Stul".into(),
            price: "120 000".into(),
            quantity: "0".into(),
            category: "Mebel".into(),
            description: String::new(),
        })
    }

    #[test]
    fn form_title_follows_mode() {
        let store = DataStore::with_demo_data();
        let mut ctl = ViewController::default();
        ctl.begin_create(Collection::Products);
        assert_eq!(ctl.form_title(Collection::Products), "New product");
        ctl.begin_edit(&store, Collection::Products, EntityId::from(1))
            .unwrap();
        assert_eq!(ctl.form_title(Collection::Products), "Edit product");
        assert_eq!(ctl.form_title(Collection::Employees), "New employee");
    }

    #[test]
    fn begin_edit_prefills_current_values() {
        let store = DataStore::with_demo_data();
        let mut ctl = ViewController::default();
        let form = ctl
            .begin_edit(&store, Collection::Employees, EntityId::from(4))
            .unwrap();
        let FormFields::Employee(form) = form else {
            panic!("expected employee form");
        };
        assert_eq!(form.name, "Jasur Toshmatov");
        assert_eq!(form.salary, "3800000");
        assert_eq!(form.status, EmployeeStatus::Inactive);
        assert_eq!(ctl.editing(Collection::Employees), Some(EntityId::from(4)));
    }

    #[test]
    fn begin_edit_missing_record_keeps_state() {
        let store = DataStore::with_demo_data();
        let mut ctl = ViewController::default();
        let err = ctl
            .begin_edit(&store, Collection::Products, EntityId::from(77))
            .unwrap_err();
        assert!(matches!(err, CoreError::NotFound { .. }));
        assert_eq!(ctl.editing(Collection::Products), None);
    }

    #[test]
    fn submit_without_target_creates() {
        let mut store = DataStore::with_demo_data();
        let mut ctl = ViewController::default();
        let form = ctl.begin_create(Collection::Products);
        assert_eq!(form, FormFields::empty(Collection::Products));

        let render = ctl.submit(&mut store, stol_form()).unwrap();
        assert_eq!(render.listing.len(), 5);
        assert_eq!(render.summary.total_products, 5);
        assert_eq!(render.summary.available_products, 4);
    }

    #[test]
    fn submit_with_target_updates_and_clears_target() {
        let mut store = DataStore::with_demo_data();
        let mut ctl = ViewController::default();
        ctl.begin_edit(&store, Collection::Products, EntityId::from(3))
            .unwrap();
        ctl.submit(&mut store, stol_form()).unwrap();

        assert_eq!(ctl.editing(Collection::Products), None);
        assert_eq!(store.products().len(), 4);
        let updated = store.products().find_by_id(EntityId::from(3)).unwrap();
        assert_eq!(updated.name, "Stul");
        assert_eq!(updated.price, 120_000);
    }

    #[test]
    fn invalid_submission_changes_nothing() {
        let mut store = DataStore::with_demo_data();
        let mut ctl = ViewController::default();
        ctl.begin_edit(&store, Collection::Products, EntityId::from(2))
            .unwrap();
        let before = store.products().version();

        let bad = FormFields::Product(ProductForm {
            price: "lots".into(),
            ..ProductForm::default()
        });
        let err = ctl.submit(&mut store, bad).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.products().version(), before);
        assert_eq!(ctl.editing(Collection::Products), Some(EntityId::from(2)));
    }

    #[test]
    fn submit_for_deleted_target_is_not_found() {
        let mut store = DataStore::with_demo_data();
        let mut ctl = ViewController::default();
        ctl.begin_edit(&store, Collection::Products, EntityId::from(1))
            .unwrap();
        store.products_mut().delete(EntityId::from(1));

        let err = ctl.submit(&mut store, stol_form()).unwrap_err();
        assert!(matches!(err, CoreError::NotFound { .. }));
        assert_eq!(store.products().len(), 3);
    }

    #[test]
    fn declined_delete_is_a_no_op() {
        let mut store = DataStore::with_demo_data();
        let mut ctl = ViewController::default();
        let mut asked = Vec::new();
        let result = ctl
            .request_delete(
                &mut store,
                Collection::Employees,
                EntityId::from(1),
                &mut |prompt: &str| {
                    asked.push(prompt.to_owned());
                    false
                },
            )
            .unwrap();
        assert!(result.is_none());
        assert_eq!(asked, ["Delete this employee?"]);
        assert_eq!(store.employees().len(), 4);
    }

    #[test]
    fn confirmed_delete_rerenders() {
        let mut store = DataStore::with_demo_data();
        let mut ctl = ViewController::default();
        let render = ctl
            .request_delete(&mut store, Collection::Employees, EntityId::from(1), &mut |_: &str| true)
            .unwrap()
            .unwrap();
        assert_eq!(render.summary.total_employees, 3);
        assert_eq!(render.summary.active_employees, 2);
    }

    #[test]
    fn confirmed_delete_of_missing_record_is_not_found() {
        let mut store = DataStore::with_demo_data();
        let mut ctl = ViewController::default();
        let err = ctl
            .request_delete(&mut store, Collection::Products, EntityId::from(50), &mut |_: &str| true)
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::NotFound {
                collection: Collection::Products,
                id: EntityId::from(50),
            }
        );
    }

    #[test]
    fn deleting_the_edit_target_clears_it() {
        let mut store = DataStore::with_demo_data();
        let mut ctl = ViewController::default();
        ctl.begin_edit(&store, Collection::Products, EntityId::from(2))
            .unwrap();
        ctl.request_delete(&mut store, Collection::Products, EntityId::from(2), &mut |_: &str| true)
            .unwrap();
        assert_eq!(ctl.editing(Collection::Products), None);
    }

    #[test]
    fn search_is_remembered_per_collection() {
        let store = DataStore::with_demo_data();
        let mut ctl = ViewController::default();
        let render = ctl.set_search(&store, Collection::Products, "mebel");
        assert_eq!(render.listing.len(), 2);
        assert_eq!(ctl.search(Collection::Products), "mebel");
        assert_eq!(ctl.search(Collection::Employees), "");

        // Later renders keep applying the stored filter.
        assert_eq!(ctl.render(&store, Collection::Products).listing.len(), 2);
    }

    #[test]
    fn view_uses_controller_currency() {
        let store = DataStore::with_demo_data();
        let ctl = ViewController::new("UZS");
        let detail = ctl
            .view(&store, Collection::Products, EntityId::from(1))
            .unwrap();
        assert_eq!(detail.title, "Noutbuk HP");
        assert_eq!(detail.sections[0].rows[2].value, "5 500 000 UZS");
    }

    #[test]
    fn execute_search_updates_view_state() {
        let mut store = DataStore::with_demo_data();
        let mut ctl = ViewController::default();
        let result = ctl
            .execute(
                &mut store,
                Command::Search {
                    collection: Collection::Employees,
                    text: "sotuv".into(),
                },
                &mut |_: &str| false,
            )
            .unwrap();
        let CommandResult::Render(render) = result else {
            panic!("expected render");
        };
        assert_eq!(render.listing.len(), 1);
        assert_eq!(ctl.search(Collection::Employees), "sotuv");
    }
}
