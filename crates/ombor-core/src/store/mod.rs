// ── Record stores ──
//
// One `EntityCollection` per record kind, bundled into a `DataStore` that
// front-ends hand to the `ViewController` by reference.

mod collection;
pub mod seed;

pub use collection::EntityCollection;

use crate::model::{Employee, Product};
use crate::projection::DashboardSummary;

/// Owner of the product collection.
pub type ProductStore = EntityCollection<Product>;

/// Owner of the employee collection.
pub type EmployeeStore = EntityCollection<Employee>;

/// Both record collections of one dashboard session.
///
/// The two stores never share state; borrowing one mutably leaves the other
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    products: ProductStore,
    employees: EmployeeStore,
}

impl DataStore {
    /// An empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session pre-filled with the demo inventory and roster.
    pub fn with_demo_data() -> Self {
        Self {
            products: ProductStore::seeded(seed::demo_products()),
            employees: EmployeeStore::seeded(seed::demo_employees()),
        }
    }

    pub fn products(&self) -> &ProductStore {
        &self.products
    }

    pub fn products_mut(&mut self) -> &mut ProductStore {
        &mut self.products
    }

    pub fn employees(&self) -> &EmployeeStore {
        &self.employees
    }

    pub fn employees_mut(&mut self) -> &mut EmployeeStore {
        &mut self.employees
    }

    /// Dashboard counters, recomputed from scratch.
    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary::compute(&self.products, &self.employees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_data_fills_both_collections() {
        let store = DataStore::with_demo_data();
        assert_eq!(store.products().len(), 4);
        assert_eq!(store.employees().len(), 4);
    }

    #[test]
    fn new_store_is_empty() {
        let store = DataStore::new();
        assert!(store.products().is_empty());
        assert!(store.employees().is_empty());
        assert_eq!(store.summary(), DashboardSummary::default());
    }
}
