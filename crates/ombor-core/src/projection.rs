// ── Display projection ──
//
// Pure functions from store contents to render-ready records. Nothing in
// here holds state; every call recomputes from the collections it is given.

use serde::Serialize;

use crate::format::format_money;
use crate::model::{Collection, Employee, EmployeeStatus, EntityId, Product};
use crate::store::{EmployeeStore, ProductStore};

// ── Search predicates ───────────────────────────────────────────────

/// Case-insensitive match on name or category. An empty query matches.
pub fn product_matches(product: &Product, query: &str) -> bool {
    let q = query.to_lowercase();
    product.name.to_lowercase().contains(&q) || product.category.to_lowercase().contains(&q)
}

/// Case-insensitive match on name or position, or a literal match on the
/// phone number. An empty query matches.
pub fn employee_matches(employee: &Employee, query: &str) -> bool {
    let q = query.to_lowercase();
    employee.name.to_lowercase().contains(&q)
        || employee.position.to_lowercase().contains(&q)
        || employee.phone.contains(query)
}

// ── Display records ─────────────────────────────────────────────────

/// Render-ready product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    pub id: EntityId,
    pub name: String,
    pub category: String,
    pub price: u64,
    pub price_display: String,
    pub quantity: u64,
    pub description: Option<String>,
}

impl ProductCard {
    pub fn new(product: &Product, currency: &str) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price,
            price_display: format_money(product.price, currency),
            quantity: product.quantity,
            description: product.description.clone(),
        }
    }
}

/// Render-ready employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeCard {
    pub id: EntityId,
    pub name: String,
    pub phone: String,
    pub position: String,
    pub salary: u64,
    pub salary_display: String,
    pub status: EmployeeStatus,
    pub status_label: &'static str,
    pub email: Option<String>,
}

impl EmployeeCard {
    pub fn new(employee: &Employee, currency: &str) -> Self {
        Self {
            id: employee.id,
            name: employee.name.clone(),
            phone: employee.phone.clone(),
            position: employee.position.clone(),
            salary: employee.salary,
            salary_display: format_money(employee.salary, currency),
            status: employee.status,
            status_label: employee.status.label(),
            email: employee.email.clone(),
        }
    }
}

/// Outcome of projecting a collection through a search query.
///
/// `Empty` means the collection holds no records at all; `NoMatches` means
/// records exist but none satisfied the query. Front-ends may word the two
/// placeholders differently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Listing<T> {
    Items(Vec<T>),
    NoMatches { query: String },
    Empty,
}

impl<T> Listing<T> {
    fn from_matches(matches: Vec<T>, total: usize, query: &str) -> Self {
        if total == 0 {
            Self::Empty
        } else if matches.is_empty() {
            Self::NoMatches {
                query: query.to_owned(),
            }
        } else {
            Self::Items(matches)
        }
    }

    /// Matching records; empty for either placeholder state.
    pub fn items(&self) -> &[T] {
        match self {
            Self::Items(items) => items,
            Self::NoMatches { .. } | Self::Empty => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

/// Project the products matching `query`, in collection order.
pub fn project_products(store: &ProductStore, query: &str, currency: &str) -> Listing<ProductCard> {
    let cards = store
        .filter(|p| product_matches(p, query))
        .into_iter()
        .map(|p| ProductCard::new(p, currency))
        .collect();
    Listing::from_matches(cards, store.len(), query)
}

/// Project the employees matching `query`, in collection order.
pub fn project_employees(
    store: &EmployeeStore,
    query: &str,
    currency: &str,
) -> Listing<EmployeeCard> {
    let cards = store
        .filter(|e| employee_matches(e, query))
        .into_iter()
        .map(|e| EmployeeCard::new(e, currency))
        .collect();
    Listing::from_matches(cards, store.len(), query)
}

/// A listing for either collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionListing {
    Products(Listing<ProductCard>),
    Employees(Listing<EmployeeCard>),
}

impl CollectionListing {
    pub fn collection(&self) -> Collection {
        match self {
            Self::Products(_) => Collection::Products,
            Self::Employees(_) => Collection::Employees,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Products(listing) => listing.len(),
            Self::Employees(listing) => listing.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ── Dashboard ───────────────────────────────────────────────────────

/// Headline counters shown on the dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DashboardSummary {
    pub total_products: usize,
    /// Products with a non-zero quantity.
    pub available_products: usize,
    pub total_employees: usize,
    pub active_employees: usize,
}

impl DashboardSummary {
    pub fn compute(products: &ProductStore, employees: &EmployeeStore) -> Self {
        Self {
            total_products: products.len(),
            available_products: products.count(Product::in_stock),
            total_employees: employees.len(),
            active_employees: employees.count(|e| e.status.is_active()),
        }
    }
}

// ── Detail sheets ───────────────────────────────────────────────────

/// One labelled value on a detail sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailSection {
    pub heading: &'static str,
    pub rows: Vec<DetailRow>,
}

/// Read-only view of a single record, grouped into sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub title: String,
    pub sections: Vec<DetailSection>,
}

fn row(label: &'static str, value: impl Into<String>) -> DetailRow {
    DetailRow {
        label,
        value: value.into(),
    }
}

impl DetailView {
    pub fn product(product: &Product, currency: &str) -> Self {
        let mut rows = vec![
            row("Name", product.name.as_str()),
            row("Category", product.category.as_str()),
            row("Price", format_money(product.price, currency)),
            row("Quantity", format!("{} pcs", product.quantity)),
        ];
        if let Some(description) = &product.description {
            rows.push(row("Description", description.as_str()));
        }
        Self {
            title: product.name.clone(),
            sections: vec![DetailSection {
                heading: "General",
                rows,
            }],
        }
    }

    pub fn employee(employee: &Employee, currency: &str) -> Self {
        let mut personal = vec![
            row("Full name", employee.name.as_str()),
            row("Phone", employee.phone.as_str()),
        ];
        if let Some(email) = &employee.email {
            personal.push(row("Email", email.as_str()));
        }
        let work = vec![
            row("Position", employee.position.as_str()),
            row("Salary", format_money(employee.salary, currency)),
            row("Status", employee.status.label()),
        ];
        Self {
            title: employee.name.clone(),
            sections: vec![
                DetailSection {
                    heading: "Personal",
                    rows: personal,
                },
                DetailSection {
                    heading: "Work",
                    rows: work,
                },
            ],
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{EmployeeDraft, ProductDraft};
    use crate::store::DataStore;
    use pretty_assertions::assert_eq;

    fn names<T>(listing: &Listing<T>, name: impl Fn(&T) -> &str) -> Vec<String> {
        listing.items().iter().map(|t| name(t).to_owned()).collect()
    }

    #[test]
    fn product_search_folds_case_on_category() {
        let store = DataStore::with_demo_data();
        let listing = project_products(store.products(), "elektr", "so'm");
        assert_eq!(
            names(&listing, |c| &c.name),
            ["Noutbuk HP", "Telefon Samsung"]
        );
    }

    #[test]
    fn product_search_matches_name() {
        let store = DataStore::with_demo_data();
        let listing = project_products(store.products(), "KRES", "so'm");
        assert_eq!(names(&listing, |c| &c.name), ["Kreslo"]);
    }

    #[test]
    fn empty_query_lists_everything_in_order() {
        let store = DataStore::with_demo_data();
        let listing = project_products(store.products(), "", "so'm");
        assert_eq!(listing.len(), 4);
        assert_eq!(listing.items()[0].price_display, "5 500 000 so'm");
    }

    #[test]
    fn employee_search_matches_phone_literally() {
        let store = DataStore::with_demo_data();
        let listing = project_employees(store.employees(), "93 345", "so'm");
        assert_eq!(names(&listing, |c| &c.name), ["Malika Yusupova"]);
    }

    #[test]
    fn employee_search_folds_case_on_position() {
        let store = DataStore::with_demo_data();
        let listing = project_employees(store.employees(), "OMBOR", "so'm");
        assert_eq!(names(&listing, |c| &c.name), ["Jasur Toshmatov"]);
        assert_eq!(listing.items()[0].status_label, "Inactive");
    }

    #[test]
    fn no_matches_is_distinct_from_empty() {
        let store = DataStore::with_demo_data();
        assert_eq!(
            project_products(store.products(), "zzz", ""),
            Listing::NoMatches {
                query: "zzz".into()
            }
        );

        let empty = DataStore::new();
        assert_eq!(project_products(empty.products(), "zzz", ""), Listing::Empty);
        assert_eq!(project_employees(empty.employees(), "", ""), Listing::Empty);
    }

    #[test]
    fn summary_counts_only_stocked_products() {
        let mut store = DataStore::new();
        for quantity in [15, 8, 0] {
            store.products_mut().create(ProductDraft {
                name: format!("p{quantity}"),
                quantity,
                ..ProductDraft::default()
            });
        }
        store.employees_mut().create(EmployeeDraft {
            name: "a".into(),
            status: EmployeeStatus::Inactive,
            ..EmployeeDraft::default()
        });

        let summary = store.summary();
        assert_eq!(summary.total_products, 3);
        assert_eq!(summary.available_products, 2);
        assert_eq!(summary.total_employees, 1);
        assert_eq!(summary.active_employees, 0);
    }

    #[test]
    fn product_detail_skips_missing_description() {
        let mut store = DataStore::new();
        let product = store.products_mut().create(ProductDraft {
            name: "Stol".into(),
            price: 800_000,
            quantity: 8,
            category: "Mebel".into(),
            description: None,
        });
        let detail = DetailView::product(&product, "so'm");
        let labels: Vec<_> = detail.sections[0].rows.iter().map(|r| r.label).collect();
        assert_eq!(labels, ["Name", "Category", "Price", "Quantity"]);
        assert_eq!(detail.sections[0].rows[2].value, "800 000 so'm");
    }

    #[test]
    fn employee_detail_snapshot() {
        let store = DataStore::with_demo_data();
        let employee = store.employees().iter().next().unwrap();
        let detail = DetailView::employee(employee, "so'm");
        let text = detail
            .sections
            .iter()
            .flat_map(|s| {
                std::iter::once(format!("[{}]", s.heading))
                    .chain(s.rows.iter().map(|r| format!("{}: {}", r.label, r.value)))
            })
            .collect::<Vec<_>>()
            .join("\n");
        insta::assert_snapshot!(text, @r"
        [Personal]
        Full name: Aziz Rahimov
        Phone: +998 90 123 45 67
        Email: aziz@example.com
        [Work]
        Position: Menejer
        Salary: 4 500 000 so'm
        Status: Active
        ");
    }
}
