// ── Form field buffers ──
//
// What a front-end edits before submission: raw text per field. Validation
// turns a form into a typed draft and is the only place user input can be
// rejected; stores never see an invalid draft.

use crate::error::CoreError;
use crate::format::parse_amount;
use crate::model::{Collection, Employee, EmployeeDraft, EmployeeStatus, Entity, Product, ProductDraft};

/// Raw product form input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub quantity: String,
    pub category: String,
    pub description: String,
}

impl ProductForm {
    /// Pre-populate from a stored product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            quantity: product.quantity.to_string(),
            category: product.category.clone(),
            description: product.description.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<ProductDraft, CoreError> {
        let draft = ProductDraft {
            name: self.name.trim().to_owned(),
            price: required_amount("price", &self.price)?,
            quantity: required_amount("quantity", &self.quantity)?,
            category: self.category.trim().to_owned(),
            description: optional_text(&self.description),
        };
        draft.check()?;
        Ok(draft)
    }
}

/// Raw employee form input. Status is a two-way choice rather than text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmployeeForm {
    pub name: String,
    pub phone: String,
    pub position: String,
    pub salary: String,
    pub status: EmployeeStatus,
    pub email: String,
}

impl EmployeeForm {
    /// Pre-populate from a stored employee.
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            phone: employee.phone.clone(),
            position: employee.position.clone(),
            salary: employee.salary.to_string(),
            status: employee.status,
            email: employee.email.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<EmployeeDraft, CoreError> {
        let draft = EmployeeDraft {
            name: self.name.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            position: self.position.trim().to_owned(),
            salary: required_amount("salary", &self.salary)?,
            status: self.status,
            email: optional_text(&self.email),
        };
        draft.check()?;
        Ok(draft)
    }
}

/// A form for either collection. The variant decides which store a
/// submission reaches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormFields {
    Product(ProductForm),
    Employee(EmployeeForm),
}

impl FormFields {
    /// Blank form for a collection.
    pub fn empty(collection: Collection) -> Self {
        match collection {
            Collection::Products => Self::Product(ProductForm::default()),
            Collection::Employees => Self::Employee(EmployeeForm::default()),
        }
    }

    pub fn collection(&self) -> Collection {
        match self {
            Self::Product(_) => Product::COLLECTION,
            Self::Employee(_) => Employee::COLLECTION,
        }
    }
}

fn required_amount(field: &'static str, raw: &str) -> Result<u64, CoreError> {
    if raw.trim().is_empty() {
        return Err(CoreError::invalid(field, "is required"));
    }
    parse_amount(raw).ok_or_else(|| CoreError::invalid(field, "must be a whole non-negative number"))
}

fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
