//! Demo inventory and roster loaded when a session starts with sample data.

use crate::model::{EmployeeDraft, EmployeeStatus, ProductDraft};

fn product(name: &str, price: u64, quantity: u64, category: &str, description: &str) -> ProductDraft {
    ProductDraft {
        name: name.into(),
        price,
        quantity,
        category: category.into(),
        description: Some(description.into()),
    }
}

fn employee(
    name: &str,
    phone: &str,
    position: &str,
    salary: u64,
    status: EmployeeStatus,
    email: &str,
) -> EmployeeDraft {
    EmployeeDraft {
        name: name.into(),
        phone: phone.into(),
        position: position.into(),
        salary,
        status,
        email: Some(email.into()),
    }
}

pub fn demo_products() -> Vec<ProductDraft> {
    vec![
        product("Noutbuk HP", 5_500_000, 15, "Elektronika", "Yuqori sifatli noutbuk"),
        product("Telefon Samsung", 3_200_000, 25, "Elektronika", "Zamonaviy smartfon"),
        product("Stol", 800_000, 8, "Mebel", "Yog'och stol"),
        product("Kreslo", 650_000, 12, "Mebel", "Ofis uchun kreslo"),
    ]
}

pub fn demo_employees() -> Vec<EmployeeDraft> {
    use EmployeeStatus::{Active, Inactive};

    vec![
        employee("Aziz Rahimov", "+998 90 123 45 67", "Menejer", 4_500_000, Active, "aziz@example.com"),
        employee("Dilshod Karimov", "+998 91 234 56 78", "Sotuvchi", 3_500_000, Active, "dilshod@example.com"),
        employee("Malika Yusupova", "+998 93 345 67 89", "Buxgalter", 4_000_000, Active, "malika@example.com"),
        employee("Jasur Toshmatov", "+998 94 456 78 90", "Ombor mudiri", 3_800_000, Inactive, "jasur@example.com"),
    ]
}
