// ── Product domain types ──

use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;
use super::{Collection, Entity};
use crate::error::CoreError;

/// A stocked product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    /// Unit price in the smallest currency unit.
    pub price: u64,
    pub quantity: u64,
    pub category: String,
    pub description: Option<String>,
}

impl Product {
    /// Whether at least one unit is on hand.
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

/// Product field values without an id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: u64,
    pub quantity: u64,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProductDraft {
    /// Reject drafts that would break the record invariants.
    pub fn check(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::invalid("name", "is required"));
        }
        Ok(())
    }
}

impl Entity for Product {
    type Draft = ProductDraft;

    const COLLECTION: Collection = Collection::Products;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
            quantity: draft.quantity,
            category: draft.category,
            description: draft.description,
        }
    }

    fn apply(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.price = draft.price;
        self.quantity = draft.quantity;
        self.category = draft.category;
        self.description = draft.description;
    }

    fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            price: self.price,
            quantity: self.quantity,
            category: self.category.clone(),
            description: self.description.clone(),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
