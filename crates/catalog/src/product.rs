use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockpro_core::{DomainError, DomainResult, ProductId};

/// Product record: immutable identity plus the user-editable attributes.
///
/// Fields are private; all mutation goes through [`crate::store::ProductStore`]
/// so the single-mutator invariant holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    sku: String,
    category: String,
    quantity: u32,
    min_stock: u32,
    price: f64,
    description: String,
    last_updated: NaiveDate,
}

impl Product {
    /// Build a record from a validated draft.
    ///
    /// Callers are expected to have run [`ProductDraft::validate`] first;
    /// the store does this on every create/update.
    pub(crate) fn from_draft(id: ProductId, draft: ProductDraft, date: NaiveDate) -> Self {
        Self {
            id,
            name: draft.name,
            sku: draft.sku,
            category: draft.category,
            quantity: draft.quantity,
            min_stock: draft.min_stock,
            price: draft.price,
            description: draft.description,
            last_updated: date,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn min_stock(&self) -> u32 {
        self.min_stock
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn last_updated(&self) -> NaiveDate {
        self.last_updated
    }

    /// A product is critical iff its quantity is at or below its minimum
    /// stock threshold.
    pub fn is_critical(&self) -> bool {
        self.quantity <= self.min_stock
    }

    /// Monetary value tied up in this record (price × quantity, unrounded).
    pub fn stock_value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Strongly-typed form payload, validated at the boundary before the store
/// accepts it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub quantity: u32,
    pub min_stock: u32,
    pub price: f64,
    pub description: String,
}

impl ProductDraft {
    /// Reject malformed input before any store mutation.
    ///
    /// Quantity and minimum stock are non-negative by construction (`u32`);
    /// SKU uniqueness is intentionally not checked; duplicate SKUs are
    /// accepted.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        if self.sku.trim().is_empty() {
            return Err(DomainError::validation("SKU cannot be empty"));
        }

        if self.category.trim().is_empty() {
            return Err(DomainError::validation("category cannot be empty"));
        }

        if !self.price.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }

        if self.price < 0.0 {
            return Err(DomainError::validation("price cannot be negative"));
        }

        Ok(())
    }
}
