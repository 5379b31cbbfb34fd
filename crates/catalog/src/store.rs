use chrono::NaiveDate;

use stockpro_core::{DomainError, DomainResult, ProductId};

use crate::product::{Product, ProductDraft};

/// Ordered in-memory product collection, held for the lifetime of the
/// process.
///
/// Exactly one mutator at a time; callers serialize access (the HTTP layer
/// keeps the store behind a lock). Deletion removes records outright; there
/// is no soft delete and no audit trail.
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct the store from the fixed seed set used at session start.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for (draft, date) in seed_products() {
            store.create(draft, date).expect("seed products are valid");
        }
        store
    }

    /// Full scan, in insertion order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Insert a new record from a draft.
    ///
    /// Assigns a fresh identifier and stamps `created_on`; the collection
    /// grows by exactly one. The date is an argument (not read from the
    /// clock) so the store stays deterministic.
    pub fn create(&mut self, draft: ProductDraft, created_on: NaiveDate) -> DomainResult<Product> {
        draft.validate()?;

        let product = Product::from_draft(ProductId::new(), draft, created_on);
        self.products.push(product.clone());
        Ok(product)
    }

    /// Replace an existing record's user-editable fields.
    ///
    /// The identifier is preserved and the date refreshed; every other
    /// record is left untouched.
    pub fn update(
        &mut self,
        id: ProductId,
        draft: ProductDraft,
        updated_on: NaiveDate,
    ) -> DomainResult<Product> {
        draft.validate()?;

        let slot = self
            .products
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or_else(DomainError::not_found)?;

        *slot = Product::from_draft(id, draft, updated_on);
        Ok(slot.clone())
    }

    /// Remove a record outright.
    ///
    /// An unknown identifier leaves the collection unchanged.
    pub fn delete(&mut self, id: ProductId) -> DomainResult<()> {
        let before = self.products.len();
        self.products.retain(|p| p.id() != id);

        if self.products.len() == before {
            return Err(DomainError::not_found());
        }
        Ok(())
    }
}

/// The fixed five-product seed set.
fn seed_products() -> Vec<(ProductDraft, NaiveDate)> {
    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("hardcoded date is valid")
    }

    fn draft(
        name: &str,
        sku: &str,
        category: &str,
        quantity: u32,
        min_stock: u32,
        price: f64,
        description: &str,
    ) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            sku: sku.to_string(),
            category: category.to_string(),
            quantity,
            min_stock,
            price,
            description: description.to_string(),
        }
    }

    vec![
        (
            draft(
                "Ordinateur Portable Pro",
                "LAP-001",
                "Électronique",
                12,
                5,
                1200.0,
                "PC portable haute performance.",
            ),
            date(2023, 10, 25),
        ),
        (
            draft(
                "Chaise Ergonomique",
                "FUR-002",
                "Mobilier",
                3,
                10,
                250.0,
                "Confort optimal.",
            ),
            date(2023, 10, 26),
        ),
        (
            draft(
                "Casque Audio Sans Fil",
                "AUD-005",
                "Électronique",
                45,
                8,
                89.0,
                "Son pur.",
            ),
            date(2023, 10, 24),
        ),
        (
            draft(
                "Bureau Assis-Debout",
                "FUR-008",
                "Mobilier",
                8,
                2,
                450.0,
                "Bureau ajustable.",
            ),
            date(2023, 10, 20),
        ),
        (
            draft(
                "Moniteur 4K",
                "MON-022",
                "Électronique",
                2,
                4,
                340.0,
                "Écran ultra HD.",
            ),
            date(2023, 10, 27),
        ),
    ]
}
