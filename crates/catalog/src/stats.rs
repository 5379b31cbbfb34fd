//! Derived stock statistics.
//!
//! Pure functions of the product collection; recomputed on demand, never
//! stored.

use crate::product::Product;

/// Summed quantity for one category label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryQuantity {
    pub category: String,
    pub quantity: u64,
}

/// Summary statistics over the whole collection.
#[derive(Debug, Clone, PartialEq)]
pub struct StockStats {
    /// Σ(price × quantity) over all records, unrounded (presentation decides
    /// formatting).
    pub total_value: f64,
    /// Number of records, not summed quantities.
    pub total_items: usize,
    /// Number of critical records (quantity <= min stock).
    pub low_stock_count: usize,
    /// Per-category summed quantity, in first-seen order.
    pub category_distribution: Vec<CategoryQuantity>,
}

/// Derive summary statistics from the current collection.
///
/// Deterministic and side-effect free; the input is never mutated.
pub fn compute(products: &[Product]) -> StockStats {
    let mut total_value = 0.0;
    let mut low_stock_count = 0;
    let mut distribution: Vec<CategoryQuantity> = Vec::new();

    for product in products {
        total_value += product.stock_value();

        if product.is_critical() {
            low_stock_count += 1;
        }

        match distribution
            .iter_mut()
            .find(|c| c.category == product.category())
        {
            Some(slot) => slot.quantity += u64::from(product.quantity()),
            None => distribution.push(CategoryQuantity {
                category: product.category().to_string(),
                quantity: u64::from(product.quantity()),
            }),
        }
    }

    StockStats {
        total_value,
        total_items: products.len(),
        low_stock_count,
        category_distribution: distribution,
    }
}
