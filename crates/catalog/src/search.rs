//! Substring search over the product collection.

use crate::product::Product;

/// Narrow the collection to products matching the query.
///
/// Matching is case-insensitive substring, evaluated independently on name,
/// SKU and category; a match on any one field suffices. The empty query
/// returns the full collection unchanged in order.
pub fn filter<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    if query.is_empty() {
        return products.iter().collect();
    }

    let needle = query.to_lowercase();
    products.iter().filter(|p| matches(p, &needle)).collect()
}

fn matches(product: &Product, needle: &str) -> bool {
    product.name().to_lowercase().contains(needle)
        || product.sku().to_lowercase().contains(needle)
        || product.category().to_lowercase().contains(needle)
}
