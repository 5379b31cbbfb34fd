use serde::Deserialize;

use stockpro_ai::AnalysisState;
use stockpro_catalog::{Product, ProductDraft, StockStats};

// -------------------------
// Request DTOs
// -------------------------

/// Form payload for create/update.
#[derive(Debug, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub quantity: u32,
    pub min_stock: u32,
    pub price: f64,
    #[serde(default)]
    pub description: String,
}

impl ProductPayload {
    pub fn into_draft(self) -> ProductDraft {
        ProductDraft {
            name: self.name,
            sku: self.sku,
            category: self.category,
            quantity: self.quantity,
            min_stock: self.min_stock,
            price: self.price,
            description: self.description,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DescriptionRequest {
    pub name: String,
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    /// The explicit confirmation step; absent or false is a declined
    /// confirmation (no-op, not an error).
    #[serde(default)]
    pub confirm: bool,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn product_to_json(p: &Product) -> serde_json::Value {
    serde_json::json!({
        "id": p.id().to_string(),
        "name": p.name(),
        "sku": p.sku(),
        "category": p.category(),
        "quantity": p.quantity(),
        "min_stock": p.min_stock(),
        "price": p.price(),
        "description": p.description(),
        "last_updated": p.last_updated().to_string(),
        "critical": p.is_critical(),
    })
}

pub fn stats_to_json(stats: &StockStats) -> serde_json::Value {
    serde_json::json!({
        "total_value": stats.total_value,
        "total_items": stats.total_items,
        "low_stock_count": stats.low_stock_count,
        "category_distribution": stats
            .category_distribution
            .iter()
            .map(|c| serde_json::json!({
                "category": c.category,
                "quantity": c.quantity,
            }))
            .collect::<Vec<_>>(),
    })
}

pub fn analysis_state_to_json(state: &AnalysisState) -> serde_json::Value {
    match state {
        AnalysisState::Idle => serde_json::json!({ "status": "idle" }),
        AnalysisState::InProgress => serde_json::json!({ "status": "in_progress" }),
        AnalysisState::Ready(report) => serde_json::json!({
            "status": "ready",
            "report": report,
        }),
        AnalysisState::Failed(message) => serde_json::json!({
            "status": "failed",
            "message": message,
        }),
    }
}
