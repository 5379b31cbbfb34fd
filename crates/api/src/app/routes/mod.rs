use axum::{routing::get, Router};

pub mod ai;
pub mod products;
pub mod stats;
pub mod system;

/// Router for all dashboard endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/stats", get(stats::stock_stats))
        .nest("/products", products::router())
        .nest("/ai", ai::router())
}
