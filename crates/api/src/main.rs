use std::sync::Arc;

use stockpro_ai::{GeminiClient, GeminiConfig};
use stockpro_api::app::{self, services::AppServices};

#[tokio::main]
async fn main() {
    stockpro_observability::init();

    let generator = Arc::new(GeminiClient::new(GeminiConfig::from_env()));
    let services = Arc::new(AppServices::new(generator));

    let app = app::build_app(services);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .expect("failed to bind 0.0.0.0:8080");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
