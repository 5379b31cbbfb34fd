use std::sync::Arc;

use axum::{
    extract::Extension, http::StatusCode, response::IntoResponse, routing::post, Json, Router,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route(
            "/description",
            post(generate_description).get(description_state),
        )
        .route("/analysis", post(run_analysis).get(analysis_state))
}

pub async fn generate_description(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::DescriptionRequest>,
) -> axum::response::Response {
    // Precondition enforced here, not in the pipeline: both fields present.
    if body.name.trim().is_empty() || body.category.trim().is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "name and category are required",
        );
    }

    match services.run_description(&body.name, &body.category).await {
        Ok(text) => (StatusCode::OK, Json(serde_json::json!({ "text": text }))).into_response(),
        Err(e) => errors::json_error(StatusCode::BAD_GATEWAY, "generation_failed", e.to_string()),
    }
}

pub async fn description_state(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let state = services.description_state();
    (StatusCode::OK, Json(dto::analysis_state_to_json(&state))).into_response()
}

pub async fn run_analysis(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.run_stock_analysis().await {
        Ok(report) => {
            (StatusCode::OK, Json(serde_json::json!({ "report": report }))).into_response()
        }
        Err(e) => errors::json_error(StatusCode::BAD_GATEWAY, "analysis_failed", e.to_string()),
    }
}

pub async fn analysis_state(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let state = services.analysis_state();
    (StatusCode::OK, Json(dto::analysis_state_to_json(&state))).into_response()
}
