use axum::{extract::State, Json};

use crate::models::responses::HealthResponse;
use crate::web::AppState;

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: state.service_name.to_string(),
    })
}
