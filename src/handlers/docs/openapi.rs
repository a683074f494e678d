use axum::{extract::State, Json};
use utoipa::openapi::OpenApi;

use crate::app::AppState;

/// GET /openapi - OpenAPI document built from the route registrations
pub async fn openapi_get(State(state): State<AppState>) -> Json<OpenApi> {
    Json(state.docs.generate())
}
