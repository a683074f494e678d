use std::sync::Arc;

use axum::{
    extract::FromRef,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::{AppConfig, ValidationConfig};
use crate::docs::ApiDocs;
use crate::handlers;

/// Shared, read-only state handed to every request
#[derive(Clone)]
pub struct AppState {
    pub validation: ValidationConfig,
    pub docs: Arc<ApiDocs>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let mut docs = ApiDocs::new(config.docs.clone());
        handlers::register_docs(&mut docs);

        Self {
            validation: config.validation,
            docs: Arc::new(docs),
        }
    }
}

impl FromRef<AppState> for ValidationConfig {
    fn from_ref(state: &AppState) -> Self {
        state.validation
    }
}

pub fn app(config: &AppConfig) -> Router {
    let state = AppState::new(config);

    let router = Router::<AppState>::new()
        .route("/health", get(health))
        .merge(auth_routes())
        .merge(user_routes())
        .merge(docs_routes(config))
        .with_state(state);

    // Global middleware
    let router = if config.security.enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };
    router.layer(TraceLayer::new_for_http())
}

fn auth_routes() -> Router<AppState> {
    use handlers::auth;

    Router::new()
        .route(auth::register::PATH, post(auth::register_post))
        .route(auth::login::PATH, post(auth::login_post))
        .route(auth::logout::PATH, post(auth::logout_post))
        .route(auth::refresh::PATH, post(auth::refresh_post))
}

fn user_routes() -> Router<AppState> {
    use handlers::users;

    Router::new().route(users::me::PATH, get(users::me_get))
}

fn docs_routes(config: &AppConfig) -> Router<AppState> {
    use handlers::docs;

    Router::new()
        .route(&config.docs.openapi_path, get(docs::openapi_get))
        .route("/ui", get(docs::ui_get))
}

async fn health() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": chrono::Utc::now(),
        }
    }))
}
