use axum::{
    extract::Request,
    http::{header, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::config::Config;
use crate::llm::MovieOracle;
use crate::reviews::ReviewSource;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub oracle: Arc<dyn MovieOracle>,
    pub reviews: Arc<dyn ReviewSource>,
}

impl AppState {
    pub fn new(
        config: Config,
        oracle: Arc<dyn MovieOracle>,
        reviews: Arc<dyn ReviewSource>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            oracle,
            reviews,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors.origins);

    Router::new()
        .route("/search", get(crate::search::search))
        .route("/more", post(crate::search::more))
        .route("/health", get(health_handler))
        .fallback(fallback_handler)
        .layer(axum::middleware::from_fn(crate::middleware::log_request))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

async fn health_handler() -> &'static str {
    "ok"
}

async fn fallback_handler(req: Request) -> impl IntoResponse {
    if req.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    StatusCode::NOT_FOUND.into_response()
}
