use axum::{
    extract::Request,
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::app_state::AppState;

/// Build the main application router
pub fn app_router() -> Router<AppState> {
    // Cluster, Graph, System subrouters live under /api
    let api = Router::new()
        .merge(crate::api::routes::k8s_routes::k8s_routes())
        .merge(crate::api::routes::system_routes::system_routes())
        .nest("/graph", crate::api::routes::graph_routes::graph_routes());

    Router::new()
        // Root route
        .route("/", get(root))
        // Health check
        .route("/health", get(health_check))
        // API
        .nest("/api", api)
        // Fallback handler for 404
        .fallback(handler_404)
        // One log line per request: method, path + query, response status
        .layer(middleware::from_fn(log_request))
        // ✅ Apply CORS layer to all routes
        .layer(CorsLayer::very_permissive())
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    info!("{} {} | status: {}", method, uri, response.status());
    response
}

// Handler for root
async fn root() -> &'static str {
    "Server is running!"
}

// Handler for health check
async fn health_check() -> &'static str {
    "OK"
}

// Handler for 404 Not Found
async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
