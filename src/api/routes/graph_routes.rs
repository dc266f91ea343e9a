//! Topology routes (e.g., /api/graph/*)

use axum::{routing::get, Router};
use crate::api::controller::graph::GraphController;
use crate::app_state::AppState;

pub fn graph_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(GraphController::get_resource_graph))
        .route("/view", get(GraphController::get_topology_view))
}
