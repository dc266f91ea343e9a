//! Graph controller: connects routes to topology usecases

use axum::extract::{Query, State};
use axum::Json;

use crate::api::dto::graph_dto::ResourceGraph;
use crate::api::dto::k8s_dto::NamespaceQuery;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::domain::k8s::scope::NamespaceScope;
use crate::domain::topology::model::TopologyView;
use crate::errors::AppError;

pub struct GraphController;

impl GraphController {
    /// Raw `{nodes, edges}` feed for the selected namespace
    pub async fn get_resource_graph(
        State(state): State<AppState>,
        Query(query): Query<NamespaceQuery>,
    ) -> Result<Json<ResourceGraph>, AppError> {
        let scope = NamespaceScope::from_query(query.namespace.as_deref());
        to_json(state.graph_service.get_resource_graph(&scope).await)
    }

    /// Same feed, filtered and positioned for the canvas renderer
    pub async fn get_topology_view(
        State(state): State<AppState>,
        Query(query): Query<NamespaceQuery>,
    ) -> Result<Json<TopologyView>, AppError> {
        let scope = NamespaceScope::from_query(query.namespace.as_deref());
        to_json(state.graph_service.get_topology_view(&scope).await)
    }
}
