use axum::extract::{Query, State};
use axum::Json;

use crate::api::dto::k8s_dto::{DeploymentDto, NamespaceQuery};
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::domain::k8s::scope::NamespaceScope;
use crate::errors::AppError;

pub struct DeploymentController;

impl DeploymentController {
    /// List deployments, optionally narrowed by the `namespace` query parameter
    pub async fn list_deployments(
        State(state): State<AppState>,
        Query(query): Query<NamespaceQuery>,
    ) -> Result<Json<Vec<DeploymentDto>>, AppError> {
        let scope = NamespaceScope::from_query(query.namespace.as_deref());
        to_json(state.cluster_service.list_deployments(&scope).await)
    }
}
