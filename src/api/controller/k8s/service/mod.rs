use axum::extract::{Query, State};
use axum::Json;

use crate::api::dto::k8s_dto::{NamespaceQuery, ServiceDto};
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::domain::k8s::scope::NamespaceScope;
use crate::errors::AppError;

pub struct ServiceController;

impl ServiceController {
    /// List services, optionally narrowed by the `namespace` query parameter
    pub async fn list_services(
        State(state): State<AppState>,
        Query(query): Query<NamespaceQuery>,
    ) -> Result<Json<Vec<ServiceDto>>, AppError> {
        let scope = NamespaceScope::from_query(query.namespace.as_deref());
        to_json(state.cluster_service.list_services(&scope).await)
    }
}
