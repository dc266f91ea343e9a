use axum::extract::State;
use axum::Json;

use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::errors::AppError;

pub struct NamespaceController;

impl NamespaceController {
    pub async fn list_namespaces(
        State(state): State<AppState>,
    ) -> Result<Json<Vec<String>>, AppError> {
        to_json(state.cluster_service.list_namespaces().await)
    }
}
