use axum::extract::{Query, State};
use axum::Json;
use serde_json::Value;
use validator::Validate;

use crate::api::dto::k8s_dto::{LogsQuery, NamespaceQuery, PodDto};
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::domain::k8s::dto::pod_metadata_patch_request::PodMetadataPatchRequest;
use crate::domain::k8s::scope::NamespaceScope;
use crate::errors::AppError;

/// Namespace assumed for pod-level operations when the caller sends none.
const DEFAULT_NAMESPACE: &str = "default";

pub struct PodController;

impl PodController {
    /// List pods, optionally narrowed by the `namespace` query parameter
    pub async fn list_pods(
        State(state): State<AppState>,
        Query(query): Query<NamespaceQuery>,
    ) -> Result<Json<Vec<PodDto>>, AppError> {
        let scope = NamespaceScope::from_query(query.namespace.as_deref());
        to_json(state.cluster_service.list_pods(&scope).await)
    }

    pub async fn get_pod_logs(
        State(state): State<AppState>,
        Query(query): Query<LogsQuery>,
    ) -> Result<Json<Value>, AppError> {
        let pod_name = require_pod_name(query.pod_name)?;
        let namespace = query
            .namespace
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());

        to_json(state.cluster_service.get_pod_logs(&namespace, &pod_name).await)
    }

    pub async fn patch_pod_metadata(
        State(state): State<AppState>,
        Json(payload): Json<PodMetadataPatchRequest>,
    ) -> Result<Json<Value>, AppError> {
        payload
            .validate()
            .map_err(|err| AppError::BodyParsingError(err.to_string()))?;
        let (namespace, pod_name, metadata) = require_patch_fields(payload)?;

        to_json(
            state
                .cluster_service
                .patch_pod_metadata(&namespace, &pod_name, metadata)
                .await,
        )
    }
}

/// Presence check for the logs query; blank names count as missing.
fn require_pod_name(pod_name: Option<String>) -> Result<String, AppError> {
    pod_name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| AppError::BodyParsingError("Missing podName parameter".to_string()))
}

/// Presence checks for the patch body, resolving the namespace default.
fn require_patch_fields(
    payload: PodMetadataPatchRequest,
) -> Result<(String, String, Value), AppError> {
    let pod_name = payload.pod_name.filter(|name| !name.is_empty());
    let metadata = payload.metadata.filter(has_patch_content);
    let (Some(pod_name), Some(metadata)) = (pod_name, metadata) else {
        return Err(AppError::BodyParsingError(
            "Missing podName or metadata".to_string(),
        ));
    };
    let namespace = payload
        .namespace
        .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());

    Ok((namespace, pod_name, metadata))
}

/// Content-free metadata (null, empty containers, zero, false, empty string)
/// counts as missing for the 400 presence check.
fn has_patch_content(metadata: &Value) -> bool {
    match metadata {
        Value::Null => false,
        Value::Bool(value) => *value,
        Value::Number(value) => value.as_f64().is_some_and(|number| number != 0.0),
        Value::String(value) => !value.is_empty(),
        Value::Array(values) => !values.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn patch_request(body: Value) -> PodMetadataPatchRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn logs_without_pod_name_are_rejected() {
        let err = require_pod_name(None).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Body parsing error: Missing podName parameter"
        );
    }

    #[test]
    fn logs_with_blank_pod_name_are_rejected() {
        assert!(require_pod_name(Some(String::new())).is_err());
    }

    #[test]
    fn patch_without_metadata_is_rejected() {
        let err = require_patch_fields(patch_request(json!({ "podName": "web-1" }))).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Body parsing error: Missing podName or metadata"
        );
    }

    #[test]
    fn patch_with_blank_pod_name_is_rejected() {
        let request = patch_request(json!({
            "podName": "",
            "metadata": { "labels": { "tier": "frontend" } }
        }));

        assert!(require_patch_fields(request).is_err());
    }

    #[test]
    fn patch_with_empty_metadata_object_is_rejected() {
        let request = patch_request(json!({ "podName": "web-1", "metadata": {} }));

        assert!(require_patch_fields(request).is_err());
    }

    #[test]
    fn content_free_metadata_counts_as_missing() {
        for value in [json!(null), json!({}), json!([]), json!(""), json!(0), json!(false)] {
            assert!(!has_patch_content(&value), "accepted {value}");
        }

        assert!(has_patch_content(&json!({ "labels": { "app": "web" } })));
    }

    #[test]
    fn patch_fields_resolve_the_namespace_default() {
        let request = patch_request(json!({
            "podName": "web-1",
            "metadata": { "labels": { "tier": "frontend" } }
        }));

        let (namespace, pod_name, metadata) = require_patch_fields(request).unwrap();

        assert_eq!(namespace, "default");
        assert_eq!(pod_name, "web-1");
        assert_eq!(metadata, json!({ "labels": { "tier": "frontend" } }));
    }
}
