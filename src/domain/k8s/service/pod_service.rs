use anyhow::Result;
use chrono::Utc;
use kube::Client;
use serde_json::{json, Value};

use crate::api::dto::k8s_dto::PodDto;
use crate::core::client::mappers::map_pod_to_dto;
use crate::core::client::pods::{fetch_pod_logs, fetch_pods};
use crate::domain::k8s::scope::NamespaceScope;

/// List pods in the scope as table-ready rows.
pub async fn list_pods(client: &Client, scope: &NamespaceScope) -> Result<Vec<PodDto>> {
    let pods = fetch_pods(client, scope).await?;

    let now = Utc::now();
    Ok(pods.iter().map(|pod| map_pod_to_dto(pod, now)).collect())
}

/// Plain-text logs of one pod, wrapped for the wire.
pub async fn get_pod_logs(client: &Client, namespace: &str, pod_name: &str) -> Result<Value> {
    let logs = fetch_pod_logs(client, namespace, pod_name).await?;
    Ok(json!({ "logs": logs }))
}

/// Strategic-merge patch of one pod's metadata (labels / annotations).
pub async fn patch_pod(
    client: &Client,
    namespace: &str,
    pod_name: &str,
    metadata: Value,
) -> Result<Value> {
    crate::core::client::pods::patch_pod_metadata(client, namespace, pod_name, metadata).await?;
    Ok(json!({ "status": "success" }))
}
