use anyhow::Result;
use kube::api::{ListParams, LogParams, Patch, PatchParams};
use kube::{Api, Client};
use serde_json::{json, Value};
use tracing::debug;

use crate::core::client::kube_client::scoped_api;
use crate::core::client::kube_resources::Pod;
use crate::domain::k8s::scope::NamespaceScope;

/// Fetch the pods visible in the given namespace scope
pub async fn fetch_pods(client: &Client, scope: &NamespaceScope) -> Result<Vec<Pod>> {
    let pods: Api<Pod> = scoped_api(client, scope);
    let pod_list = pods.list(&ListParams::default()).await?;

    debug!("Discovered {} pod(s) in scope '{}'", pod_list.items.len(), scope.as_str());
    Ok(pod_list.items)
}

/// Fetch the plain-text log of a pod's default container
pub async fn fetch_pod_logs(client: &Client, namespace: &str, pod_name: &str) -> Result<String> {
    let pods: Api<Pod> = Api::namespaced(client.clone(), namespace);
    let logs = pods.logs(pod_name, &LogParams::default()).await?;

    debug!("Fetched {} log byte(s) for pod {}/{}", logs.len(), namespace, pod_name);
    Ok(logs)
}

/// Apply a strategic-merge patch to a pod's metadata (labels / annotations)
pub async fn patch_pod_metadata(
    client: &Client,
    namespace: &str,
    pod_name: &str,
    metadata: Value,
) -> Result<Pod> {
    let pods: Api<Pod> = Api::namespaced(client.clone(), namespace);
    let patch = json!({ "metadata": metadata });
    let pod = pods
        .patch(pod_name, &PatchParams::default(), &Patch::Strategic(patch))
        .await?;

    debug!("Patched metadata for pod {}/{}", namespace, pod_name);
    Ok(pod)
}
