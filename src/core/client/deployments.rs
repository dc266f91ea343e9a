use anyhow::Result;
use kube::api::ListParams;
use kube::{Api, Client};
use tracing::debug;

use crate::core::client::kube_client::scoped_api;
use crate::core::client::kube_resources::Deployment;
use crate::domain::k8s::scope::NamespaceScope;

/// Fetch the deployments visible in the given namespace scope
pub async fn fetch_deployments(client: &Client, scope: &NamespaceScope) -> Result<Vec<Deployment>> {
    let deployments: Api<Deployment> = scoped_api(client, scope);
    let deployment_list = deployments.list(&ListParams::default()).await?;

    debug!(
        "Discovered {} deployment(s) in scope '{}'",
        deployment_list.items.len(),
        scope.as_str()
    );
    Ok(deployment_list.items)
}
